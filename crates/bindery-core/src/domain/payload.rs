//! Payload - 型消去された instance / provider
//!
//! # 学習ポイント
//! - 表層（Typed）: `BindingBuilder<T>` は `Arc<T>` と `Provider<T>` を受け取る
//! - 内部（Dyn）: command は `Arc<dyn Any + Send + Sync>` で保持し、異なる `T` の
//!   command を 1 つの `Vec<Command>` に並べられるようにする
//! - `downcast::<T>()` で元の型に戻す（`dyn Trait` も可）

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::ports::Provider;

/// A fixed instance bound to a key.
///
/// Stores the caller's `Arc<T>` behind `dyn Any`, so unsized `T`
/// (e.g. `dyn Service`) round-trips through `downcast`.
#[derive(Clone)]
pub struct Instance {
    value: Arc<dyn Any + Send + Sync>,
    address: usize,
    type_name: &'static str,
}

impl Instance {
    pub fn new<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> Self {
        Self {
            address: address_of(&value),
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn downcast<T: ?Sized + 'static>(&self) -> Option<Arc<T>> {
        self.value.downcast_ref::<Arc<T>>().cloned()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Identity, not value, equality: two instances are equal when they share the
/// same allocation.
impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "instance {}", self.type_name)
    }
}

/// A provider instance bound to a key, erased from `Arc<dyn Provider<T>>`.
#[derive(Clone)]
pub struct ProviderInstance {
    provider: Arc<dyn Any + Send + Sync>,
    address: usize,
    provided_type: &'static str,
}

impl ProviderInstance {
    pub fn new<T: ?Sized + 'static>(provider: Arc<dyn Provider<T>>) -> Self {
        Self {
            address: address_of(&provider),
            provider: Arc::new(provider),
            provided_type: std::any::type_name::<T>(),
        }
    }

    pub fn downcast<T: ?Sized + 'static>(&self) -> Option<Arc<dyn Provider<T>>> {
        self.provider
            .downcast_ref::<Arc<dyn Provider<T>>>()
            .cloned()
    }

    pub fn provided_type(&self) -> &'static str {
        self.provided_type
    }
}

impl PartialEq for ProviderInstance {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl fmt::Debug for ProviderInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderInstance")
            .field("provides", &self.provided_type)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ProviderInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "provider {}", self.provided_type)
    }
}

/// 呼び出し元の `Arc` が指すデータのアドレス（vtable は捨てる）
fn address_of<T: ?Sized>(value: &Arc<T>) -> usize {
    Arc::as_ptr(value).cast::<()>() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    struct English;

    impl Greeter for English {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    #[test]
    fn instance_downcasts_to_trait_object() {
        let greeter: Arc<dyn Greeter> = Arc::new(English);
        let instance = Instance::new(greeter);

        let back = instance.downcast::<dyn Greeter>().unwrap();
        assert_eq!(back.greet(), "hello");
        assert!(instance.downcast::<English>().is_none());
    }

    #[test]
    fn instance_equality_is_identity() {
        let a = Instance::new(Arc::new(5_u32));
        let b = Instance::new(Arc::new(5_u32));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn instances_wrapping_the_same_arc_are_equal() {
        let shared: Arc<dyn Greeter> = Arc::new(English);
        let first = Instance::new(shared.clone());
        let second = Instance::new(shared);
        assert_eq!(first, second);
    }

    #[test]
    fn providers_wrapping_the_same_arc_are_equal() {
        let shared: Arc<dyn Provider<u32>> = Arc::new(|| Arc::new(7_u32));
        let first = ProviderInstance::new(shared.clone());
        let second = ProviderInstance::new(shared);
        let unrelated: Arc<dyn Provider<u32>> = Arc::new(|| Arc::new(7_u32));
        let other = ProviderInstance::new(unrelated);
        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn provider_instance_downcasts_and_provides() {
        let provider: Arc<dyn Provider<u32>> = Arc::new(|| Arc::new(7_u32));
        let erased = ProviderInstance::new(provider);

        let typed = erased.downcast::<u32>().unwrap();
        assert_eq!(*typed.get(), 7);
        assert!(erased.downcast::<String>().is_none());
        assert_eq!(erased.to_string(), "provider u32");
    }
}
