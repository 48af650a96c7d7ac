//! BindTarget - key が何に束縛されるか

use std::fmt;

use super::key::Key;
use super::payload::{Instance, ProviderInstance};
use crate::ports::{LinkedBindingBuilder, ScopedBindingBuilder, TargetVisitor};

/// What a key is bound to.
///
/// Each variant carries only its payload. `Untargeted` is the default and means
/// "bind the key to itself" (the injector constructs the type directly).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BindTarget {
    #[default]
    Untargeted,
    ToKey(Key),
    ToInstance(Instance),
    ToProviderInstance(ProviderInstance),
    ToProviderKey(Key),
}

impl BindTarget {
    pub fn is_untargeted(&self) -> bool {
        matches!(self, Self::Untargeted)
    }

    /// Single-instance bindings may not be scoped.
    ///
    /// Decided by the variant alone, never by the payload value.
    pub fn is_single_instance(&self) -> bool {
        matches!(self, Self::ToInstance(_))
    }

    pub fn key(&self) -> Option<&Key> {
        match self {
            Self::ToKey(key) => Some(key),
            _ => None,
        }
    }

    pub fn instance(&self) -> Option<&Instance> {
        match self {
            Self::ToInstance(instance) => Some(instance),
            _ => None,
        }
    }

    pub fn provider(&self) -> Option<&ProviderInstance> {
        match self {
            Self::ToProviderInstance(provider) => Some(provider),
            _ => None,
        }
    }

    pub fn provider_key(&self) -> Option<&Key> {
        match self {
            Self::ToProviderKey(provider_key) => Some(provider_key),
            _ => None,
        }
    }

    /// Apply this target to a real binding and return the continuation used to
    /// apply the scoping. Instance bindings have no continuation.
    pub fn execute<'b>(
        &self,
        linked: &'b mut dyn LinkedBindingBuilder,
    ) -> Option<&'b mut dyn ScopedBindingBuilder> {
        match self {
            Self::Untargeted => Some(linked.as_scoped()),
            Self::ToKey(key) => Some(linked.to(key)),
            Self::ToInstance(instance) => {
                linked.to_instance(instance);
                None
            }
            Self::ToProviderInstance(provider) => Some(linked.to_provider(provider)),
            Self::ToProviderKey(provider_key) => Some(linked.to_provider_key(provider_key)),
        }
    }

    pub fn accept_visitor<V: TargetVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Untargeted => visitor.visit_untargeted(),
            Self::ToKey(key) => visitor.visit_to_key(key),
            Self::ToInstance(instance) => visitor.visit_to_instance(instance),
            Self::ToProviderInstance(provider) => visitor.visit_to_provider(provider),
            Self::ToProviderKey(provider_key) => visitor.visit_to_provider_key(provider_key),
        }
    }
}

impl fmt::Display for BindTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Untargeted => f.write_str("untargeted"),
            Self::ToKey(key) => write!(f, "{key}"),
            Self::ToInstance(instance) => write!(f, "{instance}"),
            Self::ToProviderInstance(provider) => write!(f, "{provider}"),
            Self::ToProviderKey(provider_key) => write!(f, "provider {provider_key}"),
        }
    }
}
