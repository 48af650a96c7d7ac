//! InMemoryBinder - 開発用・テスト用の Binder
//!
//! # 学習ポイント
//! - trait object（`Box<dyn LinkedBindingBuilder + 'a>`）を返す借用パターン
//! - 受け取った宣言をそのまま保持し、replay の結果を検証できるようにする

use std::sync::Arc;

use crate::domain::{
    AnnotationType, BindError, BindScoping, BindTarget, Instance, Key, ProviderInstance, Source,
};
use crate::ports::{Binder, ErrorSink, LinkedBindingBuilder, Scope, ScopedBindingBuilder};

/// Declaration は Binder が受け取った binding 宣言
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub source: Source,
    pub key: Key,
    pub target: BindTarget,
    pub scoping: BindScoping,
}

/// InMemoryBinder は宣言とエラーをメモリ上に保持する
///
/// # 使用例
/// ```ignore
/// let mut binder = InMemoryBinder::new();
/// replay(recording.commands(), &mut binder);
/// assert_eq!(binder.declarations().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBinder {
    declarations: Vec<Declaration>,
    errors: Vec<BindError>,
}

impl InMemoryBinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn errors(&self) -> &[BindError] {
        &self.errors
    }
}

impl ErrorSink for InMemoryBinder {
    fn add_error(&mut self, error: BindError) {
        tracing::debug!(kind = ?error.kind(), "binder received error: {error}");
        self.errors.push(error);
    }
}

impl Binder for InMemoryBinder {
    fn bind<'a>(&'a mut self, source: &Source, key: &Key) -> Box<dyn LinkedBindingBuilder + 'a> {
        let index = self.declarations.len();
        self.declarations.push(Declaration {
            source: source.clone(),
            key: key.clone(),
            target: BindTarget::Untargeted,
            scoping: BindScoping::NoScoping,
        });
        Box::new(DeclarationBuilder {
            declaration: &mut self.declarations[index],
        })
    }
}

/// 1 件の Declaration を書き換える linked / scoped builder
struct DeclarationBuilder<'a> {
    declaration: &'a mut Declaration,
}

impl ScopedBindingBuilder for DeclarationBuilder<'_> {
    fn in_annotation(&mut self, scope_annotation: &AnnotationType) {
        self.declaration.scoping = BindScoping::ScopeAnnotation(scope_annotation.clone());
    }

    fn in_scope(&mut self, scope: &Arc<dyn Scope>) {
        self.declaration.scoping = BindScoping::ScopeInstance(Arc::clone(scope));
    }

    fn as_eager_singleton(&mut self) {
        self.declaration.scoping = BindScoping::EagerSingleton;
    }
}

impl LinkedBindingBuilder for DeclarationBuilder<'_> {
    fn to(&mut self, key: &Key) -> &mut dyn ScopedBindingBuilder {
        self.declaration.target = BindTarget::ToKey(key.clone());
        self
    }

    fn to_instance(&mut self, instance: &Instance) {
        self.declaration.target = BindTarget::ToInstance(instance.clone());
    }

    fn to_provider(&mut self, provider: &ProviderInstance) -> &mut dyn ScopedBindingBuilder {
        self.declaration.target = BindTarget::ToProviderInstance(provider.clone());
        self
    }

    fn to_provider_key(&mut self, provider_key: &Key) -> &mut dyn ScopedBindingBuilder {
        self.declaration.target = BindTarget::ToProviderKey(provider_key.clone());
        self
    }

    fn as_scoped(&mut self) -> &mut dyn ScopedBindingBuilder {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Database;

    #[test]
    fn bind_records_untargeted_declaration() {
        let mut binder = InMemoryBinder::new();
        let source = Source::labeled("test").unwrap();
        binder.bind(&source, &Key::of::<Database>());

        assert_eq!(
            binder.declarations(),
            &[Declaration {
                source,
                key: Key::of::<Database>(),
                target: BindTarget::Untargeted,
                scoping: BindScoping::NoScoping,
            }]
        );
    }

    #[test]
    fn linked_builder_chains_into_scope() {
        let mut binder = InMemoryBinder::new();
        let source = Source::labeled("test").unwrap();
        binder
            .bind(&source, &Key::of::<Database>())
            .to(&Key::of::<u8>())
            .in_annotation(&AnnotationType::SINGLETON);

        let declared = &binder.declarations()[0];
        assert_eq!(declared.target, BindTarget::ToKey(Key::of::<u8>()));
        assert_eq!(
            declared.scoping,
            BindScoping::ScopeAnnotation(AnnotationType::SINGLETON)
        );
    }
}
