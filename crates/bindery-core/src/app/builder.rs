//! BindingBuilder - BindCommand を組み立てる fluent API
//!
//! # 学習ポイント
//! - Builder パターンの実装（`self` を消費してチェーン）
//! - 一度だけ設定できるフィールド（annotation / target / scope）の検証
//! - Fail-fast ではなく「記録して続行」: エラーは ErrorSink に送り、最初の値を保持する
//! - `#[track_caller]` による呼び出し元の記録

use std::marker::PhantomData;
use std::sync::Arc;

use crate::domain::{
    Annotation, AnnotationType, BindCommand, BindError, BindScoping, BindTarget, Instance, Key,
    ProviderInstance, Source, TypeLiteral,
};
use crate::ports::{ErrorSink, Provider, Scope};

/// BindingBuilder は 1 つの BindCommand への排他的な書き込み口
///
/// # 使用例
/// `Recorder::bind::<T>()` が command と一緒に作るため、`T` は常に key の型と一致します。
///
/// ```ignore
/// let mut recorder = Recorder::new();
/// recorder
///     .bind::<dyn Service>()
///     .annotated_with(Annotation::named("primary"))
///     .to::<ServiceImpl>()
///     .in_annotation(AnnotationType::SINGLETON);
/// ```
///
/// # 検証ルール
/// - annotation / target / scope はそれぞれ一度だけ設定できる
/// - target が単一インスタンスなら scope は設定できない
/// - 違反は ErrorSink に記録し、コマンドは最初に設定された値のまま
pub struct BindingBuilder<'a, T: ?Sized> {
    command: &'a mut BindCommand,
    errors: &'a mut dyn ErrorSink,
    _marker: PhantomData<fn() -> Arc<T>>,
}

impl<'a, T: ?Sized + Send + Sync + 'static> BindingBuilder<'a, T> {
    pub(crate) fn new(command: &'a mut BindCommand, errors: &'a mut dyn ErrorSink) -> Self {
        debug_assert_eq!(command.key().type_literal(), &TypeLiteral::of::<T>());
        Self {
            command,
            errors,
            _marker: PhantomData,
        }
    }

    /// 組み立て中の command（読み取り専用）
    pub fn command(&self) -> &BindCommand {
        self.command
    }

    /// key に annotation を付与
    ///
    /// `AnnotationType`（marker）と `Annotation`（値付き）のどちらも受け付けます。
    #[track_caller]
    pub fn annotated_with(mut self, annotation: impl Into<Annotation>) -> Self {
        let annotation = annotation.into();
        if self.command.key().annotation().is_some() {
            self.report(|origin, key| BindError::DuplicateAnnotation { origin, key });
            return self;
        }
        let key = self.command.key().with_annotation(annotation);
        self.command.set_key(key);
        self
    }

    /// 実装型 `U` の key へリンク
    #[track_caller]
    pub fn to<U: ?Sized + 'static>(self) -> Self {
        self.to_key(Key::of::<U>())
    }

    #[track_caller]
    pub fn to_type_literal(self, implementation: TypeLiteral) -> Self {
        self.to_key(Key::get(implementation))
    }

    #[track_caller]
    pub fn to_key(mut self, target_key: Key) -> Self {
        if self.check_no_target() {
            self.command.set_target(BindTarget::ToKey(target_key));
        }
        self
    }

    /// 単一インスタンスへ束縛
    ///
    /// 値は常に存在する（`Arc<T>`）ため、「未設定」と「null への束縛」を区別する必要はありません。
    #[track_caller]
    pub fn to_instance(mut self, instance: impl Into<Arc<T>>) -> Self {
        let instance = Instance::new(instance.into());
        if !self.check_no_target() {
            return self;
        }
        // scope が先に設定されていれば、最初の値（scope）を優先する
        if !self.command.scoping().is_no_scoping() {
            self.report(|origin, key| BindError::ScopeOnSingleInstance { origin, key });
            return self;
        }
        self.command.set_target(BindTarget::ToInstance(instance));
        self
    }

    #[track_caller]
    pub fn to_provider<P: Provider<T> + 'static>(self, provider: P) -> Self {
        self.to_provider_arc(Arc::new(provider))
    }

    /// 複数の binding で共有する provider へ束縛
    #[track_caller]
    pub fn to_provider_arc(mut self, provider: Arc<dyn Provider<T>>) -> Self {
        if self.check_no_target() {
            self.command
                .set_target(BindTarget::ToProviderInstance(ProviderInstance::new(provider)));
        }
        self
    }

    /// provider の型 `P` の key へ束縛（provider 自体は injector が解決する）
    #[track_caller]
    pub fn to_provider_type<P: Provider<T> + 'static>(self) -> Self {
        self.to_provider_key(Key::of::<P>())
    }

    #[track_caller]
    pub fn to_provider_key(mut self, provider_key: Key) -> Self {
        if self.check_no_target() {
            self.command
                .set_target(BindTarget::ToProviderKey(provider_key));
        }
        self
    }

    /// scope annotation（`AnnotationType::SINGLETON` など）で scope を指定
    #[track_caller]
    pub fn in_annotation(mut self, scope_annotation: AnnotationType) -> Self {
        if self.check_no_scope() {
            self.command
                .set_scoping(BindScoping::ScopeAnnotation(scope_annotation));
        }
        self
    }

    #[track_caller]
    pub fn in_scope(mut self, scope: Arc<dyn Scope>) -> Self {
        if self.check_no_scope() {
            self.command.set_scoping(BindScoping::ScopeInstance(scope));
        }
        self
    }

    #[track_caller]
    pub fn as_eager_singleton(mut self) -> Self {
        if self.check_no_scope() {
            self.command.set_scoping(BindScoping::EagerSingleton);
        }
        self
    }

    /// target が未設定なら true。設定済みなら DuplicateTarget を記録して false。
    #[track_caller]
    fn check_no_target(&mut self) -> bool {
        if self.command.target().is_untargeted() {
            return true;
        }
        self.report(|origin, key| BindError::DuplicateTarget { origin, key });
        false
    }

    /// scope を設定してよいなら true
    ///
    /// 単一インスタンスの判定は target の variant（構造）で行い、値は見ない。
    #[track_caller]
    fn check_no_scope(&mut self) -> bool {
        if self.command.target().is_single_instance() {
            self.report(|origin, key| BindError::ScopeOnSingleInstance { origin, key });
            return false;
        }
        if !self.command.scoping().is_no_scoping() {
            self.report(|origin, key| BindError::DuplicateScope { origin, key });
            return false;
        }
        true
    }

    #[track_caller]
    fn report(&mut self, make: impl FnOnce(Source, Key) -> BindError) {
        let error = make(Source::caller(), self.command.key().clone());
        tracing::warn!(
            kind = ?error.kind(),
            key = %self.command.key(),
            source = %self.command.source(),
            "rejected binding statement: {}",
            error.message()
        );
        self.errors.add_error(error);
    }
}
