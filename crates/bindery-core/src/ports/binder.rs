//! Binder port - 実際のバインディング API（replay の出力先）
//!
//! command は「意図」を記録するだけで、実際の登録は replay 時に Binder が行います。
//! Target / Scoping の `execute` はこの trait 群を通して Binder を操作します。
//!
//! # 継続（continuation）
//! - `LinkedBindingBuilder::to*` は scope を続けて指定するための
//!   `ScopedBindingBuilder` を返す
//! - `to_instance` は何も返さない（単一インスタンスには scope を付けられない）

use std::sync::Arc;

use super::error_sink::ErrorSink;
use super::provider::Scope;
use crate::domain::{AnnotationType, Instance, Key, ProviderInstance, Source};

/// ScopedBindingBuilder は binding の scope を設定する
pub trait ScopedBindingBuilder {
    fn in_annotation(&mut self, scope_annotation: &AnnotationType);

    fn in_scope(&mut self, scope: &Arc<dyn Scope>);

    fn as_eager_singleton(&mut self);
}

/// LinkedBindingBuilder は binding の target を設定する
pub trait LinkedBindingBuilder: ScopedBindingBuilder {
    fn to(&mut self, key: &Key) -> &mut dyn ScopedBindingBuilder;

    fn to_instance(&mut self, instance: &Instance);

    fn to_provider(&mut self, provider: &ProviderInstance) -> &mut dyn ScopedBindingBuilder;

    fn to_provider_key(&mut self, provider_key: &Key) -> &mut dyn ScopedBindingBuilder;

    /// target を設定せずに scope へ進む（untargetted binding）
    fn as_scoped(&mut self) -> &mut dyn ScopedBindingBuilder;
}

/// Binder は binding 宣言とエラーを受け取る
///
/// # 使用例
/// ```ignore
/// let mut binder = InMemoryBinder::new();
/// replay(recording.commands(), &mut binder);
/// ```
pub trait Binder: ErrorSink {
    fn bind<'a>(&'a mut self, source: &Source, key: &Key) -> Box<dyn LinkedBindingBuilder + 'a>;
}
