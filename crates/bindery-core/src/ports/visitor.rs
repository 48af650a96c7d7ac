//! Visitor port - command / target / scoping の double dispatch
//!
//! Target と Scoping は公開 enum なので `match` で直接分岐してもよいです。
//! Visitor は「処理系」を独立した型として書きたい場合のための入口です
//! （replay、診断出力、重複検出など）。

use std::sync::Arc;

use super::provider::Scope;
use crate::domain::{
    AddErrorCommand, AnnotationType, BindCommand, Instance, Key, ProviderInstance,
};

/// CommandVisitor は記録された command を処理する
pub trait CommandVisitor {
    type Output;

    fn visit_bind(&mut self, command: &BindCommand) -> Self::Output;

    fn visit_add_error(&mut self, command: &AddErrorCommand) -> Self::Output;
}

/// TargetVisitor は BindTarget の各 variant を処理する
pub trait TargetVisitor {
    type Output;

    fn visit_untargeted(&mut self) -> Self::Output;

    fn visit_to_key(&mut self, key: &Key) -> Self::Output;

    fn visit_to_instance(&mut self, instance: &Instance) -> Self::Output;

    fn visit_to_provider(&mut self, provider: &ProviderInstance) -> Self::Output;

    fn visit_to_provider_key(&mut self, provider_key: &Key) -> Self::Output;
}

/// ScopingVisitor は BindScoping の各 variant を処理する
pub trait ScopingVisitor {
    type Output;

    fn visit_no_scoping(&mut self) -> Self::Output;

    fn visit_scope_annotation(&mut self, scope_annotation: &AnnotationType) -> Self::Output;

    fn visit_scope(&mut self, scope: &Arc<dyn Scope>) -> Self::Output;

    fn visit_eager_singleton(&mut self) -> Self::Output;
}
