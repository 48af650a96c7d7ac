//! Errors - エラー型と分類
//!
//! # 二種類のエラー
//! - **前提条件違反**（`MissingArgument`）: その呼び出しだけが失敗する（`Err` を返す）
//! - **ビジネスルール違反**（`Duplicate*`, `ScopeOnSingleInstance`）: ErrorSink に記録され、
//!   configuration pass は継続する

use super::key::Key;
use super::source::Source;

pub const IMPLEMENTATION_ALREADY_SET: &str = "Implementation is set more than once.";
pub const SINGLE_INSTANCE_AND_SCOPE: &str =
    "Setting the scope is not permitted when binding to a single instance.";
pub const SCOPE_ALREADY_SET: &str = "Scope is set more than once.";
pub const ANNOTATION_ALREADY_SPECIFIED: &str =
    "More than one annotation is specified for this binding.";

/// ErrorKind はエラーの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingArgument,
    DuplicateAnnotation,
    DuplicateTarget,
    DuplicateScope,
    ScopeOnSingleInstance,
    /// 利用者が `add_error` で報告したメッセージ
    Message,
}

/// BindError は構造化されたエラー（kind + message + context）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("{argument} must be provided")]
    MissingArgument { argument: &'static str },

    #[error("{origin}: {msg} (bind {key})", msg = ANNOTATION_ALREADY_SPECIFIED)]
    DuplicateAnnotation { origin: Source, key: Key },

    #[error("{origin}: {msg} (bind {key})", msg = IMPLEMENTATION_ALREADY_SET)]
    DuplicateTarget { origin: Source, key: Key },

    #[error("{origin}: {msg} (bind {key})", msg = SCOPE_ALREADY_SET)]
    DuplicateScope { origin: Source, key: Key },

    #[error("{origin}: {msg} (bind {key})", msg = SINGLE_INSTANCE_AND_SCOPE)]
    ScopeOnSingleInstance { origin: Source, key: Key },

    #[error("{origin}: {message}")]
    Message { origin: Source, message: String },
}

impl BindError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument { .. } => ErrorKind::MissingArgument,
            Self::DuplicateAnnotation { .. } => ErrorKind::DuplicateAnnotation,
            Self::DuplicateTarget { .. } => ErrorKind::DuplicateTarget,
            Self::DuplicateScope { .. } => ErrorKind::DuplicateScope,
            Self::ScopeOnSingleInstance { .. } => ErrorKind::ScopeOnSingleInstance,
            Self::Message { .. } => ErrorKind::Message,
        }
    }

    /// 出所や key を含まない、エラー本文
    pub fn message(&self) -> &str {
        match self {
            Self::MissingArgument { .. } => "required argument is missing",
            Self::DuplicateAnnotation { .. } => ANNOTATION_ALREADY_SPECIFIED,
            Self::DuplicateTarget { .. } => IMPLEMENTATION_ALREADY_SET,
            Self::DuplicateScope { .. } => SCOPE_ALREADY_SET,
            Self::ScopeOnSingleInstance { .. } => SINGLE_INSTANCE_AND_SCOPE,
            Self::Message { message, .. } => message,
        }
    }

    pub fn origin(&self) -> Option<&Source> {
        match self {
            Self::MissingArgument { .. } => None,
            Self::DuplicateAnnotation { origin, .. }
            | Self::DuplicateTarget { origin, .. }
            | Self::DuplicateScope { origin, .. }
            | Self::ScopeOnSingleInstance { origin, .. }
            | Self::Message { origin, .. } => Some(origin),
        }
    }

    pub fn key(&self) -> Option<&Key> {
        match self {
            Self::DuplicateAnnotation { key, .. }
            | Self::DuplicateTarget { key, .. }
            | Self::DuplicateScope { key, .. }
            | Self::ScopeOnSingleInstance { key, .. } => Some(key),
            Self::MissingArgument { .. } | Self::Message { .. } => None,
        }
    }
}
