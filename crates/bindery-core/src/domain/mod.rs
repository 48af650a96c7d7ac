//! Domain model (keys, targets, scopings, commands, errors).
//!
//! - **key**: Key / TypeLiteral / Annotation（バインディングの同一性）
//! - **source**: 設定文の出所
//! - **payload**: 型消去された instance / provider
//! - **target**, **scoping**: tagged union と double dispatch
//! - **command**: BindCommand / AddErrorCommand / Command
//! - **errors**: ErrorKind と BindError
//! - **view**: シリアライズ可能な診断ビュー

pub mod command;
pub mod errors;
pub mod key;
pub mod payload;
pub mod scoping;
pub mod source;
pub mod target;
pub mod view;

pub use self::command::{AddErrorCommand, BindCommand, Command};
pub use self::errors::{BindError, ErrorKind};
pub use self::key::{Annotation, AnnotationType, Key, TypeLiteral};
pub use self::payload::{Instance, ProviderInstance};
pub use self::scoping::BindScoping;
pub use self::source::Source;
pub use self::target::BindTarget;
pub use self::view::{BindingView, ScopingKind, TargetKind};
