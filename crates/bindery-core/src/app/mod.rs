//! App - アプリケーション層
//!
//! domain と ports を組み合わせて configuration pass を実装します。
//!
//! # 主要コンポーネント
//! - **BindingBuilder**: 1 つの BindCommand を検証しながら組み立てる
//! - **Recorder**: 1 回の configuration pass で command を記録する
//! - **CommandReplayer**: 記録された command を実際の Binder に適用する

pub mod builder;
pub mod recorder;
pub mod replay;

// 主要な型を再エクスポート
pub use self::builder::BindingBuilder;
pub use self::recorder::{ConfigurationError, Recorder, Recording};
pub use self::replay::{CommandReplayer, replay};
