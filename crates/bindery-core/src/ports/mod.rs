//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 実際の injector（binder、provider、scope の実行時挙動）はこのクレートの外にあり、
//! ここではその境界となる trait だけを定めます。

pub mod binder;
pub mod error_sink;
pub mod provider;
pub mod visitor;

// 主要な trait を再エクスポート
pub use self::binder::{Binder, LinkedBindingBuilder, ScopedBindingBuilder};
pub use self::error_sink::ErrorSink;
pub use self::provider::{Provider, Scope};
pub use self::visitor::{CommandVisitor, ScopingVisitor, TargetVisitor};
