//! bindery-core
//!
//! 「key を束縛する（任意で target へ、任意で scope 付きで）」という 1 つの設定文を、
//! 検証付きの fluent builder で組み立て、後で実際の binder に replay できる
//! 不変の command として記録します。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（Key, BindTarget, BindScoping, BindCommand, BindError, BindingView）
//! - **ports**: 抽象化レイヤー（Binder, ErrorSink, Provider, Scope, Visitor）
//! - **app**: アプリケーションロジック（BindingBuilder, Recorder, replay）
//! - **impls**: 実装（InMemoryBinder など開発用）
//!
//! # 使用例
//! ```ignore
//! let mut recorder = Recorder::new();
//! recorder
//!     .bind::<dyn Service>()
//!     .annotated_with(Annotation::named("primary"))
//!     .to::<ServiceImpl>()
//!     .in_annotation(AnnotationType::SINGLETON);
//!
//! let commands = recorder.finish().into_result()?;
//! replay(&commands, &mut binder);
//! ```

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;
