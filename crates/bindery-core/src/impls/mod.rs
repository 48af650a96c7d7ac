//! Impls - 実装（開発用・テスト用）
//!
//! このモジュールには ports の実装を含めます。
//!
//! # 含まれる実装
//! - **InMemoryBinder**: 受け取った宣言をメモリに保持する Binder
//!
//! 本番の injector は別クレートで `Binder` を実装します。

pub mod inmem_binder;

// 主要な型を再エクスポート
pub use self::inmem_binder::{Declaration, InMemoryBinder};
