//! Provider / Scope port - 実行時の振る舞いは外部（injector）が持つ
//!
//! このクレートは provider と scope を「渡されたまま保持する」だけです。

use std::sync::Arc;

/// Provider は `T` のインスタンスを供給する
///
/// # 使用例
/// ```ignore
/// // クロージャはそのまま Provider として使える
/// builder.to_provider(|| Arc::new(Connection::open()));
/// ```
pub trait Provider<T: ?Sized>: Send + Sync {
    fn get(&self) -> Arc<T>;
}

impl<T, F> Provider<T> for F
where
    T: ?Sized,
    F: Fn() -> Arc<T> + Send + Sync,
{
    fn get(&self) -> Arc<T> {
        self()
    }
}

/// Scope はインスタンスの再利用ポリシー（request scope など）
///
/// 実際のスコープ処理は injector 側の責務。ここでは診断用の名前だけを要求します。
pub trait Scope: Send + Sync {
    fn name(&self) -> &str;
}
