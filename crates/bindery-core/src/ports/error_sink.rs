//! ErrorSink port - 検証エラーの受け口
//!
//! BindingBuilder は検証エラーで処理を中断せず、ErrorSink に記録して続行します。
//! これにより 1 回の configuration pass ですべての問題を一度に報告できます。

use crate::domain::BindError;

/// ErrorSink は構造化されたエラーを順番に受け取る
///
/// # 実装
/// - `Vec<BindError>`: 呼び出し側が用意するリスト
/// - `Binder`: 実際の binder（replay 時）
pub trait ErrorSink {
    fn add_error(&mut self, error: BindError);
}

impl ErrorSink for Vec<BindError> {
    fn add_error(&mut self, error: BindError) {
        self.push(error);
    }
}
