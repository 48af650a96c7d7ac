//! Recorder - 1 回の configuration pass を記録する
//!
//! # 流れ
//! 1. `bind::<T>()` で BindCommand を開き、BindingBuilder を返す
//!    （開いた command は次の文か `finish()` で command 列に確定する）
//! 2. builder の検証エラーは pass が終わるまで溜めておく
//! 3. `finish()` で Recording（command 列 + エラー）を取り出す
//!
//! 記録された command は後で `app::replay` によって実際の Binder に適用されます。

use crate::domain::{AddErrorCommand, BindCommand, BindError, BindingView, Command, Key, Source};

use super::builder::BindingBuilder;

/// ConfigurationError は pass 全体のエラーをまとめて返す
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("{} configuration error(s): {}", .0.len(), render(.0))]
    Invalid(Vec<BindError>),
}

fn render(errors: &[BindError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Recorder は設定文を command として記録する
///
/// # 使用例
/// ```ignore
/// let mut recorder = Recorder::new();
/// recorder.bind::<dyn Service>().to::<ServiceImpl>().as_eager_singleton();
/// recorder.bind::<Config>().to_instance(config);
/// let commands = recorder.finish().into_result()?;
/// ```
#[derive(Debug, Default)]
pub struct Recorder {
    commands: Vec<Command>,
    open: Option<BindCommand>,
    errors: Vec<BindError>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `T` の binding を開始（source は呼び出し元）
    #[track_caller]
    pub fn bind<T: ?Sized + Send + Sync + 'static>(&mut self) -> BindingBuilder<'_, T> {
        self.bind_with_source(Source::caller())
    }

    /// 出所を明示して `T` の binding を開始
    pub fn bind_with_source<T: ?Sized + Send + Sync + 'static>(
        &mut self,
        source: Source,
    ) -> BindingBuilder<'_, T> {
        let command = BindCommand::new(source, Key::of::<T>());
        tracing::debug!(source = %command.source(), key = %command.key(), "recorded bind command");

        self.close();
        let Self { open, errors, .. } = self;
        BindingBuilder::new(open.insert(command), errors)
    }

    /// 利用者のエラーメッセージを記録（replay 時に Binder へ渡される）
    #[track_caller]
    pub fn add_error(&mut self, message: impl Into<String>) {
        let command = AddErrorCommand::new(Source::caller(), message);
        tracing::debug!(source = %command.source(), "recorded error command: {}", command.message());
        self.close();
        self.commands.push(Command::AddError(command));
    }

    /// 記録済みの command（開いている bind 文も確定させる）
    pub fn commands(&mut self) -> &[Command] {
        self.close();
        &self.commands
    }

    pub fn errors(&self) -> &[BindError] {
        &self.errors
    }

    fn close(&mut self) {
        if let Some(command) = self.open.take() {
            self.commands.push(Command::Bind(command));
        }
    }

    /// pass を終了し、command を読み取り専用にする
    pub fn finish(mut self) -> Recording {
        self.close();
        tracing::debug!(
            commands = self.commands.len(),
            errors = self.errors.len(),
            "configuration pass finished"
        );
        Recording {
            commands: self.commands,
            errors: self.errors,
        }
    }
}

/// Recording は終了した pass の出力（不変）
#[derive(Debug, Clone)]
pub struct Recording {
    commands: Vec<Command>,
    errors: Vec<BindError>,
}

impl Recording {
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn errors(&self) -> &[BindError] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn bind_commands(&self) -> impl Iterator<Item = &BindCommand> {
        self.commands.iter().filter_map(Command::as_bind)
    }

    pub fn views(&self) -> Vec<BindingView> {
        self.bind_commands().map(BindCommand::view).collect()
    }

    /// 診断用の JSON レポート（bindings + errors）
    pub fn report(&self) -> serde_json::Value {
        serde_json::json!({
            "bindings": self.views(),
            "errors": self.errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
        })
    }

    /// エラーがなければ command 列を返す
    pub fn into_result(self) -> Result<Vec<Command>, ConfigurationError> {
        if self.errors.is_empty() {
            Ok(self.commands)
        } else {
            Err(ConfigurationError::Invalid(self.errors))
        }
    }
}
