//! Command - 設定文の不変スナップショット
//!
//! configuration pass の間は BindingBuilder だけが BindCommand を書き換え、
//! pass が終わった後は読み取り専用として replay / 診断に使われます。

use std::fmt;

use super::key::Key;
use super::scoping::BindScoping;
use super::source::Source;
use super::target::BindTarget;
use super::view::BindingView;
use crate::ports::CommandVisitor;

/// Immutable snapshot of a request to bind a key.
#[derive(Debug, Clone, PartialEq)]
pub struct BindCommand {
    source: Source,
    key: Key,
    target: BindTarget,
    scoping: BindScoping,
}

impl BindCommand {
    pub fn new(source: Source, key: Key) -> Self {
        Self {
            source,
            key,
            target: BindTarget::default(),
            scoping: BindScoping::default(),
        }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn target(&self) -> &BindTarget {
        &self.target
    }

    pub fn scoping(&self) -> &BindScoping {
        &self.scoping
    }

    pub fn accept_visitor<V: CommandVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_bind(self)
    }

    pub fn view(&self) -> BindingView {
        BindingView::from(self)
    }

    // write access is reserved for app::builder::BindingBuilder

    pub(crate) fn set_key(&mut self, key: Key) {
        self.key = key;
    }

    pub(crate) fn set_target(&mut self, target: BindTarget) {
        self.target = target;
    }

    pub(crate) fn set_scoping(&mut self, scoping: BindScoping) {
        self.scoping = scoping;
    }
}

impl fmt::Display for BindCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bind {}", self.key)?;
        if !self.target.is_untargeted() {
            write!(f, " to {}", self.target)?;
        }
        if !self.scoping.is_no_scoping() {
            write!(f, " in {}", self.scoping)?;
        }
        Ok(())
    }
}

/// A user-reported configuration error, replayed onto the real binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddErrorCommand {
    source: Source,
    message: String,
}

impl AddErrorCommand {
    pub fn new(source: Source, message: impl Into<String>) -> Self {
        Self {
            source,
            message: message.into(),
        }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn accept_visitor<V: CommandVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_add_error(self)
    }
}

/// One recorded configuration statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Bind(BindCommand),
    AddError(AddErrorCommand),
}

impl Command {
    pub fn source(&self) -> &Source {
        match self {
            Self::Bind(command) => command.source(),
            Self::AddError(command) => command.source(),
        }
    }

    pub fn as_bind(&self) -> Option<&BindCommand> {
        match self {
            Self::Bind(command) => Some(command),
            Self::AddError(_) => None,
        }
    }

    pub fn accept_visitor<V: CommandVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Bind(command) => command.accept_visitor(visitor),
            Self::AddError(command) => command.accept_visitor(visitor),
        }
    }
}

// pass 後の command は複数スレッドから同期なしで読める
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BindCommand>();
    assert_send_sync::<Command>();
};
