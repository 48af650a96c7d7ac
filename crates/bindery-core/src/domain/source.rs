//! Source - バインディング文の出所（診断用）

use std::fmt;
use std::panic::Location;

use serde::{Deserialize, Serialize};

use super::errors::BindError;

/// Where a configuration statement came from.
///
/// Captured automatically from the caller with `#[track_caller]`, or supplied
/// as a free-form label when statements are generated (e.g. from a manifest).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Source {
    CallSite {
        file: String,
        line: u32,
        column: u32,
    },
    Label {
        label: String,
    },
}

impl Source {
    /// Capture the call site of the (outermost `#[track_caller]`) caller.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &Location<'_>) -> Self {
        Self::CallSite {
            file: location.file().to_string(),
            line: location.line(),
            column: location.column(),
        }
    }

    /// A labelled source. Blank labels carry no provenance and are rejected.
    pub fn labeled(label: impl Into<String>) -> Result<Self, BindError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(BindError::MissingArgument { argument: "source" });
        }
        Ok(Self::Label { label })
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CallSite { file, line, column } => write!(f, "{file}:{line}:{column}"),
            Self::Label { label } => f.write_str(label),
        }
    }
}
