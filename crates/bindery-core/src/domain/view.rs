//! BindingView - 診断・重複検出ツール向けのシリアライズ可能なビュー

use serde::{Deserialize, Serialize};

use super::command::BindCommand;
use super::scoping::BindScoping;
use super::source::Source;
use super::target::BindTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Untargeted,
    ToKey,
    ToInstance,
    ToProviderInstance,
    ToProviderKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopingKind {
    NoScoping,
    ScopeAnnotation,
    ScopeInstance,
    EagerSingleton,
}

/// Serializable snapshot of a BindCommand.
///
/// Keys and payloads are rendered to strings; the view is for reporting,
/// not for rebuilding commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingView {
    pub source: Source,
    pub key: String,
    pub target: TargetKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_detail: Option<String>,

    pub scoping: ScopingKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoping_detail: Option<String>,
}

impl From<&BindTarget> for TargetKind {
    fn from(target: &BindTarget) -> Self {
        match target {
            BindTarget::Untargeted => TargetKind::Untargeted,
            BindTarget::ToKey(_) => TargetKind::ToKey,
            BindTarget::ToInstance(_) => TargetKind::ToInstance,
            BindTarget::ToProviderInstance(_) => TargetKind::ToProviderInstance,
            BindTarget::ToProviderKey(_) => TargetKind::ToProviderKey,
        }
    }
}

impl From<&BindScoping> for ScopingKind {
    fn from(scoping: &BindScoping) -> Self {
        match scoping {
            BindScoping::NoScoping => ScopingKind::NoScoping,
            BindScoping::ScopeAnnotation(_) => ScopingKind::ScopeAnnotation,
            BindScoping::ScopeInstance(_) => ScopingKind::ScopeInstance,
            BindScoping::EagerSingleton => ScopingKind::EagerSingleton,
        }
    }
}

impl From<&BindCommand> for BindingView {
    fn from(command: &BindCommand) -> Self {
        let target = command.target();
        let scoping = command.scoping();
        Self {
            source: command.source().clone(),
            key: command.key().to_string(),
            target: TargetKind::from(target),
            target_detail: (!target.is_untargeted()).then(|| target.to_string()),
            scoping: ScopingKind::from(scoping),
            scoping_detail: match scoping {
                BindScoping::ScopeAnnotation(_) | BindScoping::ScopeInstance(_) => {
                    Some(scoping.to_string())
                }
                BindScoping::NoScoping | BindScoping::EagerSingleton => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AnnotationType, Key};

    struct Database;
    struct PostgresDatabase;

    #[test]
    fn untargeted_view_omits_details() {
        let command = BindCommand::new(Source::labeled("app").unwrap(), Key::of::<Database>());
        let v = serde_json::to_value(command.view()).unwrap();

        assert_eq!(v["target"], "untargeted");
        assert_eq!(v["scoping"], "no_scoping");
        assert!(v.get("target_detail").is_none());
        assert!(v.get("scoping_detail").is_none());
        assert_eq!(v["source"]["label"], "app");
    }

    #[test]
    fn linked_and_scoped_view_has_details() {
        let mut command =
            BindCommand::new(Source::labeled("app").unwrap(), Key::of::<Database>());
        command.set_target(BindTarget::ToKey(Key::of::<PostgresDatabase>()));
        command.set_scoping(BindScoping::ScopeAnnotation(AnnotationType::SINGLETON));

        let view = command.view();
        assert_eq!(view.target, TargetKind::ToKey);
        assert!(view.target_detail.unwrap().contains("PostgresDatabase"));
        assert_eq!(view.scoping, ScopingKind::ScopeAnnotation);
        assert_eq!(view.scoping_detail.as_deref(), Some("Singleton"));
    }

    #[test]
    fn view_roundtrip_json() {
        let command = BindCommand::new(Source::labeled("app").unwrap(), Key::of::<Database>());
        let view = command.view();
        let s = serde_json::to_string(&view).unwrap();
        let back: BindingView = serde_json::from_str(&s).unwrap();
        assert_eq!(back, view);
    }
}
