//! Replay - 記録された command を実際の Binder に適用する
//!
//! BindCommand ごとに:
//! 1. `binder.bind(source, key)` で linked builder を取得
//! 2. `target.execute(linked)` で target を適用し、継続（scoped builder）を得る
//! 3. 継続があれば `scoping.execute(scoped)` で scope を適用
//!
//! AddErrorCommand は `binder.add_error` にそのまま渡します。

use crate::domain::{AddErrorCommand, BindCommand, BindError, Command};
use crate::ports::{Binder, CommandVisitor};

/// CommandReplayer は command を Binder へ流し込む visitor
pub struct CommandReplayer<'b, B: Binder + ?Sized> {
    binder: &'b mut B,
}

impl<'b, B: Binder + ?Sized> CommandReplayer<'b, B> {
    pub fn new(binder: &'b mut B) -> Self {
        Self { binder }
    }
}

impl<B: Binder + ?Sized> CommandVisitor for CommandReplayer<'_, B> {
    type Output = ();

    fn visit_bind(&mut self, command: &BindCommand) {
        tracing::debug!(command = %command, "replaying bind command");
        let mut linked = self.binder.bind(command.source(), command.key());
        if let Some(scoped) = command.target().execute(linked.as_mut()) {
            command.scoping().execute(scoped);
        }
    }

    fn visit_add_error(&mut self, command: &AddErrorCommand) {
        self.binder.add_error(BindError::Message {
            origin: command.source().clone(),
            message: command.message().to_string(),
        });
    }
}

/// command 列を順番に Binder へ適用
pub fn replay<B: Binder + ?Sized>(commands: &[Command], binder: &mut B) {
    let mut replayer = CommandReplayer::new(binder);
    for command in commands {
        command.accept_visitor(&mut replayer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Recorder;
    use crate::domain::{
        Annotation, AnnotationType, BindScoping, BindTarget, ErrorKind, Key,
    };
    use crate::impls::InMemoryBinder;
    use crate::ports::Scope;
    use std::sync::Arc;

    trait Service: Send + Sync {}
    struct ServiceImpl;
    impl Service for ServiceImpl {}

    struct RequestScope;

    impl Scope for RequestScope {
        fn name(&self) -> &str {
            "RequestScope"
        }
    }

    #[test]
    fn replay_declares_every_binding_in_order() {
        let scope: Arc<dyn Scope> = Arc::new(RequestScope);
        let mut recorder = Recorder::new();
        recorder
            .bind::<dyn Service>()
            .annotated_with(Annotation::named("primary"))
            .to::<ServiceImpl>()
            .in_scope(scope.clone());
        recorder.bind::<ServiceImpl>().in_annotation(AnnotationType::SINGLETON);
        let recording = recorder.finish();

        let mut binder = InMemoryBinder::new();
        replay(recording.commands(), &mut binder);

        let declared = binder.declarations();
        assert_eq!(declared.len(), 2);
        assert_eq!(
            declared[0].key,
            Key::of::<dyn Service>().with_annotation(Annotation::named("primary"))
        );
        assert_eq!(declared[0].target, BindTarget::ToKey(Key::of::<ServiceImpl>()));
        assert_eq!(declared[0].scoping, BindScoping::ScopeInstance(scope));
        assert_eq!(declared[1].target, BindTarget::Untargeted);
        assert_eq!(
            declared[1].scoping,
            BindScoping::ScopeAnnotation(AnnotationType::SINGLETON)
        );
        assert!(binder.errors().is_empty());
    }

    #[test]
    fn replayed_declarations_match_recorded_commands() {
        let mut recorder = Recorder::new();
        recorder
            .bind::<dyn Service>()
            .to_instance(Arc::new(ServiceImpl) as Arc<dyn Service>);
        recorder.bind::<ServiceImpl>().as_eager_singleton();
        let recording = recorder.finish();

        let mut binder = InMemoryBinder::new();
        replay(recording.commands(), &mut binder);

        for (command, declared) in recording.bind_commands().zip(binder.declarations()) {
            assert_eq!(&declared.source, command.source());
            assert_eq!(&declared.key, command.key());
            assert_eq!(&declared.target, command.target());
            assert_eq!(&declared.scoping, command.scoping());
        }
    }

    #[test]
    fn add_error_commands_reach_the_binder() {
        let mut recorder = Recorder::new();
        recorder.add_error("database url is not configured");
        let recording = recorder.finish();

        let mut binder = InMemoryBinder::new();
        replay(recording.commands(), &mut binder);

        assert!(binder.declarations().is_empty());
        assert_eq!(binder.errors().len(), 1);
        assert_eq!(binder.errors()[0].kind(), ErrorKind::Message);
        assert_eq!(binder.errors()[0].message(), "database url is not configured");
    }

    #[test]
    fn recorded_commands_can_be_replayed_twice() {
        let mut recorder = Recorder::new();
        recorder.bind::<ServiceImpl>().as_eager_singleton();
        let recording = recorder.finish();

        let mut first = InMemoryBinder::new();
        let mut second = InMemoryBinder::new();
        replay(recording.commands(), &mut first);
        replay(recording.commands(), &mut second);

        assert_eq!(first.declarations(), second.declarations());
    }
}
