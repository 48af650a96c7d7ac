//! BindScoping - binding のスコープ（インスタンス再利用ポリシー）

use std::fmt;
use std::sync::Arc;

use super::key::AnnotationType;
use crate::ports::{Scope, ScopedBindingBuilder, ScopingVisitor};

/// Lifecycle policy recorded for a binding.
#[derive(Clone, Default)]
pub enum BindScoping {
    #[default]
    NoScoping,
    ScopeAnnotation(AnnotationType),
    ScopeInstance(Arc<dyn Scope>),
    EagerSingleton,
}

impl BindScoping {
    pub fn is_no_scoping(&self) -> bool {
        matches!(self, Self::NoScoping)
    }

    pub fn is_eager_singleton(&self) -> bool {
        matches!(self, Self::EagerSingleton)
    }

    pub fn scope(&self) -> Option<&Arc<dyn Scope>> {
        match self {
            Self::ScopeInstance(scope) => Some(scope),
            _ => None,
        }
    }

    pub fn scope_annotation(&self) -> Option<&AnnotationType> {
        match self {
            Self::ScopeAnnotation(scope_annotation) => Some(scope_annotation),
            _ => None,
        }
    }

    /// Apply this scoping to a real binding. `NoScoping` leaves it untouched.
    pub fn execute(&self, scoped: &mut dyn ScopedBindingBuilder) {
        match self {
            Self::NoScoping => {}
            Self::ScopeAnnotation(scope_annotation) => scoped.in_annotation(scope_annotation),
            Self::ScopeInstance(scope) => scoped.in_scope(scope),
            Self::EagerSingleton => scoped.as_eager_singleton(),
        }
    }

    pub fn accept_visitor<V: ScopingVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::NoScoping => visitor.visit_no_scoping(),
            Self::ScopeAnnotation(scope_annotation) => {
                visitor.visit_scope_annotation(scope_annotation)
            }
            Self::ScopeInstance(scope) => visitor.visit_scope(scope),
            Self::EagerSingleton => visitor.visit_eager_singleton(),
        }
    }
}

impl PartialEq for BindScoping {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NoScoping, Self::NoScoping) => true,
            (Self::EagerSingleton, Self::EagerSingleton) => true,
            (Self::ScopeAnnotation(a), Self::ScopeAnnotation(b)) => a == b,
            // scope はインスタンスの同一性で比較
            (Self::ScopeInstance(a), Self::ScopeInstance(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for BindScoping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoScoping => f.write_str("NoScoping"),
            Self::ScopeAnnotation(scope_annotation) => f
                .debug_tuple("ScopeAnnotation")
                .field(scope_annotation)
                .finish(),
            Self::ScopeInstance(scope) => f.debug_tuple("ScopeInstance").field(&scope.name()).finish(),
            Self::EagerSingleton => f.write_str("EagerSingleton"),
        }
    }
}

impl fmt::Display for BindScoping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoScoping => f.write_str("no scoping"),
            Self::ScopeAnnotation(scope_annotation) => write!(f, "{scope_annotation}"),
            Self::ScopeInstance(scope) => f.write_str(scope.name()),
            Self::EagerSingleton => f.write_str("eager singleton"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct RequestScope;

    impl Scope for RequestScope {
        fn name(&self) -> &str {
            "RequestScope"
        }
    }

    #[derive(Default)]
    struct CallLog(Vec<&'static str>);

    impl ScopingVisitor for CallLog {
        type Output = ();

        fn visit_no_scoping(&mut self) {
            self.0.push("no_scoping");
        }
        fn visit_scope_annotation(&mut self, _scope_annotation: &AnnotationType) {
            self.0.push("scope_annotation");
        }
        fn visit_scope(&mut self, _scope: &Arc<dyn Scope>) {
            self.0.push("scope");
        }
        fn visit_eager_singleton(&mut self) {
            self.0.push("eager_singleton");
        }
    }

    /// Stand-in for the real scoped builder; remembers the last call.
    #[derive(Default)]
    struct LastCall(Option<String>);

    impl ScopedBindingBuilder for LastCall {
        fn in_annotation(&mut self, scope_annotation: &AnnotationType) {
            self.0 = Some(format!("in {scope_annotation}"));
        }
        fn in_scope(&mut self, scope: &Arc<dyn Scope>) {
            self.0 = Some(format!("in {}", scope.name()));
        }
        fn as_eager_singleton(&mut self) {
            self.0 = Some("eager".to_string());
        }
    }

    #[rstest]
    #[case::no_scoping(BindScoping::NoScoping, "no_scoping")]
    #[case::scope_annotation(BindScoping::ScopeAnnotation(AnnotationType::SINGLETON), "scope_annotation")]
    #[case::scope(BindScoping::ScopeInstance(Arc::new(RequestScope)), "scope")]
    #[case::eager_singleton(BindScoping::EagerSingleton, "eager_singleton")]
    fn accept_visitor_calls_exactly_one_method(
        #[case] scoping: BindScoping,
        #[case] expected: &'static str,
    ) {
        let mut log = CallLog::default();
        scoping.accept_visitor(&mut log);
        assert_eq!(log.0, vec![expected]);
    }

    #[rstest]
    #[case::no_scoping(BindScoping::NoScoping, None)]
    #[case::scope_annotation(BindScoping::ScopeAnnotation(AnnotationType::SINGLETON), Some("in Singleton"))]
    #[case::scope(BindScoping::ScopeInstance(Arc::new(RequestScope)), Some("in RequestScope"))]
    #[case::eager_singleton(BindScoping::EagerSingleton, Some("eager"))]
    fn execute_forwards_to_scoped_builder(
        #[case] scoping: BindScoping,
        #[case] expected: Option<&str>,
    ) {
        let mut last = LastCall::default();
        scoping.execute(&mut last);
        assert_eq!(last.0.as_deref(), expected);
    }

    #[test]
    fn query_helpers() {
        assert!(BindScoping::EagerSingleton.is_eager_singleton());
        assert!(BindScoping::NoScoping.scope().is_none());
        assert!(BindScoping::NoScoping.scope_annotation().is_none());

        let by_annotation = BindScoping::ScopeAnnotation(AnnotationType::SINGLETON);
        assert_eq!(by_annotation.scope_annotation(), Some(&AnnotationType::SINGLETON));
        assert!(!by_annotation.is_eager_singleton());

        let scope: Arc<dyn Scope> = Arc::new(RequestScope);
        let by_instance = BindScoping::ScopeInstance(scope.clone());
        assert!(Arc::ptr_eq(by_instance.scope().unwrap(), &scope));
        assert_eq!(by_instance, BindScoping::ScopeInstance(scope));
    }
}
