//! Key - バインディングの識別子（型 + 任意の annotation）
//!
//! # 学習ポイント
//! - `TypeId` による型の同一性
//! - `Cow<'static, str>` による定数と実行時文字列の両立
//! - 値オブジェクト（Clone + Eq + Hash）

use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;

use super::errors::BindError;

/// TypeLiteral は Rust の型を実行時に識別する
///
/// 同一性は `TypeId` のみで決まり、`name` は表示用です。
#[derive(Debug, Clone, Copy)]
pub struct TypeLiteral {
    id: TypeId,
    name: &'static str,
}

impl TypeLiteral {
    /// `T` の TypeLiteral を作成（`dyn Trait` も可）
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeLiteral {}

impl std::hash::Hash for TypeLiteral {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// AnnotationType は annotation の種類（`Named`, `Singleton` など）
///
/// binding annotation と scope annotation の両方に使います。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationType(Cow<'static, str>);

impl AnnotationType {
    /// `@Named("...")` 用の annotation type
    pub const NAMED: AnnotationType = AnnotationType(Cow::Borrowed("Named"));

    /// singleton scope を表す scope annotation
    pub const SINGLETON: AnnotationType = AnnotationType(Cow::Borrowed("Singleton"));

    /// 任意の名前から AnnotationType を作成
    ///
    /// 空白のみの名前は `BindError::MissingArgument` になります。
    pub fn new(name: impl Into<Cow<'static, str>>) -> Result<Self, BindError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BindError::MissingArgument {
                argument: "annotation_type",
            });
        }
        Ok(Self(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnnotationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Annotation は key に付与される修飾
///
/// - `Marker`: 型だけの annotation（`@Blue` のようなもの）
/// - `Instance`: 値を持つ annotation（`@Named("x")` のようなもの）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Annotation {
    Marker(AnnotationType),
    Instance {
        annotation_type: AnnotationType,
        value: String,
    },
}

impl Annotation {
    /// `@Named(value)` を作成
    pub fn named(value: impl Into<String>) -> Self {
        Self::Instance {
            annotation_type: AnnotationType::NAMED,
            value: value.into(),
        }
    }

    pub fn annotation_type(&self) -> &AnnotationType {
        match self {
            Self::Marker(annotation_type) => annotation_type,
            Self::Instance {
                annotation_type, ..
            } => annotation_type,
        }
    }
}

impl From<AnnotationType> for Annotation {
    fn from(annotation_type: AnnotationType) -> Self {
        Self::Marker(annotation_type)
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marker(annotation_type) => write!(f, "@{annotation_type}"),
            Self::Instance {
                annotation_type,
                value,
            } => write!(f, "@{annotation_type}(value={value})"),
        }
    }
}

/// Key はバインディングの同一性（型 + 任意の annotation）
///
/// # 使用例
/// ```ignore
/// let key = Key::of::<dyn Service>().with_annotation(Annotation::named("primary"));
/// assert_eq!(key.annotation_type(), Some(&AnnotationType::NAMED));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    type_literal: TypeLiteral,
    annotation: Option<Annotation>,
}

impl Key {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::get(TypeLiteral::of::<T>())
    }

    pub fn get(type_literal: TypeLiteral) -> Self {
        Self {
            type_literal,
            annotation: None,
        }
    }

    /// 同じ型で annotation だけを差し替えた Key を返す
    pub fn with_annotation(&self, annotation: impl Into<Annotation>) -> Self {
        Self {
            type_literal: self.type_literal,
            annotation: Some(annotation.into()),
        }
    }

    pub fn type_literal(&self) -> &TypeLiteral {
        &self.type_literal
    }

    pub fn annotation(&self) -> Option<&Annotation> {
        self.annotation.as_ref()
    }

    pub fn annotation_type(&self) -> Option<&AnnotationType> {
        self.annotation.as_ref().map(Annotation::annotation_type)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.annotation {
            Some(annotation) => write!(
                f,
                "Key[type={}, annotation={annotation}]",
                self.type_literal
            ),
            None => write!(f, "Key[type={}, annotation=[none]]", self.type_literal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Service {}
    struct Database;

    #[test]
    fn keys_of_same_type_are_equal() {
        assert_eq!(Key::of::<Database>(), Key::of::<Database>());
        assert_ne!(Key::of::<Database>(), Key::of::<dyn Service>());
    }

    #[test]
    fn with_annotation_keeps_type_and_changes_identity() {
        let plain = Key::of::<Database>();
        let named = plain.with_annotation(Annotation::named("primary"));

        assert_eq!(named.type_literal(), plain.type_literal());
        assert_ne!(named, plain);
        assert_eq!(named.annotation_type(), Some(&AnnotationType::NAMED));
        assert!(plain.annotation().is_none());
    }

    #[test]
    fn marker_and_instance_annotations_differ() {
        let blue = AnnotationType::new("Blue").unwrap();
        let marker = Key::of::<Database>().with_annotation(blue.clone());
        let named = Key::of::<Database>().with_annotation(Annotation::named("Blue"));
        assert_ne!(marker, named);
        assert_eq!(marker.annotation_type(), Some(&blue));
    }

    #[test]
    fn blank_annotation_type_is_rejected() {
        let err = AnnotationType::new("  ").unwrap_err();
        assert!(matches!(
            err,
            BindError::MissingArgument {
                argument: "annotation_type"
            }
        ));
    }

    #[test]
    fn display_mentions_type_and_annotation() {
        let key = Key::of::<Database>().with_annotation(Annotation::named("x"));
        let s = key.to_string();
        assert!(s.contains("Database"));
        assert!(s.ends_with("annotation=@Named(value=x)]"));

        let plain = Key::of::<Database>().to_string();
        assert!(plain.ends_with("annotation=[none]]"));
    }
}
