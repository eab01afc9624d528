//! Runtime type descriptors and shape classification.
//!
//! Every [`Value`](crate::Value) can report its [`TypeDesc`] (the exact
//! runtime type, used for "same type" comparisons) and its [`Kind`] (the
//! coarse shape, used in diagnostics and when a checker dispatches on
//! sequence / map / string / ordered container).

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Type Descriptor ─────────────────────────────────────────────────────

/// Exact runtime type of a value.
///
/// Sequences and maps carry the declared type of their elements, so two
/// sequences share a type only when their element types are equal.
/// `Any` never describes a concrete value; it only appears as a declared
/// element, key or value type that admits every value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeDesc {
    Unit,
    Bool,
    Int,
    UInt,
    Float,
    Str,
    Time,
    Duration,
    /// Sequence with the given element type.
    Seq(Box<TypeDesc>),
    /// Associative map with the given key and value types.
    Map(Box<TypeDesc>, Box<TypeDesc>),
    /// Named record type.
    Struct(String),
    /// Ordered container, identified by its type name.
    Ordered(String),
    /// Declared type admitting any value.
    Any,
}

impl TypeDesc {
    /// Sequence type with the given element type.
    pub fn seq(elem: TypeDesc) -> Self {
        Self::Seq(Box::new(elem))
    }

    /// Map type with the given key and value types.
    pub fn map(key: TypeDesc, value: TypeDesc) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    /// Whether a value of type `actual` may be stored where `self` is declared.
    pub fn admits(&self, actual: &TypeDesc) -> bool {
        matches!(self, Self::Any) || self == actual
    }

    /// Whether values of this type can be projected to a [`Key`](crate::Key).
    ///
    /// Record types are reported as hashable here; their fields are checked
    /// when the key is built.
    pub fn is_hashable(&self) -> bool {
        !matches!(self, Self::Seq(_) | Self::Map(_, _) | Self::Ordered(_))
    }

    /// Shape of values of this type, `None` for `Any`.
    pub fn kind(&self) -> Option<Kind> {
        let kind = match self {
            Self::Unit => Kind::Unit,
            Self::Bool => Kind::Bool,
            Self::Int => Kind::Int,
            Self::UInt => Kind::UInt,
            Self::Float => Kind::Float,
            Self::Str => Kind::String,
            Self::Time => Kind::Time,
            Self::Duration => Kind::Duration,
            Self::Seq(_) => Kind::Sequence,
            Self::Map(_, _) => Kind::Map,
            Self::Struct(_) => Kind::Struct,
            Self::Ordered(_) => Kind::Ordered,
            Self::Any => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => write!(f, "unit"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::UInt => write!(f, "uint"),
            Self::Float => write!(f, "float"),
            Self::Str => write!(f, "string"),
            Self::Time => write!(f, "time"),
            Self::Duration => write!(f, "duration"),
            Self::Seq(elem) => write!(f, "seq<{}>", elem),
            Self::Map(key, value) => write!(f, "map<{}, {}>", key, value),
            Self::Struct(name) | Self::Ordered(name) => write!(f, "{}", name),
            Self::Any => write!(f, "any"),
        }
    }
}

// ── Kind ────────────────────────────────────────────────────────────────

/// Coarse runtime shape of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Unit,
    Bool,
    Int,
    UInt,
    Float,
    String,
    Time,
    Duration,
    Sequence,
    Map,
    Struct,
    Ordered,
}

impl Kind {
    /// Lower-case name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Float => "float",
            Self::String => "string",
            Self::Time => "time",
            Self::Duration => "duration",
            Self::Sequence => "sequence",
            Self::Map => "map",
            Self::Struct => "struct",
            Self::Ordered => "ordered",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_admits_everything() {
        assert!(TypeDesc::Any.admits(&TypeDesc::Int));
        assert!(TypeDesc::Any.admits(&TypeDesc::seq(TypeDesc::Str)));
        assert!(TypeDesc::Int.admits(&TypeDesc::Int));
        assert!(!TypeDesc::Int.admits(&TypeDesc::UInt));
        assert!(!TypeDesc::Int.admits(&TypeDesc::Any));
    }

    #[test]
    fn nested_display() {
        let t = TypeDesc::map(TypeDesc::Str, TypeDesc::seq(TypeDesc::Int));
        assert_eq!(t.to_string(), "map<string, seq<int>>");
        assert_eq!(TypeDesc::Struct("Point".into()).to_string(), "Point");
    }

    #[test]
    fn hashability() {
        assert!(TypeDesc::Str.is_hashable());
        assert!(TypeDesc::Struct("Point".into()).is_hashable());
        assert!(!TypeDesc::seq(TypeDesc::Int).is_hashable());
        assert!(!TypeDesc::map(TypeDesc::Str, TypeDesc::Int).is_hashable());
    }

    #[test]
    fn kind_of_type() {
        assert_eq!(TypeDesc::Str.kind(), Some(Kind::String));
        assert_eq!(TypeDesc::seq(TypeDesc::Any).kind(), Some(Kind::Sequence));
        assert_eq!(TypeDesc::Any.kind(), None);
        assert_eq!(Kind::Sequence.to_string(), "sequence");
    }
}
