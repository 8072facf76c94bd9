use std::fmt::{self, Display, Formatter};

use crate::{index::Slice, Part, Version};

/// Dynamically typed operand, for callers which cannot guarantee statically
/// that they hand over integers or versions.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(Part),
    Float(f64),
    Text(String),
    Slice(Slice),
    Version(Version),
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Slice(_) => ValueKind::Slice,
            Self::Version(_) => ValueKind::Version,
        }
    }
}

impl From<Part> for Value {
    #[inline]
    fn from(value: Part) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Slice> for Value {
    #[inline]
    fn from(value: Slice) -> Self {
        Self::Slice(value)
    }
}

impl From<Version> for Value {
    #[inline]
    fn from(value: Version) -> Self {
        Self::Version(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Float,
    Text,
    Slice,
    Version,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Slice => "slice",
            Self::Version => "version",
        })
    }
}

#[test]
fn test_kind() {
    assert_eq!(Value::from(3_i64).kind(), ValueKind::Integer);
    assert_eq!(Value::from(5.53).kind(), ValueKind::Float);
    assert_eq!(Value::from("a").kind(), ValueKind::Text);
    assert_eq!(Value::from(String::from("a")), Value::from("a"));
    assert_eq!(Value::from(Slice::default()).kind(), ValueKind::Slice);
    assert_eq!(Value::from(Version::new([1, 2])).kind(), ValueKind::Version);

    assert_eq!(ValueKind::Float.to_string(), "float");
}
