use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter},
    iter::Copied,
    slice,
    str::FromStr,
    vec,
};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub use self::{
    error::{
        Error, IndexOutOfRange, InvalidKeyType, InvalidPart, ParseError,
        TypeMismatch,
    },
    index::{Key, Selection, Slice},
    value::{Value, ValueKind},
};

mod error;
mod index;
mod value;

pub type Part = i64;

pub type Iter<'r> = Copied<slice::Iter<'r, Part>>;

/// Ordered sequence of integer parts of arbitrary length, e.g. `2023.3.5`.
///
/// Versions compare like tuples: part by part, with the first difference
/// deciding, and a version which is a strict prefix of another one being the
/// lesser of the two. Trailing zeroes are significant, so `2023.3.5` and
/// `2023.3.5.0` are different versions.
///
/// ```
/// use version::Version;
///
/// let version: Version = "2023.03.05".parse().unwrap();
///
/// assert_eq!(version, Version::new([2023, 3, 5]));
/// assert!(version < Version::new([2023, 3, 5, 0]));
/// assert_eq!(version.to_string(), "2023.3.5");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub struct Version {
    parts: Box<[Part]>,
}

impl Version {
    pub fn new<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Part>,
    {
        Self {
            parts: parts.into_iter().collect(),
        }
    }

    /// Builds a version out of dynamically typed values, all of which have to
    /// be integers.
    pub fn from_values(values: &[Value]) -> Result<Self, InvalidPart> {
        values
            .iter()
            .enumerate()
            .map(|(position, value)| {
                if let &Value::Integer(part) = value {
                    Ok(part)
                } else {
                    Err(InvalidPart {
                        position,
                        value: value.clone(),
                    })
                }
            })
            .collect::<Result<_, _>>()
            .map(|parts| Self { parts })
    }

    /// Parses a dot-delimited list of integers, e.g. `2023.03.05`.
    ///
    /// Whitespace around a part is ignored, as are leading zeroes, and a
    /// leading `+` or `-` sign is accepted. Underscore digit separators, like
    /// in `1_000`, and non-ASCII digits are rejected. The empty string is the
    /// empty version, so that every displayed version parses back.
    #[inline]
    pub fn from_string(version: &str) -> Result<Self, ParseError> {
        version.parse()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Part] {
        &self.parts
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        self.parts.iter().copied()
    }

    /// Part at `index`, where negative indexes count from the end.
    pub fn part(&self, index: isize) -> Result<Part, IndexOutOfRange> {
        let length = self.len();

        let position = if index < 0 {
            length.checked_sub(index.unsigned_abs())
        } else {
            usize::try_from(index).ok()
        };

        position
            .and_then(|position| self.parts.get(position).copied())
            .ok_or(IndexOutOfRange { index, length })
    }

    #[must_use]
    pub fn slice(&self, slice: Slice) -> Vec<Part> {
        slice
            .positions(self.len())
            .filter_map(|position| self.parts.get(position).copied())
            .collect()
    }

    pub fn get<K>(&self, key: K) -> Result<Selection, IndexOutOfRange>
    where
        K: Into<Key>,
    {
        match key.into() {
            Key::Index(index) => self.part(index).map(Selection::Part),
            Key::Slice(slice) => Ok(Selection::Parts(self.slice(slice))),
        }
    }

    pub fn get_dynamic(&self, key: &Value) -> Result<Selection, Error> {
        Key::try_from(key)
            .map_err(Error::from)
            .and_then(|key| self.get(key).map_err(Error::from))
    }

    pub fn try_eq(&self, other: &Value) -> Result<bool, TypeMismatch> {
        Self::version_operand(other).map(|other| self.parts == other.parts)
    }

    pub fn try_ne(&self, other: &Value) -> Result<bool, TypeMismatch> {
        self.try_eq(other).map(|equal| !equal)
    }

    pub fn try_lt(&self, other: &Value) -> Result<bool, TypeMismatch> {
        Self::version_operand(other).map(|other| self.parts < other.parts)
    }

    pub fn try_gt(&self, other: &Value) -> Result<bool, TypeMismatch> {
        Self::version_operand(other).map(|other| self.parts > other.parts)
    }

    pub fn try_le(&self, other: &Value) -> Result<bool, TypeMismatch> {
        Ok(self.try_lt(other)? || self.try_eq(other)?)
    }

    pub fn try_ge(&self, other: &Value) -> Result<bool, TypeMismatch> {
        Ok(self.try_gt(other)? || self.try_eq(other)?)
    }

    pub fn try_cmp(&self, other: &Value) -> Result<Ordering, TypeMismatch> {
        Self::version_operand(other).map(|other| self.cmp(other))
    }

    fn version_operand(other: &Value) -> Result<&Self, TypeMismatch> {
        if let Value::Version(other) = other {
            Ok(other)
        } else {
            Err(TypeMismatch {
                found: other.kind(),
            })
        }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut parts = self.iter();

        if let Some(first) = parts.next() {
            Display::fmt(&first, f)?;

            parts.try_for_each(|part| f.write_fmt(format_args!(".{part}")))?;
        }

        Ok(())
    }
}

impl Debug for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Version(")?;

        let mut parts = self.iter();

        if let Some(first) = parts.next() {
            Debug::fmt(&first, f)?;

            parts.try_for_each(|part| {
                f.write_fmt(format_args!(", {part:?}"))
            })?;
        }

        f.write_str(")")
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::new([]));
        }

        s.split('.')
            .enumerate()
            .map(|(position, token)| {
                token.trim().parse().map_err(|source| ParseError {
                    position,
                    token: token.into(),
                    source,
                })
            })
            .collect::<Result<_, _>>()
            .map(|parts| Self { parts })
    }
}

impl From<Vec<Part>> for Version {
    #[inline]
    fn from(parts: Vec<Part>) -> Self {
        Self {
            parts: parts.into_boxed_slice(),
        }
    }
}

impl From<&[Part]> for Version {
    #[inline]
    fn from(parts: &[Part]) -> Self {
        Self {
            parts: parts.into(),
        }
    }
}

impl<const N: usize> From<[Part; N]> for Version {
    #[inline]
    fn from(parts: [Part; N]) -> Self {
        Self::new(parts)
    }
}

impl FromIterator<Part> for Version {
    #[inline]
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Part>,
    {
        Self::new(iter)
    }
}

impl<'r> IntoIterator for &'r Version {
    type Item = Part;

    type IntoIter = Iter<'r>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Version {
    type Item = Part;

    type IntoIter = vec::IntoIter<Part>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.parts.into_vec().into_iter()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;

        impl de::Visitor<'_> for Visitor {
            type Value = Version;

            fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str("a dot-delimited sequence of integers")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}
