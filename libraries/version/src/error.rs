use std::num::ParseIntError;

use thiserror::Error;

use crate::value::{Value, ValueKind};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidPart(#[from] InvalidPart),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),
    #[error(transparent)]
    IndexOutOfRange(#[from] IndexOutOfRange),
    #[error(transparent)]
    InvalidKeyType(#[from] InvalidKeyType),
}

/// Non-integer value passed where a version part was expected.
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "Version parts must all be integers, but part at position {position} is \
    {value:?}!"
)]
pub struct InvalidPart {
    pub position: usize,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to parse version part {token:?} at position {position}!")]
pub struct ParseError {
    pub position: usize,
    pub token: Box<str>,
    #[source]
    pub source: ParseIntError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Version can only be compared with another version, got {found}!")]
pub struct TypeMismatch {
    pub found: ValueKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Index {index} is out of range for version of length {length}!")]
pub struct IndexOutOfRange {
    pub index: isize,
    pub length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Version can only be indexed by an integer or a slice, got {found}!")]
pub struct InvalidKeyType {
    pub found: ValueKind,
}
