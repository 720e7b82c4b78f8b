//! Field type enumeration for additional fields

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::FieldError;

/// Kind of value an additional field holds
///
/// Serialized as its canonical tag (`"STRING"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    Integer,
    String,
    Boolean,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
        }
    }

    /// All recognized kinds, in declaration order
    pub fn all() -> &'static [FieldType] {
        &[FieldType::Integer, FieldType::String, FieldType::Boolean]
    }

    /// Parse a type tag. Matching is exact: `"string"` is not a tag.
    pub fn from_tag(tag: &str) -> Result<Self, FieldError> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| FieldError::InvalidType {
                tag: tag.to_string(),
            })
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

impl TryFrom<&str> for FieldType {
    type Error = FieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_tag(value)
    }
}

impl PartialEq<&str> for FieldType {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
