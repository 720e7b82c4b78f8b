use serde::{Deserialize, Serialize};

use super::error::FieldError;
use super::field_id::FieldId;
use super::field_type::FieldType;

/// Typed value submitted for an additional field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Boolean(bool),
    String(String),
}

impl FieldValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Integer(_) => FieldType::Integer,
            Self::Boolean(_) => FieldType::Boolean,
            Self::String(_) => FieldType::String,
        }
    }

    /// Parse raw submitted text as a value of `kind`.
    ///
    /// `field` only feeds the error message.
    pub fn parse(kind: FieldType, field: &FieldId, raw: &str) -> Result<Self, FieldError> {
        let parsed = match kind {
            FieldType::String => Some(Self::String(raw.to_string())),
            FieldType::Integer => raw.trim().parse::<i64>().ok().map(Self::Integer),
            FieldType::Boolean => parse_bool(raw).map(Self::Boolean),
        };

        parsed.ok_or_else(|| FieldError::InvalidValue {
            field: field.to_string(),
            expected: kind,
            value: raw.to_string(),
        })
    }
}

// Form checkboxes post "on"
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
