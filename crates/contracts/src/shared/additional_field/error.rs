use thiserror::Error;

use super::field_type::FieldType;

/// Errors raised while building or using an additional field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Unknown field type '{tag}'")]
    InvalidType { tag: String },

    #[error("Field '{field}' expects a {expected} value, got '{value}'")]
    InvalidValue {
        field: String,
        expected: FieldType,
        value: String,
    },
}
