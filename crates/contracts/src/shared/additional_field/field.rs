use serde::{Deserialize, Serialize};

use super::error::FieldError;
use super::field_id::FieldId;
use super::field_type::FieldType;
use super::value::FieldValue;

/// Extra typed piece of metadata declared by the platform
///
/// Fields are private: an instance is only obtained through a constructor
/// (or deserialization, which rejects unknown type tags), so `field_type`
/// is always a recognized kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalField {
    id: FieldId,
    description: String,
    #[serde(rename = "type")]
    field_type: FieldType,
}

impl AdditionalField {
    /// Create a field from a raw type tag
    pub fn new(
        id: impl Into<FieldId>,
        description: impl Into<String>,
        field_type: &str,
    ) -> Result<Self, FieldError> {
        let field_type = FieldType::from_tag(field_type)?;
        Ok(Self::with_type(id, description, field_type))
    }

    pub fn with_type(
        id: impl Into<FieldId>,
        description: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            field_type,
        }
    }

    pub fn get_id(&self) -> &FieldId {
        &self.id
    }

    pub fn get_description(&self) -> &str {
        &self.description
    }

    pub fn get_type(&self) -> FieldType {
        self.field_type
    }

    /// Parse a submitted raw value according to this field's type
    pub fn parse_value(&self, raw: &str) -> Result<FieldValue, FieldError> {
        FieldValue::parse(self.field_type, &self.id, raw)
    }
}
