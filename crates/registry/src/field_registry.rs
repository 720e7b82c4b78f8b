//! Registry of the additional fields a deployment declares.
//!
//! Built from [`Config`]; keeps declaration order and rejects duplicate ids.

use std::collections::HashMap;

use contracts::shared::additional_field::{AdditionalField, FieldError, FieldId, FieldValue};
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use thiserror::Error;

use crate::shared::config::{self, Config};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("Duplicate additional field id '{0}'")]
    DuplicateId(FieldId),

    #[error("Unknown additional field '{0}'")]
    UnknownField(FieldId),

    #[error("Additional field '{0}' submitted more than once")]
    DuplicateValue(FieldId),
}

#[derive(Debug, Default, Clone)]
pub struct AdditionalFieldRegistry {
    fields: Vec<AdditionalField>,
    index: HashMap<FieldId, usize>,
}

/// Registry built from `load_config()` on first use
pub static DEFAULT_REGISTRY: Lazy<AdditionalFieldRegistry> = Lazy::new(|| {
    let registry = config::load_config()
        .and_then(|cfg| Ok(AdditionalFieldRegistry::from_config(&cfg)?));

    match registry {
        Ok(registry) => registry,
        Err(e) => {
            tracing::warn!("AdditionalFieldRegistry: {}; starting with no fields", e);
            AdditionalFieldRegistry::default()
        }
    }
});

impl AdditionalFieldRegistry {
    pub fn from_config(config: &Config) -> Result<Self, RegistryError> {
        let mut fields = Vec::with_capacity(config.additional_fields.len());
        for declaration in &config.additional_fields {
            let field = declaration.build().inspect_err(|e| {
                tracing::error!("Rejected additional field '{}': {}", declaration.id, e);
            })?;
            fields.push(field);
        }
        Self::from_fields(fields)
    }

    pub fn from_fields(
        fields: impl IntoIterator<Item = AdditionalField>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        for field in fields {
            let id = field.get_id().clone();
            if registry.index.contains_key(&id) {
                return Err(RegistryError::DuplicateId(id));
            }
            registry.index.insert(id, registry.fields.len());
            registry.fields.push(field);
        }

        tracing::debug!("Registered {} additional field(s)", registry.fields.len());
        Ok(registry)
    }

    pub fn get(&self, id: &FieldId) -> Option<&AdditionalField> {
        self.index.get(id).map(|&i| &self.fields[i])
    }

    pub fn contains(&self, id: &FieldId) -> bool {
        self.index.contains_key(id)
    }

    /// Fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &AdditionalField> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse submitted `(id, raw)` pairs into typed values.
    ///
    /// Result follows declaration order, not submission order. Fields that
    /// were not submitted are simply absent; a field submitted twice is an error.
    pub fn parse_values<I, K, V>(
        &self,
        submitted: I,
    ) -> Result<Vec<(FieldId, FieldValue)>, RegistryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<FieldId>,
        V: AsRef<str>,
    {
        let mut slots: Vec<Option<FieldValue>> = vec![None; self.fields.len()];

        for (id, raw) in submitted {
            let id = id.into();
            let Some(&position) = self.index.get(&id) else {
                return Err(RegistryError::UnknownField(id));
            };
            if slots[position].is_some() {
                return Err(RegistryError::DuplicateValue(id));
            }
            slots[position] = Some(self.fields[position].parse_value(raw.as_ref())?);
        }

        Ok(self
            .fields
            .iter()
            .zip(slots)
            .filter_map(|(field, value)| value.map(|v| (field.get_id().clone(), v)))
            .collect())
    }

    /// JSON listing of every registered field
    pub fn describe(&self) -> Value {
        let items: Vec<Value> = self
            .fields
            .iter()
            .map(|f| {
                json!({
                    "id":          f.get_id(),
                    "description": f.get_description(),
                    "type":        f.get_type().as_str()
                })
            })
            .collect();

        json!({
            "fields": items,
            "total": self.fields.len()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::additional_field::FieldType;

    fn sample() -> AdditionalFieldRegistry {
        AdditionalFieldRegistry::from_config(&config::default_config().unwrap()).unwrap()
    }

    #[test]
    fn test_default_config_builds() {
        let registry = sample();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains(&"nickname".into()));

        let ids: Vec<String> = registry.iter().map(|f| f.get_id().to_string()).collect();
        assert_eq!(ids, vec!["nickname", "student_number", "newsletter"]);
    }

    #[test]
    fn test_get_by_text_and_integer_id() {
        let registry = AdditionalFieldRegistry::from_fields(vec![
            AdditionalField::new("test", "a description", "STRING").unwrap(),
            AdditionalField::new(0, "a description", "STRING").unwrap(),
        ])
        .unwrap();

        assert_eq!(registry.get(&FieldId::from(0)).unwrap().get_type(), FieldType::String);
        assert_eq!(*registry.get(&"test".into()).unwrap().get_id(), "test");
        assert!(registry.get(&"0".into()).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = AdditionalFieldRegistry::from_fields(vec![
            AdditionalField::with_type("dup", "first", FieldType::String),
            AdditionalField::with_type("dup", "second", FieldType::Integer),
        ]);
        assert!(matches!(result, Err(RegistryError::DuplicateId(id)) if id == "dup"));
    }

    #[test]
    fn test_invalid_declaration_rejected() {
        let cfg = config::parse_config(
            r#"
            [[additional_fields]]
            id = "fail"
            description = "a description"
            type = "NOTCORRECT"
            "#,
        )
        .unwrap();

        let err = AdditionalFieldRegistry::from_config(&cfg).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Field(FieldError::InvalidType { ref tag }) if tag == "NOTCORRECT"
        ));
        assert_eq!(err.to_string(), "Unknown field type 'NOTCORRECT'");
    }

    #[test]
    fn test_parse_values_in_declaration_order() {
        let registry = sample();
        let values = registry
            .parse_values([("newsletter", "on"), ("nickname", "neo")])
            .unwrap();

        assert_eq!(
            values,
            vec![
                (FieldId::from("nickname"), FieldValue::String("neo".into())),
                (FieldId::from("newsletter"), FieldValue::Boolean(true)),
            ]
        );
    }

    #[test]
    fn test_parse_values_errors() {
        let registry = sample();

        let err = registry.parse_values([("shoe_size", "42")]).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownField(id) if id == "shoe_size"));

        let err = registry
            .parse_values([("student_number", "abc")])
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Field(FieldError::InvalidValue { expected: FieldType::Integer, .. })
        ));
    }

    #[test]
    fn test_parse_values_duplicate_submission() {
        let registry = sample();

        let err = registry
            .parse_values([("nickname", "first"), ("nickname", "second")])
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateValue(ref id) if *id == "nickname"));
        assert_eq!(
            err.to_string(),
            "Additional field 'nickname' submitted more than once"
        );
    }

    #[test]
    fn test_describe() {
        let registry = AdditionalFieldRegistry::from_fields(vec![AdditionalField::new(
            0,
            "a description",
            "STRING",
        )
        .unwrap()])
        .unwrap();

        assert_eq!(
            registry.describe(),
            json!({
                "fields": [{"id": 0, "description": "a description", "type": "STRING"}],
                "total": 1
            })
        );
    }

    #[test]
    fn test_default_registry_falls_back_to_embedded_config() {
        // Test binaries have no config.toml beside them.
        assert_eq!(DEFAULT_REGISTRY.len(), 3);
    }
}
