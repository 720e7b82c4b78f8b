//! Additional fields: typed, described metadata entries declared by the platform
//!
//! ## Usage
//!
//! ```rust
//! use contracts::shared::additional_field::{AdditionalField, FieldType, FieldValue};
//!
//! let field = AdditionalField::new("nickname", "Leaderboard nickname", "STRING").unwrap();
//! assert_eq!(field.get_type(), FieldType::String);
//! assert_eq!(
//!     field.parse_value("neo").unwrap(),
//!     FieldValue::String("neo".to_string())
//! );
//!
//! assert!(AdditionalField::new("fail", "a description", "NOTCORRECT").is_err());
//! ```

mod error;
mod field;
mod field_id;
mod field_type;
mod value;

pub use error::FieldError;
pub use field::AdditionalField;
pub use field_id::FieldId;
pub use field_type::FieldType;
pub use value::FieldValue;
