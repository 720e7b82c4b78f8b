pub mod field_registry;
pub mod shared;

pub use field_registry::{AdditionalFieldRegistry, RegistryError, DEFAULT_REGISTRY};
