use anyhow::Context;
use contracts::shared::additional_field::{AdditionalField, FieldError, FieldId};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub additional_fields: Vec<AdditionalFieldConfig>,
}

/// One `[[additional_fields]]` entry.
/// `type` stays a raw tag here; it is checked when the field is built.
#[derive(Debug, Deserialize, Clone)]
pub struct AdditionalFieldConfig {
    pub id: FieldId,
    pub description: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

impl AdditionalFieldConfig {
    pub fn build(&self) -> Result<AdditionalField, FieldError> {
        AdditionalField::new(
            self.id.clone(),
            self.description.as_str(),
            &self.field_type,
        )
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[[additional_fields]]
id = "nickname"
description = "Nickname shown on the leaderboard"
type = "STRING"

[[additional_fields]]
id = "student_number"
description = "Student registration number"
type = "INTEGER"

[[additional_fields]]
id = "newsletter"
description = "Receive course announcements by e-mail"
type = "BOOLEAN"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return load_config_in(exe_dir);
        }
    }

    tracing::info!("Using default embedded configuration");
    default_config()
}

/// `config.toml` inside `dir` if present, otherwise the embedded default
pub fn load_config_in(dir: &Path) -> anyhow::Result<Config> {
    let config_path = dir.join("config.toml");

    if config_path.exists() {
        return load_config_from_path(&config_path);
    }

    tracing::warn!("config.toml not found at: {}", config_path.display());
    tracing::info!("Using default embedded configuration");
    default_config()
}

pub fn load_config_from_path(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from: {}", path.display());
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

pub fn default_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG)
}
