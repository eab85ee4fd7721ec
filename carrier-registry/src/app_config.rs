use crate::carrier::CarrierConfig;
use carrier_core::FileType;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub carriers: Vec<CarrierConfig>,
    #[serde(default)]
    pub label_catalog: LabelCatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LabelCatalogConfig {
    /// File types offered before any carrier integration adds its own
    #[serde(default = "default_base_file_types")]
    pub base: Vec<FileType>,
}

impl Default for LabelCatalogConfig {
    fn default() -> Self {
        Self {
            base: default_base_file_types(),
        }
    }
}

fn default_base_file_types() -> Vec<FileType> {
    vec![FileType::new("PDF", "PDF")]
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local credentials, never checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `CARRIER__LABEL_CATALOG__BASE=...`
            .add_source(config::Environment::with_prefix("CARRIER").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Parse a TOML document with the same layout as `config/default.toml`
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
