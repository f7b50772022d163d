//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use beanmarket_commerce::catalog::DEFAULT_SUGGESTION_LIMIT;
use beanmarket_commerce::{Currency, Role, SessionContext};
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["beanmarket.toml", ".beanmarket.toml", "beanmarket.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Session defaults.
    #[serde(default)]
    pub session: SessionConfig,

    /// Catalog source and display options.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().map_or(false, |ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if path.extension().map_or(false, |ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Open a fresh session using the configured role and currency.
    pub fn new_session(&self) -> SessionContext {
        SessionContext::new(self.session.role, self.session.currency)
    }
}

/// Session defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Role the session runs as.
    #[serde(default)]
    pub role: Role,

    /// Currency for every price.
    #[serde(default)]
    pub currency: Currency,
}

/// Catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Catalog file (TOML or JSON). The built-in sample is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// How many flavor tags to offer as quick filters.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Maximum level: trace, debug, info, warn or error.
    #[serde(default = "default_level")]
    pub level: String,

    /// Line format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log line format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

/// Generate a default beanmarket.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# beanmarket storefront configuration

[session]
# buyer, roaster or admin
role = "buyer"
currency = "USD"

[catalog]
# path = "catalog.toml"
suggestion_limit = {limit}

[logging]
level = "warn"
# compact, pretty or json
format = "compact"
"#,
        limit = DEFAULT_SUGGESTION_LIMIT
    )
}
