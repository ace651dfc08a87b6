//! # gosig-config
//!
//! Layered configuration loading for gosig using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Command-line overrides ([`ConfigOverrides`])
//! 2. Environment variables (`GOSIG_*` prefix, `__` as separator)
//! 3. Project-level `.gosig.toml` in the working directory
//! 4. User-level `~/.config/gosig/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GOSIG_FORMAT__MAX_VALUE_LENGTH` -> `format.max_value_length`,
//! `GOSIG_DISCOVERY__EXTENSIONS` -> `discovery.extensions`, etc. List values
//! may be given as a comma-separated string.
//!
//! # Usage
//!
//! ```no_run
//! use gosig_config::GosigConfig;
//!
//! let config = GosigConfig::load().expect("config");
//! println!("truncating values at {}", config.format.max_value_length);
//! ```

mod discovery;
mod error;
mod format;

pub use discovery::{DiscoveryConfig, split_list};
pub use error::ConfigError;
pub use format::FormatConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".gosig.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GosigConfig {
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Values supplied on the command line. `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    pub format: FormatOverrides,
    pub discovery: DiscoveryOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FormatOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_values: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value_length: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DiscoveryOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_suffixes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respect_gitignore: Option<bool>,
}

impl GosigConfig {
    /// Load configuration from defaults, TOML files and environment variables.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_overrides(&ConfigOverrides::default())
    }

    /// Load configuration with command-line overrides layered on top.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_with_overrides(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment().merge(Serialized::defaults(overrides)))
    }

    /// Extract, normalize and validate a config from an arbitrary provider chain.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        let config = Self {
            format: config.format,
            discovery: config.discovery.normalized(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain (without command-line overrides).
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables
        figment.merge(Env::prefixed("GOSIG_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gosig").join("config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.discovery.extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "discovery.extensions".to_string(),
                reason: "at least one file extension is required".to_string(),
            });
        }
        Ok(())
    }
}
