//! Application configuration schemas.
//!
//! Configuration is deserialized from an optional TOML file merged with
//! `ORGCHART__`-prefixed environment variables via the `config` crate.
//! Every field has a default so an empty configuration is valid.

pub mod audit;
pub mod hierarchy;
pub mod logging;
pub mod store;

use serde::{Deserialize, Serialize};

use self::audit::AuditConfig;
use self::hierarchy::HierarchyConfig;
use self::logging::LoggingConfig;
use self::store::StoreConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// In-memory store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Hierarchy assignment settings.
    #[serde(default)]
    pub hierarchy: HierarchyConfig,
    /// Audit log settings.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file (optional) and the environment.
    ///
    /// Environment variables use the `ORGCHART` prefix and `__` as the
    /// section separator, e.g. `ORGCHART__HIERARCHY__REJECT_CYCLES=true`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("ORGCHART")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
