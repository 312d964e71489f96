//! Audit log configuration.

use serde::{Deserialize, Serialize};

/// Audit recorder settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Actor recorded when a request carries no explicit actor.
    #[serde(default = "default_actor")]
    pub default_actor: String,
    /// Page size used by audit queries that do not ask for one.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            default_actor: default_actor(),
            default_page_size: default_page_size(),
        }
    }
}

fn default_actor() -> String {
    "system".to_string()
}

fn default_page_size() -> u64 {
    50
}
