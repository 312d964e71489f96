//! In-memory store configuration.

use serde::{Deserialize, Serialize};

/// Settings for the process-lifetime entity store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Optional JSON snapshot loaded into the store at startup.
    #[serde(default)]
    pub seed_file: Option<String>,
}
