//! Hierarchy assignment configuration.

use serde::{Deserialize, Serialize};

/// Controls how parent / reports-to assignments are checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HierarchyConfig {
    /// Reject a parent or reports-to assignment that would close a cycle.
    ///
    /// Off by default: assignments are accepted as long as the referenced
    /// row exists, and cyclic chains simply drop out of rendered trees.
    #[serde(default)]
    pub reject_cycles: bool,
}
