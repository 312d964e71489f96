//! JSON snapshots used to seed and export a store.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use orgchart_core::result::AppResult;
use orgchart_entity::audit::AuditEntry;

use crate::tables::Tables;

/// Every table plus the audit log, as one JSON document.
///
/// Missing tables deserialize as empty, so a seed file only needs the
/// sections it populates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Entity tables.
    #[serde(flatten)]
    pub tables: Tables,
    /// Audit entries, newest first.
    #[serde(default)]
    pub audit_log: Vec<AuditEntry>,
}

impl Snapshot {
    /// Read a snapshot from a JSON file.
    pub async fn read_from(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        info!(
            path = %path.display(),
            rows = snapshot.tables.total_rows(),
            audit_entries = snapshot.audit_log.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Write the snapshot to a JSON file, pretty-printed.
    pub async fn write_to(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json).await?;
        info!(path = %path.display(), "Snapshot written");
        Ok(())
    }
}
