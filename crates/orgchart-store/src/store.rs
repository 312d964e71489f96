//! The shared in-memory store.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use orgchart_core::result::AppResult;

use crate::audit_log::AuditLog;
use crate::snapshot::Snapshot;
use crate::tables::Tables;

/// Tables and audit log, always mutated together.
#[derive(Debug, Clone, Default)]
pub struct OrgState {
    /// Current-state entity tables.
    pub tables: Tables,
    /// Append-only audit log.
    pub audit: AuditLog,
}

/// Handle to the store. Cheap to clone; clones share the same state.
///
/// Readers run concurrently. A writer holds the lock across guard checks,
/// the commit, and the audit append, so readers only ever see state from
/// before or after a whole mutation and audit order equals commit order.
#[derive(Debug, Clone, Default)]
pub struct OrgStore {
    state: Arc<RwLock<OrgState>>,
}

impl OrgStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated from a snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let state = OrgState {
            tables: snapshot.tables,
            audit: AuditLog::from_entries(snapshot.audit_log),
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Create a store from a JSON snapshot file.
    pub async fn load(path: &str) -> AppResult<Self> {
        let snapshot = Snapshot::read_from(path).await?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Acquire shared read access.
    pub async fn read(&self) -> RwLockReadGuard<'_, OrgState> {
        self.state.read().await
    }

    /// Acquire exclusive write access.
    pub async fn write(&self) -> RwLockWriteGuard<'_, OrgState> {
        debug!("Acquiring store write lock");
        self.state.write().await
    }

    /// Copy the current state into a snapshot.
    pub async fn snapshot(&self) -> Snapshot {
        let state = self.read().await;
        Snapshot {
            tables: state.tables.clone(),
            audit_log: state.audit.iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use orgchart_entity::geography::CreateCountry;
    use orgchart_entity::status::RecordStatus;

    use super::*;

    #[tokio::test]
    async fn test_snapshot_roundtrip_through_json() {
        let store = OrgStore::new();
        {
            let mut state = store.write().await;
            let now = state.audit.tick();
            let country = CreateCountry {
                name: "Kenya".into(),
                code: "KE".into(),
                status: RecordStatus::Active,
            }
            .into_record(now);
            state.tables.countries.insert(country);
        }

        let json = serde_json::to_string(&store.snapshot().await).unwrap();
        let restored = OrgStore::from_snapshot(serde_json::from_str(&json).unwrap());
        let state = restored.read().await;
        assert_eq!(state.tables.countries.len(), 1);
        assert_eq!(state.tables.countries.rows()[0].name, "Kenya");
        assert!(state.audit.is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = OrgStore::new();
        let other = store.clone();
        {
            let mut state = store.write().await;
            let now = state.audit.tick();
            let country = CreateCountry {
                name: "Peru".into(),
                code: "PE".into(),
                status: RecordStatus::Active,
            }
            .into_record(now);
            state.tables.countries.insert(country);
        }
        assert_eq!(other.read().await.tables.countries.len(), 1);
    }
}
