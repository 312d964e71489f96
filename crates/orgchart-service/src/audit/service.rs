//! Audit log queries.

use tracing::debug;

use orgchart_core::types::pagination::{PageRequest, PageResponse};
use orgchart_entity::audit::{AuditEntry, AuditFilter};
use orgchart_store::OrgStore;

/// Read access to the audit log.
#[derive(Debug, Clone)]
pub struct AuditService {
    /// Shared store.
    store: OrgStore,
}

impl AuditService {
    /// Creates a new audit service.
    pub fn new(store: OrgStore) -> Self {
        Self { store }
    }

    /// All entries passing the filter, newest first.
    pub async fn entries(&self, filter: &AuditFilter) -> Vec<AuditEntry> {
        let state = self.store.read().await;
        let entries = state.audit.query(filter);
        debug!(matched = entries.len(), "Audit log queried");
        entries
    }

    /// One page of entries passing the filter, newest first.
    pub async fn get_audit_logs(
        &self,
        filter: &AuditFilter,
        page: &PageRequest,
    ) -> PageResponse<AuditEntry> {
        let entries = self.entries(filter).await;
        PageResponse::from_ordered(entries, page)
    }

    /// Total number of entries in the log.
    pub async fn count(&self) -> usize {
        self.store.read().await.audit.len()
    }
}
