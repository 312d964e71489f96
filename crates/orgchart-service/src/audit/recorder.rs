//! Builds audit entries for committed mutations.

use chrono::{DateTime, Utc};

use orgchart_core::types::AuditEntryId;
use orgchart_entity::Record;
use orgchart_entity::audit::{AuditAction, AuditEntry, FieldChanges};

use crate::context::RequestContext;

/// Build an audit entry for a row.
pub fn entry_for<T: Record>(
    ctx: &RequestContext,
    row: &T,
    action: AuditAction,
    changes: Option<FieldChanges>,
    at: DateTime<Utc>,
) -> AuditEntry {
    let entity_name = row.display_name();
    AuditEntry {
        id: AuditEntryId::new(),
        timestamp: at,
        entity_type: T::ENTITY_TYPE,
        entity_id: row.id().into(),
        details: format!("{} {}: {}", action.verb(), T::ENTITY_TYPE, entity_name),
        entity_name,
        action,
        actor: ctx.actor.clone(),
        changes,
    }
}
