//! Audit log entry entity model.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orgchart_core::types::AuditEntryId;

use super::action::AuditAction;
use crate::record::EntityType;

/// Before/after values of one changed field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    /// Value before the mutation (`null` if the field was absent).
    pub from: serde_json::Value,
    /// Value after the mutation (`null` if the field was removed).
    pub to: serde_json::Value,
}

/// Changed fields keyed by field name, in name order.
pub type FieldChanges = BTreeMap<String, FieldChange>;

/// An immutable audit log entry recording one committed mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Unique audit entry identifier.
    pub id: AuditEntryId,
    /// Commit time.
    pub timestamp: DateTime<Utc>,
    /// Table of the mutated row.
    pub entity_type: EntityType,
    /// Id of the mutated row.
    pub entity_id: Uuid,
    /// Display name of the row at commit time.
    pub entity_name: String,
    /// What happened.
    pub action: AuditAction,
    /// Who did it.
    pub actor: String,
    /// One-line description, e.g. `"Create Department: Finance"`.
    pub details: String,
    /// Field diff; absent for creates, deletes, and no-op updates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<FieldChanges>,
}

/// Filter for audit log queries. All set fields must match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditFilter {
    /// Only entries for this row.
    #[serde(default)]
    pub entity_id: Option<Uuid>,
    /// Only entries for this table.
    #[serde(default)]
    pub entity_type: Option<EntityType>,
    /// Only entries with this action.
    #[serde(default)]
    pub action: Option<AuditAction>,
    /// Only entries by this actor.
    #[serde(default)]
    pub actor: Option<String>,
}

impl AuditFilter {
    /// Filter by row id.
    pub fn for_entity(entity_id: impl Into<Uuid>) -> Self {
        Self {
            entity_id: Some(entity_id.into()),
            ..Self::default()
        }
    }

    /// Filter by table.
    pub fn for_type(entity_type: EntityType) -> Self {
        Self {
            entity_type: Some(entity_type),
            ..Self::default()
        }
    }

    /// Check whether an entry passes the filter.
    pub fn matches(&self, entry: &AuditEntry) -> bool {
        self.entity_id.is_none_or(|id| entry.entity_id == id)
            && self.entity_type.is_none_or(|t| entry.entity_type == t)
            && self.action.is_none_or(|a| entry.action == a)
            && self.actor.as_deref().is_none_or(|a| entry.actor == a)
    }
}
