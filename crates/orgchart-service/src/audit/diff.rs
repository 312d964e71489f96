//! Field-level diff between two snapshots of a row.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;

use orgchart_core::error::AppError;
use orgchart_core::result::AppResult;
use orgchart_entity::audit::{FieldChange, FieldChanges};

/// Bookkeeping fields never reported as changes.
const IGNORED_FIELDS: [&str; 3] = ["id", "created_at", "updated_at"];

/// Compare two rows field by field.
///
/// Both values are serialized to JSON and compared over the union of their
/// top-level keys, so nested values (addresses, optional ids) compare by
/// their full serialized form. Returns `None` when nothing changed.
pub fn diff_records<T: Serialize>(before: &T, after: &T) -> AppResult<Option<FieldChanges>> {
    let (Value::Object(before), Value::Object(after)) =
        (serde_json::to_value(before)?, serde_json::to_value(after)?)
    else {
        return Err(AppError::internal("Only struct-like records can be diffed"));
    };

    let keys: BTreeSet<&String> = before.keys().chain(after.keys()).collect();
    let mut changes = FieldChanges::new();

    for key in keys {
        if IGNORED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        let from = before.get(key).cloned().unwrap_or(Value::Null);
        let to = after.get(key).cloned().unwrap_or(Value::Null);
        if from != to {
            changes.insert(key.clone(), FieldChange { from, to });
        }
    }

    Ok((!changes.is_empty()).then_some(changes))
}
