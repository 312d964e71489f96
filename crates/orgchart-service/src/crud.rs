//! Generic guard -> commit -> audit pipeline shared by every entity service.
//!
//! Every function here takes the already-locked [`OrgState`], so callers
//! hold one write guard across the guard check, the table mutation and the
//! audit append.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use orgchart_core::error::AppError;
use orgchart_core::result::AppResult;
use orgchart_entity::audit::AuditAction;
use orgchart_entity::{Lifecycle, Record, RecordPatch};
use orgchart_store::{OrgState, Stored, Tables};

use crate::audit::diff::diff_records;
use crate::audit::recorder::entry_for;
use crate::context::RequestContext;
use crate::guard::GuardDecision;

/// Look up a row, failing with `NotFound`.
pub fn fetch<T: Stored>(tables: &Tables, id: T::Id) -> AppResult<T> {
    tables
        .table::<T>()
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("{} '{id}' not found", T::ENTITY_TYPE)))
}

/// Owned copy of a table in insertion order.
pub fn list<T: Stored>(tables: &Tables) -> Vec<T> {
    tables.table::<T>().rows().to_vec()
}

/// Fail with `Validation` when `field` points at a missing row.
pub fn require<T: Stored>(tables: &Tables, id: T::Id, field: &str) -> AppResult<()> {
    if tables.table::<T>().contains(id) {
        return Ok(());
    }
    Err(AppError::validation(format!(
        "{field} references unknown {} '{id}'",
        T::ENTITY_TYPE
    )))
}

/// Like [`require`] for optional references.
pub fn require_opt<T: Stored>(tables: &Tables, id: Option<T::Id>, field: &str) -> AppResult<()> {
    match id {
        Some(id) => require::<T>(tables, id, field),
        None => Ok(()),
    }
}

/// Fail with `DuplicateKey` when another row already uses `value`.
pub fn ensure_unique<T: Stored>(
    tables: &Tables,
    except: Option<T::Id>,
    field: &str,
    value: &str,
    key_of: impl Fn(&T) -> &str,
) -> AppResult<()> {
    let taken = tables
        .table::<T>()
        .iter()
        .any(|row| Some(row.id()) != except && key_of(row) == value);
    if taken {
        return Err(AppError::duplicate_key(format!(
            "{} with {field} '{value}' already exists",
            T::ENTITY_TYPE
        )));
    }
    Ok(())
}

/// Turn a guard denial into a `GuardViolation`, logging it.
fn enforce<T: Record>(decision: GuardDecision, ctx: &RequestContext, id: T::Id) -> AppResult<()> {
    if !decision.allowed {
        warn!(
            entity_type = T::ENTITY_TYPE.as_str(),
            entity_id = %id,
            actor = %ctx.actor,
            reason = decision.reason.as_deref().unwrap_or_default(),
            "Mutation blocked by guard"
        );
    }
    decision.into_result()
}

/// Append a new row built at the commit timestamp and log `create`.
pub fn insert<T: Stored>(
    state: &mut OrgState,
    ctx: &RequestContext,
    build: impl FnOnce(DateTime<Utc>) -> T,
) -> T {
    let at = state.audit.tick();
    let row = build(at);

    state.tables.table_mut::<T>().insert(row.clone());
    state
        .audit
        .append(entry_for(ctx, &row, AuditAction::Create, None, at));

    info!(
        entity_type = T::ENTITY_TYPE.as_str(),
        entity_id = %row.id(),
        actor = %ctx.actor,
        "Record created"
    );
    row
}

/// Apply a patch, run the deactivation guard, and log the resulting action.
///
/// `check` sees the row before and after the patch and may reject the
/// candidate (reference checks, unique keys, cycles). The guard sees the
/// patched candidate and only runs when the patch moves the row into plain
/// `inactive`.
pub fn update<P, G, C>(
    state: &mut OrgState,
    ctx: &RequestContext,
    id: <P::Target as Record>::Id,
    patch: P,
    guard: G,
    check: C,
) -> AppResult<P::Target>
where
    P: RecordPatch,
    P::Target: Stored,
    G: Fn(&Tables, &P::Target) -> GuardDecision,
    C: FnOnce(&Tables, &P::Target, &P::Target) -> AppResult<()>,
{
    let before = fetch::<P::Target>(&state.tables, id)?;
    let requested = patch.status();

    let mut after = before.clone();
    patch.apply_to(&mut after);
    check(&state.tables, &before, &after)?;

    if let Some(next) = requested {
        if next != before.status() && next.is_inactive() {
            enforce::<P::Target>(guard(&state.tables, &after), ctx, id)?;
        }
    }

    let at = state.audit.tick();
    after.touch(at);
    let changes = diff_records(&before, &after)?;
    let action = AuditAction::for_update(before.status(), requested);

    state.tables.table_mut::<P::Target>().replace(after.clone());
    state
        .audit
        .append(entry_for(ctx, &after, action, changes, at));

    info!(
        entity_type = <P::Target as Record>::ENTITY_TYPE.as_str(),
        entity_id = %id,
        action = action.as_str(),
        actor = %ctx.actor,
        "Record updated"
    );
    Ok(after)
}

/// Remove a row once its delete guard passes, logging `delete`.
pub fn delete<T, G>(state: &mut OrgState, ctx: &RequestContext, id: T::Id, guard: G) -> AppResult<T>
where
    T: Stored,
    G: Fn(&Tables, T::Id) -> GuardDecision,
{
    fetch::<T>(&state.tables, id)?;
    enforce::<T>(guard(&state.tables, id), ctx, id)?;

    let at = state.audit.tick();
    let row = state
        .tables
        .table_mut::<T>()
        .remove(id)
        .ok_or_else(|| AppError::internal(format!("{} '{id}' vanished during delete", T::ENTITY_TYPE)))?;
    state
        .audit
        .append(entry_for(ctx, &row, AuditAction::Delete, None, at));

    info!(
        entity_type = T::ENTITY_TYPE.as_str(),
        entity_id = %id,
        actor = %ctx.actor,
        "Record deleted"
    );
    Ok(row)
}
