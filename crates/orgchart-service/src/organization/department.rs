//! Department CRUD for all four unit kinds.

use validator::Validate;

use orgchart_core::error::AppError;
use orgchart_core::result::AppResult;
use orgchart_core::types::{DepartmentId, DivisionId};
use orgchart_entity::organization::{CreateDepartment, Department, Division, UpdateDepartment};
use orgchart_store::{OrgStore, Tables};

use crate::context::RequestContext;
use crate::crud;
use crate::guard::rules;
use crate::hierarchy::closes_cycle;

/// Manages departments, sub-departments, lines, and teams.
#[derive(Debug, Clone)]
pub struct DepartmentService {
    /// Shared store.
    store: OrgStore,
    /// Reject parent assignments that would close a cycle.
    reject_cycles: bool,
}

impl DepartmentService {
    /// Creates a new department service.
    pub fn new(store: OrgStore, reject_cycles: bool) -> Self {
        Self {
            store,
            reject_cycles,
        }
    }

    /// Lists units in insertion order.
    pub async fn list(&self) -> Vec<Department> {
        crud::list(&self.store.read().await.tables)
    }

    /// Lists the units of one division.
    pub async fn list_by_division(&self, division_id: DivisionId) -> Vec<Department> {
        let state = self.store.read().await;
        state
            .tables
            .departments
            .iter()
            .filter(|d| d.division_id == division_id)
            .cloned()
            .collect()
    }

    /// Gets a unit by ID.
    pub async fn get(&self, id: DepartmentId) -> AppResult<Department> {
        crud::fetch(&self.store.read().await.tables, id)
    }

    /// Creates a unit. The division and parent must exist.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateDepartment,
    ) -> AppResult<Department> {
        req.validate()?;

        let mut state = self.store.write().await;
        crud::require::<Division>(&state.tables, req.division_id, "division_id")?;
        crud::require_opt::<Department>(&state.tables, req.parent_id, "parent_id")?;
        Ok(crud::insert(&mut state, ctx, |now| req.into_record(now)))
    }

    /// Updates a unit.
    ///
    /// Deactivation is blocked while the unit has headcount or active
    /// children.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: DepartmentId,
        req: UpdateDepartment,
    ) -> AppResult<Department> {
        req.validate()?;

        let reject_cycles = self.reject_cycles;
        let mut state = self.store.write().await;
        crud::update(
            &mut state,
            ctx,
            id,
            req,
            rules::deactivate_department_row,
            |tables, before, after| {
                if before.division_id != after.division_id {
                    crud::require::<Division>(tables, after.division_id, "division_id")?;
                }
                if before.parent_id != after.parent_id {
                    crud::require_opt::<Department>(tables, after.parent_id, "parent_id")?;
                    if reject_cycles {
                        check_parent(tables, id, after.parent_id)?;
                    }
                }
                Ok(())
            },
        )
    }

    /// Deletes a unit.
    ///
    /// Blocked while the unit has headcount, any child at all, or an active
    /// cost center pointing at it.
    pub async fn delete(&self, ctx: &RequestContext, id: DepartmentId) -> AppResult<Department> {
        let mut state = self.store.write().await;
        crud::delete(&mut state, ctx, id, rules::delete_department)
    }
}

fn check_parent(tables: &Tables, id: DepartmentId, parent: Option<DepartmentId>) -> AppResult<()> {
    let parent_of = |node| tables.departments.get(node).and_then(|d| d.parent_id);
    if closes_cycle(id, parent, parent_of) {
        return Err(AppError::cycle_detected(format!(
            "Department '{id}' cannot be placed under one of its own descendants"
        )));
    }
    Ok(())
}
