//! Designation CRUD.

use validator::Validate;

use orgchart_core::error::AppError;
use orgchart_core::result::AppResult;
use orgchart_core::types::{DepartmentId, DesignationId};
use orgchart_entity::job::{CreateDesignation, Designation, Grade, UpdateDesignation};
use orgchart_entity::organization::Department;
use orgchart_store::{OrgStore, Tables};

use crate::context::RequestContext;
use crate::crud;
use crate::guard::rules;
use crate::hierarchy::closes_cycle;

/// Manages designations and their reporting lines.
#[derive(Debug, Clone)]
pub struct DesignationService {
    /// Shared store.
    store: OrgStore,
    /// Reject reporting lines that would close a cycle.
    reject_cycles: bool,
}

impl DesignationService {
    /// Creates a new designation service.
    pub fn new(store: OrgStore, reject_cycles: bool) -> Self {
        Self {
            store,
            reject_cycles,
        }
    }

    /// Lists designations in insertion order.
    pub async fn list(&self) -> Vec<Designation> {
        crud::list(&self.store.read().await.tables)
    }

    /// Lists the designations owned by one department.
    pub async fn list_by_department(&self, department_id: DepartmentId) -> Vec<Designation> {
        let state = self.store.read().await;
        state
            .tables
            .designations
            .iter()
            .filter(|d| d.department_id == Some(department_id))
            .cloned()
            .collect()
    }

    /// Gets a designation by ID.
    pub async fn get(&self, id: DesignationId) -> AppResult<Designation> {
        crud::fetch(&self.store.read().await.tables, id)
    }

    /// Creates a designation. Grade, department, and manager must exist.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateDesignation,
    ) -> AppResult<Designation> {
        req.validate()?;

        let mut state = self.store.write().await;
        crud::require::<Grade>(&state.tables, req.grade_id, "grade_id")?;
        crud::require_opt::<Department>(&state.tables, req.department_id, "department_id")?;
        crud::require_opt::<Designation>(
            &state.tables,
            req.reports_to_designation_id,
            "reports_to_designation_id",
        )?;
        Ok(crud::insert(&mut state, ctx, |now| req.into_record(now)))
    }

    /// Updates a designation.
    ///
    /// Deactivation is blocked while employees hold the designation or
    /// while another active designation reports to it.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: DesignationId,
        req: UpdateDesignation,
    ) -> AppResult<Designation> {
        req.validate()?;

        let reject_cycles = self.reject_cycles;
        let mut state = self.store.write().await;
        crud::update(
            &mut state,
            ctx,
            id,
            req,
            rules::deactivate_designation_row,
            |tables, before, after| {
                if before.grade_id != after.grade_id {
                    crud::require::<Grade>(tables, after.grade_id, "grade_id")?;
                }
                if before.department_id != after.department_id {
                    crud::require_opt::<Department>(tables, after.department_id, "department_id")?;
                }
                if before.reports_to_designation_id != after.reports_to_designation_id {
                    crud::require_opt::<Designation>(
                        tables,
                        after.reports_to_designation_id,
                        "reports_to_designation_id",
                    )?;
                    if reject_cycles {
                        check_manager(tables, id, after.reports_to_designation_id)?;
                    }
                }
                Ok(())
            },
        )
    }

    /// Deletes a designation.
    pub async fn delete(&self, ctx: &RequestContext, id: DesignationId) -> AppResult<Designation> {
        let mut state = self.store.write().await;
        crud::delete(&mut state, ctx, id, rules::unguarded)
    }
}

fn check_manager(
    tables: &Tables,
    id: DesignationId,
    manager: Option<DesignationId>,
) -> AppResult<()> {
    let manager_of = |node| {
        tables
            .designations
            .get(node)
            .and_then(|d| d.reports_to_designation_id)
    };
    if closes_cycle(id, manager, manager_of) {
        return Err(AppError::cycle_detected(format!(
            "Designation '{id}' cannot report to one of its own reports"
        )));
    }
    Ok(())
}
