//! Cost center CRUD.

use chrono::NaiveDate;
use validator::Validate;

use orgchart_core::result::AppResult;
use orgchart_core::types::CostCenterId;
use orgchart_entity::finance::cost_center::check_validity_window;
use orgchart_entity::finance::{CostCenter, CreateCostCenter, UpdateCostCenter};
use orgchart_entity::location::Location;
use orgchart_entity::organization::Department;
use orgchart_store::OrgStore;

use crate::context::RequestContext;
use crate::crud;
use crate::guard::rules;

/// Manages cost centers. Codes are unique across all centers.
#[derive(Debug, Clone)]
pub struct CostCenterService {
    /// Shared store.
    store: OrgStore,
}

impl CostCenterService {
    /// Creates a new cost center service.
    pub fn new(store: OrgStore) -> Self {
        Self { store }
    }

    /// Lists cost centers in insertion order.
    pub async fn list(&self) -> Vec<CostCenter> {
        crud::list(&self.store.read().await.tables)
    }

    /// Lists the centers whose validity window covers `date`.
    pub async fn list_valid_on(&self, date: NaiveDate) -> Vec<CostCenter> {
        let state = self.store.read().await;
        state
            .tables
            .cost_centers
            .iter()
            .filter(|c| c.is_valid_on(date))
            .cloned()
            .collect()
    }

    /// Gets a cost center by ID.
    pub async fn get(&self, id: CostCenterId) -> AppResult<CostCenter> {
        crud::fetch(&self.store.read().await.tables, id)
    }

    /// Creates a cost center.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateCostCenter,
    ) -> AppResult<CostCenter> {
        req.validate()?;

        let mut state = self.store.write().await;
        crud::require::<Department>(&state.tables, req.department_id, "department_id")?;
        crud::require_opt::<Location>(&state.tables, req.location_id, "location_id")?;
        crud::ensure_unique::<CostCenter>(&state.tables, None, "code", &req.code, |c| &c.code)?;
        Ok(crud::insert(&mut state, ctx, |now| req.into_record(now)))
    }

    /// Updates a cost center.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: CostCenterId,
        req: UpdateCostCenter,
    ) -> AppResult<CostCenter> {
        req.validate()?;

        let mut state = self.store.write().await;
        crud::update(
            &mut state,
            ctx,
            id,
            req,
            rules::unguarded_row,
            |tables, before, after| {
                if before.department_id != after.department_id {
                    crud::require::<Department>(tables, after.department_id, "department_id")?;
                }
                if before.location_id != after.location_id {
                    crud::require_opt::<Location>(tables, after.location_id, "location_id")?;
                }
                if before.code != after.code {
                    crud::ensure_unique::<CostCenter>(tables, Some(id), "code", &after.code, |c| {
                        &c.code
                    })?;
                }
                check_validity_window(after.valid_from, after.valid_to)?;
                Ok(())
            },
        )
    }

    /// Deletes a cost center.
    pub async fn delete(&self, ctx: &RequestContext, id: CostCenterId) -> AppResult<CostCenter> {
        let mut state = self.store.write().await;
        crud::delete(&mut state, ctx, id, rules::unguarded)
    }
}
