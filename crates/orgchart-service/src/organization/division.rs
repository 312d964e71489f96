//! Division CRUD.

use validator::Validate;

use orgchart_core::result::AppResult;
use orgchart_core::types::DivisionId;
use orgchart_entity::organization::{
    Company, CreateDivision, Division, DivisionWithCounts, UpdateDivision,
};
use orgchart_store::OrgStore;

use crate::context::RequestContext;
use crate::crud;
use crate::guard::rules;

/// Manages divisions.
#[derive(Debug, Clone)]
pub struct DivisionService {
    /// Shared store.
    store: OrgStore,
}

impl DivisionService {
    /// Creates a new division service.
    pub fn new(store: OrgStore) -> Self {
        Self { store }
    }

    /// Lists divisions in insertion order.
    pub async fn list(&self) -> Vec<Division> {
        crud::list(&self.store.read().await.tables)
    }

    /// Gets a division by ID.
    pub async fn get(&self, id: DivisionId) -> AppResult<Division> {
        crud::fetch(&self.store.read().await.tables, id)
    }

    /// Gets a division with its department count and summed headcount.
    pub async fn get_with_counts(&self, id: DivisionId) -> AppResult<DivisionWithCounts> {
        let state = self.store.read().await;
        let division = crud::fetch::<Division>(&state.tables, id)?;
        let (department_count, headcount) = state
            .tables
            .departments
            .iter()
            .filter(|d| d.division_id == id)
            .fold((0u64, 0u64), |(n, h), d| (n + 1, h + u64::from(d.headcount)));

        Ok(DivisionWithCounts {
            division,
            department_count,
            headcount,
        })
    }

    /// Creates a division under an existing company.
    pub async fn create(&self, ctx: &RequestContext, req: CreateDivision) -> AppResult<Division> {
        req.validate()?;

        let mut state = self.store.write().await;
        crud::require::<Company>(&state.tables, req.company_id, "company_id")?;
        Ok(crud::insert(&mut state, ctx, |now| req.into_record(now)))
    }

    /// Updates a division. Deactivation requires every department in the
    /// division to be inactive first.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: DivisionId,
        req: UpdateDivision,
    ) -> AppResult<Division> {
        req.validate()?;

        let mut state = self.store.write().await;
        crud::update(
            &mut state,
            ctx,
            id,
            req,
            |tables, row: &Division| rules::deactivate_division(tables, row.id),
            |tables, before, after| {
                if before.company_id != after.company_id {
                    crud::require::<Company>(tables, after.company_id, "company_id")?;
                }
                Ok(())
            },
        )
    }

    /// Deletes a division.
    ///
    /// Unguarded: departments keep their `division_id` and are left pointing
    /// at the removed row.
    pub async fn delete(&self, ctx: &RequestContext, id: DivisionId) -> AppResult<Division> {
        let mut state = self.store.write().await;
        crud::delete(&mut state, ctx, id, rules::unguarded)
    }
}
