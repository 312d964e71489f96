//! Grade CRUD.

use validator::Validate;

use orgchart_core::result::AppResult;
use orgchart_core::types::GradeId;
use orgchart_entity::job::grade::check_salary_band;
use orgchart_entity::job::{CreateGrade, Grade, UpdateGrade};
use orgchart_store::OrgStore;

use crate::context::RequestContext;
use crate::crud;
use crate::guard::rules;

/// Manages pay grades.
#[derive(Debug, Clone)]
pub struct GradeService {
    /// Shared store.
    store: OrgStore,
}

impl GradeService {
    /// Creates a new grade service.
    pub fn new(store: OrgStore) -> Self {
        Self { store }
    }

    /// Lists grades in insertion order.
    pub async fn list(&self) -> Vec<Grade> {
        crud::list(&self.store.read().await.tables)
    }

    /// Gets a grade by ID.
    pub async fn get(&self, id: GradeId) -> AppResult<Grade> {
        crud::fetch(&self.store.read().await.tables, id)
    }

    /// Creates a grade.
    pub async fn create(&self, ctx: &RequestContext, req: CreateGrade) -> AppResult<Grade> {
        req.validate()?;

        let mut state = self.store.write().await;
        Ok(crud::insert(&mut state, ctx, |now| req.into_record(now)))
    }

    /// Updates a grade.
    ///
    /// The patched salary band is re-checked as a whole, so moving only one
    /// edge past the other is rejected. Deactivation requires every
    /// designation on the grade to be inactive first.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: GradeId,
        req: UpdateGrade,
    ) -> AppResult<Grade> {
        req.validate()?;

        let mut state = self.store.write().await;
        crud::update(
            &mut state,
            ctx,
            id,
            req,
            |tables, row: &Grade| rules::deactivate_grade(tables, row.id),
            |_, _, after| {
                check_salary_band(after.min_base_salary, after.max_base_salary)?;
                Ok(())
            },
        )
    }

    /// Deletes a grade.
    pub async fn delete(&self, ctx: &RequestContext, id: GradeId) -> AppResult<Grade> {
        let mut state = self.store.write().await;
        crud::delete(&mut state, ctx, id, rules::unguarded)
    }
}
