//! Company CRUD with computed division and employee counts.

use tracing::debug;
use validator::Validate;

use orgchart_core::result::AppResult;
use orgchart_core::types::CompanyId;
use orgchart_entity::organization::{Company, CompanyWithCounts, CreateCompany, UpdateCompany};
use orgchart_store::{OrgStore, Tables};

use crate::context::RequestContext;
use crate::crud;
use crate::guard::rules;

/// Manages companies.
#[derive(Debug, Clone)]
pub struct CompanyService {
    /// Shared store.
    store: OrgStore,
}

impl CompanyService {
    /// Creates a new company service.
    pub fn new(store: OrgStore) -> Self {
        Self { store }
    }

    /// Lists companies in insertion order.
    pub async fn list(&self) -> Vec<Company> {
        crud::list(&self.store.read().await.tables)
    }

    /// Gets a company by ID.
    pub async fn get(&self, id: CompanyId) -> AppResult<Company> {
        crud::fetch(&self.store.read().await.tables, id)
    }

    /// Gets a company with its division count and total headcount.
    pub async fn get_with_counts(&self, id: CompanyId) -> AppResult<CompanyWithCounts> {
        let state = self.store.read().await;
        let company = crud::fetch::<Company>(&state.tables, id)?;
        Ok(with_counts(&state.tables, company))
    }

    /// Lists every company with computed counts.
    pub async fn list_with_counts(&self) -> Vec<CompanyWithCounts> {
        let state = self.store.read().await;
        let rows: Vec<CompanyWithCounts> = state
            .tables
            .companies
            .iter()
            .map(|c| with_counts(&state.tables, c.clone()))
            .collect();
        debug!(companies = rows.len(), "Companies listed with counts");
        rows
    }

    /// Creates a company. The registration number must be unique.
    pub async fn create(&self, ctx: &RequestContext, req: CreateCompany) -> AppResult<Company> {
        req.validate()?;

        let mut state = self.store.write().await;
        crud::ensure_unique::<Company>(
            &state.tables,
            None,
            "registration number",
            &req.registration_number,
            |c| &c.registration_number,
        )?;
        Ok(crud::insert(&mut state, ctx, |now| req.into_record(now)))
    }

    /// Updates a company.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: CompanyId,
        req: UpdateCompany,
    ) -> AppResult<Company> {
        req.validate()?;

        let mut state = self.store.write().await;
        crud::update(&mut state, ctx, id, req, rules::unguarded_row, |tables, before, after| {
            if before.registration_number != after.registration_number {
                crud::ensure_unique::<Company>(
                    tables,
                    Some(id),
                    "registration number",
                    &after.registration_number,
                    |c| &c.registration_number,
                )?;
            }
            Ok(())
        })
    }

    /// Deletes a company.
    ///
    /// Unguarded: divisions and location mappings keep their `company_id`
    /// and are left pointing at the removed row.
    pub async fn delete(&self, ctx: &RequestContext, id: CompanyId) -> AppResult<Company> {
        let mut state = self.store.write().await;
        crud::delete(&mut state, ctx, id, rules::unguarded)
    }
}

/// Attach counts derived from the division and department tables.
fn with_counts(tables: &Tables, company: Company) -> CompanyWithCounts {
    let divisions: Vec<_> = tables
        .divisions
        .iter()
        .filter(|d| d.company_id == company.id)
        .map(|d| d.id)
        .collect();
    let employee_count = tables
        .departments
        .iter()
        .filter(|d| divisions.contains(&d.division_id))
        .map(|d| u64::from(d.headcount))
        .sum();

    CompanyWithCounts {
        company,
        division_count: divisions.len() as u64,
        employee_count,
    }
}
