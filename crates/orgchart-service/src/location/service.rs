//! Location CRUD and company-to-location mappings.

use validator::Validate;

use orgchart_core::error::AppError;
use orgchart_core::result::AppResult;
use orgchart_core::types::{CompanyId, CompanyLocationId, LocationId};
use orgchart_entity::location::{
    CompanyLocation, CreateCompanyLocation, CreateLocation, Location, UpdateLocation,
};
use orgchart_entity::organization::Company;
use orgchart_store::OrgStore;

use crate::context::RequestContext;
use crate::crud;
use crate::guard::rules;

/// Manages locations and which companies operate from them.
#[derive(Debug, Clone)]
pub struct LocationService {
    /// Shared store.
    store: OrgStore,
}

impl LocationService {
    /// Creates a new location service.
    pub fn new(store: OrgStore) -> Self {
        Self { store }
    }

    /// Lists locations in insertion order.
    pub async fn list(&self) -> Vec<Location> {
        crud::list(&self.store.read().await.tables)
    }

    /// Gets a location by ID.
    pub async fn get(&self, id: LocationId) -> AppResult<Location> {
        crud::fetch(&self.store.read().await.tables, id)
    }

    /// Creates a location.
    pub async fn create(&self, ctx: &RequestContext, req: CreateLocation) -> AppResult<Location> {
        req.validate()?;

        let mut state = self.store.write().await;
        Ok(crud::insert(&mut state, ctx, |now| req.into_record(now)))
    }

    /// Updates a location.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: LocationId,
        req: UpdateLocation,
    ) -> AppResult<Location> {
        req.validate()?;

        let mut state = self.store.write().await;
        crud::update(&mut state, ctx, id, req, rules::unguarded_row, |_, _, _| Ok(()))
    }

    /// Deletes a location that no company is mapped to.
    pub async fn delete(&self, ctx: &RequestContext, id: LocationId) -> AppResult<Location> {
        let mut state = self.store.write().await;
        crud::delete(&mut state, ctx, id, rules::delete_location)
    }

    /// Lists mappings, optionally for one company.
    pub async fn list_mappings(&self, company_id: Option<CompanyId>) -> Vec<CompanyLocation> {
        let state = self.store.read().await;
        state
            .tables
            .company_locations
            .iter()
            .filter(|m| company_id.is_none_or(|c| m.company_id == c))
            .cloned()
            .collect()
    }

    /// Maps a company to a location. A pair can only be mapped once.
    pub async fn map_company(
        &self,
        ctx: &RequestContext,
        req: CreateCompanyLocation,
    ) -> AppResult<CompanyLocation> {
        let mut state = self.store.write().await;
        crud::require::<Company>(&state.tables, req.company_id, "company_id")?;
        crud::require::<Location>(&state.tables, req.location_id, "location_id")?;

        let exists = state
            .tables
            .company_locations
            .iter()
            .any(|m| m.company_id == req.company_id && m.location_id == req.location_id);
        if exists {
            return Err(AppError::duplicate_key(format!(
                "Company '{}' is already mapped to location '{}'",
                req.company_id, req.location_id
            )));
        }

        Ok(crud::insert(&mut state, ctx, |now| req.into_record(now)))
    }

    /// Removes a company mapping.
    pub async fn unmap_company(
        &self,
        ctx: &RequestContext,
        id: CompanyLocationId,
    ) -> AppResult<CompanyLocation> {
        let mut state = self.store.write().await;
        crud::delete(&mut state, ctx, id, rules::unguarded)
    }
}

#[cfg(test)]
mod tests {
    use orgchart_core::error::ErrorKind;
    use orgchart_entity::organization::CreateCompany;
    use orgchart_entity::{Address, RecordStatus};

    use super::*;
    use crate::organization::CompanyService;

    #[tokio::test]
    async fn test_mapped_location_cannot_be_deleted_until_unmapped() {
        let store = OrgStore::new();
        let ctx = RequestContext::new("facilities");
        let locations = LocationService::new(store.clone());
        let company = CompanyService::new(store.clone())
            .create(
                &ctx,
                CreateCompany {
                    name: "Globex".into(),
                    registration_number: "GX-1".into(),
                    tax_id: None,
                    domain: None,
                    sector: None,
                    address: Address::default(),
                    fiscal_year_start_month: 1,
                    currency: "USD".into(),
                    status: RecordStatus::Active,
                },
            )
            .await
            .unwrap();
        let site = locations
            .create(
                &ctx,
                CreateLocation {
                    name: "Springfield Plant".into(),
                    code: "SPF".into(),
                    kind: Default::default(),
                    address: Address::default(),
                    is_virtual: false,
                    status: RecordStatus::Active,
                },
            )
            .await
            .unwrap();

        let request = CreateCompanyLocation {
            company_id: company.id,
            location_id: site.id,
            is_primary: true,
        };
        let mapping = locations.map_company(&ctx, request.clone()).await.unwrap();
        let err = locations.map_company(&ctx, request).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateKey);

        let err = locations.delete(&ctx, site.id).await.unwrap_err();
        assert_eq!(err.message, "Cannot delete location: it is mapped to 1 company(ies).");

        locations.unmap_company(&ctx, mapping.id).await.unwrap();
        locations.delete(&ctx, site.id).await.unwrap();
        assert!(locations.list_mappings(Some(company.id)).await.is_empty());
    }
}
