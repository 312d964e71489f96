//! The full set of services over one shared store.

use serde_json::Value;
use uuid::Uuid;

use orgchart_core::config::AppConfig;
use orgchart_core::result::AppResult;
use orgchart_entity::EntityType;
use orgchart_entity::finance::CostCenter;
use orgchart_entity::geography::{GeoCity, GeoCountry, GeoState};
use orgchart_entity::job::{Designation, Grade};
use orgchart_entity::location::{CompanyLocation, Location};
use orgchart_entity::organization::{Company, Department, Division};
use orgchart_store::{OrgStore, Stored, Tables};

use crate::audit::AuditService;
use crate::crud;
use crate::finance::CostCenterService;
use crate::geography::GeographyService;
use crate::guard::GuardService;
use crate::hierarchy::HierarchyService;
use crate::job::{DesignationService, GradeService};
use crate::location::LocationService;
use crate::organization::{CompanyService, DepartmentService, DivisionService};

/// Every service, wired to the same store.
#[derive(Debug, Clone)]
pub struct OrgServices {
    /// Shared store.
    pub store: OrgStore,
    /// Companies.
    pub companies: CompanyService,
    /// Divisions.
    pub divisions: DivisionService,
    /// Departments, lines, and teams.
    pub departments: DepartmentService,
    /// Pay grades.
    pub grades: GradeService,
    /// Designations.
    pub designations: DesignationService,
    /// Locations and company mappings.
    pub locations: LocationService,
    /// Countries, states, and cities.
    pub geography: GeographyService,
    /// Cost centers.
    pub cost_centers: CostCenterService,
    /// Department and designation forests.
    pub hierarchy: HierarchyService,
    /// Read-only guard checks.
    pub guards: GuardService,
    /// Audit log queries.
    pub audit: AuditService,
}

impl OrgServices {
    /// Wire every service to `store`.
    pub fn new(store: OrgStore, config: &AppConfig) -> Self {
        let reject_cycles = config.hierarchy.reject_cycles;
        Self {
            companies: CompanyService::new(store.clone()),
            divisions: DivisionService::new(store.clone()),
            departments: DepartmentService::new(store.clone(), reject_cycles),
            grades: GradeService::new(store.clone()),
            designations: DesignationService::new(store.clone(), reject_cycles),
            locations: LocationService::new(store.clone()),
            geography: GeographyService::new(store.clone()),
            cost_centers: CostCenterService::new(store.clone()),
            hierarchy: HierarchyService::new(store.clone()),
            guards: GuardService::new(store.clone()),
            audit: AuditService::new(store.clone()),
            store,
        }
    }

    /// Rows of any table as JSON, in insertion order.
    pub async fn list(&self, entity_type: EntityType) -> AppResult<Vec<Value>> {
        let state = self.store.read().await;
        let tables = &state.tables;
        match entity_type {
            EntityType::Company => rows_json::<Company>(tables),
            EntityType::Division => rows_json::<Division>(tables),
            EntityType::Department => rows_json::<Department>(tables),
            EntityType::Grade => rows_json::<Grade>(tables),
            EntityType::Designation => rows_json::<Designation>(tables),
            EntityType::Location => rows_json::<Location>(tables),
            EntityType::CompanyLocation => rows_json::<CompanyLocation>(tables),
            EntityType::Country => rows_json::<GeoCountry>(tables),
            EntityType::State => rows_json::<GeoState>(tables),
            EntityType::City => rows_json::<GeoCity>(tables),
            EntityType::CostCenter => rows_json::<CostCenter>(tables),
        }
    }

    /// One row of any table as JSON.
    pub async fn get(&self, entity_type: EntityType, id: Uuid) -> AppResult<Value> {
        let state = self.store.read().await;
        let tables = &state.tables;
        match entity_type {
            EntityType::Company => row_json::<Company>(tables, id),
            EntityType::Division => row_json::<Division>(tables, id),
            EntityType::Department => row_json::<Department>(tables, id),
            EntityType::Grade => row_json::<Grade>(tables, id),
            EntityType::Designation => row_json::<Designation>(tables, id),
            EntityType::Location => row_json::<Location>(tables, id),
            EntityType::CompanyLocation => row_json::<CompanyLocation>(tables, id),
            EntityType::Country => row_json::<GeoCountry>(tables, id),
            EntityType::State => row_json::<GeoState>(tables, id),
            EntityType::City => row_json::<GeoCity>(tables, id),
            EntityType::CostCenter => row_json::<CostCenter>(tables, id),
        }
    }
}

fn rows_json<T: Stored>(tables: &Tables) -> AppResult<Vec<Value>> {
    tables
        .table::<T>()
        .iter()
        .map(|row| serde_json::to_value(row).map_err(Into::into))
        .collect()
}

fn row_json<T>(tables: &Tables, id: Uuid) -> AppResult<Value>
where
    T: Stored,
    T::Id: From<Uuid>,
{
    let row = crud::fetch::<T>(tables, T::Id::from(id))?;
    Ok(serde_json::to_value(row)?)
}
