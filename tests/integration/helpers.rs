//! Shared test helpers for integration tests.

#![allow(dead_code)]

use orgchart_core::config::AppConfig;
use orgchart_core::types::{
    CompanyId, DepartmentId, DesignationId, DivisionId, GradeId,
};
use orgchart_entity::job::{CreateDesignation, CreateGrade, Designation, Grade};
use orgchart_entity::organization::{
    CreateCompany, CreateDepartment, CreateDivision, Department, DepartmentKind,
};
use orgchart_entity::{Address, DepartmentStatus, RecordStatus};
use orgchart_service::{OrgServices, RequestContext};
use orgchart_store::OrgStore;

/// Seed snapshot shipped with the repository.
pub const SAMPLE_SEED: &str = "tests/fixtures/sample_org.json";

/// Test application context
pub struct TestApp {
    /// Services over a private store
    pub services: OrgServices,
    /// Actor used for every mutation
    pub ctx: RequestContext,
}

impl TestApp {
    /// Empty store, default configuration
    pub fn new() -> Self {
        Self::with_config(OrgStore::new(), &AppConfig::default())
    }

    /// Empty store with cycle rejection switched on
    pub fn rejecting_cycles() -> Self {
        let mut config = AppConfig::default();
        config.hierarchy.reject_cycles = true;
        Self::with_config(OrgStore::new(), &config)
    }

    /// Store seeded from the sample snapshot
    pub async fn seeded() -> Self {
        let store = OrgStore::load(SAMPLE_SEED)
            .await
            .expect("Failed to load sample seed");
        Self::with_config(store, &AppConfig::default())
    }

    fn with_config(store: OrgStore, config: &AppConfig) -> Self {
        Self {
            services: OrgServices::new(store, config),
            ctx: RequestContext::new("hr.admin@test"),
        }
    }

    /// Number of audit entries recorded so far
    pub async fn audit_len(&self) -> usize {
        self.services.audit.count().await
    }

    /// Create a company with a unique registration number
    pub async fn create_company(&self, registration_number: &str) -> CompanyId {
        self.services
            .companies
            .create(
                &self.ctx,
                CreateCompany {
                    name: format!("Company {registration_number}"),
                    registration_number: registration_number.into(),
                    tax_id: None,
                    domain: None,
                    sector: Some("Manufacturing".into()),
                    address: Address::default(),
                    fiscal_year_start_month: 1,
                    currency: "USD".into(),
                    status: RecordStatus::Active,
                },
            )
            .await
            .expect("Failed to create company")
            .id
    }

    /// Create a division under a fresh company
    pub async fn create_division(&self, name: &str) -> DivisionId {
        let company_id = self.create_company(&format!("REG-{name}")).await;
        self.services
            .divisions
            .create(
                &self.ctx,
                CreateDivision {
                    name: name.into(),
                    code: name.to_uppercase(),
                    company_id,
                    region: None,
                    status: RecordStatus::Active,
                },
            )
            .await
            .expect("Failed to create division")
            .id
    }

    /// Create an active department
    pub async fn create_department(
        &self,
        name: &str,
        division_id: DivisionId,
        parent_id: Option<DepartmentId>,
        headcount: u32,
    ) -> Department {
        self.services
            .departments
            .create(
                &self.ctx,
                CreateDepartment {
                    name: name.into(),
                    code: name.to_uppercase(),
                    kind: if parent_id.is_some() {
                        DepartmentKind::SubDepartment
                    } else {
                        DepartmentKind::Department
                    },
                    parent_id,
                    division_id,
                    headcount,
                    manager_id: None,
                    cost_center_id: None,
                    status: DepartmentStatus::Active,
                },
            )
            .await
            .expect("Failed to create department")
    }

    /// Create an active grade
    pub async fn create_grade(&self, code: &str, level: i32) -> Grade {
        self.services
            .grades
            .create(
                &self.ctx,
                CreateGrade {
                    name: format!("Grade {code}"),
                    code: code.into(),
                    level,
                    currency: "USD".into(),
                    min_base_salary: 50_000.0,
                    max_base_salary: 80_000.0,
                    status: RecordStatus::Active,
                },
            )
            .await
            .expect("Failed to create grade")
    }

    /// Create an active designation without holders
    pub async fn create_designation(
        &self,
        title: &str,
        grade_id: GradeId,
        level: i32,
        department_id: Option<DepartmentId>,
        reports_to: Option<DesignationId>,
    ) -> Designation {
        self.services
            .designations
            .create(
                &self.ctx,
                CreateDesignation {
                    title: title.into(),
                    code: title.to_uppercase().replace(' ', "_"),
                    grade_id,
                    level,
                    department_id,
                    reports_to_designation_id: reports_to,
                    status: RecordStatus::Active,
                    employee_count: 0,
                },
            )
            .await
            .expect("Failed to create designation")
    }
}
