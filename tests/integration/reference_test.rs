//! Integration tests for uniqueness, references, and deletion guards.

mod helpers;

use uuid::Uuid;

use orgchart_core::error::ErrorKind;
use orgchart_core::types::{
    CompanyId, CostCenterId, CountryId, DepartmentId, DivisionId, LocationId, StateId,
};
use orgchart_entity::finance::CreateCostCenter;
use orgchart_entity::geography::{CreateCity, CreateState};
use orgchart_entity::location::CreateCompanyLocation;
use orgchart_entity::organization::{CreateCompany, CreateDivision, UpdateCompany};
use orgchart_entity::{Address, CostCenterStatus, EntityType, RecordStatus};
use orgchart_service::GuardCheck;

fn seed_id(n: u8) -> Uuid {
    Uuid::parse_str(&format!("5eed0000-0000-0000-0000-{n:012x}")).unwrap()
}

fn cost_center(code: &str, department_id: DepartmentId) -> CreateCostCenter {
    CreateCostCenter {
        name: format!("Center {code}"),
        code: code.into(),
        department_id,
        location_id: None,
        valid_from: None,
        valid_to: None,
        status: CostCenterStatus::Active,
    }
}

#[tokio::test]
async fn test_duplicate_registration_number_is_rejected() {
    let app = helpers::TestApp::new();
    app.create_company("REG-42").await;
    let other = app.create_company("REG-43").await;
    let before = app.audit_len().await;

    let err = app
        .services
        .companies
        .create(
            &app.ctx,
            CreateCompany {
                name: "Copycat".into(),
                registration_number: "REG-42".into(),
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
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateKey);

    let err = app
        .services
        .companies
        .update(
            &app.ctx,
            other,
            UpdateCompany {
                registration_number: Some("REG-42".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateKey);
    assert_eq!(app.audit_len().await, before);
    assert_eq!(app.services.companies.list().await.len(), 2);
}

#[tokio::test]
async fn test_duplicate_cost_center_code_is_rejected() {
    let app = helpers::TestApp::seeded().await;
    let fin: DepartmentId = seed_id(0x04).into();

    let err = app
        .services
        .cost_centers
        .create(&app.ctx, cost_center("CC-100", fin))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateKey);
    assert!(err.message.contains("CC-100"));

    app.services
        .cost_centers
        .create(&app.ctx, cost_center("CC-200", fin))
        .await
        .unwrap();
    assert_eq!(app.services.cost_centers.list().await.len(), 2);
}

#[tokio::test]
async fn test_unknown_reference_is_a_validation_error() {
    let app = helpers::TestApp::new();

    let err = app
        .services
        .divisions
        .create(
            &app.ctx,
            CreateDivision {
                name: "Orphan".into(),
                code: "ORP".into(),
                company_id: CompanyId::new(),
                region: None,
                status: RecordStatus::Active,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    let err = app
        .services
        .cost_centers
        .create(&app.ctx, cost_center("CC-1", DepartmentId::new()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    let err = app
        .services
        .geography
        .create_state(
            &app.ctx,
            CreateState {
                name: "Nowhere".into(),
                code: "NW".into(),
                country_id: CountryId::new(),
                status: RecordStatus::Active,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(app.audit_len().await, 0);
}

#[tokio::test]
async fn test_geography_deletes_bottom_up() {
    let app = helpers::TestApp::seeded().await;
    let us: CountryId = seed_id(0x13).into();
    let wa: StateId = seed_id(0x14).into();

    let err = app
        .services
        .geography
        .delete_country(&app.ctx, us)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::GuardViolation);
    assert_eq!(
        err.message,
        "Cannot delete country with 1 state(s). Remove its states first."
    );

    let err = app
        .services
        .geography
        .delete_state(&app.ctx, wa)
        .await
        .unwrap_err();
    assert_eq!(
        err.message,
        "Cannot delete state with 1 city(ies). Remove its cities first."
    );

    let tacoma = app
        .services
        .geography
        .create_city(
            &app.ctx,
            CreateCity {
                name: "Tacoma".into(),
                code: "TAC".into(),
                state_id: wa,
                status: RecordStatus::Active,
            },
        )
        .await
        .unwrap();
    for city in app.services.geography.list_cities(Some(wa)).await {
        app.services
            .geography
            .delete_city(&app.ctx, city.id)
            .await
            .unwrap();
    }
    assert!(app.services.geography.get_city(tacoma.id).await.is_err());

    app.services.geography.delete_state(&app.ctx, wa).await.unwrap();
    app.services.geography.delete_country(&app.ctx, us).await.unwrap();
    assert_eq!(app.services.geography.list_countries().await.len(), 1);
}

#[tokio::test]
async fn test_location_mapping_rules() {
    let app = helpers::TestApp::seeded().await;
    let company: CompanyId = seed_id(0x01).into();
    let seattle: LocationId = seed_id(0x10).into();
    let tacoma: LocationId = seed_id(0x11).into();

    let err = app
        .services
        .locations
        .map_company(
            &app.ctx,
            CreateCompanyLocation {
                company_id: company,
                location_id: seattle,
                is_primary: false,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateKey);

    let mapping = app
        .services
        .locations
        .map_company(
            &app.ctx,
            CreateCompanyLocation {
                company_id: company,
                location_id: tacoma,
                is_primary: false,
            },
        )
        .await
        .unwrap();
    let err = app
        .services
        .locations
        .delete(&app.ctx, tacoma)
        .await
        .unwrap_err();
    assert_eq!(err.message, "Cannot delete location: it is mapped to 1 company(ies).");

    app.services
        .locations
        .unmap_company(&app.ctx, mapping.id)
        .await
        .unwrap();
    app.services.locations.delete(&app.ctx, tacoma).await.unwrap();
    assert_eq!(app.services.locations.list_mappings(Some(company)).await.len(), 1);
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let app = helpers::TestApp::seeded().await;
    let missing = CostCenterId::new();

    let err = app.services.cost_centers.get(missing).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, format!("Cost Center '{missing}' not found"));

    let err = app
        .services
        .companies
        .update(&app.ctx, CompanyId::new(), UpdateCompany::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    let err = app
        .services
        .geography
        .delete_country(&app.ctx, CountryId::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(app.audit_len().await, 0);
}

#[tokio::test]
async fn test_guard_service_reports_without_mutating() {
    let app = helpers::TestApp::seeded().await;

    let err = app
        .services
        .guards
        .evaluate(GuardCheck::DeleteDepartment, Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    let denied = app
        .services
        .guards
        .evaluate(GuardCheck::DeleteDepartment, seed_id(0x04))
        .await
        .unwrap();
    assert!(!denied.allowed);
    assert_eq!(
        denied.reason.as_deref(),
        Some("Cannot delete department with active headcount (4 employee(s)).")
    );

    let allowed = app
        .services
        .guards
        .evaluate(GuardCheck::DeleteCountry, seed_id(0x16))
        .await
        .unwrap();
    assert!(allowed.allowed);
    assert!(allowed.reason.is_none());
    assert_eq!(app.audit_len().await, 0);
}

#[tokio::test]
async fn test_generic_list_and_get_by_entity_type() {
    let app = helpers::TestApp::seeded().await;

    let departments = app.services.list(EntityType::Department).await.unwrap();
    assert_eq!(departments.len(), 5);
    assert_eq!(departments[0]["code"], "FIN");

    let company = app
        .services
        .get(EntityType::Company, seed_id(0x01))
        .await
        .unwrap();
    assert_eq!(company["registration_number"], "NW-2011-0042");

    let err = app
        .services
        .get(EntityType::Grade, seed_id(0x01))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_unguarded_deletes_leave_references_in_place() {
    let app = helpers::TestApp::seeded().await;
    let company: CompanyId = seed_id(0x01).into();
    let corporate: DivisionId = seed_id(0x03).into();

    app.services.divisions.delete(&app.ctx, corporate).await.unwrap();
    let finance = app
        .services
        .departments
        .get(seed_id(0x04).into())
        .await
        .unwrap();
    assert_eq!(finance.division_id, corporate);

    app.services.companies.delete(&app.ctx, company).await.unwrap();
    let operations = app
        .services
        .divisions
        .get(seed_id(0x02).into())
        .await
        .unwrap();
    assert_eq!(operations.company_id, company);
    assert_eq!(app.services.locations.list_mappings(Some(company)).await.len(), 1);
    assert_eq!(app.audit_len().await, 2);
}
