//! Integration tests for audit recording and querying.

mod helpers;

use orgchart_core::types::pagination::PageRequest;
use orgchart_entity::audit::{AuditAction, AuditFilter};
use orgchart_entity::geography::{CreateCountry, UpdateCountry};
use orgchart_entity::location::{CreateLocation, LocationKind, UpdateLocation};
use orgchart_entity::organization::UpdateDepartment;
use orgchart_entity::{Address, EntityType, RecordStatus};
use orgchart_service::{OrgServices, RequestContext};
use orgchart_store::OrgStore;

#[tokio::test]
async fn test_empty_patch_restamps_without_changes() {
    let app = helpers::TestApp::new();
    let division = app.create_division("Audit").await;
    let dept = app.create_department("Internal Audit", division, None, 2).await;

    let updated = app
        .services
        .departments
        .update(&app.ctx, dept.id, UpdateDepartment::default())
        .await
        .unwrap();

    assert!(updated.updated_at > dept.updated_at);
    assert_eq!(updated.created_at, dept.created_at);
    assert_eq!(updated.name, dept.name);

    let entries = app
        .services
        .audit
        .entries(&AuditFilter::for_entity(dept.id))
        .await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].action, AuditAction::Update);
    assert!(entries[0].changes.is_none());

    let json = serde_json::to_value(&entries[0]).unwrap();
    assert!(json.get("changes").is_none());
}

#[tokio::test]
async fn test_log_grows_by_one_per_mutation_newest_first() {
    let app = helpers::TestApp::new();
    let before = app.audit_len().await;

    let country = app
        .services
        .geography
        .create_country(
            &app.ctx,
            CreateCountry {
                name: "Norway".into(),
                code: "NO".into(),
                status: RecordStatus::Active,
            },
        )
        .await
        .unwrap();
    for name in ["Kingdom of Norway", "Norge", "Noreg"] {
        app.services
            .geography
            .update_country(
                &app.ctx,
                country.id,
                UpdateCountry {
                    name: Some(name.into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }
    app.services
        .geography
        .delete_country(&app.ctx, country.id)
        .await
        .unwrap();

    let entries = app.services.audit.entries(&AuditFilter::default()).await;
    assert_eq!(entries.len(), before + 5);
    assert!(entries.windows(2).all(|w| w[0].timestamp > w[1].timestamp));

    let actions: Vec<_> = entries.iter().map(|e| e.action).collect();
    assert_eq!(
        actions,
        vec![
            AuditAction::Delete,
            AuditAction::Update,
            AuditAction::Update,
            AuditAction::Update,
            AuditAction::Create,
        ]
    );
    let rename = entries[1].changes.as_ref().unwrap();
    assert_eq!(rename["name"].from, "Norge");
    assert_eq!(rename["name"].to, "Noreg");
    assert_eq!(entries[0].details, "Delete Country: Noreg");
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = helpers::TestApp::new();
    let request = CreateLocation {
        name: "Lisbon Hub".into(),
        code: "LIS".into(),
        kind: LocationKind::RemoteHub,
        address: Address {
            city: Some("Lisbon".into()),
            country: Some("PT".into()),
            ..Default::default()
        },
        is_virtual: true,
        status: RecordStatus::Active,
    };

    let created = app
        .services
        .locations
        .create(&app.ctx, request.clone())
        .await
        .unwrap();
    let fetched = app.services.locations.get(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, request.name);
    assert_eq!(fetched.code, request.code);
    assert_eq!(fetched.kind, request.kind);
    assert_eq!(fetched.address, request.address);
    assert_eq!(fetched.is_virtual, request.is_virtual);
    assert_eq!(fetched.status, request.status);
    assert_eq!(fetched.created_at, fetched.updated_at);

    let newest = &app.services.audit.entries(&AuditFilter::default()).await[0];
    assert_eq!(newest.details, "Create Location: Lisbon Hub");
    assert_eq!(newest.actor, "hr.admin@test");
}

#[tokio::test]
async fn test_status_round_trip_logs_activate_and_deactivate() {
    let app = helpers::TestApp::new();
    let location = app
        .services
        .locations
        .create(
            &app.ctx,
            CreateLocation {
                name: "Annex".into(),
                code: "ANX".into(),
                kind: LocationKind::Branch,
                address: Address::default(),
                is_virtual: false,
                status: RecordStatus::Active,
            },
        )
        .await
        .unwrap();

    for status in [RecordStatus::Inactive, RecordStatus::Inactive, RecordStatus::Active] {
        app.services
            .locations
            .update(
                &app.ctx,
                location.id,
                UpdateLocation {
                    status: Some(status),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    let entries = app
        .services
        .audit
        .entries(&AuditFilter::for_entity(location.id))
        .await;
    let details: Vec<_> = entries.iter().map(|e| e.details.as_str()).collect();
    assert_eq!(
        details,
        vec![
            "Activate Location: Annex",
            "Update Location: Annex",
            "Deactivate Location: Annex",
            "Create Location: Annex",
        ]
    );
    assert!(entries[1].changes.is_none());
}

#[tokio::test]
async fn test_filters_and_pagination() {
    let store = OrgStore::new();
    let services = OrgServices::new(store, &Default::default());
    let alice = RequestContext::new("alice");
    let bob = RequestContext::new("bob");

    for (i, ctx) in [&alice, &bob, &alice, &alice].into_iter().enumerate() {
        services
            .geography
            .create_country(
                ctx,
                CreateCountry {
                    name: format!("Country {i}"),
                    code: format!("C{i}"),
                    status: RecordStatus::Active,
                },
            )
            .await
            .unwrap();
    }
    let by_alice = AuditFilter {
        actor: Some("alice".into()),
        ..Default::default()
    };
    let page = services
        .audit
        .get_audit_logs(&by_alice, &PageRequest::new(1, 2))
        .await;
    assert_eq!(page.total_items, 3);
    assert_eq!(page.items.len(), 2);
    assert!(page.has_next);
    assert_eq!(page.items[0].entity_name, "Country 3");

    let second = services
        .audit
        .get_audit_logs(&by_alice, &PageRequest::new(2, 2))
        .await;
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].entity_name, "Country 0");

    let countries = services
        .audit
        .entries(&AuditFilter::for_type(EntityType::Country))
        .await;
    assert_eq!(countries.len(), 4);
    let grades = services
        .audit
        .entries(&AuditFilter::for_type(EntityType::Grade))
        .await;
    assert!(grades.is_empty());
}

#[tokio::test]
async fn test_snapshot_keeps_audit_order_across_reload() {
    let app = helpers::TestApp::seeded().await;
    let country = app
        .services
        .geography
        .list_countries()
        .await
        .into_iter()
        .find(|c| c.code == "CA")
        .unwrap();
    app.services
        .geography
        .delete_country(&app.ctx, country.id)
        .await
        .unwrap();

    let json = serde_json::to_string(&app.services.store.snapshot().await).unwrap();
    let reloaded = OrgServices::new(
        OrgStore::from_snapshot(serde_json::from_str(&json).unwrap()),
        &Default::default(),
    );

    reloaded
        .geography
        .create_country(
            &RequestContext::system(),
            CreateCountry {
                name: "Mexico".into(),
                code: "MX".into(),
                status: RecordStatus::Active,
            },
        )
        .await
        .unwrap();

    let entries = reloaded.audit.entries(&AuditFilter::default()).await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].details, "Create Country: Mexico");
    assert_eq!(entries[1].details, "Delete Country: Canada");
    assert!(entries[0].timestamp > entries[1].timestamp);
}
