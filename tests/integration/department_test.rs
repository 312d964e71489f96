//! Integration tests for department guards and the department forest.

mod helpers;

use orgchart_core::error::ErrorKind;
use orgchart_entity::audit::{AuditAction, AuditFilter};
use orgchart_entity::finance::CreateCostCenter;
use orgchart_entity::organization::{UpdateDepartment, UpdateDivision};
use orgchart_entity::{CostCenterStatus, DepartmentStatus, RecordStatus};

#[tokio::test]
async fn test_delete_with_headcount_is_rejected_and_store_unchanged() {
    let app = helpers::TestApp::new();
    let division = app.create_division("Retail").await;
    let dept = app.create_department("Stores", division, None, 7).await;

    let rows_before = app.services.departments.list().await;
    let audit_before = app.audit_len().await;

    let err = app
        .services
        .departments
        .delete(&app.ctx, dept.id)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::GuardViolation);
    assert_eq!(
        err.message,
        "Cannot delete department with active headcount (7 employee(s))."
    );
    assert_eq!(app.services.departments.list().await, rows_before);
    assert_eq!(app.audit_len().await, audit_before);
}

#[tokio::test]
async fn test_raising_headcount_while_deactivating_is_rejected() {
    let app = helpers::TestApp::new();
    let division = app.create_division("Logistics").await;
    let dept = app.create_department("Dispatch", division, None, 0).await;
    let audit_before = app.audit_len().await;

    let err = app
        .services
        .departments
        .update(
            &app.ctx,
            dept.id,
            UpdateDepartment {
                headcount: Some(9),
                status: Some(DepartmentStatus::Inactive),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::GuardViolation);
    assert_eq!(
        err.message,
        "Cannot deactivate department with active headcount (9 employee(s))."
    );
    assert_eq!(app.services.departments.get(dept.id).await.unwrap(), dept);
    assert_eq!(app.audit_len().await, audit_before);
}

#[tokio::test]
async fn test_parent_cannot_be_deleted_before_its_child() {
    let app = helpers::TestApp::new();
    let division = app.create_division("Finance").await;
    let a = app.create_department("A", division, None, 0).await;
    let b = app.create_department("B", division, Some(a.id), 0).await;

    let err = app
        .services
        .departments
        .delete(&app.ctx, a.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::GuardViolation);
    assert!(err.message.starts_with("Cannot delete department with child units."));
    assert_eq!(
        err.message,
        "Cannot delete department with child units. Remove or reassign 1 child unit(s) first."
    );

    app.services.departments.delete(&app.ctx, b.id).await.unwrap();
    app.services.departments.delete(&app.ctx, a.id).await.unwrap();

    assert!(app.services.departments.list().await.is_empty());
    let deletes = app
        .services
        .audit
        .entries(&AuditFilter {
            action: Some(AuditAction::Delete),
            ..Default::default()
        })
        .await;
    let details: Vec<_> = deletes.iter().map(|e| e.details.as_str()).collect();
    assert_eq!(details, vec!["Delete Department: A", "Delete Department: B"]);
}

#[tokio::test]
async fn test_deactivation_counts_only_active_children() {
    let app = helpers::TestApp::new();
    let division = app.create_division("Plant").await;
    let parent = app.create_department("Assembly", division, None, 0).await;
    let child = app
        .create_department("Line 1", division, Some(parent.id), 0)
        .await;

    let deactivate = || UpdateDepartment {
        status: Some(DepartmentStatus::Inactive),
        ..Default::default()
    };

    let err = app
        .services
        .departments
        .update(&app.ctx, parent.id, deactivate())
        .await
        .unwrap_err();
    assert_eq!(
        err.message,
        "Cannot deactivate department with 1 active child unit(s)."
    );

    app.services
        .departments
        .update(&app.ctx, child.id, deactivate())
        .await
        .unwrap();
    let updated = app
        .services
        .departments
        .update(&app.ctx, parent.id, deactivate())
        .await
        .unwrap();
    assert_eq!(updated.status, DepartmentStatus::Inactive);

    let newest = &app
        .services
        .audit
        .entries(&AuditFilter::for_entity(parent.id))
        .await[0];
    assert_eq!(newest.action, AuditAction::Deactivate);
    assert_eq!(newest.details, "Deactivate Department: Assembly");
}

#[tokio::test]
async fn test_archiving_is_not_guarded_but_logs_deactivate() {
    let app = helpers::TestApp::new();
    let division = app.create_division("Legacy").await;
    let dept = app.create_department("Old Depot", division, None, 5).await;

    let archived = app
        .services
        .departments
        .update(
            &app.ctx,
            dept.id,
            UpdateDepartment {
                status: Some(DepartmentStatus::Archived),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(archived.status, DepartmentStatus::Archived);

    let entries = app
        .services
        .audit
        .entries(&AuditFilter::for_entity(dept.id))
        .await;
    assert_eq!(entries[0].action, AuditAction::Deactivate);
    let changes = entries[0].changes.as_ref().unwrap();
    assert_eq!(changes["status"].from, "active");
    assert_eq!(changes["status"].to, "archived");
}

#[tokio::test]
async fn test_active_cost_center_blocks_delete() {
    let app = helpers::TestApp::new();
    let division = app.create_division("Shared").await;
    let dept = app.create_department("Treasury", division, None, 0).await;

    let center = app
        .services
        .cost_centers
        .create(
            &app.ctx,
            CreateCostCenter {
                name: "Treasury Ops".into(),
                code: "CC-900".into(),
                department_id: dept.id,
                location_id: None,
                valid_from: None,
                valid_to: None,
                status: CostCenterStatus::Active,
            },
        )
        .await
        .unwrap();

    let err = app
        .services
        .departments
        .delete(&app.ctx, dept.id)
        .await
        .unwrap_err();
    assert_eq!(
        err.message,
        "Cannot delete department: it is referenced by 1 active cost center(s)."
    );

    app.services
        .cost_centers
        .update(
            &app.ctx,
            center.id,
            orgchart_entity::finance::UpdateCostCenter {
                status: Some(CostCenterStatus::Frozen),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    app.services.departments.delete(&app.ctx, dept.id).await.unwrap();
}

#[tokio::test]
async fn test_division_deactivation_requires_inactive_departments() {
    let app = helpers::TestApp::new();
    let division = app.create_division("Wholesale").await;
    let dept = app.create_department("Key Accounts", division, None, 0).await;

    let deactivate = || UpdateDivision {
        status: Some(RecordStatus::Inactive),
        ..Default::default()
    };
    let err = app
        .services
        .divisions
        .update(&app.ctx, division, deactivate())
        .await
        .unwrap_err();
    assert_eq!(err.message, "Cannot deactivate division: it has 1 active department(s).");

    app.services
        .departments
        .update(
            &app.ctx,
            dept.id,
            UpdateDepartment {
                status: Some(DepartmentStatus::Inactive),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    app.services
        .divisions
        .update(&app.ctx, division, deactivate())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_cycle_is_rejected_when_enabled() {
    let app = helpers::TestApp::rejecting_cycles();
    let division = app.create_division("Labs").await;
    let root = app.create_department("Research", division, None, 0).await;
    let mid = app.create_department("Optics", division, Some(root.id), 0).await;
    let leaf = app.create_department("Lasers", division, Some(mid.id), 0).await;
    let audit_before = app.audit_len().await;

    let err = app
        .services
        .departments
        .update(
            &app.ctx,
            root.id,
            UpdateDepartment {
                parent_id: Some(Some(leaf.id)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::CycleDetected);
    assert_eq!(app.audit_len().await, audit_before);

    let err = app
        .services
        .departments
        .update(
            &app.ctx,
            mid.id,
            UpdateDepartment {
                parent_id: Some(Some(mid.id)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::CycleDetected);
}

#[tokio::test]
async fn test_tree_is_scoped_to_one_division() {
    let app = helpers::TestApp::seeded().await;
    let ops = app
        .services
        .divisions
        .list()
        .await
        .into_iter()
        .find(|d| d.code == "OPS")
        .unwrap();

    let tree = app.services.hierarchy.department_tree(Some(ops.id)).await;
    assert_eq!(tree.roots.len(), 1);
    assert_eq!(tree.total_units, 3);

    let warehousing = &tree.roots[0];
    assert_eq!(warehousing.name, "Warehousing");
    assert_eq!(warehousing.total_headcount, 40);
    assert_eq!(warehousing.children[0].children[0].name, "Night Shift");

    let everything = app.services.hierarchy.department_tree(None).await;
    assert_eq!(everything.total_units, 5);
}
