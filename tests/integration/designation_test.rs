//! Integration tests for grade/designation guards and the reporting forest.

mod helpers;

use orgchart_core::error::ErrorKind;
use orgchart_entity::RecordStatus;
use orgchart_entity::job::{UpdateDesignation, UpdateGrade};

fn deactivate_grade() -> UpdateGrade {
    UpdateGrade {
        status: Some(RecordStatus::Inactive),
        ..Default::default()
    }
}

fn deactivate_designation() -> UpdateDesignation {
    UpdateDesignation {
        status: Some(RecordStatus::Inactive),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_grade_deactivation_waits_for_its_designations() {
    let app = helpers::TestApp::new();
    let grade = app.create_grade("G5", 5).await;
    let x = app
        .create_designation("Analyst", grade.id, 4, None, None)
        .await;

    let err = app
        .services
        .grades
        .update(&app.ctx, grade.id, deactivate_grade())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::GuardViolation);
    assert!(err.message.contains("1 active designation(s)"));

    app.services
        .designations
        .update(&app.ctx, x.id, deactivate_designation())
        .await
        .unwrap();

    let grade = app
        .services
        .grades
        .update(&app.ctx, grade.id, deactivate_grade())
        .await
        .unwrap();
    assert_eq!(grade.status, RecordStatus::Inactive);
}

#[tokio::test]
async fn test_designation_with_holders_cannot_be_deactivated() {
    let app = helpers::TestApp::new();
    let grade = app.create_grade("G2", 2).await;
    let clerk = app.create_designation("Clerk", grade.id, 2, None, None).await;

    app.services
        .designations
        .update(
            &app.ctx,
            clerk.id,
            UpdateDesignation {
                employee_count: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let err = app
        .services
        .designations
        .update(&app.ctx, clerk.id, deactivate_designation())
        .await
        .unwrap_err();
    assert_eq!(
        err.message,
        "Cannot deactivate designation: 3 employee(s) currently hold this designation."
    );
}

#[tokio::test]
async fn test_adding_holders_while_deactivating_is_rejected() {
    let app = helpers::TestApp::new();
    let grade = app.create_grade("G4", 4).await;
    let buyer = app.create_designation("Buyer", grade.id, 4, None, None).await;

    let err = app
        .services
        .designations
        .update(
            &app.ctx,
            buyer.id,
            UpdateDesignation {
                employee_count: Some(2),
                status: Some(RecordStatus::Inactive),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::GuardViolation);
    assert_eq!(
        err.message,
        "Cannot deactivate designation: 2 employee(s) currently hold this designation."
    );
    let stored = app.services.designations.get(buyer.id).await.unwrap();
    assert_eq!(stored.status, RecordStatus::Active);
    assert_eq!(stored.employee_count, 0);
}

#[tokio::test]
async fn test_active_manager_cannot_be_deactivated() {
    let app = helpers::TestApp::new();
    let grade = app.create_grade("G8", 8).await;
    let head = app.create_designation("Head", grade.id, 8, None, None).await;
    let deputy = app
        .create_designation("Deputy", grade.id, 6, None, Some(head.id))
        .await;

    let err = app
        .services
        .designations
        .update(&app.ctx, head.id, deactivate_designation())
        .await
        .unwrap_err();
    assert_eq!(
        err.message,
        "Cannot deactivate designation: it is the reporting manager for 1 active designation(s)."
    );

    app.services
        .designations
        .update(&app.ctx, deputy.id, deactivate_designation())
        .await
        .unwrap();
    app.services
        .designations
        .update(&app.ctx, head.id, deactivate_designation())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_salary_band_is_checked_after_patching() {
    let app = helpers::TestApp::new();
    let grade = app.create_grade("G4", 4).await;

    let err = app
        .services
        .grades
        .update(
            &app.ctx,
            grade.id,
            UpdateGrade {
                min_base_salary: Some(95_000.0),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(app.services.grades.get(grade.id).await.unwrap(), grade);
}

#[tokio::test]
async fn test_designation_whose_manager_is_outside_the_department_is_a_root() {
    let app = helpers::TestApp::seeded().await;
    let departments = app.services.departments.list().await;
    let finance = departments.iter().find(|d| d.code == "FIN").unwrap();

    // The controller reports to the CFO, who belongs to no department.
    let tree = app
        .services
        .hierarchy
        .designation_tree(Some(finance.id))
        .await;
    assert_eq!(tree.roots.len(), 1);
    assert_eq!(tree.roots[0].title, "Financial Controller");
    assert_eq!(tree.total_designations, 1);

    let full = app.services.hierarchy.designation_tree(None).await;
    let root_titles: Vec<_> = full.roots.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(root_titles, vec!["Chief Financial Officer", "Warehouse Manager"]);
    assert_eq!(full.total_designations, 5);
    assert_eq!(full.roots[0].children[0].children[0].title, "Payroll Accountant");
}

#[tokio::test]
async fn test_reporting_cycle_is_allowed_by_default_and_hidden_from_tree() {
    let app = helpers::TestApp::new();
    let grade = app.create_grade("G6", 6).await;
    let a = app.create_designation("Alpha", grade.id, 6, None, None).await;
    let b = app
        .create_designation("Beta", grade.id, 5, None, Some(a.id))
        .await;

    app.services
        .designations
        .update(
            &app.ctx,
            a.id,
            UpdateDesignation {
                reports_to_designation_id: Some(Some(b.id)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let tree = app.services.hierarchy.designation_tree(None).await;
    assert!(tree.roots.is_empty());
    assert_eq!(tree.total_designations, 0);
}

#[tokio::test]
async fn test_reporting_cycle_rejected_when_enabled() {
    let app = helpers::TestApp::rejecting_cycles();
    let grade = app.create_grade("G6", 6).await;
    let a = app.create_designation("Alpha", grade.id, 6, None, None).await;
    let b = app
        .create_designation("Beta", grade.id, 5, None, Some(a.id))
        .await;

    let err = app
        .services
        .designations
        .update(
            &app.ctx,
            a.id,
            UpdateDesignation {
                reports_to_designation_id: Some(Some(b.id)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::CycleDetected);
}
