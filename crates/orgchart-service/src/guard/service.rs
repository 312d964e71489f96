//! Read-only guard evaluation for "can I?" checks.

use tracing::debug;
use uuid::Uuid;

use orgchart_core::result::AppResult;
use orgchart_entity::geography::{GeoCountry, GeoState};
use orgchart_entity::job::{Designation, Grade};
use orgchart_entity::location::Location;
use orgchart_entity::organization::{Department, Division};
use orgchart_store::{OrgStore, Stored, Tables};

use crate::crud;

use super::{GuardCheck, GuardDecision, rules};

/// Evaluates guards against the current store without mutating it.
#[derive(Debug, Clone)]
pub struct GuardService {
    /// Shared store.
    store: OrgStore,
}

impl GuardService {
    /// Creates a new guard service.
    pub fn new(store: OrgStore) -> Self {
        Self { store }
    }

    /// Evaluate one guard against a target row.
    ///
    /// Fails with `NotFound` when the target does not exist, so a denial
    /// always refers to a real row.
    pub async fn evaluate(&self, check: GuardCheck, target: Uuid) -> AppResult<GuardDecision> {
        let state = self.store.read().await;
        let tables = &state.tables;

        let decision = match check {
            GuardCheck::DeactivateGrade => run::<Grade, _>(tables, target, rules::deactivate_grade),
            GuardCheck::DeactivateDesignation => {
                run::<Designation, _>(tables, target, rules::deactivate_designation)
            }
            GuardCheck::DeactivateDivision => {
                run::<Division, _>(tables, target, rules::deactivate_division)
            }
            GuardCheck::DeactivateDepartment => {
                run::<Department, _>(tables, target, rules::deactivate_department)
            }
            GuardCheck::DeleteDepartment => {
                run::<Department, _>(tables, target, rules::delete_department)
            }
            GuardCheck::DeleteLocation => run::<Location, _>(tables, target, rules::delete_location),
            GuardCheck::DeleteCountry => run::<GeoCountry, _>(tables, target, rules::delete_country),
            GuardCheck::DeleteState => run::<GeoState, _>(tables, target, rules::delete_state),
        }?;

        debug!(
            check = %check,
            target = %target,
            allowed = decision.allowed,
            "Guard evaluated"
        );
        Ok(decision)
    }
}

/// Resolve the typed target, then apply the rule.
fn run<T, R>(tables: &Tables, target: Uuid, rule: R) -> AppResult<GuardDecision>
where
    T: Stored,
    T::Id: From<Uuid>,
    R: Fn(&Tables, T::Id) -> GuardDecision,
{
    let id = T::Id::from(target);
    crud::fetch::<T>(tables, id)?;
    Ok(rule(tables, id))
}
