//! Cost center entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use orgchart_core::types::patch::{self, double_option};
use orgchart_core::types::{CostCenterId, DepartmentId, LocationId};

use crate::record::{EntityType, RecordPatch, impl_record};
use crate::status::CostCenterStatus;

/// A cost center owned by a department. `code` is unique across centers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostCenter {
    /// Unique cost center identifier.
    pub id: CostCenterId,
    /// Cost center name.
    pub name: String,
    /// Accounting code; unique.
    pub code: String,
    /// Owning department.
    pub department_id: DepartmentId,
    /// Location the costs are booked against.
    pub location_id: Option<LocationId>,
    /// First day the center may be used.
    pub valid_from: Option<NaiveDate>,
    /// Last day the center may be used.
    pub valid_to: Option<NaiveDate>,
    /// Cost center status.
    pub status: CostCenterStatus,
    /// When the cost center was created.
    pub created_at: DateTime<Utc>,
    /// When the cost center was last updated.
    pub updated_at: DateTime<Utc>,
}

impl_record!(CostCenter, CostCenterId, CostCenterStatus, EntityType::CostCenter, |c| c
    .name
    .clone());

impl CostCenter {
    /// Whether `date` falls inside the validity window (open ends allowed).
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.valid_from.is_none_or(|from| from <= date) && self.valid_to.is_none_or(|to| date <= to)
    }
}

/// Reject a validity window that ends before it starts.
pub fn check_validity_window(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<(), ValidationError> {
    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            return Err(ValidationError::new("validity_window")
                .with_message("valid_from cannot be after valid_to".into()));
        }
    }
    Ok(())
}

fn validate_window(req: &CreateCostCenter) -> Result<(), ValidationError> {
    check_validity_window(req.valid_from, req.valid_to)
}

/// Data required to create a new cost center.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_window"))]
pub struct CreateCostCenter {
    /// Cost center name.
    #[validate(length(min = 1, message = "Cost center name is required"))]
    pub name: String,
    /// Accounting code.
    #[validate(length(min = 1, message = "Cost center code is required"))]
    pub code: String,
    /// Owning department.
    pub department_id: DepartmentId,
    /// Booking location.
    #[serde(default)]
    pub location_id: Option<LocationId>,
    /// Start of validity.
    #[serde(default)]
    pub valid_from: Option<NaiveDate>,
    /// End of validity.
    #[serde(default)]
    pub valid_to: Option<NaiveDate>,
    /// Initial status.
    #[serde(default)]
    pub status: CostCenterStatus,
}

impl CreateCostCenter {
    /// Build the stored row.
    pub fn into_record(self, now: DateTime<Utc>) -> CostCenter {
        CostCenter {
            id: CostCenterId::new(),
            name: self.name,
            code: self.code,
            department_id: self.department_id,
            location_id: self.location_id,
            valid_from: self.valid_from,
            valid_to: self.valid_to,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a cost center.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCostCenter {
    /// New name.
    #[serde(default)]
    #[validate(length(min = 1, message = "Cost center name cannot be empty"))]
    pub name: Option<String>,
    /// New code.
    #[serde(default)]
    #[validate(length(min = 1, message = "Cost center code cannot be empty"))]
    pub code: Option<String>,
    /// Move to another department.
    #[serde(default)]
    pub department_id: Option<DepartmentId>,
    /// New location; `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub location_id: Option<Option<LocationId>>,
    /// New start of validity; `null` opens it.
    #[serde(default, deserialize_with = "double_option")]
    pub valid_from: Option<Option<NaiveDate>>,
    /// New end of validity; `null` opens it.
    #[serde(default, deserialize_with = "double_option")]
    pub valid_to: Option<Option<NaiveDate>>,
    /// New status.
    #[serde(default)]
    pub status: Option<CostCenterStatus>,
}

impl RecordPatch for UpdateCostCenter {
    type Target = CostCenter;

    fn status(&self) -> Option<CostCenterStatus> {
        self.status
    }

    fn apply_to(self, target: &mut CostCenter) {
        patch::apply(&mut target.name, self.name);
        patch::apply(&mut target.code, self.code);
        patch::apply(&mut target.department_id, self.department_id);
        patch::apply(&mut target.location_id, self.location_id);
        patch::apply(&mut target.valid_from, self.valid_from);
        patch::apply(&mut target.valid_to, self.valid_to);
        patch::apply(&mut target.status, self.status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        assert!(check_validity_window(Some(date(2025, 6, 1)), Some(date(2025, 1, 1))).is_err());
        assert!(check_validity_window(None, Some(date(2025, 1, 1))).is_ok());
    }

    #[test]
    fn test_open_ended_window() {
        let center = CreateCostCenter {
            name: "Ops".into(),
            code: "CC-100".into(),
            department_id: DepartmentId::new(),
            location_id: None,
            valid_from: Some(date(2024, 1, 1)),
            valid_to: None,
            status: CostCenterStatus::Active,
        }
        .into_record(Utc::now());
        assert!(center.is_valid_on(date(2030, 1, 1)));
        assert!(!center.is_valid_on(date(2023, 12, 31)));
    }
}
