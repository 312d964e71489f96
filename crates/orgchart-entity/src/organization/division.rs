//! Division entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use orgchart_core::types::patch::{self, double_option};
use orgchart_core::types::{CompanyId, DivisionId};

use crate::record::{EntityType, RecordPatch, impl_record};
use crate::status::RecordStatus;

/// A business division owned by a company. Departments point at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Division {
    /// Unique division identifier.
    pub id: DivisionId,
    /// Division name.
    pub name: String,
    /// Short code.
    pub code: String,
    /// Owning company.
    pub company_id: CompanyId,
    /// Operating region.
    pub region: Option<String>,
    /// Division status.
    pub status: RecordStatus,
    /// When the division was created.
    pub created_at: DateTime<Utc>,
    /// When the division was last updated.
    pub updated_at: DateTime<Utc>,
}

impl_record!(Division, DivisionId, RecordStatus, EntityType::Division, |d| d.name.clone());

/// A division together with counts derived from the department table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionWithCounts {
    /// The division row.
    #[serde(flatten)]
    pub division: Division,
    /// Number of departments (any kind, any status) in the division.
    pub department_count: u64,
    /// Sum of department headcount in the division.
    pub headcount: u64,
}

/// Data required to create a new division.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDivision {
    /// Division name.
    #[validate(length(min = 1, message = "Division name is required"))]
    pub name: String,
    /// Short code.
    #[validate(length(min = 1, message = "Division code is required"))]
    pub code: String,
    /// Owning company.
    pub company_id: CompanyId,
    /// Operating region.
    #[serde(default)]
    pub region: Option<String>,
    /// Initial status.
    #[serde(default)]
    pub status: RecordStatus,
}

impl CreateDivision {
    /// Build the stored row.
    pub fn into_record(self, now: DateTime<Utc>) -> Division {
        Division {
            id: DivisionId::new(),
            name: self.name,
            code: self.code,
            company_id: self.company_id,
            region: self.region,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a division.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateDivision {
    /// New name.
    #[serde(default)]
    #[validate(length(min = 1, message = "Division name cannot be empty"))]
    pub name: Option<String>,
    /// New code.
    #[serde(default)]
    #[validate(length(min = 1, message = "Division code cannot be empty"))]
    pub code: Option<String>,
    /// Move to another company.
    #[serde(default)]
    pub company_id: Option<CompanyId>,
    /// New region; `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub region: Option<Option<String>>,
    /// New status.
    #[serde(default)]
    pub status: Option<RecordStatus>,
}

impl RecordPatch for UpdateDivision {
    type Target = Division;

    fn status(&self) -> Option<RecordStatus> {
        self.status
    }

    fn apply_to(self, target: &mut Division) {
        patch::apply(&mut target.name, self.name);
        patch::apply(&mut target.code, self.code);
        patch::apply(&mut target.company_id, self.company_id);
        patch::apply(&mut target.region, self.region);
        patch::apply(&mut target.status, self.status);
    }
}
