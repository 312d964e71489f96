//! Department entity model.
//!
//! One table holds four kinds of organizational unit. `parent_id` links a
//! unit to its parent unit, forming a forest per division.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use orgchart_core::AppError;
use orgchart_core::types::patch::{self, double_option};
use orgchart_core::types::{CostCenterId, DepartmentId, DivisionId, EmployeeId};

use crate::record::{EntityType, RecordPatch, impl_record};
use crate::status::DepartmentStatus;

/// The kind of organizational unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentKind {
    /// A top-level department.
    #[default]
    Department,
    /// A department nested under another department.
    SubDepartment,
    /// A production or business line.
    Line,
    /// A team.
    Team,
}

impl DepartmentKind {
    /// Return the kind as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Department => "department",
            Self::SubDepartment => "sub_department",
            Self::Line => "line",
            Self::Team => "team",
        }
    }
}

impl fmt::Display for DepartmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DepartmentKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "department" => Ok(Self::Department),
            "sub_department" => Ok(Self::SubDepartment),
            "line" => Ok(Self::Line),
            "team" => Ok(Self::Team),
            _ => Err(AppError::validation(format!(
                "Invalid department kind: '{s}'. Expected one of: department, sub_department, line, team"
            ))),
        }
    }
}

/// A department, sub-department, line, or team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Unique unit identifier.
    pub id: DepartmentId,
    /// Unit name.
    pub name: String,
    /// Short code.
    pub code: String,
    /// Kind of unit.
    pub kind: DepartmentKind,
    /// Parent unit (None for roots).
    pub parent_id: Option<DepartmentId>,
    /// Owning division.
    pub division_id: DivisionId,
    /// Number of employees assigned (maintained by callers).
    pub headcount: u32,
    /// Unit manager.
    pub manager_id: Option<EmployeeId>,
    /// Default cost center.
    pub cost_center_id: Option<CostCenterId>,
    /// Unit status.
    pub status: DepartmentStatus,
    /// When the unit was created.
    pub created_at: DateTime<Utc>,
    /// When the unit was last updated.
    pub updated_at: DateTime<Utc>,
}

impl_record!(Department, DepartmentId, DepartmentStatus, EntityType::Department, |d| d
    .name
    .clone());

impl Department {
    /// Check if this unit has no parent.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new unit.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDepartment {
    /// Unit name.
    #[validate(length(min = 1, message = "Department name is required"))]
    pub name: String,
    /// Short code.
    #[validate(length(min = 1, message = "Department code is required"))]
    pub code: String,
    /// Kind of unit.
    #[serde(default)]
    pub kind: DepartmentKind,
    /// Parent unit.
    #[serde(default)]
    pub parent_id: Option<DepartmentId>,
    /// Owning division.
    pub division_id: DivisionId,
    /// Initial headcount.
    #[serde(default)]
    pub headcount: u32,
    /// Unit manager.
    #[serde(default)]
    pub manager_id: Option<EmployeeId>,
    /// Default cost center.
    #[serde(default)]
    pub cost_center_id: Option<CostCenterId>,
    /// Initial status.
    #[serde(default)]
    pub status: DepartmentStatus,
}

impl CreateDepartment {
    /// Build the stored row.
    pub fn into_record(self, now: DateTime<Utc>) -> Department {
        Department {
            id: DepartmentId::new(),
            name: self.name,
            code: self.code,
            kind: self.kind,
            parent_id: self.parent_id,
            division_id: self.division_id,
            headcount: self.headcount,
            manager_id: self.manager_id,
            cost_center_id: self.cost_center_id,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateDepartment {
    /// New name.
    #[serde(default)]
    #[validate(length(min = 1, message = "Department name cannot be empty"))]
    pub name: Option<String>,
    /// New code.
    #[serde(default)]
    #[validate(length(min = 1, message = "Department code cannot be empty"))]
    pub code: Option<String>,
    /// New kind.
    #[serde(default)]
    pub kind: Option<DepartmentKind>,
    /// New parent; `null` makes the unit a root.
    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<DepartmentId>>,
    /// Move to another division.
    #[serde(default)]
    pub division_id: Option<DivisionId>,
    /// New headcount.
    #[serde(default)]
    pub headcount: Option<u32>,
    /// New manager; `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub manager_id: Option<Option<EmployeeId>>,
    /// New cost center; `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub cost_center_id: Option<Option<CostCenterId>>,
    /// New status.
    #[serde(default)]
    pub status: Option<DepartmentStatus>,
}

impl RecordPatch for UpdateDepartment {
    type Target = Department;

    fn status(&self) -> Option<DepartmentStatus> {
        self.status
    }

    fn apply_to(self, target: &mut Department) {
        patch::apply(&mut target.name, self.name);
        patch::apply(&mut target.code, self.code);
        patch::apply(&mut target.kind, self.kind);
        patch::apply(&mut target.parent_id, self.parent_id);
        patch::apply(&mut target.division_id, self.division_id);
        patch::apply(&mut target.headcount, self.headcount);
        patch::apply(&mut target.manager_id, self.manager_id);
        patch::apply(&mut target.cost_center_id, self.cost_center_id);
        patch::apply(&mut target.status, self.status);
    }
}
