//! Designation (job title) entity model.
//!
//! `reports_to_designation_id` forms a reporting forest that is independent
//! of the department forest.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use orgchart_core::types::patch::{self, double_option};
use orgchart_core::types::{DepartmentId, DesignationId, GradeId};

use crate::record::{EntityType, RecordPatch, impl_record};
use crate::status::RecordStatus;

/// A job title on a grade, optionally owned by a department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Designation {
    /// Unique designation identifier.
    pub id: DesignationId,
    /// Job title.
    pub title: String,
    /// Short code.
    pub code: String,
    /// Pay grade.
    pub grade_id: GradeId,
    /// Seniority level; higher sorts first in reporting trees.
    pub level: i32,
    /// Owning department, if any.
    pub department_id: Option<DepartmentId>,
    /// The designation this one reports to.
    pub reports_to_designation_id: Option<DesignationId>,
    /// Designation status.
    pub status: RecordStatus,
    /// Number of employees holding this designation (maintained by callers).
    pub employee_count: u32,
    /// When the designation was created.
    pub created_at: DateTime<Utc>,
    /// When the designation was last updated.
    pub updated_at: DateTime<Utc>,
}

impl_record!(Designation, DesignationId, RecordStatus, EntityType::Designation, |d| d
    .title
    .clone());

/// Data required to create a new designation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDesignation {
    /// Job title.
    #[validate(length(min = 1, message = "Designation title is required"))]
    pub title: String,
    /// Short code.
    #[validate(length(min = 1, message = "Designation code is required"))]
    pub code: String,
    /// Pay grade.
    pub grade_id: GradeId,
    /// Seniority level.
    pub level: i32,
    /// Owning department.
    #[serde(default)]
    pub department_id: Option<DepartmentId>,
    /// Reporting manager designation.
    #[serde(default)]
    pub reports_to_designation_id: Option<DesignationId>,
    /// Initial status.
    #[serde(default)]
    pub status: RecordStatus,
    /// Initial employee count.
    #[serde(default)]
    pub employee_count: u32,
}

impl CreateDesignation {
    /// Build the stored row.
    pub fn into_record(self, now: DateTime<Utc>) -> Designation {
        Designation {
            id: DesignationId::new(),
            title: self.title,
            code: self.code,
            grade_id: self.grade_id,
            level: self.level,
            department_id: self.department_id,
            reports_to_designation_id: self.reports_to_designation_id,
            status: self.status,
            employee_count: self.employee_count,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a designation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateDesignation {
    /// New title.
    #[serde(default)]
    #[validate(length(min = 1, message = "Designation title cannot be empty"))]
    pub title: Option<String>,
    /// New code.
    #[serde(default)]
    #[validate(length(min = 1, message = "Designation code cannot be empty"))]
    pub code: Option<String>,
    /// New grade.
    #[serde(default)]
    pub grade_id: Option<GradeId>,
    /// New level.
    #[serde(default)]
    pub level: Option<i32>,
    /// New department; `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub department_id: Option<Option<DepartmentId>>,
    /// New reporting manager; `null` makes it a root.
    #[serde(default, deserialize_with = "double_option")]
    pub reports_to_designation_id: Option<Option<DesignationId>>,
    /// New status.
    #[serde(default)]
    pub status: Option<RecordStatus>,
    /// New employee count.
    #[serde(default)]
    pub employee_count: Option<u32>,
}

impl RecordPatch for UpdateDesignation {
    type Target = Designation;

    fn status(&self) -> Option<RecordStatus> {
        self.status
    }

    fn apply_to(self, target: &mut Designation) {
        patch::apply(&mut target.title, self.title);
        patch::apply(&mut target.code, self.code);
        patch::apply(&mut target.grade_id, self.grade_id);
        patch::apply(&mut target.level, self.level);
        patch::apply(&mut target.department_id, self.department_id);
        patch::apply(
            &mut target.reports_to_designation_id,
            self.reports_to_designation_id,
        );
        patch::apply(&mut target.status, self.status);
        patch::apply(&mut target.employee_count, self.employee_count);
    }
}
