//! Designation reporting tree structures.

use serde::{Deserialize, Serialize};

use orgchart_core::types::{DepartmentId, DesignationId, GradeId};

use crate::status::RecordStatus;

/// A node in a designation reporting tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignationNode {
    /// Designation ID.
    pub id: DesignationId,
    /// Job title.
    pub title: String,
    /// Short code.
    pub code: String,
    /// Seniority level.
    pub level: i32,
    /// Pay grade.
    pub grade_id: GradeId,
    /// Owning department.
    pub department_id: Option<DepartmentId>,
    /// Designation status.
    pub status: RecordStatus,
    /// Employees holding the designation.
    pub employee_count: u32,
    /// Number of direct reports.
    pub child_count: u64,
    /// Direct reports, level descending then title ascending.
    pub children: Vec<DesignationNode>,
}

/// A reporting forest over a (possibly filtered) set of designations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignationTree {
    /// Designations whose manager is absent from the set.
    pub roots: Vec<DesignationNode>,
    /// Number of nodes reachable from the roots.
    pub total_designations: u64,
}
