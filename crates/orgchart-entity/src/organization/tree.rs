//! Department tree structures for hierarchical display.

use serde::{Deserialize, Serialize};

use orgchart_core::types::{DepartmentId, DivisionId};

use crate::organization::department::DepartmentKind;
use crate::status::DepartmentStatus;

/// A node in a department tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentNode {
    /// Unit ID.
    pub id: DepartmentId,
    /// Unit name.
    pub name: String,
    /// Short code.
    pub code: String,
    /// Kind of unit.
    pub kind: DepartmentKind,
    /// Owning division.
    pub division_id: DivisionId,
    /// Unit status.
    pub status: DepartmentStatus,
    /// Headcount of this unit alone.
    pub headcount: u32,
    /// Headcount of this unit plus every descendant.
    pub total_headcount: u64,
    /// Number of direct children.
    pub child_count: u64,
    /// Child nodes, in insertion order.
    pub children: Vec<DepartmentNode>,
}

/// A department forest, optionally scoped to one division.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentTree {
    /// Root units (no parent).
    pub roots: Vec<DepartmentNode>,
    /// Number of nodes reachable from the roots.
    pub total_units: u64,
}

impl DepartmentTree {
    /// Create an empty tree.
    pub fn empty() -> Self {
        Self {
            roots: Vec::new(),
            total_units: 0,
        }
    }
}
