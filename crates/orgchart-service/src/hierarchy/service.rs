//! Tree queries over the shared store.

use tracing::debug;

use orgchart_core::types::{DepartmentId, DivisionId};
use orgchart_entity::job::{Designation, DesignationTree};
use orgchart_entity::organization::{Department, DepartmentTree};
use orgchart_store::OrgStore;

use super::{build_department_tree, build_designation_tree};

/// Builds department and designation forests.
#[derive(Debug, Clone)]
pub struct HierarchyService {
    /// Shared store.
    store: OrgStore,
}

impl HierarchyService {
    /// Creates a new hierarchy service.
    pub fn new(store: OrgStore) -> Self {
        Self { store }
    }

    /// Department forest, optionally limited to one division.
    pub async fn department_tree(&self, division_id: Option<DivisionId>) -> DepartmentTree {
        let departments: Vec<Department> = {
            let state = self.store.read().await;
            state
                .tables
                .departments
                .iter()
                .filter(|d| division_id.is_none_or(|div| d.division_id == div))
                .cloned()
                .collect()
        };

        let tree = build_department_tree(&departments);
        debug!(
            division_id = ?division_id,
            units = tree.total_units,
            "Department tree built"
        );
        tree
    }

    /// Designation reporting forest, optionally limited to one department.
    ///
    /// With a filter, designations whose manager sits outside the
    /// department become roots.
    pub async fn designation_tree(&self, department_id: Option<DepartmentId>) -> DesignationTree {
        let designations: Vec<Designation> = {
            let state = self.store.read().await;
            state
                .tables
                .designations
                .iter()
                .filter(|d| department_id.is_none_or(|dept| d.department_id == Some(dept)))
                .cloned()
                .collect()
        };

        let tree = build_designation_tree(&designations);
        debug!(
            department_id = ?department_id,
            designations = tree.total_designations,
            "Designation tree built"
        );
        tree
    }
}
