//! Designation reporting forest assembly.

use std::cmp::Ordering;
use std::collections::HashSet;

use orgchart_core::types::DesignationId;
use orgchart_entity::job::{Designation, DesignationNode, DesignationTree};

use super::Adjacency;

/// Build the reporting forest over `designations`.
///
/// A designation is a root when it reports to nobody or when its manager is
/// not part of `designations`. Filtering the input (for example by
/// department) therefore promotes designations whose manager was filtered
/// out. Roots and children are ordered by level descending, then title.
pub fn build_designation_tree(designations: &[Designation]) -> DesignationTree {
    let present: HashSet<DesignationId> = designations.iter().map(|d| d.id).collect();
    let adjacency = Adjacency::build(designations, |d| d.reports_to_designation_id);

    let mut root_indices: Vec<usize> = designations
        .iter()
        .enumerate()
        .filter(|(_, d)| is_root(d, &present))
        .map(|(idx, _)| idx)
        .collect();
    sort_for_display(designations, &mut root_indices);

    let roots: Vec<DesignationNode> = root_indices
        .into_iter()
        .map(|idx| build_node(designations, &adjacency, idx))
        .collect();

    let total_designations = roots.iter().map(count_nodes).sum();
    DesignationTree {
        roots,
        total_designations,
    }
}

/// Root test used by the reporting forest.
pub fn is_root(designation: &Designation, present: &HashSet<DesignationId>) -> bool {
    designation
        .reports_to_designation_id
        .is_none_or(|manager| !present.contains(&manager))
}

fn display_order(a: &Designation, b: &Designation) -> Ordering {
    b.level.cmp(&a.level).then_with(|| a.title.cmp(&b.title))
}

fn sort_for_display(designations: &[Designation], indices: &mut [usize]) {
    indices.sort_by(|&a, &b| display_order(&designations[a], &designations[b]));
}

fn build_node(
    designations: &[Designation],
    adjacency: &Adjacency<DesignationId>,
    idx: usize,
) -> DesignationNode {
    let designation = &designations[idx];
    let mut child_indices = adjacency.children_of(designation.id).to_vec();
    sort_for_display(designations, &mut child_indices);

    let children: Vec<DesignationNode> = child_indices
        .into_iter()
        .map(|child| build_node(designations, adjacency, child))
        .collect();

    DesignationNode {
        id: designation.id,
        title: designation.title.clone(),
        code: designation.code.clone(),
        level: designation.level,
        grade_id: designation.grade_id,
        department_id: designation.department_id,
        status: designation.status,
        employee_count: designation.employee_count,
        child_count: children.len() as u64,
        children,
    }
}

fn count_nodes(node: &DesignationNode) -> u64 {
    1 + node.children.iter().map(count_nodes).sum::<u64>()
}
