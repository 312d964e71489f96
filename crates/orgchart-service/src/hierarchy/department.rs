//! Department forest assembly.

use orgchart_core::types::DepartmentId;
use orgchart_entity::organization::{Department, DepartmentNode, DepartmentTree};

use super::Adjacency;

/// Build the department forest over `departments`.
///
/// Roots are rows without a parent. Children keep row (insertion) order.
/// Rows whose parent chain never reaches a root are not rendered.
pub fn build_department_tree(departments: &[Department]) -> DepartmentTree {
    let adjacency = Adjacency::build(departments, |d| d.parent_id);

    let roots: Vec<DepartmentNode> = departments
        .iter()
        .enumerate()
        .filter(|(_, d)| d.is_root())
        .map(|(idx, _)| build_node(departments, &adjacency, idx))
        .collect();

    let total_units = roots.iter().map(count_nodes).sum();
    DepartmentTree { roots, total_units }
}

fn build_node(
    departments: &[Department],
    adjacency: &Adjacency<DepartmentId>,
    idx: usize,
) -> DepartmentNode {
    let dept = &departments[idx];
    let children: Vec<DepartmentNode> = adjacency
        .children_of(dept.id)
        .iter()
        .map(|&child| build_node(departments, adjacency, child))
        .collect();

    let total_headcount =
        u64::from(dept.headcount) + children.iter().map(|c| c.total_headcount).sum::<u64>();

    DepartmentNode {
        id: dept.id,
        name: dept.name.clone(),
        code: dept.code.clone(),
        kind: dept.kind,
        division_id: dept.division_id,
        status: dept.status,
        headcount: dept.headcount,
        total_headcount,
        child_count: children.len() as u64,
        children,
    }
}

fn count_nodes(node: &DepartmentNode) -> u64 {
    1 + node.children.iter().map(count_nodes).sum::<u64>()
}
