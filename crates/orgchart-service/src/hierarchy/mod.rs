//! Department and designation forests.
//!
//! Both forests are assembled per query from flat rows: an adjacency map
//! from parent id to child indices is built once, then nodes are expanded
//! from the roots. Rows are referenced by id, never by pointer.

pub mod cycle;
pub mod department;
pub mod designation;
pub mod service;

use std::collections::HashMap;
use std::hash::Hash;

pub use cycle::closes_cycle;
pub use department::build_department_tree;
pub use designation::build_designation_tree;
pub use service::HierarchyService;

/// Parent id -> indices of the rows that name it as parent.
#[derive(Debug)]
pub struct Adjacency<Id> {
    children: HashMap<Id, Vec<usize>>,
}

impl<Id: Copy + Eq + Hash> Adjacency<Id> {
    /// Index `rows` by their parent id.
    pub fn build<T>(rows: &[T], parent_of: impl Fn(&T) -> Option<Id>) -> Self {
        let mut children: HashMap<Id, Vec<usize>> = HashMap::new();
        for (idx, row) in rows.iter().enumerate() {
            if let Some(parent) = parent_of(row) {
                children.entry(parent).or_default().push(idx);
            }
        }
        Self { children }
    }

    /// Indices of the direct children of `parent`, in row order.
    pub fn children_of(&self, parent: Id) -> &[usize] {
        self.children.get(&parent).map(Vec::as_slice).unwrap_or_default()
    }
}
