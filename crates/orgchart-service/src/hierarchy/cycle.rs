//! Parent-chain cycle detection for hierarchy assignments.

use std::collections::HashSet;
use std::hash::Hash;

/// Whether making `proposed_parent` the parent of `node` would close a cycle.
///
/// Walks up from the proposed parent. Chains that already loop without
/// passing through `node` stop at the first repeated id.
pub fn closes_cycle<Id: Copy + Eq + Hash>(
    node: Id,
    proposed_parent: Option<Id>,
    parent_of: impl Fn(Id) -> Option<Id>,
) -> bool {
    let mut seen = HashSet::new();
    let mut cursor = proposed_parent;
    while let Some(current) = cursor {
        if current == node {
            return true;
        }
        if !seen.insert(current) {
            return false;
        }
        cursor = parent_of(current);
    }
    false
}
