//! Pay grades, designations, and the designation reporting forest.

pub mod designation;
pub mod grade;
pub mod tree;

pub use designation::{CreateDesignation, Designation, UpdateDesignation};
pub use grade::{CreateGrade, Grade, UpdateGrade};
pub use tree::{DesignationNode, DesignationTree};
