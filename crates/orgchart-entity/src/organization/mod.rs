//! Companies, divisions, and the department forest.

pub mod company;
pub mod department;
pub mod division;
pub mod tree;

pub use company::{Company, CompanyWithCounts, CreateCompany, UpdateCompany};
pub use department::{CreateDepartment, Department, DepartmentKind, UpdateDepartment};
pub use division::{CreateDivision, Division, DivisionWithCounts, UpdateDivision};
pub use tree::{DepartmentNode, DepartmentTree};
