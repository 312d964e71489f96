//! Company, division, and department services.

pub mod company;
pub mod department;
pub mod division;

pub use company::CompanyService;
pub use department::DepartmentService;
pub use division::DivisionService;
