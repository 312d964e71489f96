//! Grade and designation services.

pub mod designation;
pub mod grade;

pub use designation::DesignationService;
pub use grade::GradeService;
