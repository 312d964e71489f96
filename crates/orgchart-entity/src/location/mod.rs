//! Locations and company-to-location mappings.

pub mod mapping;
pub mod model;

pub use mapping::{CompanyLocation, CreateCompanyLocation};
pub use model::{CreateLocation, Location, LocationKind, UpdateLocation};
