//! # orgchart-service
//!
//! Business logic for OrgChart. Each entity service wraps the shared
//! [`OrgStore`](orgchart_store::OrgStore) and runs every mutation through
//! the same pipeline while holding the store write lock:
//!
//! 1. look the row up (`NotFound`),
//! 2. validate references and unique keys,
//! 3. run the referential guard (`GuardViolation`),
//! 4. commit and append exactly one audit entry.
//!
//! A failure at any step leaves the tables and the audit log untouched.

pub mod audit;
pub mod context;
pub mod crud;
pub mod finance;
pub mod geography;
pub mod guard;
pub mod hierarchy;
pub mod job;
pub mod location;
pub mod organization;
pub mod services;

pub use audit::AuditService;
pub use context::RequestContext;
pub use finance::CostCenterService;
pub use geography::GeographyService;
pub use guard::{GuardCheck, GuardDecision, GuardService};
pub use hierarchy::HierarchyService;
pub use job::{DesignationService, GradeService};
pub use location::LocationService;
pub use organization::{CompanyService, DepartmentService, DivisionService};
pub use services::OrgServices;
