//! # orgchart-entity
//!
//! Domain entity models for OrgChart. Every struct in this crate is either a
//! table row held by the in-memory store, a create/update payload, or a
//! derived view (tree nodes, enriched counts). Rows derive `Debug`, `Clone`,
//! `PartialEq`, `Serialize` and `Deserialize`.

pub mod address;
pub mod audit;
pub mod finance;
pub mod geography;
pub mod job;
pub mod location;
pub mod organization;
pub mod record;
pub mod status;

pub use address::Address;
pub use record::{EntityType, Record, RecordPatch};
pub use status::{CostCenterStatus, DepartmentStatus, Lifecycle, RecordStatus};
