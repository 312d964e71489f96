//! Core type definitions used across the OrgChart workspace.

pub mod id;
pub mod pagination;
pub mod patch;

pub use id::*;
pub use pagination::{PageRequest, PageResponse};
