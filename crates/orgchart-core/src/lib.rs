//! # orgchart-core
//!
//! Core crate for OrgChart. Contains configuration schemas, typed
//! identifiers, pagination types, patch helpers, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other OrgChart crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
