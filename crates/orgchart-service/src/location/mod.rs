//! Location service and company mappings.

pub mod service;

pub use service::LocationService;
