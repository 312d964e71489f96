//! Cost center service.

pub mod service;

pub use service::CostCenterService;
