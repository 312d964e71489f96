//! Cost centers.

pub mod cost_center;

pub use cost_center::{CostCenter, CreateCostCenter, UpdateCostCenter};
