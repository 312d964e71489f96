//! Country, state, and city services.

pub mod service;

pub use service::GeographyService;
