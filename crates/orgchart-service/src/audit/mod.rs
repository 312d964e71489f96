//! Audit recording, snapshot diffing, and audit log queries.

pub mod diff;
pub mod recorder;
pub mod service;

pub use diff::diff_records;
pub use service::AuditService;
