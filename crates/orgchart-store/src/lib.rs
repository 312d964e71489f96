//! # orgchart-store
//!
//! Process-lifetime storage for OrgChart. All entity tables and the audit
//! log live in one [`OrgState`] behind a single `tokio::sync::RwLock`, so a
//! service can check guards, commit a mutation, and append the audit entry
//! without any other writer interleaving.

pub mod audit_log;
pub mod snapshot;
pub mod store;
pub mod table;
pub mod tables;

pub use audit_log::AuditLog;
pub use snapshot::Snapshot;
pub use store::{OrgState, OrgStore};
pub use table::Table;
pub use tables::{Stored, Tables};
