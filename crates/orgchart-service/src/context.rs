//! Request context carrying the acting user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Context for the current request.
///
/// Passed into every mutating service method so the audit log knows *who*
/// made the change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Actor recorded on audit entries (user name, email, or `"system"`).
    pub actor: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(actor: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            request_time: Utc::now(),
        }
    }

    /// Context for changes made by the system itself.
    pub fn system() -> Self {
        Self::new("system")
    }
}
