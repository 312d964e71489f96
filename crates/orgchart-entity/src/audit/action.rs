//! Audit actions and the status-to-action decision table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use orgchart_core::AppError;

use crate::status::Lifecycle;

/// The kind of mutation an audit entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    /// A row was created.
    Create,
    /// A row was changed without a status change.
    Update,
    /// A row was removed.
    Delete,
    /// A row's status changed to active.
    Activate,
    /// A row's status changed to anything other than active.
    Deactivate,
}

impl AuditAction {
    /// Decide the action for an update.
    ///
    /// | requested status        | action       |
    /// |-------------------------|--------------|
    /// | absent                  | `Update`     |
    /// | same as current         | `Update`     |
    /// | differs, is active      | `Activate`   |
    /// | differs, is not active  | `Deactivate` |
    pub fn for_update<S: Lifecycle>(current: S, requested: Option<S>) -> Self {
        match requested {
            Some(next) if next != current && next.is_active() => Self::Activate,
            Some(next) if next != current => Self::Deactivate,
            _ => Self::Update,
        }
    }

    /// Verb used at the start of the audit `details` text.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Update => "Update",
            Self::Delete => "Delete",
            Self::Activate => "Activate",
            Self::Deactivate => "Deactivate",
        }
    }

    /// Return the action as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Activate => "activate",
            Self::Deactivate => "deactivate",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            "activate" => Ok(Self::Activate),
            "deactivate" => Ok(Self::Deactivate),
            _ => Err(AppError::validation(format!("Invalid audit action: '{s}'"))),
        }
    }
}
