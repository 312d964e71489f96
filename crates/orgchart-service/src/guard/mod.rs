//! Referential guards.
//!
//! A guard inspects the current tables and decides whether a row may enter
//! the `inactive` status or be deleted. Rules are pure functions over
//! [`Tables`](orgchart_store::Tables); the CRUD services call them while
//! holding the store write lock.

pub mod rules;
pub mod service;

use std::fmt;

use serde::{Deserialize, Serialize};

use orgchart_core::error::AppError;
use orgchart_core::result::AppResult;

pub use service::GuardService;

/// Outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardDecision {
    /// Whether the transition may proceed.
    pub allowed: bool,
    /// User-facing reason when blocked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl GuardDecision {
    /// The transition may proceed.
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    /// The transition is blocked for `reason`.
    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
        }
    }

    /// Convert into a result, mapping a denial to a guard violation.
    pub fn into_result(self) -> AppResult<()> {
        if self.allowed {
            return Ok(());
        }
        Err(AppError::guard_violation(
            self.reason
                .unwrap_or_else(|| "Operation blocked by a referential guard".to_string()),
        ))
    }
}

/// A named guard that can be evaluated without mutating anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardCheck {
    /// Grade -> inactive.
    DeactivateGrade,
    /// Designation -> inactive.
    DeactivateDesignation,
    /// Division -> inactive.
    DeactivateDivision,
    /// Department -> inactive.
    DeactivateDepartment,
    /// Department removal.
    DeleteDepartment,
    /// Location removal.
    DeleteLocation,
    /// Country removal.
    DeleteCountry,
    /// State removal.
    DeleteState,
}

impl GuardCheck {
    /// Every guard, in evaluation-table order.
    pub const ALL: [GuardCheck; 8] = [
        Self::DeactivateGrade,
        Self::DeactivateDesignation,
        Self::DeactivateDivision,
        Self::DeactivateDepartment,
        Self::DeleteDepartment,
        Self::DeleteLocation,
        Self::DeleteCountry,
        Self::DeleteState,
    ];

    /// The snake_case name, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeactivateGrade => "deactivate_grade",
            Self::DeactivateDesignation => "deactivate_designation",
            Self::DeactivateDivision => "deactivate_division",
            Self::DeactivateDepartment => "deactivate_department",
            Self::DeleteDepartment => "delete_department",
            Self::DeleteLocation => "delete_location",
            Self::DeleteCountry => "delete_country",
            Self::DeleteState => "delete_state",
        }
    }
}

impl fmt::Display for GuardCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GuardCheck {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| AppError::validation(format!("Unknown guard: '{s}'")))
    }
}
