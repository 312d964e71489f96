//! Status enumerations for every entity table.
//!
//! Transitions between statuses are unconstrained; referential guards only
//! run when a row is about to enter [`Lifecycle::is_inactive`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use orgchart_core::AppError;

/// Common behaviour of the per-table status enums.
pub trait Lifecycle: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Whether this status counts as "active" for guards and audit actions.
    fn is_active(&self) -> bool;

    /// Whether this status is the plain `inactive` state that guards protect.
    fn is_inactive(&self) -> bool;

    /// The lowercase wire name.
    fn as_str(&self) -> &'static str;
}

/// Two-state status used by most tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// The row is in use.
    #[default]
    Active,
    /// The row has been retired.
    Inactive,
}

impl Lifecycle for RecordStatus {
    fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    fn is_inactive(&self) -> bool {
        matches!(self, Self::Inactive)
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(AppError::validation(format!(
                "Invalid status: '{s}'. Expected one of: active, inactive"
            ))),
        }
    }
}

/// Department status; departments can additionally be archived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepartmentStatus {
    /// The unit is operating.
    #[default]
    Active,
    /// The unit is temporarily not in use.
    Inactive,
    /// The unit is retained for history only.
    Archived,
}

impl Lifecycle for DepartmentStatus {
    fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    fn is_inactive(&self) -> bool {
        matches!(self, Self::Inactive)
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for DepartmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DepartmentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "archived" => Ok(Self::Archived),
            _ => Err(AppError::validation(format!(
                "Invalid department status: '{s}'. Expected one of: active, inactive, archived"
            ))),
        }
    }
}

/// Cost center status; a center can be frozen against new postings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostCenterStatus {
    /// Accepting postings.
    #[default]
    Active,
    /// Closed.
    Inactive,
    /// Temporarily blocked.
    Frozen,
}

impl Lifecycle for CostCenterStatus {
    fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    fn is_inactive(&self) -> bool {
        matches!(self, Self::Inactive)
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Frozen => "frozen",
        }
    }
}

impl fmt::Display for CostCenterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CostCenterStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "frozen" => Ok(Self::Frozen),
            _ => Err(AppError::validation(format!(
                "Invalid cost center status: '{s}'. Expected one of: active, inactive, frozen"
            ))),
        }
    }
}
