//! Traits shared by every stored row and every update payload.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orgchart_core::AppError;

use crate::status::Lifecycle;

/// The kind of table a row lives in. Used as the audit `entity_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// [`crate::organization::Company`]
    Company,
    /// [`crate::organization::Division`]
    Division,
    /// [`crate::organization::Department`]
    Department,
    /// [`crate::job::Grade`]
    Grade,
    /// [`crate::job::Designation`]
    Designation,
    /// [`crate::location::Location`]
    Location,
    /// [`crate::location::CompanyLocation`]
    CompanyLocation,
    /// [`crate::geography::GeoCountry`]
    Country,
    /// [`crate::geography::GeoState`]
    State,
    /// [`crate::geography::GeoCity`]
    City,
    /// [`crate::finance::CostCenter`]
    CostCenter,
}

impl EntityType {
    /// Every entity type, in table order.
    pub const ALL: [EntityType; 11] = [
        Self::Company,
        Self::Division,
        Self::Department,
        Self::Grade,
        Self::Designation,
        Self::Location,
        Self::CompanyLocation,
        Self::Country,
        Self::State,
        Self::City,
        Self::CostCenter,
    ];

    /// The human label used in audit details, e.g. `"Cost Center"`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::Division => "Division",
            Self::Department => "Department",
            Self::Grade => "Grade",
            Self::Designation => "Designation",
            Self::Location => "Location",
            Self::CompanyLocation => "Company Location",
            Self::Country => "Country",
            Self::State => "State",
            Self::City => "City",
            Self::CostCenter => "Cost Center",
        }
    }

    /// The snake_case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Division => "division",
            Self::Department => "department",
            Self::Grade => "grade",
            Self::Designation => "designation",
            Self::Location => "location",
            Self::CompanyLocation => "company_location",
            Self::Country => "country",
            Self::State => "state",
            Self::City => "city",
            Self::CostCenter => "cost_center",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EntityType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| AppError::validation(format!("Unknown entity type: '{s}'")))
    }
}

/// A row stored in one of the in-memory tables.
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The typed identifier of this table.
    type Id: Copy + Eq + std::hash::Hash + fmt::Display + fmt::Debug + Into<Uuid> + Send + Sync;
    /// The status enum of this table.
    type Status: Lifecycle;

    /// The table this row belongs to.
    const ENTITY_TYPE: EntityType;

    /// Primary key.
    fn id(&self) -> Self::Id;

    /// Name recorded in audit entries.
    fn display_name(&self) -> String;

    /// Current status.
    fn status(&self) -> Self::Status;

    /// Re-stamp `updated_at`.
    fn touch(&mut self, at: DateTime<Utc>);
}

/// A partial update for a [`Record`].
pub trait RecordPatch: Send {
    /// The row type this patch applies to.
    type Target: Record;

    /// The requested status, if the patch sets one.
    fn status(&self) -> Option<<Self::Target as Record>::Status>;

    /// Overwrite the fields present in the patch.
    fn apply_to(self, target: &mut Self::Target);
}

/// Implement [`Record`] for a row type with the usual field names.
macro_rules! impl_record {
    ($ty:ty, $id:ty, $status:ty, $kind:expr, |$row:ident| $name:expr) => {
        impl $crate::record::Record for $ty {
            type Id = $id;
            type Status = $status;

            const ENTITY_TYPE: $crate::record::EntityType = $kind;

            fn id(&self) -> Self::Id {
                self.id
            }

            fn display_name(&self) -> String {
                let $row = self;
                $name
            }

            fn status(&self) -> Self::Status {
                self.status
            }

            fn touch(&mut self, at: chrono::DateTime<chrono::Utc>) {
                self.updated_at = at;
            }
        }
    };
}

pub(crate) use impl_record;
