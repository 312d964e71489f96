//! Newtype wrappers around [`uuid::Uuid`] for every entity identifier.
//!
//! Distinct types keep a `GradeId` from being passed where a
//! `DesignationId` is expected. Cross-references between tables are always
//! stored as these ids, never as embedded records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a newtype ID wrapper around `Uuid`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Return the inner UUID value.
            pub fn into_uuid(self) -> Uuid {
                self.0
            }

            /// Return a reference to the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a company.
    CompanyId
);

define_id!(
    /// Unique identifier for a division.
    DivisionId
);

define_id!(
    /// Unique identifier for a department, sub-department, line, or team.
    DepartmentId
);

define_id!(
    /// Unique identifier for a pay grade.
    GradeId
);

define_id!(
    /// Unique identifier for a designation (job title).
    DesignationId
);

define_id!(
    /// Unique identifier for a physical or virtual location.
    LocationId
);

define_id!(
    /// Unique identifier for a geography country.
    CountryId
);

define_id!(
    /// Unique identifier for a geography state.
    StateId
);

define_id!(
    /// Unique identifier for a geography city.
    CityId
);

define_id!(
    /// Unique identifier for a cost center.
    CostCenterId
);

define_id!(
    /// Unique identifier for a company-to-location mapping.
    CompanyLocationId
);

define_id!(
    /// Unique identifier for an employee (referenced, not stored here).
    EmployeeId
);

define_id!(
    /// Unique identifier for an audit log entry.
    AuditEntryId
);
