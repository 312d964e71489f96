//! Location entity model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use orgchart_core::AppError;
use orgchart_core::types::LocationId;
use orgchart_core::types::patch;

use crate::address::Address;
use crate::record::{EntityType, RecordPatch, impl_record};
use crate::status::RecordStatus;

/// The role a location plays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    /// Company headquarters.
    Headquarters,
    /// Regional office.
    RegionalOffice,
    /// Branch office.
    #[default]
    Branch,
    /// Warehouse.
    Warehouse,
    /// Hub for remote workers.
    RemoteHub,
}

impl LocationKind {
    /// Return the kind as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Headquarters => "headquarters",
            Self::RegionalOffice => "regional_office",
            Self::Branch => "branch",
            Self::Warehouse => "warehouse",
            Self::RemoteHub => "remote_hub",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LocationKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "headquarters" => Ok(Self::Headquarters),
            "regional_office" => Ok(Self::RegionalOffice),
            "branch" => Ok(Self::Branch),
            "warehouse" => Ok(Self::Warehouse),
            "remote_hub" => Ok(Self::RemoteHub),
            _ => Err(AppError::validation(format!("Invalid location kind: '{s}'"))),
        }
    }
}

/// A physical or virtual place of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique location identifier.
    pub id: LocationId,
    /// Location name.
    pub name: String,
    /// Short code.
    pub code: String,
    /// Role of the location.
    pub kind: LocationKind,
    /// Postal address.
    pub address: Address,
    /// Whether the location has no physical premises.
    pub is_virtual: bool,
    /// Location status.
    pub status: RecordStatus,
    /// When the location was created.
    pub created_at: DateTime<Utc>,
    /// When the location was last updated.
    pub updated_at: DateTime<Utc>,
}

impl_record!(Location, LocationId, RecordStatus, EntityType::Location, |l| l.name.clone());

/// Data required to create a new location.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLocation {
    /// Location name.
    #[validate(length(min = 1, message = "Location name is required"))]
    pub name: String,
    /// Short code.
    #[validate(length(min = 1, message = "Location code is required"))]
    pub code: String,
    /// Role of the location.
    #[serde(default)]
    pub kind: LocationKind,
    /// Postal address.
    #[serde(default)]
    pub address: Address,
    /// Whether the location is virtual.
    #[serde(default)]
    pub is_virtual: bool,
    /// Initial status.
    #[serde(default)]
    pub status: RecordStatus,
}

impl CreateLocation {
    /// Build the stored row.
    pub fn into_record(self, now: DateTime<Utc>) -> Location {
        Location {
            id: LocationId::new(),
            name: self.name,
            code: self.code,
            kind: self.kind,
            address: self.address,
            is_virtual: self.is_virtual,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a location.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateLocation {
    /// New name.
    #[serde(default)]
    #[validate(length(min = 1, message = "Location name cannot be empty"))]
    pub name: Option<String>,
    /// New code.
    #[serde(default)]
    #[validate(length(min = 1, message = "Location code cannot be empty"))]
    pub code: Option<String>,
    /// New kind.
    #[serde(default)]
    pub kind: Option<LocationKind>,
    /// Replacement address.
    #[serde(default)]
    pub address: Option<Address>,
    /// New virtual flag.
    #[serde(default)]
    pub is_virtual: Option<bool>,
    /// New status.
    #[serde(default)]
    pub status: Option<RecordStatus>,
}

impl RecordPatch for UpdateLocation {
    type Target = Location;

    fn status(&self) -> Option<RecordStatus> {
        self.status
    }

    fn apply_to(self, target: &mut Location) {
        patch::apply(&mut target.name, self.name);
        patch::apply(&mut target.code, self.code);
        patch::apply(&mut target.kind, self.kind);
        patch::apply(&mut target.address, self.address);
        patch::apply(&mut target.is_virtual, self.is_virtual);
        patch::apply(&mut target.status, self.status);
    }
}
