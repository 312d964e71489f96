//! Company-to-location mapping rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orgchart_core::types::{CompanyId, CompanyLocationId, LocationId};

use crate::record::{EntityType, impl_record};
use crate::status::RecordStatus;

/// Links a company to one of the locations it operates from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyLocation {
    /// Unique mapping identifier.
    pub id: CompanyLocationId,
    /// The company.
    pub company_id: CompanyId,
    /// The location.
    pub location_id: LocationId,
    /// Whether this is the company's primary site.
    pub is_primary: bool,
    /// Mapping status.
    pub status: RecordStatus,
    /// When the mapping was created.
    pub created_at: DateTime<Utc>,
    /// When the mapping was last updated.
    pub updated_at: DateTime<Utc>,
}

impl_record!(
    CompanyLocation,
    CompanyLocationId,
    RecordStatus,
    EntityType::CompanyLocation,
    |m| format!("{} @ {}", m.company_id, m.location_id)
);

/// Data required to map a company to a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCompanyLocation {
    /// The company.
    pub company_id: CompanyId,
    /// The location.
    pub location_id: LocationId,
    /// Whether this is the primary site.
    #[serde(default)]
    pub is_primary: bool,
}

impl CreateCompanyLocation {
    /// Build the stored row.
    pub fn into_record(self, now: DateTime<Utc>) -> CompanyLocation {
        CompanyLocation {
            id: CompanyLocationId::new(),
            company_id: self.company_id,
            location_id: self.location_id,
            is_primary: self.is_primary,
            status: RecordStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }
}
