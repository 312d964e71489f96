//! Country entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use orgchart_core::types::patch;
use orgchart_core::types::CountryId;

use crate::record::{EntityType, RecordPatch, impl_record};
use crate::status::RecordStatus;

/// A geography country. `code` is expected to be an ISO 3166 alpha-2 code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoCountry {
    /// Unique country identifier.
    pub id: CountryId,
    /// Country name.
    pub name: String,
    /// Short code.
    pub code: String,
    /// Country status.
    pub status: RecordStatus,
    /// When the country was created.
    pub created_at: DateTime<Utc>,
    /// When the country was last updated.
    pub updated_at: DateTime<Utc>,
}

impl_record!(GeoCountry, CountryId, RecordStatus, EntityType::Country, |g| g.name.clone());

/// Data required to create a new country.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCountry {
    /// Country name.
    #[validate(length(min = 1, message = "Country name is required"))]
    pub name: String,
    /// Short code.
    #[validate(length(min = 1, message = "Country code is required"))]
    pub code: String,
    /// Initial status.
    #[serde(default)]
    pub status: RecordStatus,
}

impl CreateCountry {
    /// Build the stored row.
    pub fn into_record(self, now: DateTime<Utc>) -> GeoCountry {
        GeoCountry {
            id: CountryId::new(),
            name: self.name,
            code: self.code,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a country.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCountry {
    /// New name.
    #[serde(default)]
    #[validate(length(min = 1, message = "Country name cannot be empty"))]
    pub name: Option<String>,
    /// New code.
    #[serde(default)]
    #[validate(length(min = 1, message = "Country code cannot be empty"))]
    pub code: Option<String>,
    /// New status.
    #[serde(default)]
    pub status: Option<RecordStatus>,
}

impl RecordPatch for UpdateCountry {
    type Target = GeoCountry;

    fn status(&self) -> Option<RecordStatus> {
        self.status
    }

    fn apply_to(self, target: &mut GeoCountry) {
        patch::apply(&mut target.name, self.name);
        patch::apply(&mut target.code, self.code);
        patch::apply(&mut target.status, self.status);
    }
}
