//! City entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use orgchart_core::types::patch;
use orgchart_core::types::{CityId, StateId};

use crate::record::{EntityType, RecordPatch, impl_record};
use crate::status::RecordStatus;

/// A geography city, contained in exactly one state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoCity {
    /// Unique city identifier.
    pub id: CityId,
    /// City name.
    pub name: String,
    /// Short code.
    pub code: String,
    /// Containing state.
    pub state_id: StateId,
    /// City status.
    pub status: RecordStatus,
    /// When the city was created.
    pub created_at: DateTime<Utc>,
    /// When the city was last updated.
    pub updated_at: DateTime<Utc>,
}

impl_record!(GeoCity, CityId, RecordStatus, EntityType::City, |g| g.name.clone());

/// Data required to create a new city.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCity {
    /// City name.
    #[validate(length(min = 1, message = "City name is required"))]
    pub name: String,
    /// Short code.
    #[validate(length(min = 1, message = "City code is required"))]
    pub code: String,
    /// Containing state.
    pub state_id: StateId,
    /// Initial status.
    #[serde(default)]
    pub status: RecordStatus,
}

impl CreateCity {
    /// Build the stored row.
    pub fn into_record(self, now: DateTime<Utc>) -> GeoCity {
        GeoCity {
            id: CityId::new(),
            name: self.name,
            code: self.code,
            state_id: self.state_id,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a city.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCity {
    /// New name.
    #[serde(default)]
    #[validate(length(min = 1, message = "City name cannot be empty"))]
    pub name: Option<String>,
    /// New code.
    #[serde(default)]
    #[validate(length(min = 1, message = "City code cannot be empty"))]
    pub code: Option<String>,
    /// Move under another parent.
    #[serde(default)]
    pub state_id: Option<StateId>,
    /// New status.
    #[serde(default)]
    pub status: Option<RecordStatus>,
}

impl RecordPatch for UpdateCity {
    type Target = GeoCity;

    fn status(&self) -> Option<RecordStatus> {
        self.status
    }

    fn apply_to(self, target: &mut GeoCity) {
        patch::apply(&mut target.name, self.name);
        patch::apply(&mut target.code, self.code);
        patch::apply(&mut target.state_id, self.state_id);
        patch::apply(&mut target.status, self.status);
    }
}
