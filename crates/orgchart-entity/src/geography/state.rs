//! State entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use orgchart_core::types::patch;
use orgchart_core::types::{CountryId, StateId};

use crate::record::{EntityType, RecordPatch, impl_record};
use crate::status::RecordStatus;

/// A geography state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoState {
    /// Unique state identifier.
    pub id: StateId,
    /// State name.
    pub name: String,
    /// Short code.
    pub code: String,
    /// Containing country.
    pub country_id: CountryId,
    /// State status.
    pub status: RecordStatus,
    /// When the state was created.
    pub created_at: DateTime<Utc>,
    /// When the state was last updated.
    pub updated_at: DateTime<Utc>,
}

impl_record!(GeoState, StateId, RecordStatus, EntityType::State, |g| g.name.clone());

/// Data required to create a new state.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateState {
    /// State name.
    #[validate(length(min = 1, message = "State name is required"))]
    pub name: String,
    /// Short code.
    #[validate(length(min = 1, message = "State code is required"))]
    pub code: String,
    /// Containing country.
    pub country_id: CountryId,
    /// Initial status.
    #[serde(default)]
    pub status: RecordStatus,
}

impl CreateState {
    /// Build the stored row.
    pub fn into_record(self, now: DateTime<Utc>) -> GeoState {
        GeoState {
            id: StateId::new(),
            name: self.name,
            code: self.code,
            country_id: self.country_id,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateState {
    /// New name.
    #[serde(default)]
    #[validate(length(min = 1, message = "State name cannot be empty"))]
    pub name: Option<String>,
    /// New code.
    #[serde(default)]
    #[validate(length(min = 1, message = "State code cannot be empty"))]
    pub code: Option<String>,
    /// Move under another parent.
    #[serde(default)]
    pub country_id: Option<CountryId>,
    /// New status.
    #[serde(default)]
    pub status: Option<RecordStatus>,
}

impl RecordPatch for UpdateState {
    type Target = GeoState;

    fn status(&self) -> Option<RecordStatus> {
        self.status
    }

    fn apply_to(self, target: &mut GeoState) {
        patch::apply(&mut target.name, self.name);
        patch::apply(&mut target.code, self.code);
        patch::apply(&mut target.country_id, self.country_id);
        patch::apply(&mut target.status, self.status);
    }
}
