use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{CeramicZone, Opening, Room, RoomAggregate};
use crate::errors::CoreError;
use crate::numeric::lenient_opt_f64;

/// A whole take-off document: rooms, openings, ceramic zones, and the
/// authoritative aggregates computed for each room.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Project {
    #[serde(default)]
    pub name: String,
    /// Project-wide wall height fallback; configuration supplies one when absent.
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    #[schemars(with = "Option<f64>")]
    pub default_wall_height: Option<f64>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub openings: Vec<Opening>,
    #[serde(default)]
    pub ceramic_zones: Vec<CeramicZone>,
    #[serde(default)]
    pub aggregates: Vec<RoomAggregate>,
}

impl Project {
    /// Decode a project document.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Json`] when `raw` is not a project document.
    pub fn from_json_str(raw: &str) -> Result<Self, CoreError> {
        serde_json::from_str(raw).map_err(CoreError::from)
    }

    /// Look up a room by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] when no room carries `name`.
    pub fn room(&self, name: &str) -> Result<&Room, CoreError> {
        self.rooms
            .iter()
            .find(|room| room.name == name)
            .ok_or_else(|| CoreError::room_not_found(name))
    }

    /// The aggregate for `room_name`, if the calculator produced one.
    #[must_use]
    pub fn aggregate_for(&self, room_name: &str) -> Option<&RoomAggregate> {
        self.aggregates
            .iter()
            .find(|aggregate| aggregate.room_name == room_name)
    }

    /// Effective project-wide height: the document's own value, else `fallback`.
    #[must_use]
    pub fn default_height_or(&self, fallback: f64) -> f64 {
        self.default_wall_height
            .filter(|height| *height > 0.0)
            .unwrap_or(fallback)
    }
}
