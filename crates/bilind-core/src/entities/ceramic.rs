use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{SurfaceType, lenient_surface_type};
use crate::numeric::{lenient_f64, lenient_opt_f64};

/// Grout consumption in kg/m² (2–3 mm joints).
pub const GROUT_RATE: f64 = 0.5;

fn default_category() -> String {
    "Other".to_string()
}

/// A ceramic tile area on a wall, floor, or ceiling of a room.
///
/// Several area fields may disagree: `perimeter × height` is the geometry,
/// `effective_area` is a manual override or deduction result, and `area` is
/// whatever was stored last (possibly stale). The engine's zone reconciler
/// picks one authoritative value.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CeramicZone {
    #[serde(default)]
    pub name: String,
    /// Free text, typically `Kitchen`, `Bathroom`, or `Other`.
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub perimeter: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub height: f64,
    /// Height above the floor where tiling starts.
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub start_height: f64,
    #[serde(default, deserialize_with = "lenient_surface_type")]
    pub surface_type: SurfaceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    #[schemars(with = "Option<f64>")]
    pub effective_area: Option<f64>,
    /// Legacy stored area.
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub area: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl Default for CeramicZone {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: default_category(),
            perimeter: 0.0,
            height: 0.0,
            start_height: 0.0,
            surface_type: SurfaceType::Wall,
            room_name: None,
            wall_name: None,
            wall_id: None,
            effective_area: None,
            area: 0.0,
            notes: String::new(),
        }
    }
}

impl CeramicZone {
    /// Wall tiling band of `perimeter × height`.
    #[must_use]
    pub fn for_wall(room_name: impl Into<String>, perimeter: f64, height: f64) -> Self {
        Self {
            perimeter,
            height,
            room_name: Some(room_name.into()),
            area: perimeter * height,
            ..Self::default()
        }
    }

    /// Floor tiling entered by area only, with placeholder 1×1 geometry.
    #[must_use]
    pub fn for_floor(room_name: impl Into<String>, area: f64) -> Self {
        Self {
            perimeter: 1.0,
            height: 1.0,
            surface_type: SurfaceType::Floor,
            room_name: Some(room_name.into()),
            effective_area: Some(area),
            area,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn on_wall(mut self, wall_name: impl Into<String>) -> Self {
        self.wall_name = Some(wall_name.into());
        self
    }

    /// Adhesive quantity for the stored area.
    #[must_use]
    pub fn adhesive_kg(&self) -> f64 {
        self.area * self.surface_type.adhesive_rate()
    }

    /// Grout quantity for the stored area.
    #[must_use]
    pub fn grout_kg(&self) -> f64 {
        self.area * GROUT_RATE
    }
}
