use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::numeric::lenient_f64;

/// Authoritative per-room totals produced by the upstream calculator.
///
/// Per-wall numbers are a cosmetic decomposition of these values: they must
/// add back up to them and never exceed them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RoomAggregate {
    pub room_name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub walls_gross: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub walls_openings: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub ceramic_wall: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub ceramic_floor: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub ceramic_ceiling: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub paint_walls: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub paint_ceiling: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub plaster_walls: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub plaster_ceiling: f64,
}

impl RoomAggregate {
    /// An all-zero aggregate for a room the calculator has not covered.
    #[must_use]
    pub fn empty(room_name: impl Into<String>) -> Self {
        Self {
            room_name: room_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn walls_net(&self) -> f64 {
        (self.walls_gross - self.walls_openings).max(0.0)
    }

    #[must_use]
    pub fn ceramic_total(&self) -> f64 {
        self.ceramic_wall + self.ceramic_floor + self.ceramic_ceiling
    }

    #[must_use]
    pub fn paint_total(&self) -> f64 {
        self.paint_walls + self.paint_ceiling
    }

    #[must_use]
    pub fn plaster_total(&self) -> f64 {
        self.plaster_walls + self.plaster_ceiling
    }
}
