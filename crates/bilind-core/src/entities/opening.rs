use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{OpeningType, ShareMode};
use crate::numeric::{
    default_quantity, lenient_count_map, lenient_f64, lenient_opt_f64, lenient_quantity,
    lenient_share_map,
};

/// A door or window, possibly shared between rooms and bound to a host wall.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Opening {
    /// Identifier such as `D1` or `W2`; rooms reference openings by this name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_type: Option<OpeningType>,
    #[serde(default, alias = "w", deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub width: f64,
    #[serde(default, alias = "h", deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub height: f64,
    #[serde(
        default = "default_quantity",
        alias = "qty",
        deserialize_with = "lenient_quantity"
    )]
    #[schemars(with = "u32")]
    pub quantity: u32,
    /// Legacy stored per-piece area; wins over `width × height` when present.
    #[serde(
        default,
        rename = "area_each",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_opt_f64"
    )]
    #[schemars(with = "Option<f64>")]
    pub stored_area_each: Option<f64>,
    /// Legacy stored total area; wins over `area_each × quantity` when present.
    #[serde(
        default,
        rename = "area",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_opt_f64"
    )]
    #[schemars(with = "Option<f64>")]
    pub stored_area: Option<f64>,
    /// Free-text host wall name (matched case/space-insensitively).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_wall: Option<String>,
    /// Stable host wall identifier; preferred over `host_wall` when it resolves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_wall_id: Option<String>,
    #[serde(default)]
    pub assigned_rooms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_mode: Option<ShareMode>,
    /// Room name → fraction of the total area (0–1).
    #[serde(default, deserialize_with = "lenient_share_map")]
    pub room_shares: BTreeMap<String, f64>,
    /// Room name → piece count; overrides the equal split for listed rooms.
    #[serde(default, deserialize_with = "lenient_count_map")]
    pub room_quantities: BTreeMap<String, i64>,
}

impl Opening {
    #[must_use]
    pub fn new(name: impl Into<String>, width: f64, height: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            opening_type: None,
            width,
            height,
            quantity: quantity.max(1),
            stored_area_each: None,
            stored_area: None,
            host_wall: None,
            host_wall_id: None,
            assigned_rooms: Vec::new(),
            share_mode: None,
            room_shares: BTreeMap::new(),
            room_quantities: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn door(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            opening_type: Some(OpeningType::Door),
            ..Self::new(name, width, height, 1)
        }
    }

    #[must_use]
    pub fn window(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            opening_type: Some(OpeningType::Window),
            ..Self::new(name, width, height, 1)
        }
    }

    #[must_use]
    pub fn hosted_on(mut self, wall: impl Into<String>) -> Self {
        self.host_wall = Some(wall.into());
        self
    }

    #[must_use]
    pub fn assigned_to<I, S>(mut self, rooms: I, mode: Option<ShareMode>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assigned_rooms = rooms.into_iter().map(Into::into).collect();
        self.share_mode = mode;
        self
    }

    /// Area of a single piece.
    #[must_use]
    pub fn area_each(&self) -> f64 {
        self.stored_area_each
            .unwrap_or_else(|| self.width * self.height)
            .max(0.0)
    }

    /// Area of all pieces together.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.stored_area
            .unwrap_or_else(|| self.area_each() * f64::from(self.quantity.max(1)))
            .max(0.0)
    }

    /// Trimmed name used for de-duplication and `opening_ids` lookups.
    #[must_use]
    pub fn key(&self) -> &str {
        self.name.trim()
    }

    /// Whether the record carries room assignments, shares, or per-room counts.
    #[must_use]
    pub fn has_room_attribution(&self) -> bool {
        self.assigned_rooms.iter().any(|room| !room.trim().is_empty())
            || !self.room_shares.is_empty()
            || !self.room_quantities.is_empty()
    }

    /// Whether the record names `room` in any of its attribution fields.
    #[must_use]
    pub fn mentions_room(&self, room: &str) -> bool {
        !room.is_empty()
            && (self.assigned_rooms.iter().any(|r| r == room)
                || self.room_shares.contains_key(room)
                || self.room_quantities.contains_key(room))
    }
}
