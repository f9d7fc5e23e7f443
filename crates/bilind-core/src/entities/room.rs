use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::WallSegment;
use crate::numeric::{lenient_f64, lenient_opt_f64};

/// A room (or balcony) with its optional explicit wall subdivision.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Room {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub perimeter: f64,
    /// Uniform wall height for the room; segment heights take precedence.
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    #[schemars(with = "Option<f64>")]
    pub wall_height: Option<f64>,
    /// Names of openings attached to this room.
    #[serde(default)]
    pub opening_ids: Vec<String>,
    #[serde(default)]
    pub walls: Vec<WallSegment>,
}

impl Room {
    #[must_use]
    pub fn new(name: impl Into<String>, perimeter: f64, wall_height: Option<f64>) -> Self {
        Self {
            name: name.into(),
            perimeter,
            wall_height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_walls(mut self, walls: Vec<WallSegment>) -> Self {
        self.walls = walls;
        self
    }

    /// Resolve a wall's height: segment height, then room height, then `project_default`.
    #[must_use]
    pub fn resolve_height(&self, segment_height: f64, project_default: f64) -> f64 {
        if segment_height > 0.0 {
            return segment_height;
        }
        match self.wall_height {
            Some(height) if height > 0.0 => height,
            _ => project_default,
        }
    }

    /// Total wall length: explicit segments when present, else the room perimeter.
    #[must_use]
    pub fn wall_length_total(&self) -> f64 {
        if self.walls.is_empty() {
            self.perimeter
        } else {
            self.walls.iter().map(|wall| wall.length).sum()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_fallback_chain() {
        let room = Room::new("Kitchen", 14.0, Some(2.8));
        assert!((room.resolve_height(3.1, 3.0) - 3.1).abs() < 1e-12);
        assert!((room.resolve_height(0.0, 3.0) - 2.8).abs() < 1e-12);

        let bare = Room::new("Store", 8.0, None);
        assert!((bare.resolve_height(0.0, 3.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn wall_length_total_prefers_segments() {
        let room = Room::new("Balcony", 15.7, None).with_walls(vec![
            WallSegment::new("Wall 1", 6.6, 3.0),
            WallSegment::new("Wall 2", 1.5, 1.5),
        ]);
        assert!((room.wall_length_total() - 8.1).abs() < 1e-12);
        assert!((Room::new("Hall", 12.0, None).wall_length_total() - 12.0).abs() < 1e-12);
    }
}
