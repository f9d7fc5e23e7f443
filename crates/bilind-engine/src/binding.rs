//! Wall resolution and host binding.
//!
//! A room's walls come from its explicit segments or, failing that, one
//! synthetic wall along the room perimeter. Openings and ceramic zones bind to
//! those walls by stable identifier first and by normalized display name second.

use bilind_core::entities::Room;
use bilind_core::reports::PSEUDO_WALL_NAME;

/// A wall with its name and height fully resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedWall {
    pub id: Option<String>,
    pub name: String,
    pub length: f64,
    pub height: f64,
    pub pseudo: bool,
}

impl ResolvedWall {
    #[must_use]
    pub fn gross(&self) -> f64 {
        self.length * self.height
    }
}

/// Case-folded, trimmed text used for every name comparison.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Resolve the walls of `room`.
///
/// Heights fall back from the segment to the room to `default_height`.
/// A room without segments yields one perimeter wall, or nothing when its
/// perimeter or resolved height is not positive.
#[must_use]
pub fn resolve_walls(room: &Room, default_height: f64) -> Vec<ResolvedWall> {
    if room.walls.is_empty() {
        let height = room.resolve_height(0.0, default_height);
        if room.perimeter > 0.0 && height > 0.0 {
            return vec![ResolvedWall {
                id: None,
                name: PSEUDO_WALL_NAME.to_string(),
                length: room.perimeter,
                height,
                pseudo: true,
            }];
        }
        return Vec::new();
    }

    room.walls
        .iter()
        .enumerate()
        .map(|(index, wall)| ResolvedWall {
            id: wall
                .id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(ToString::to_string),
            name: wall.display_name(index),
            length: wall.length.max(0.0),
            height: room.resolve_height(wall.height, default_height).max(0.0),
            pseudo: false,
        })
        .collect()
}

/// Index of the wall a record is hosted on, if any.
#[must_use]
pub fn find_host(walls: &[ResolvedWall], id: Option<&str>, name: Option<&str>) -> Option<usize> {
    if let Some(id) = id.map(str::trim).filter(|id| !id.is_empty())
        && let Some(index) = walls.iter().position(|wall| wall.id.as_deref() == Some(id))
    {
        return Some(index);
    }

    let name = normalize_text(name?);
    if name.is_empty() {
        return None;
    }
    walls
        .iter()
        .position(|wall| normalize_text(&wall.name) == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bilind_core::entities::WallSegment;
    use pretty_assertions::assert_eq;

    fn two_wall_room() -> Room {
        let mut north = WallSegment::new("North", 4.0, 0.0);
        north.id = Some("w-1".into());
        Room::new("Hall", 0.0, Some(2.8)).with_walls(vec![north, WallSegment::default()])
    }

    #[test]
    fn segments_resolve_names_and_heights() {
        let walls = resolve_walls(&two_wall_room(), 3.0);
        assert_eq!(walls.len(), 2);
        assert_eq!(walls[0].name, "North");
        assert_eq!(walls[0].id.as_deref(), Some("w-1"));
        assert!((walls[0].height - 2.8).abs() < 1e-12);
        assert_eq!(walls[1].name, "Wall 2");
        assert!(!walls[1].pseudo);
    }

    #[test]
    fn perimeter_room_gets_pseudo_wall() {
        let room = Room::new("Store", 9.0, None);
        let walls = resolve_walls(&room, 3.0);
        assert_eq!(walls.len(), 1);
        assert!(walls[0].pseudo);
        assert_eq!(walls[0].name, PSEUDO_WALL_NAME);
        assert!((walls[0].gross() - 27.0).abs() < 1e-12);

        assert!(resolve_walls(&Room::new("Void", 0.0, None), 3.0).is_empty());
    }

    #[test]
    fn host_binding_prefers_identifier() {
        let walls = resolve_walls(&two_wall_room(), 3.0);
        assert_eq!(find_host(&walls, Some("w-1"), Some("Wall 2")), Some(0));
        assert_eq!(find_host(&walls, Some("missing"), Some("  wall 2 ")), Some(1));
        assert_eq!(find_host(&walls, None, Some("NORTH")), Some(0));
        assert_eq!(find_host(&walls, None, Some("South")), None);
        assert_eq!(find_host(&walls, None, Some("   ")), None);
        assert_eq!(find_host(&walls, None, None), None);
    }
}
