//! Ceramic wall-zone normalization.
//!
//! Wall zones drift out of step with the wall model: a zone tiling "Wall 4"
//! may carry the whole room's perimeter, or a stale `area` left from an older
//! wall length. This pass rebinds each wall zone to its room and wall and
//! recomputes its stored area from current geometry.

use std::sync::LazyLock;

use bilind_core::entities::{CeramicZone, Room};
use bilind_core::enums::SurfaceType;
use bilind_core::responses::NormalizeZonesResponse;
use regex::{Regex, RegexBuilder};
use tracing::debug;

/// Stale-override threshold for per-wall zones, relative to geometry.
const PER_WALL_OVERRIDE_RATIO: f64 = 1.1;

/// Labels that mark a legacy zone name as `"<label> - <room> - <wall>"`.
const CERAMIC_LABELS: [&str; 2] = ["سيراميك", "ceramic"];

static WALL_NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    RegexBuilder::new(r"(?:\bwall\b|جدار)\s*([0-9]+)")
        .case_insensitive(true)
        .build()
        .ok()
});

/// Output of [`normalize_wall_zones`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneNormalization {
    /// Every input zone, corrected where possible, in input order.
    pub zones: Vec<CeramicZone>,
    pub updated: u32,
    pub skipped: u32,
}

impl From<ZoneNormalization> for NormalizeZonesResponse {
    fn from(result: ZoneNormalization) -> Self {
        Self {
            updated: result.updated,
            skipped: result.skipped,
            zones: result.zones,
        }
    }
}

/// Wall number in labels such as `Wall 4` or `جدار 4`.
#[must_use]
pub fn wall_number(text: &str) -> Option<u32> {
    let regex = WALL_NUMBER.as_ref()?;
    regex.captures(text)?.get(1)?.as_str().parse().ok()
}

/// Room name embedded in a legacy zone name, e.g. `"سيراميك - بلكون 2 - جدار 4"`.
#[must_use]
pub fn legacy_room_name(zone_name: &str) -> Option<&str> {
    let parts: Vec<&str> = zone_name.split('-').map(str::trim).collect();
    if parts.len() < 3 {
        return None;
    }
    let label = parts[0].to_lowercase();
    if CERAMIC_LABELS.iter().any(|marker| label.contains(marker)) && !parts[1].is_empty() {
        Some(parts[1])
    } else {
        None
    }
}

/// Realign wall-type zones with the rooms' current walls.
///
/// Floor and ceiling zones pass through untouched and are not counted.
#[must_use]
pub fn normalize_wall_zones(rooms: &[Room], zones: &[CeramicZone]) -> ZoneNormalization {
    let mut result = ZoneNormalization {
        zones: Vec::with_capacity(zones.len()),
        ..ZoneNormalization::default()
    };

    for zone in zones {
        if zone.surface_type != SurfaceType::Wall {
            result.zones.push(zone.clone());
            continue;
        }
        match normalize_zone(rooms, zone) {
            Some(fixed) => {
                result.updated += 1;
                result.zones.push(fixed);
            }
            None => {
                debug!(zone = %zone.name, "wall zone skipped: no matching room or wall");
                result.skipped += 1;
                result.zones.push(zone.clone());
            }
        }
    }
    result
}

fn normalize_zone(rooms: &[Room], zone: &CeramicZone) -> Option<CeramicZone> {
    let room_name = zone
        .room_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .or_else(|| legacy_room_name(&zone.name))?;
    let room = rooms.iter().find(|room| room.name == room_name)?;

    let wall_name = zone.wall_name.as_deref().filter(|name| !name.is_empty());
    let number = wall_name
        .and_then(wall_number)
        .or_else(|| wall_number(&zone.name));

    let mut fixed = zone.clone();
    fixed.room_name = Some(room.name.clone());

    if wall_name.is_some() || number.is_some() {
        let wall = room
            .walls
            .iter()
            .find(|wall| wall_name.is_some() && wall.name.as_deref() == wall_name)
            .or_else(|| {
                let number = number?;
                room.walls.iter().find(|wall| {
                    wall.name.as_deref().and_then(wall_number) == Some(number)
                })
            })?;
        if wall.length <= 0.0 {
            return None;
        }
        fixed.wall_name = wall.name.clone();
        fixed.perimeter = wall.length;
        if fixed.height > 0.0 {
            let geometry = fixed.perimeter * fixed.height;
            match fixed.effective_area.filter(|area| *area != 0.0) {
                Some(effective) if effective <= geometry * PER_WALL_OVERRIDE_RATIO => {
                    fixed.area = effective;
                }
                Some(_) => {
                    fixed.effective_area = None;
                    fixed.area = geometry;
                }
                None => fixed.area = geometry,
            }
        }
        return Some(fixed);
    }

    let total_length = room.wall_length_total();
    if total_length <= 0.0 {
        return None;
    }
    fixed.perimeter = total_length;
    if fixed.height > 0.0 {
        fixed.area = fixed
            .effective_area
            .filter(|area| *area != 0.0)
            .unwrap_or(total_length * fixed.height);
    }
    Some(fixed)
}
