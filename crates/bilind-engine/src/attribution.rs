//! Opening-to-room attribution.
//!
//! An opening can be shared between rooms through explicit assignments,
//! fractional shares, per-room piece counts, or by being listed in several
//! rooms' `opening_ids`. These functions decide how much of its area each
//! room carries.

use std::collections::HashMap;

use bilind_core::entities::{Opening, Room};
use bilind_core::enums::ShareMode;

/// Rooms an opening belongs to: explicit assignments first, then rooms that
/// list it in `opening_ids`. Trimmed and de-duplicated, in that order.
#[must_use]
pub fn rooms_for_opening(opening: &Opening, rooms: &[Room]) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    let mut push = |name: &str| {
        let name = name.trim();
        if !name.is_empty() && !result.iter().any(|seen| seen == name) {
            result.push(name.to_string());
        }
    };

    for name in &opening.assigned_rooms {
        push(name);
    }
    let key = opening.key();
    if !key.is_empty() {
        for room in rooms {
            if room.opening_ids.iter().any(|id| id.trim() == key) {
                push(&room.name);
            }
        }
    }
    result
}

/// Area of `opening` attributed to `room_name`.
///
/// Per-room piece counts win, then fractional shares, then explicit
/// assignments (`single` gives everything to the first room, otherwise an
/// equal split), then an equal split across the rooms in `rooms_for_opening`.
#[must_use]
pub fn room_opening_area(opening: &Opening, room_name: &str, rooms_for_opening: &[String]) -> f64 {
    let room_name = room_name.trim();
    if room_name.is_empty() {
        return 0.0;
    }

    if let Some(quantity) = opening.room_quantities.get(room_name) {
        #[allow(clippy::cast_precision_loss)]
        let pieces = (*quantity).max(0) as f64;
        return opening.area_each() * pieces;
    }

    if !opening.room_shares.is_empty() {
        let share = opening.room_shares.get(room_name).copied().unwrap_or(0.0);
        let share = if share.is_finite() { share.max(0.0) } else { 0.0 };
        return opening.total_area() * share;
    }

    if !opening.assigned_rooms.is_empty() {
        let mut assigned = opening.assigned_rooms.iter().map(|name| name.trim());
        if !assigned.clone().any(|name| name == room_name) {
            return 0.0;
        }
        if opening.share_mode == Some(ShareMode::Single) {
            return if assigned.next() == Some(room_name) {
                opening.total_area()
            } else {
                0.0
            };
        }
        return split(opening.total_area(), opening.assigned_rooms.len());
    }

    if rooms_for_opening.iter().any(|name| name == room_name) {
        return split(opening.total_area(), rooms_for_opening.len());
    }
    0.0
}

/// An opening no room claims: no attribution fields of its own and not
/// listed in any room's `opening_ids`.
#[must_use]
pub fn is_unattributed(opening: &Opening, rooms_for_opening: &[String]) -> bool {
    rooms_for_opening.is_empty() && !opening.has_room_attribution()
}

/// Openings relevant to `room`, de-duplicated by trimmed name.
///
/// A later record with the same name replaces an earlier one but keeps the
/// earlier one's position.
#[must_use]
pub fn openings_for_room<'a>(room: &Room, openings: &'a [Opening]) -> Vec<&'a Opening> {
    collect_openings(openings, |opening| attributed_to(opening, room))
}

/// Openings handed over as the room's own: those attributed to it, plus any
/// opening no room claims.
#[must_use]
pub fn own_openings<'a>(room: &Room, openings: &'a [Opening], rooms: &[Room]) -> Vec<&'a Opening> {
    collect_openings(openings, |opening| {
        attributed_to(opening, room) || is_unattributed(opening, &rooms_for_opening(opening, rooms))
    })
}

fn attributed_to(opening: &Opening, room: &Room) -> bool {
    let key = opening.key();
    let listed = !key.is_empty() && room.opening_ids.iter().any(|id| id.trim() == key);
    listed || opening.mentions_room(&room.name)
}

fn collect_openings<'a>(
    openings: &'a [Opening],
    keep: impl Fn(&Opening) -> bool,
) -> Vec<&'a Opening> {
    let mut result: Vec<&'a Opening> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for opening in openings {
        if !keep(opening) {
            continue;
        }
        let key = opening.key();
        if let Some(&position) = positions.get(key) {
            result[position] = opening;
        } else {
            positions.insert(key, result.len());
            result.push(opening);
        }
    }
    result
}

fn split(total: f64, parts: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let parts = parts.max(1) as f64;
    total / parts
}
