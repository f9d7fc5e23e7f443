//! Detail books: reporting-ready line items built from a room breakdown.
//!
//! One line per wall in each book, plus ceiling and floor lines taken straight
//! from the room aggregate. Nothing here formats numbers or files.

use bilind_core::entities::RoomAggregate;
use bilind_core::enums::LineKind;
use bilind_core::reports::{
    CeramicLine, DetailBooks, PaintLine, PlasterLine, RoomBreakdown, WallDetailLine,
};

/// Build the wall, plaster, paint, and ceramic books for one room.
///
/// A room without wall rows contributes nothing, not even ceiling lines.
#[must_use]
pub fn detail_books(breakdown: &RoomBreakdown, ssot: &RoomAggregate) -> DetailBooks {
    let mut books = DetailBooks::default();
    if breakdown.rows.is_empty() {
        return books;
    }
    let room_name = &breakdown.room_name;

    for row in &breakdown.rows {
        let notes = breakdown.row_notes(row);
        books.walls.push(WallDetailLine {
            room_name: room_name.clone(),
            wall: row.name.clone(),
            length: row.length,
            height: row.height,
            gross: row.gross,
            openings: row.open_alloc,
            net_after_open: row.net_after_open,
            ceramic: row.cer_alloc,
            paint_deduction: row.paint_deduction(),
            paint: row.paint_alloc,
            notes: notes.clone(),
        });
        books.plaster.push(PlasterLine {
            kind: LineKind::Wall,
            room_name: room_name.clone(),
            surface: row.name.clone(),
            length: Some(row.length),
            height: Some(row.height),
            area: row.gross,
            openings: row.open_alloc,
            net: row.plaster_alloc,
            notes: notes.clone(),
        });
        books.paint.push(PaintLine {
            kind: LineKind::Wall,
            room_name: room_name.clone(),
            surface: row.name.clone(),
            length: Some(row.length),
            height: Some(row.height),
            base: row.net_after_open,
            ceramic: row.cer_alloc,
            net: row.paint_alloc,
            notes: notes.clone(),
        });
        books.ceramic.push(CeramicLine {
            kind: LineKind::Wall,
            room_name: room_name.clone(),
            surface: row.name.clone(),
            length: Some(row.length),
            height: Some(row.height),
            area: row.cer_alloc,
            notes,
        });
    }

    if ssot.plaster_ceiling > 0.0 {
        books.plaster.push(PlasterLine {
            kind: LineKind::Ceiling,
            room_name: room_name.clone(),
            surface: LineKind::Ceiling.to_string(),
            length: None,
            height: None,
            area: ssot.plaster_ceiling,
            openings: 0.0,
            net: ssot.plaster_ceiling,
            notes: String::new(),
        });
    }

    if ssot.paint_ceiling > 0.0 || ssot.ceramic_ceiling > 0.0 {
        books.paint.push(PaintLine {
            kind: LineKind::Ceiling,
            room_name: room_name.clone(),
            surface: LineKind::Ceiling.to_string(),
            length: None,
            height: None,
            base: ssot.paint_ceiling + ssot.paint_ceiling.min(ssot.ceramic_ceiling),
            ceramic: ssot.ceramic_ceiling,
            net: ssot.paint_ceiling,
            notes: String::new(),
        });
    }

    for (kind, area) in [
        (LineKind::Floor, ssot.ceramic_floor),
        (LineKind::Ceiling, ssot.ceramic_ceiling),
    ] {
        if area > 0.0 {
            books.ceramic.push(CeramicLine {
                kind,
                room_name: room_name.clone(),
                surface: kind.to_string(),
                length: None,
                height: None,
                area,
                notes: String::new(),
            });
        }
    }

    books
}
