//! Table columns for the report types.

use bilind_core::entities::CeramicZone;
use bilind_core::reports::{
    CeramicLine, PaintLine, PlasterLine, RoomReport, WallDetailLine, WallRow,
};
use bilind_core::responses::ResolvedZone;

use super::table::{Tabular, number, opt_number};

/// Breakdown row paired with the notes of its room.
pub struct BreakdownLine<'a> {
    pub row: &'a WallRow,
    pub notes: String,
}

impl<'a> BreakdownLine<'a> {
    pub fn from_reports(reports: &'a [RoomReport]) -> Vec<Self> {
        reports
            .iter()
            .flat_map(|report| {
                report.breakdown.rows.iter().map(|row| Self {
                    row,
                    notes: report.breakdown.row_notes(row),
                })
            })
            .collect()
    }
}

impl Tabular for BreakdownLine<'_> {
    const HEADERS: &'static [&'static str] = &[
        "room", "wall", "length", "height", "gross", "openings", "net", "ceramic", "paint",
        "plaster", "notes",
    ];

    fn cells(&self) -> Vec<String> {
        let row = self.row;
        vec![
            row.room_name.clone(),
            row.name.clone(),
            number(row.length),
            number(row.height),
            number(row.gross),
            number(row.open_alloc),
            number(row.net_after_open),
            number(row.cer_alloc),
            number(row.paint_alloc),
            number(row.plaster_alloc),
            self.notes.clone(),
        ]
    }
}

impl Tabular for WallDetailLine {
    const HEADERS: &'static [&'static str] = &[
        "room", "wall", "length", "height", "gross", "openings", "net", "ceramic", "deduct",
        "paint", "notes",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.room_name.clone(),
            self.wall.clone(),
            number(self.length),
            number(self.height),
            number(self.gross),
            number(self.openings),
            number(self.net_after_open),
            number(self.ceramic),
            number(self.paint_deduction),
            number(self.paint),
            self.notes.clone(),
        ]
    }
}

impl Tabular for PlasterLine {
    const HEADERS: &'static [&'static str] = &[
        "kind", "room", "surface", "length", "height", "area", "openings", "net", "notes",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.kind.to_string(),
            self.room_name.clone(),
            self.surface.clone(),
            opt_number(self.length),
            opt_number(self.height),
            number(self.area),
            number(self.openings),
            number(self.net),
            self.notes.clone(),
        ]
    }
}

impl Tabular for PaintLine {
    const HEADERS: &'static [&'static str] = &[
        "kind", "room", "surface", "length", "height", "base", "ceramic", "net", "notes",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.kind.to_string(),
            self.room_name.clone(),
            self.surface.clone(),
            opt_number(self.length),
            opt_number(self.height),
            number(self.base),
            number(self.ceramic),
            number(self.net),
            self.notes.clone(),
        ]
    }
}

impl Tabular for CeramicLine {
    const HEADERS: &'static [&'static str] =
        &["kind", "room", "surface", "length", "height", "area", "notes"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.kind.to_string(),
            self.room_name.clone(),
            self.surface.clone(),
            opt_number(self.length),
            opt_number(self.height),
            number(self.area),
            self.notes.clone(),
        ]
    }
}

impl Tabular for ResolvedZone {
    const HEADERS: &'static [&'static str] =
        &["zone", "room", "surface", "gross", "effective", "area"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.room_name.clone().unwrap_or_else(|| String::from("-")),
            self.surface_type.to_string(),
            number(self.gross),
            opt_number(self.effective_area),
            number(self.area),
        ]
    }
}

impl Tabular for CeramicZone {
    const HEADERS: &'static [&'static str] = &[
        "zone", "room", "wall", "surface", "perimeter", "height", "effective", "area",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.room_name.clone().unwrap_or_else(|| String::from("-")),
            self.wall_name.clone().unwrap_or_else(|| String::from("-")),
            self.surface_type.to_string(),
            number(self.perimeter),
            number(self.height),
            opt_number(self.effective_area),
            number(self.area),
        ]
    }
}
