//! Per-wall report types produced by the breakdown engine.
//!
//! These are ephemeral: the engine builds them fresh on every call from
//! read-only inputs, and reporting/export layers render them. Nothing here is
//! persisted.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::RoomAggregate;
use crate::enums::{Layer, LineKind};

/// Separator used when notes are rendered as a single cell.
pub const NOTE_SEPARATOR: &str = "; ";

/// Annotation carried by rows built from a room perimeter instead of real walls.
pub const PSEUDO_WALL_ANNOTATION: &str = "no wall subdivision; room perimeter used";

/// Display name of the synthetic perimeter wall.
pub const PSEUDO_WALL_NAME: &str = "room perimeter";

// ---------------------------------------------------------------------------
// Breakdown
// ---------------------------------------------------------------------------

/// One wall's share of every room-level quantity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WallRow {
    pub room_name: String,
    pub name: String,
    pub length: f64,
    pub height: f64,
    pub gross: f64,
    pub open_alloc: f64,
    pub net_after_open: f64,
    pub cer_alloc: f64,
    pub paint_alloc: f64,
    pub plaster_alloc: f64,
    /// Built from the room perimeter because the room has no wall segments.
    pub pseudo: bool,
}

impl WallRow {
    #[must_use]
    pub const fn annotation(&self) -> Option<&'static str> {
        if self.pseudo {
            Some(PSEUDO_WALL_ANNOTATION)
        } else {
            None
        }
    }

    /// Area under ceramic that paint skips on this wall.
    #[must_use]
    pub fn paint_deduction(&self) -> f64 {
        self.cer_alloc.min(self.net_after_open).max(0.0)
    }
}

/// Advisory outcome recorded while decomposing a room.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BreakdownNote {
    /// Segment geometry disagreed with the authoritative gross and was rescaled.
    GrossScaled {
        geometry: f64,
        authoritative: f64,
        factor: f64,
    },
    /// Openings bound to walls asked for more than the room's opening total.
    HostedOpeningsScaled { demand: f64, target: f64 },
    /// Opening area could not fit on the walls.
    OpeningOverflow { unallocated: f64 },
    /// Ceramic bound to walls asked for more than the room's wall ceramic.
    HostedCeramicScaled { demand: f64, target: f64 },
    /// A finish layer placed less than its authoritative total.
    Shortfall { layer: Layer, amount: f64 },
}

impl fmt::Display for BreakdownNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GrossScaled {
                geometry,
                authoritative,
                ..
            } => write!(
                f,
                "wall gross scaled from {geometry:.2} to {authoritative:.2} m² to match the room total"
            ),
            Self::HostedOpeningsScaled { demand, target } => write!(
                f,
                "hosted openings scaled from {demand:.2} to {target:.2} m² to match the room total"
            ),
            Self::OpeningOverflow { unallocated } => write!(
                f,
                "openings exceed wall capacity by {unallocated:.2} m²"
            ),
            Self::HostedCeramicScaled { demand, target } => write!(
                f,
                "hosted ceramic scaled from {demand:.2} to {target:.2} m² to match the room total"
            ),
            Self::Shortfall { layer, amount } => {
                write!(f, "{layer} short by {amount:.2} m² against the room total")
            }
        }
    }
}

/// Per-wall decomposition of one room.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RoomBreakdown {
    pub room_name: String,
    pub rows: Vec<WallRow>,
    pub notes: Vec<BreakdownNote>,
}

impl RoomBreakdown {
    /// Notes rendered as one `"; "`-joined string.
    #[must_use]
    pub fn notes_text(&self) -> String {
        self.notes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(NOTE_SEPARATOR)
    }

    /// Notes for one row, with the pseudo-wall annotation appended where it applies.
    #[must_use]
    pub fn row_notes(&self, row: &WallRow) -> String {
        let common = self.notes_text();
        match row.annotation() {
            Some(annotation) if common.is_empty() => annotation.to_string(),
            Some(annotation) => format!("{common}{NOTE_SEPARATOR}{annotation}"),
            None => common,
        }
    }

    #[must_use]
    pub fn is_pseudo(&self) -> bool {
        self.rows.iter().any(|row| row.pseudo)
    }

    #[must_use]
    pub fn sum_of(&self, layer: Layer) -> f64 {
        self.rows
            .iter()
            .map(|row| match layer {
                Layer::Openings => row.open_alloc,
                Layer::Ceramic => row.cer_alloc,
                Layer::Paint => row.paint_alloc,
                Layer::Plaster => row.plaster_alloc,
            })
            .sum()
    }

    #[must_use]
    pub fn gross_total(&self) -> f64 {
        self.rows.iter().map(|row| row.gross).sum()
    }
}

// ---------------------------------------------------------------------------
// Detail books
// ---------------------------------------------------------------------------

/// Wall detail line: openings, ceramic, and the paint that remains.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WallDetailLine {
    pub room_name: String,
    pub wall: String,
    pub length: f64,
    pub height: f64,
    pub gross: f64,
    pub openings: f64,
    pub net_after_open: f64,
    pub ceramic: f64,
    pub paint_deduction: f64,
    pub paint: f64,
    pub notes: String,
}

/// Plaster book line for a wall or ceiling.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PlasterLine {
    pub kind: LineKind,
    pub room_name: String,
    pub surface: String,
    pub length: Option<f64>,
    pub height: Option<f64>,
    pub area: f64,
    pub openings: f64,
    pub net: f64,
    pub notes: String,
}

/// Paint book line: the base after openings, the tiled part, and the net paint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PaintLine {
    pub kind: LineKind,
    pub room_name: String,
    pub surface: String,
    pub length: Option<f64>,
    pub height: Option<f64>,
    pub base: f64,
    pub ceramic: f64,
    pub net: f64,
    pub notes: String,
}

/// Ceramic book line for a wall, floor, or ceiling.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CeramicLine {
    pub kind: LineKind,
    pub room_name: String,
    pub surface: String,
    pub length: Option<f64>,
    pub height: Option<f64>,
    pub area: f64,
    pub notes: String,
}

/// Reporting-ready line items derived from a room breakdown.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DetailBooks {
    pub walls: Vec<WallDetailLine>,
    pub plaster: Vec<PlasterLine>,
    pub paint: Vec<PaintLine>,
    pub ceramic: Vec<CeramicLine>,
}

impl DetailBooks {
    /// Append another room's books after this one's.
    pub fn extend(&mut self, other: Self) {
        self.walls.extend(other.walls);
        self.plaster.extend(other.plaster);
        self.paint.extend(other.paint);
        self.ceramic.extend(other.ceramic);
    }
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// Sums of the authoritative aggregates across rooms.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProjectTotals {
    pub rooms: usize,
    pub walls_gross: f64,
    pub walls_openings: f64,
    pub walls_net: f64,
    pub ceramic_wall: f64,
    pub ceramic_floor: f64,
    pub ceramic_ceiling: f64,
    pub ceramic_total: f64,
    pub paint_walls: f64,
    pub paint_ceiling: f64,
    pub paint_total: f64,
    pub plaster_walls: f64,
    pub plaster_ceiling: f64,
    pub plaster_total: f64,
}

impl ProjectTotals {
    pub fn accumulate(&mut self, aggregate: &RoomAggregate) {
        self.rooms += 1;
        self.walls_gross += aggregate.walls_gross;
        self.walls_openings += aggregate.walls_openings;
        self.walls_net += aggregate.walls_net();
        self.ceramic_wall += aggregate.ceramic_wall;
        self.ceramic_floor += aggregate.ceramic_floor;
        self.ceramic_ceiling += aggregate.ceramic_ceiling;
        self.ceramic_total += aggregate.ceramic_total();
        self.paint_walls += aggregate.paint_walls;
        self.paint_ceiling += aggregate.paint_ceiling;
        self.paint_total += aggregate.paint_total();
        self.plaster_walls += aggregate.plaster_walls;
        self.plaster_ceiling += aggregate.plaster_ceiling;
        self.plaster_total += aggregate.plaster_total();
    }
}

/// One room's breakdown next to the aggregate it was reconciled against.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RoomReport {
    pub breakdown: RoomBreakdown,
    pub aggregate: RoomAggregate,
}

/// Breakdown of every room in a project, in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProjectBreakdown {
    pub project_name: String,
    pub rooms: Vec<RoomReport>,
    pub totals: ProjectTotals,
}
