//! Per-wall breakdown of one room's authoritative totals.
//!
//! The room aggregate is the ground truth. This module only redistributes it
//! across wall segments, in a fixed order where each layer's capacity is what
//! the previous layer left: openings, then ceramic, then paint. Plaster runs on
//! its own track over the area left after openings.

use bilind_config::BilindConfig;
use bilind_core::entities::{CeramicZone, Opening, Room, RoomAggregate};
use bilind_core::enums::{Layer, SurfaceType};
use bilind_core::reports::{BreakdownNote, RoomBreakdown, WallRow};
use tracing::{debug, info};

use crate::allocate::{DEFAULT_EPSILON, allocate_with};
use crate::attribution::{
    is_unattributed, openings_for_room, own_openings, room_opening_area, rooms_for_opening,
};
use crate::binding::{ResolvedWall, find_host, normalize_text, resolve_walls};
use crate::reconcile::ReconcileBands;

/// Tunables for a breakdown run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakdownOptions {
    /// Height used when neither a segment nor its room has one.
    pub default_height: f64,
    /// Allocator convergence tolerance.
    pub epsilon: f64,
    /// Smallest difference (m²) reported as a note.
    pub discrepancy: f64,
    pub bands: ReconcileBands,
}

impl Default for BreakdownOptions {
    fn default() -> Self {
        Self::from(&BilindConfig::default())
    }
}

impl From<&BilindConfig> for BreakdownOptions {
    fn from(config: &BilindConfig) -> Self {
        Self {
            default_height: config.general.default_wall_height,
            epsilon: config.tolerance.epsilon,
            discrepancy: config.tolerance.discrepancy,
            bands: ReconcileBands::from(&config.reconcile),
        }
    }
}

impl BreakdownOptions {
    #[must_use]
    pub const fn with_default_height(mut self, height: f64) -> Self {
        self.default_height = height;
        self
    }

    fn tolerance(&self) -> f64 {
        if self.epsilon > 0.0 {
            self.epsilon
        } else {
            DEFAULT_EPSILON
        }
    }
}

/// How the openings handed to a breakdown relate to the room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpeningScope {
    /// The room's own openings; records no room claims count in full.
    #[default]
    Room,
    /// Every opening of the project; only records attributed to the room count.
    Project,
}

/// Everything the engine reads to break down one room.
#[derive(Debug, Clone, Copy)]
pub struct RoomInput<'a> {
    pub room: &'a Room,
    /// Authoritative totals; `None` when the room has no aggregate yet.
    pub aggregate: Option<&'a RoomAggregate>,
    pub openings: &'a [Opening],
    pub scope: OpeningScope,
    /// Candidate zones; only wall zones of this room count.
    pub zones: &'a [CeramicZone],
    /// All rooms of the project, for openings referenced by several rooms.
    pub rooms: &'a [Room],
}

impl<'a> RoomInput<'a> {
    #[must_use]
    pub const fn new(room: &'a Room, aggregate: &'a RoomAggregate) -> Self {
        Self {
            aggregate: Some(aggregate),
            ..Self::without_aggregate(room)
        }
    }

    /// Input for a room the upstream calculator has not aggregated.
    ///
    /// Geometry is kept as drawn, and hosted openings and ceramic become
    /// their own layer targets.
    #[must_use]
    pub const fn without_aggregate(room: &'a Room) -> Self {
        Self {
            room,
            aggregate: None,
            openings: &[],
            scope: OpeningScope::Room,
            zones: &[],
            rooms: std::slice::from_ref(room),
        }
    }

    /// The room's own openings.
    #[must_use]
    pub const fn with_openings(mut self, openings: &'a [Opening]) -> Self {
        self.openings = openings;
        self.scope = OpeningScope::Room;
        self
    }

    /// All project openings; only those attributed to the room are used.
    #[must_use]
    pub const fn with_project_openings(mut self, openings: &'a [Opening]) -> Self {
        self.openings = openings;
        self.scope = OpeningScope::Project;
        self
    }

    #[must_use]
    pub const fn with_zones(mut self, zones: &'a [CeramicZone]) -> Self {
        self.zones = zones;
        self
    }

    #[must_use]
    pub const fn with_rooms(mut self, rooms: &'a [Room]) -> Self {
        self.rooms = rooms;
        self
    }
}

/// Decompose the room aggregate into one row per wall.
///
/// Never fails: irregular data yields rescaled rows and notes. Per-wall
/// amounts never exceed their layer's capacity, and layer sums never exceed
/// the aggregate. Without an aggregate, hosted openings and ceramic become
/// their own targets.
#[must_use]
pub fn breakdown(input: &RoomInput<'_>, options: &BreakdownOptions) -> RoomBreakdown {
    let room = input.room;
    let empty = RoomAggregate::default();
    let ssot = input.aggregate.unwrap_or(&empty);
    let walls = resolve_walls(room, options.default_height);
    if walls.is_empty() {
        debug!(room = %room.name, "room has no walls to break down");
        return RoomBreakdown {
            room_name: room.name.clone(),
            ..RoomBreakdown::default()
        };
    }

    let mut run = Run {
        room: &room.name,
        options,
        lengths: walls.iter().map(|wall| wall.length).collect(),
        notes: Vec::new(),
    };

    let gross = run.scale_gross(&walls, ssot.walls_gross);
    let open_alloc = run.openings(input, &walls, &gross);
    let net_after_open: Vec<f64> = gross
        .iter()
        .zip(&open_alloc)
        .map(|(gross, open)| (gross - open).max(0.0))
        .collect();
    let cer_alloc = run.ceramic(input, &walls, &net_after_open);
    let paint_caps: Vec<f64> = net_after_open
        .iter()
        .zip(&cer_alloc)
        .map(|(net, cer)| (net - cer).max(0.0))
        .collect();
    let paint_alloc = run.self_weighted(Layer::Paint, ssot.paint_walls, &paint_caps);
    let plaster_alloc = run.self_weighted(Layer::Plaster, ssot.plaster_walls, &net_after_open);

    let rows = walls
        .into_iter()
        .enumerate()
        .map(|(i, wall)| WallRow {
            room_name: room.name.clone(),
            name: wall.name,
            length: wall.length,
            height: wall.height,
            gross: gross[i],
            open_alloc: open_alloc[i],
            net_after_open: net_after_open[i],
            cer_alloc: cer_alloc[i],
            paint_alloc: paint_alloc[i],
            plaster_alloc: plaster_alloc[i],
            pseudo: wall.pseudo,
        })
        .collect();

    RoomBreakdown {
        room_name: room.name.clone(),
        rows,
        notes: run.notes,
    }
}

struct HostedSplit {
    amounts: Vec<f64>,
    unallocated: f64,
    scaled: bool,
}

struct Run<'a> {
    room: &'a str,
    options: &'a BreakdownOptions,
    lengths: Vec<f64>,
    notes: Vec<BreakdownNote>,
}

impl Run<'_> {
    fn note(&mut self, note: BreakdownNote) {
        info!(room = %self.room, note = %note, "breakdown note");
        self.notes.push(note);
    }

    fn scale_gross(&mut self, walls: &[ResolvedWall], authoritative: f64) -> Vec<f64> {
        let geometry: Vec<f64> = walls.iter().map(ResolvedWall::gross).collect();
        let geometry_sum: f64 = geometry.iter().sum();
        if authoritative > 0.0
            && geometry_sum > 0.0
            && (authoritative - geometry_sum).abs() > self.options.discrepancy
        {
            let factor = authoritative / geometry_sum;
            self.note(BreakdownNote::GrossScaled {
                geometry: geometry_sum,
                authoritative,
                factor,
            });
            return geometry.iter().map(|gross| gross * factor).collect();
        }
        geometry
    }

    fn openings(&mut self, input: &RoomInput<'_>, walls: &[ResolvedWall], gross: &[f64]) -> Vec<f64> {
        let candidates = match input.scope {
            OpeningScope::Room => own_openings(input.room, input.openings, input.rooms),
            OpeningScope::Project => openings_for_room(input.room, input.openings),
        };

        let mut demand = vec![0.0; walls.len()];
        for opening in candidates {
            let Some(index) = find_host(
                walls,
                opening.host_wall_id.as_deref(),
                opening.host_wall.as_deref(),
            ) else {
                continue;
            };
            let rooms = rooms_for_opening(opening, input.rooms);
            demand[index] += if is_unattributed(opening, &rooms) {
                opening.total_area()
            } else {
                room_opening_area(opening, &input.room.name, &rooms)
            };
        }

        let hosted_total: f64 = demand.iter().sum();
        let target = input
            .aggregate
            .map_or(hosted_total, |aggregate| aggregate.walls_openings.max(0.0));
        let split = self.hosted_then_spread(&demand, gross, target);
        if split.scaled {
            self.note(BreakdownNote::HostedOpeningsScaled {
                demand: hosted_total,
                target,
            });
        }
        debug!(
            room = %self.room,
            layer = %Layer::Openings,
            target,
            hosted = hosted_total,
            unallocated = split.unallocated,
            "allocated layer"
        );
        if split.unallocated > self.options.discrepancy {
            self.note(BreakdownNote::OpeningOverflow {
                unallocated: split.unallocated,
            });
        }
        split.amounts
    }

    fn ceramic(&mut self, input: &RoomInput<'_>, walls: &[ResolvedWall], net: &[f64]) -> Vec<f64> {
        let room_key = normalize_text(&input.room.name);
        let mut demand = vec![0.0; walls.len()];
        for zone in input.zones.iter().filter(|zone| {
            zone.surface_type == SurfaceType::Wall
                && normalize_text(zone.room_name.as_deref().unwrap_or_default()) == room_key
        }) {
            if let Some(index) = find_host(walls, zone.wall_id.as_deref(), zone.wall_name.as_deref()) {
                demand[index] += self.options.bands.resolve(zone);
            }
        }

        let capacity: f64 = net.iter().sum();
        let hosted_total: f64 = demand.iter().sum();
        let authoritative = input.aggregate.map_or(0.0, |aggregate| aggregate.ceramic_wall);
        let target = input
            .aggregate
            .map_or(hosted_total, |aggregate| aggregate.ceramic_wall.max(0.0))
            .min(capacity);
        let split = self.hosted_then_spread(&demand, net, target);
        if split.scaled {
            self.note(BreakdownNote::HostedCeramicScaled {
                demand: hosted_total,
                target,
            });
        }

        self.check_shortfall(Layer::Ceramic, authoritative, &split.amounts);
        split.amounts
    }

    /// Hosted demand goes to its wall first, scaled down when it asks for more
    /// than `target` and clipped to the wall's capacity. Whatever is left of
    /// `target` is spread by wall length over the capacity that remains.
    fn hosted_then_spread(&self, demand: &[f64], caps: &[f64], target: f64) -> HostedSplit {
        let tolerance = self.options.tolerance();
        let hosted_total: f64 = demand.iter().sum();
        let scaled = hosted_total > 0.0 && hosted_total - target > tolerance;
        let scale = if scaled { target / hosted_total } else { 1.0 };

        let hosted: Vec<f64> = demand
            .iter()
            .zip(caps)
            .map(|(demand, cap)| (demand * scale).min(*cap))
            .collect();
        let caps_left: Vec<f64> = caps
            .iter()
            .zip(&hosted)
            .map(|(cap, hosted)| (cap - hosted).max(0.0))
            .collect();
        let remainder = (target - hosted.iter().sum::<f64>()).max(0.0);
        let spread = allocate_with(remainder, &self.lengths, &caps_left, tolerance);

        HostedSplit {
            amounts: hosted
                .iter()
                .zip(&spread.amounts)
                .map(|(hosted, spread)| hosted + spread)
                .collect(),
            unallocated: spread.unallocated,
            scaled,
        }
    }

    /// Paint and plaster: weights equal capacities.
    fn self_weighted(&mut self, layer: Layer, authoritative: f64, caps: &[f64]) -> Vec<f64> {
        let capacity: f64 = caps.iter().sum();
        let target = if authoritative > 0.0 {
            authoritative.min(capacity)
        } else {
            0.0
        };
        let alloc = allocate_with(target, caps, caps, self.options.tolerance()).amounts;
        self.check_shortfall(layer, authoritative, &alloc);
        alloc
    }

    fn check_shortfall(&mut self, layer: Layer, authoritative: f64, alloc: &[f64]) {
        let placed: f64 = alloc.iter().sum();
        debug!(room = %self.room, layer = %layer, target = authoritative, placed, "allocated layer");
        let amount = authoritative - placed;
        if authoritative > 0.0 && amount > self.options.discrepancy {
            self.note(BreakdownNote::Shortfall { layer, amount });
        }
    }
}
