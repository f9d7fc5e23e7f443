//! Project-wide runs over every room.

use bilind_core::entities::{Project, Room, RoomAggregate};
use bilind_core::errors::CoreError;
use bilind_core::reports::{DetailBooks, ProjectBreakdown, ProjectTotals, RoomReport};
use rayon::prelude::*;
use tracing::debug;

use crate::books::detail_books;
use crate::breakdown::{BreakdownOptions, RoomInput, breakdown};
use crate::zones::{ZoneNormalization, normalize_wall_zones};

/// Options with the project's own default height applied, when it has one.
fn project_options(project: &Project, options: &BreakdownOptions) -> BreakdownOptions {
    options.with_default_height(project.default_height_or(options.default_height))
}

fn room_report(project: &Project, room: &Room, options: &BreakdownOptions) -> RoomReport {
    let stored = project.aggregate_for(&room.name);
    let input = stored
        .map_or_else(
            || RoomInput::without_aggregate(room),
            |aggregate| RoomInput::new(room, aggregate),
        )
        .with_project_openings(&project.openings)
        .with_zones(&project.ceramic_zones)
        .with_rooms(&project.rooms);
    let breakdown = breakdown(&input, options);
    let aggregate = stored
        .cloned()
        .unwrap_or_else(|| RoomAggregate::empty(room.name.clone()));
    RoomReport {
        breakdown,
        aggregate,
    }
}

/// Break down every room, in parallel, keeping document order.
///
/// Rooms without an aggregate keep their drawn geometry and hosted
/// quantities; their report carries a zero aggregate.
#[must_use]
pub fn breakdown_project(project: &Project, options: &BreakdownOptions) -> ProjectBreakdown {
    let options = project_options(project, options);
    let rooms: Vec<RoomReport> = project
        .rooms
        .par_iter()
        .map(|room| room_report(project, room, &options))
        .collect();

    let mut totals = ProjectTotals::default();
    for report in &rooms {
        totals.accumulate(&report.aggregate);
    }
    debug!(project = %project.name, rooms = rooms.len(), "project breakdown complete");

    ProjectBreakdown {
        project_name: project.name.clone(),
        rooms,
        totals,
    }
}

/// Break down one named room.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] when the project has no room of that name.
pub fn breakdown_room(
    project: &Project,
    room_name: &str,
    options: &BreakdownOptions,
) -> Result<RoomReport, CoreError> {
    let room = project.room(room_name)?;
    Ok(room_report(project, room, &project_options(project, options)))
}

/// Detail books for every room, concatenated in document order.
#[must_use]
pub fn project_books(project: &Project, options: &BreakdownOptions) -> DetailBooks {
    let mut books = DetailBooks::default();
    for report in breakdown_project(project, options).rooms {
        books.extend(detail_books(&report.breakdown, &report.aggregate));
    }
    books
}

/// Detail books for one named room.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] when the project has no room of that name.
pub fn room_books(
    project: &Project,
    room_name: &str,
    options: &BreakdownOptions,
) -> Result<DetailBooks, CoreError> {
    let report = breakdown_room(project, room_name, options)?;
    Ok(detail_books(&report.breakdown, &report.aggregate))
}

/// Normalize the project's ceramic wall zones against its rooms.
#[must_use]
pub fn normalize_project_zones(project: &Project) -> ZoneNormalization {
    normalize_wall_zones(&project.rooms, &project.ceramic_zones)
}
