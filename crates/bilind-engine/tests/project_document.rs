//! End-to-end runs over a project document in its JSON input form.

use bilind_core::entities::Project;
use bilind_core::enums::Layer;
use bilind_core::reports::BreakdownNote;
use bilind_engine::{BreakdownOptions, breakdown_project, project_books, resolve_area};
use pretty_assertions::assert_eq;

const TOL: f64 = 1e-6;

const DOCUMENT: &str = r#"{
  "name": "Villa",
  "default_wall_height": "3,0",
  "rooms": [
    {
      "name": "Hall",
      "perimeter": 10,
      "opening_ids": ["D1"],
      "walls": [
        {"name": "Wall 1", "length": "4", "height": 3},
        {"name": "Wall 2", "length": 6, "height": "3,0"}
      ]
    },
    {
      "name": "Kitchen",
      "perimeter": "12,0",
      "wall_height": 2.8,
      "opening_ids": ["D2", "W1"]
    },
    {
      "name": "Bath",
      "walls": [
        {"id": "b-1", "name": "North", "length": 2.0},
        {"id": "b-2", "name": "East", "length": 2.5},
        {"length": 2.0},
        {"length": 2.5}
      ]
    }
  ],
  "openings": [
    {"name": "D1", "opening_type": "DOOR", "w": 0.9, "h": "2", "host_wall": "wall 2"},
    {"name": "D2", "opening_type": "door", "width": 0.8, "height": 2.0, "qty": "1",
     "assigned_rooms": ["Kitchen", "Bath"], "share_mode": "split"},
    {"name": "W1", "opening_type": "window", "width": 1.2, "height": 1.0},
    {"name": "W2", "opening_type": "window", "width": 0.6, "height": 0.6,
     "host_wall_id": "b-2", "host_wall": "North", "room_quantities": {"Bath": 2}}
  ],
  "ceramic_zones": [
    {"name": "Bath tiles east", "room_name": "Bath", "wall_name": "East",
     "perimeter": 2.5, "height": 2.0, "effective_area": "4,8"},
    {"name": "Bath floor", "room_name": "Bath", "surface_type": "floor",
     "perimeter": 1, "height": 1, "area": 4.0}
  ],
  "aggregates": [
    {"room_name": "Hall", "walls_gross": 30, "walls_openings": 1.8,
     "paint_walls": 28.2, "plaster_walls": 28.2, "plaster_ceiling": 24},
    {"room_name": "Kitchen", "walls_gross": 33.6, "walls_openings": 2.0,
     "ceramic_wall": 6.0, "paint_walls": 25.6, "plaster_walls": 31.6},
    {"room_name": "Bath", "walls_gross": 27.0, "walls_openings": 1.12,
     "ceramic_wall": 12.0, "ceramic_floor": 4.0, "paint_walls": 13.88,
     "plaster_walls": 25.88}
  ]
}"#;

fn project() -> Project {
    Project::from_json_str(DOCUMENT).expect("document parses")
}

#[test]
fn hall_door_sits_on_wall_two() {
    let result = breakdown_project(&project(), &BreakdownOptions::default());
    let hall = &result.rooms[0].breakdown;

    let open: Vec<f64> = hall.rows.iter().map(|row| row.open_alloc).collect();
    let net: Vec<f64> = hall.rows.iter().map(|row| row.net_after_open).collect();
    assert!((open[0]).abs() < TOL && (open[1] - 1.8).abs() < TOL, "{open:?}");
    assert!((net[0] - 12.0).abs() < TOL && (net[1] - 16.2).abs() < TOL, "{net:?}");
    assert!(hall.notes.is_empty());
}

#[test]
fn every_row_respects_layer_capacities() {
    let result = breakdown_project(&project(), &BreakdownOptions::default());

    for report in &result.rooms {
        let breakdown = &report.breakdown;
        for row in &breakdown.rows {
            assert!(row.open_alloc >= 0.0 && row.open_alloc <= row.gross + TOL);
            assert!((row.net_after_open - (row.gross - row.open_alloc)).abs() < TOL);
            assert!(row.cer_alloc >= 0.0 && row.cer_alloc <= row.net_after_open + TOL);
            assert!(row.paint_alloc >= 0.0);
            assert!(row.paint_alloc <= row.net_after_open - row.cer_alloc + TOL);
            assert!(row.plaster_alloc >= 0.0 && row.plaster_alloc <= row.net_after_open + TOL);
        }

        let ssot = &report.aggregate;
        assert!(breakdown.sum_of(Layer::Openings) <= ssot.walls_openings + TOL);
        assert!(breakdown.sum_of(Layer::Ceramic) <= ssot.ceramic_wall + TOL);
        assert!(breakdown.sum_of(Layer::Paint) <= ssot.paint_walls + TOL);
        assert!(breakdown.sum_of(Layer::Plaster) <= ssot.plaster_walls + TOL);
        if breakdown.gross_total() >= ssot.walls_openings {
            assert!((breakdown.sum_of(Layer::Openings) - ssot.walls_openings).abs() < TOL);
        }
    }
}

#[test]
fn kitchen_uses_perimeter_wall() {
    let result = breakdown_project(&project(), &BreakdownOptions::default());
    let kitchen = &result.rooms[1].breakdown;

    assert!(kitchen.is_pseudo());
    assert!((kitchen.rows[0].gross - 33.6).abs() < TOL);
    assert!((kitchen.sum_of(Layer::Ceramic) - 6.0).abs() < TOL);
    assert!((kitchen.sum_of(Layer::Paint) - 25.6).abs() < TOL);
}

#[test]
fn bath_binds_by_identifier_and_scales_gross() {
    let result = breakdown_project(&project(), &BreakdownOptions::default());
    let bath = &result.rooms[2].breakdown;

    let names: Vec<&str> = bath.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["North", "East", "Wall 3", "Wall 4"]);

    // Heights come from the project default (3.0): 27.0 geometry matches, no scaling.
    assert!((bath.gross_total() - 27.0).abs() < TOL);
    assert!(!bath
        .notes
        .iter()
        .any(|note| matches!(note, BreakdownNote::GrossScaled { .. })));

    // W2 (2 × 0.36) binds to "East" through its identifier, not to "North".
    // D2 is split between Kitchen and Bath, 0.8 m² each, and is spread by length.
    assert!(bath.rows[1].open_alloc >= 0.72 - TOL);
    assert!((bath.sum_of(Layer::Openings) - 1.12).abs() < TOL);

    // 4.8 m² of tiles hosted on East, the rest spread by length.
    assert!(bath.rows[1].cer_alloc >= 4.8 - TOL);
    assert!((bath.sum_of(Layer::Ceramic) - 12.0).abs() < TOL);
}

#[test]
fn totals_and_books_follow_aggregates() {
    let project = project();
    let result = breakdown_project(&project, &BreakdownOptions::default());
    assert_eq!(result.totals.rooms, 3);
    assert!((result.totals.walls_gross - 90.6).abs() < TOL);
    assert!((result.totals.ceramic_total - 22.0).abs() < TOL);

    let books = project_books(&project, &BreakdownOptions::default());
    assert_eq!(books.walls.len(), 7);
    // Bath floor tiles appear as a floor line after the bath walls.
    assert!(books
        .ceramic
        .iter()
        .any(|line| line.room_name == "Bath" && (line.area - 4.0).abs() < TOL && line.length.is_none()));

    let floor = &project.ceramic_zones[1];
    assert!((resolve_area(floor) - 4.0).abs() < TOL);
}
