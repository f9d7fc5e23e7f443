//! # bilind-engine
//!
//! Quantity reconciliation and allocation for Bilind.
//!
//! - [`reconcile`]: picks one authoritative area for a ceramic zone whose
//!   geometry, override, and stored area disagree.
//! - [`allocate`]: capped proportional allocation (water-filling), the
//!   primitive every breakdown layer runs on.
//! - [`breakdown`]: decomposes a room's authoritative totals into per-wall
//!   rows (openings, ceramic, paint, plaster).
//! - [`attribution`] and [`binding`]: which openings belong to a room, how much
//!   of each, and which wall hosts them.
//! - [`zones`], [`books`], [`project`]: zone normalization, detail books, and
//!   project-wide runs.
//!
//! Nothing here fails on irregular data: malformed values degrade to zero and
//! capacity problems come back as [`bilind_core::reports::BreakdownNote`]s.

pub mod allocate;
pub mod attribution;
pub mod binding;
pub mod books;
pub mod breakdown;
pub mod project;
pub mod reconcile;
pub mod zones;

pub use allocate::{Allocation, allocate, allocate_with};
pub use books::detail_books;
pub use breakdown::{BreakdownOptions, OpeningScope, RoomInput, breakdown};
pub use project::{breakdown_project, breakdown_room, project_books, room_books};
pub use reconcile::{ReconcileBands, resolve_area};
pub use zones::{ZoneNormalization, normalize_wall_zones};
