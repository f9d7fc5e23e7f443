//! Entity structs for take-off records.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Numeric
//! fields go through the lenient helpers in [`crate::numeric`], so legacy
//! documents with string numbers, comma decimals, or nulls still load.

mod aggregate;
mod ceramic;
mod opening;
mod project;
mod room;
mod wall;

pub use aggregate::RoomAggregate;
pub use ceramic::{CeramicZone, GROUT_RATE};
pub use opening::Opening;
pub use project::Project;
pub use room::Room;
pub use wall::WallSegment;
