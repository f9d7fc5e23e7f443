pub mod allocate;
pub mod books;
pub mod breakdown;
pub mod dispatch;
pub mod normalize_zones;
pub mod resolve_area;
pub mod schema;
pub mod shared;
