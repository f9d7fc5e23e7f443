//! # bilind-core
//!
//! Core types, numeric normalization, and error types for Bilind.
//!
//! This crate provides the foundational types shared across all Bilind crates:
//! - Entity structs for take-off records (rooms, wall segments, openings, ceramic zones)
//! - The authoritative per-room aggregate (`RoomAggregate`) produced upstream
//! - Enums for surface types, opening types, and room share modes
//! - Locale-tolerant numeric coercion and lenient serde helpers
//! - Per-wall report types produced by the engine
//! - CLI response types
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod numeric;
pub mod reports;
pub mod responses;
