//! CLI response types returned as JSON by `bilind` commands.
//!
//! `bilind breakdown` and `bilind books` return the report types from
//! [`crate::reports`] directly; the shapes below cover the remaining commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::CeramicZone;
use crate::enums::SurfaceType;

/// Authoritative area chosen for one ceramic zone.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ResolvedZone {
    pub name: String,
    pub room_name: Option<String>,
    pub surface_type: SurfaceType,
    /// `perimeter × height`, or zero without usable geometry.
    pub gross: f64,
    pub effective_area: Option<f64>,
    pub area: f64,
}

/// Response from `bilind resolve-area`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ResolveAreaResponse {
    pub zones: Vec<ResolvedZone>,
    pub total_area: f64,
}

/// Response from `bilind allocate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AllocateResponse {
    pub total: f64,
    pub allocations: Vec<f64>,
    pub unallocated: f64,
}

/// Response from `bilind normalize-zones`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NormalizeZonesResponse {
    pub updated: u32,
    pub skipped: u32,
    pub zones: Vec<CeramicZone>,
}
