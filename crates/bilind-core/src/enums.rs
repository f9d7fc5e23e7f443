//! Surface types, opening types, share modes, and report layers for Bilind.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Legacy spellings seen in imported records (`WINDOW`, `Wall`) are accepted as
//! aliases on input and never written back.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

// ---------------------------------------------------------------------------
// SurfaceType
// ---------------------------------------------------------------------------

/// Which surface of a room a ceramic zone covers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceType {
    #[default]
    #[serde(alias = "Wall", alias = "WALL")]
    Wall,
    #[serde(alias = "Floor", alias = "FLOOR")]
    Floor,
    #[serde(alias = "Ceiling", alias = "CEILING")]
    Ceiling,
}

impl SurfaceType {
    /// Tile adhesive consumption in kg/m².
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn adhesive_rate(self) -> f64 {
        match self {
            Self::Wall => 3.0,
            Self::Floor => 5.0,
            Self::Ceiling => 3.0,
        }
    }

    /// Case-insensitive label lookup; anything unrecognised is a wall.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "floor" => Self::Floor,
            "ceiling" => Self::Ceiling,
            _ => Self::Wall,
        }
    }

    /// Floor and ceiling zones are often entered with placeholder 1×1 geometry.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Floor | Self::Ceiling)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Floor => "floor",
            Self::Ceiling => "ceiling",
        }
    }
}

impl fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deserialize a surface type from any JSON value; `null`, non-strings, and
/// unknown labels read as [`SurfaceType::Wall`].
///
/// # Errors
///
/// Only when the underlying deserializer itself fails.
pub fn lenient_surface_type<'de, D>(deserializer: D) -> Result<SurfaceType, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(label)) => SurfaceType::from_label(&label),
        _ => SurfaceType::Wall,
    })
}

// ---------------------------------------------------------------------------
// OpeningType
// ---------------------------------------------------------------------------

/// Kind of opening cut into a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OpeningType {
    #[serde(alias = "DOOR", alias = "Door")]
    Door,
    #[serde(alias = "WINDOW", alias = "Window")]
    Window,
}

impl OpeningType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Door => "door",
            Self::Window => "window",
        }
    }
}

impl fmt::Display for OpeningType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ShareMode
// ---------------------------------------------------------------------------

/// How an opening listed in several rooms is attributed to each of them.
///
/// ```text
/// single → whole area to the first assigned room
/// split  → equal share for every assigned room
/// custom → equal share unless `room_shares` says otherwise
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ShareMode {
    Single,
    Split,
    Custom,
}

impl ShareMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Split => "split",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ShareMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Layer
// ---------------------------------------------------------------------------

/// One stage of the per-wall deduction pipeline.
///
/// ```text
/// openings → ceramic → paint
///          → plaster (independent of ceramic/paint)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Openings,
    Ceramic,
    Paint,
    Plaster,
}

impl Layer {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Openings => "openings",
            Self::Ceramic => "ceramic",
            Self::Paint => "paint",
            Self::Plaster => "plaster",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LineKind
// ---------------------------------------------------------------------------

/// Surface a detail-book line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Wall,
    Floor,
    Ceiling,
}

impl LineKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Floor => "floor",
            Self::Ceiling => "ceiling",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
