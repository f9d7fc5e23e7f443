use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::numeric::lenient_f64;

/// One straight wall segment of a room, as drawn or entered by hand.
///
/// Gross area is never stored: the engine derives it from `length × height`
/// with the resolved height and may rescale it to the room's authoritative total.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WallSegment {
    /// Stable identifier used for host binding; absent on legacy imports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name. Falls back to `Wall N` by position when blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub length: f64,
    /// Zero means "use the room or project height".
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub height: f64,
}

impl WallSegment {
    #[must_use]
    pub fn new(name: impl Into<String>, length: f64, height: f64) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            length,
            height,
        }
    }

    /// Name shown in reports: the trimmed explicit name, else `Wall {index + 1}`.
    #[must_use]
    pub fn display_name(&self, index: usize) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Wall {}", index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_position() {
        let unnamed = WallSegment {
            name: Some("   ".into()),
            ..WallSegment::default()
        };
        assert_eq!(unnamed.display_name(2), "Wall 3");
        assert_eq!(WallSegment::new(" North ", 4.0, 3.0).display_name(0), "North");
    }

    #[test]
    fn legacy_strings_are_coerced() {
        let wall: WallSegment =
            serde_json::from_str(r#"{"name": "Wall 1", "length": "4,5", "height": ""}"#).unwrap();
        assert!((wall.length - 4.5).abs() < 1e-12);
        assert!(wall.height.abs() < 1e-12);
    }
}
