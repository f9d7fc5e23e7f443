//! Thresholds used to reconcile conflicting ceramic zone areas.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Overrides above `upper_ratio × gross` are stale.
const fn default_upper_ratio() -> f64 {
    1.15
}

/// Overrides below `lower_ratio × gross` are stale.
const fn default_lower_ratio() -> f64 {
    0.85
}

/// Geometry at or below this is treated as a 1×1 placeholder.
const fn default_placeholder_gross() -> f64 {
    1.1
}

/// Exact gross of the dummy geometry legacy floor zones were saved with.
const fn default_placeholder_floor_area() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReconcileConfig {
    #[serde(default = "default_upper_ratio")]
    pub upper_ratio: f64,

    #[serde(default = "default_lower_ratio")]
    pub lower_ratio: f64,

    #[serde(default = "default_placeholder_gross")]
    pub placeholder_gross: f64,

    #[serde(default = "default_placeholder_floor_area")]
    pub placeholder_floor_area: f64,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            upper_ratio: default_upper_ratio(),
            lower_ratio: default_lower_ratio(),
            placeholder_gross: default_placeholder_gross(),
            placeholder_floor_area: default_placeholder_floor_area(),
        }
    }
}

impl ReconcileConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.lower_ratio > 0.0 && self.lower_ratio <= 1.0) {
            return Err(ConfigError::invalid(
                "reconcile.lower_ratio",
                format!("must lie in (0, 1], got {}", self.lower_ratio),
            ));
        }
        if !(self.upper_ratio.is_finite() && self.upper_ratio >= 1.0) {
            return Err(ConfigError::invalid(
                "reconcile.upper_ratio",
                format!("must be at least 1, got {}", self.upper_ratio),
            ));
        }
        if self.lower_ratio >= self.upper_ratio {
            return Err(ConfigError::invalid(
                "reconcile.lower_ratio",
                "must be smaller than reconcile.upper_ratio",
            ));
        }
        if !(self.placeholder_gross.is_finite() && self.placeholder_gross >= 0.0) {
            return Err(ConfigError::invalid(
                "reconcile.placeholder_gross",
                format!("must be non-negative, got {}", self.placeholder_gross),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ReconcileConfig::default();
        assert!((config.upper_ratio - 1.15).abs() < f64::EPSILON);
        assert!((config.lower_ratio - 0.85).abs() < f64::EPSILON);
        assert!((config.placeholder_gross - 1.1).abs() < f64::EPSILON);
        assert!((config.placeholder_floor_area - 1.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn inverted_band_is_rejected() {
        let config = ReconcileConfig {
            lower_ratio: 1.0,
            upper_ratio: 1.0,
            ..ReconcileConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("reconcile.lower_ratio"));
    }
}
