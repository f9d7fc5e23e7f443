//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default project-wide wall height in meters.
const fn default_wall_height() -> f64 {
    3.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Wall height used when neither a wall segment, its room, nor the
    /// project document provides one.
    #[serde(default = "default_wall_height")]
    pub default_wall_height: f64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_wall_height: default_wall_height(),
        }
    }
}

impl GeneralConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.default_wall_height.is_finite() && self.default_wall_height > 0.0) {
            return Err(ConfigError::invalid(
                "general.default_wall_height",
                format!("must be a positive length, got {}", self.default_wall_height),
            ));
        }
        Ok(())
    }
}
