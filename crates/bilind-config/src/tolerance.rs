//! Numeric tolerances for allocation and discrepancy reporting.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Convergence tolerance for the capped allocator.
const fn default_epsilon() -> f64 {
    1e-9
}

/// Smallest difference in m² reported as a real discrepancy.
const fn default_discrepancy() -> f64 {
    0.01
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToleranceConfig {
    /// Amounts at or below this are treated as zero by the allocator.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,

    /// Scaling, overflow, and shortfall notes are only recorded above this.
    #[serde(default = "default_discrepancy")]
    pub discrepancy: f64,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            epsilon: default_epsilon(),
            discrepancy: default_discrepancy(),
        }
    }
}

impl ToleranceConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("tolerance.epsilon", self.epsilon),
            ("tolerance.discrepancy", self.discrepancy),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be positive, got {value}"),
                ));
            }
        }
        if self.epsilon >= self.discrepancy {
            return Err(ConfigError::invalid(
                "tolerance.epsilon",
                "must be smaller than tolerance.discrepancy",
            ));
        }
        Ok(())
    }
}
