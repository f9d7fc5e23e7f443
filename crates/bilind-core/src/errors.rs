//! Cross-cutting error types for Bilind.
//!
//! Data irregularities inside take-off records (strings with comma decimals,
//! stale overrides, missing heights) are never errors: they degrade to zero or
//! to a reconciled value. The errors here only cover the outer surfaces, such
//! as an input document that is not JSON or a lookup of a room that does not
//! exist. Configuration errors live in `bilind-config`; the CLI converges all
//! of them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Bilind crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Input document could not be decoded.
    #[error("Invalid project document: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Shorthand for a missing room.
    #[must_use]
    pub fn room_not_found(name: &str) -> Self {
        Self::NotFound {
            entity_type: "room".to_string(),
            id: name.to_string(),
        }
    }
}
