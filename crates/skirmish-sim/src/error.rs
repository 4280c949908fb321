use thiserror::Error;

use skirmish_geometry::GeometryError;

/// Why a scenario could not be loaded.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("obstacle `{name}` has invalid geometry: {source}")]
    Obstacle {
        name: String,
        #[source]
        source: GeometryError,
    },
    #[error("malformed scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unit {index} is invalid: {reason}")]
    InvalidUnit { index: usize, reason: &'static str },
}
