//! Error types for the geofence core.

use thiserror::Error;

/// Every failure the crate can report.
///
/// None of these is fatal: the evaluator recovers from each of them with a
/// defined fallback and only surfaces them as values.
#[derive(Debug, Error)]
pub enum SprayError {
    /// A request id that does not decode to `"<lat>_<lng>"`.
    #[error("malformed request identifier {id:?}: {reason}")]
    MalformedIdentifier { id: String, reason: String },

    /// A polygon edge whose endpoints coincide.
    #[error("edge {index} has zero length")]
    DegenerateEdge { index: usize },

    #[error("polygon has {vertices} vertices, at least 3 are required")]
    IncompletePolygon { vertices: usize },

    #[error("unknown geofence transition code {0}")]
    UnknownTransition(i32),

    /// The monitoring platform delivered an error instead of a transition.
    #[error("geofence event reported error code {0}")]
    GeofenceEvent(i32),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The notification collaborator refused a spraying request.
    #[error("notification failed: {0}")]
    Notification(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, SprayError>;

impl From<serde_json::Error> for SprayError {
    fn from(e: serde_json::Error) -> Self {
        SprayError::Serialization(e.to_string())
    }
}
