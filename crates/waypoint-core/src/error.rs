//! Error types for Waypoint Core

use std::path::PathBuf;

use thiserror::Error;

use crate::limits::ValidationError;

/// Result type alias using Waypoint's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Waypoint error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Invalid edge {from} -> {to}: {source}")]
    InvalidEdge {
        from: String,
        to: String,
        source: ValidationError,
    },

    #[error("Invalid estimate for {node}: {source}")]
    InvalidEstimate {
        node: String,
        source: ValidationError,
    },

    #[error("Invalid node name: {0}")]
    InvalidNodeName(ValidationError),

    #[error("Heuristic table has no zero-valued entry to use as reference node")]
    MissingReference,

    #[error("Heuristic table has several zero-valued entries ({0}); configure the reference node explicitly")]
    AmbiguousReference(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
