//! Search error types

use thiserror::Error;

use crate::strategy::Strategy;

/// Result type alias for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Search-specific error types.
///
/// An unreachable goal is not an error; it produces a report with an empty
/// path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Unknown start node: {0}")]
    UnknownStartNode(String),

    #[error("{0} search requires a heuristic table")]
    MissingHeuristic(Strategy),
}
