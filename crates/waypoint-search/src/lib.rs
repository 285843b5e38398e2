//! Waypoint Search - Graph search strategies
//!
//! Provides breadth-first, depth-first, greedy best-first and A* search over
//! a [`waypoint_core::Graph`], all driven by one traversal loop that differs
//! only in how its fringe orders entries.

pub mod engine;
pub mod error;
pub mod experiment;
pub mod fringe;
pub mod path;
pub mod report;
pub mod strategy;
pub mod traits;

pub use engine::{search, SearchEngine};
pub use error::{SearchError, SearchResult};
pub use experiment::{run_experiment, ExperimentCase, ExperimentRecord, DEFAULT_REPETITIONS};
pub use fringe::{FifoFringe, LifoFringe, PriorityFringe};
pub use report::{SearchMetrics, SearchReport};
pub use strategy::Strategy;
pub use traits::{Fringe, FringeEntry};
