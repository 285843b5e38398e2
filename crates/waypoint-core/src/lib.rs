//! Waypoint Core - Graph and heuristic data model
//!
//! This crate provides the weighted location graph, the straight-line
//! heuristic table and its evaluator, and the JSON loaders that feed the
//! Waypoint search engine.

pub mod dataset;
pub mod error;
pub mod graph;
pub mod heuristic;
pub mod limits;

pub use dataset::{
    load_graph, load_graph_from_str, load_heuristic, load_heuristic_from_str, RoadGraph,
    RoadHeuristic,
};
pub use error::{Error, Result};
pub use graph::{Graph, NodeId};
pub use heuristic::{DirectEstimate, HeuristicEvaluator, HeuristicTable};
