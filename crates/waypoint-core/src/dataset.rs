//! JSON loaders for road maps and heuristic tables
//!
//! A road map is a document whose top-level keys are node names and whose
//! values map neighbor names to edge weights. A heuristic table maps node
//! names to their estimated distance to one reference node.

use std::path::Path;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::heuristic::HeuristicTable;
use crate::limits::validate_node_name;

/// Graph keyed by location name
pub type RoadGraph = Graph<String>;

/// Heuristic table keyed by location name
pub type RoadHeuristic = HeuristicTable<String>;

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a road map from a JSON file
pub fn load_graph(path: impl AsRef<Path>) -> Result<RoadGraph> {
    let path = path.as_ref();
    tracing::info!("Loading road map from {:?}", path);
    load_graph_from_str(&read_file(path)?)
}

/// Parse a road map from a JSON document
pub fn load_graph_from_str(json: &str) -> Result<RoadGraph> {
    let adjacency: IndexMap<String, IndexMap<String, f64>> = serde_json::from_str(json)?;

    for (node, edges) in &adjacency {
        validate_node_name(node).map_err(Error::InvalidNodeName)?;
        for neighbor in edges.keys() {
            validate_node_name(neighbor).map_err(Error::InvalidNodeName)?;
        }
    }

    let graph = Graph::from_adjacency(adjacency)?;
    for (from, to) in graph.asymmetric_edges() {
        tracing::warn!("Edge {} -> {} has no matching reverse edge", from, to);
    }

    tracing::debug!(
        "Loaded road map with {} nodes and {} edges",
        graph.len(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Load a heuristic table from a JSON file.
///
/// Without an explicit `reference`, the single zero-valued entry is used.
pub fn load_heuristic(path: impl AsRef<Path>, reference: Option<&str>) -> Result<RoadHeuristic> {
    let path = path.as_ref();
    tracing::info!("Loading heuristic table from {:?}", path);
    load_heuristic_from_str(&read_file(path)?, reference)
}

/// Parse a heuristic table from a JSON document
pub fn load_heuristic_from_str(json: &str, reference: Option<&str>) -> Result<RoadHeuristic> {
    let estimates: IndexMap<String, f64> = serde_json::from_str(json)?;

    for node in estimates.keys() {
        validate_node_name(node).map_err(Error::InvalidNodeName)?;
    }

    let table = match reference {
        Some(reference) => {
            validate_node_name(reference).map_err(Error::InvalidNodeName)?;
            HeuristicTable::new(reference.to_string(), estimates)?
        }
        None => HeuristicTable::with_inferred_reference(estimates)?,
    };

    tracing::debug!(
        "Loaded {} estimates towards {}",
        table.len(),
        table.reference()
    );
    Ok(table)
}
