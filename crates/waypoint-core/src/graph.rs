//! Weighted location graph

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::limits::validate_weight;

/// Identifier of a location in the graph.
///
/// Any hashable, printable label qualifies; the loaders use `String`.
pub trait NodeId: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> NodeId for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

/// Weighted adjacency structure over node identifiers.
///
/// Neighbors are iterated in insertion order, so every traversal over the
/// same graph visits successors in the same sequence.
#[derive(Debug, Clone)]
pub struct Graph<N: NodeId> {
    adjacency: IndexMap<N, IndexMap<N, f64>>,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<N: NodeId> Graph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a node -> (neighbor -> weight) map, validating
    /// every weight.
    pub fn from_adjacency(adjacency: IndexMap<N, IndexMap<N, f64>>) -> Result<Self> {
        for (from, edges) in &adjacency {
            for (to, weight) in edges {
                validate_weight(*weight).map_err(|source| Error::InvalidEdge {
                    from: from.to_string(),
                    to: to.to_string(),
                    source,
                })?;
            }
        }
        Ok(Self { adjacency })
    }

    /// Add a node with no outgoing edges. No-op if it already exists.
    pub fn add_node(&mut self, node: N) -> &mut Self {
        self.adjacency.entry(node).or_default();
        self
    }

    /// Add a single directed edge, replacing any previous weight.
    pub fn add_edge(&mut self, from: N, to: N, weight: f64) -> Result<&mut Self> {
        validate_weight(weight).map_err(|source| Error::InvalidEdge {
            from: from.to_string(),
            to: to.to_string(),
            source,
        })?;
        self.adjacency.entry(from).or_default().insert(to, weight);
        Ok(self)
    }

    /// Add an edge in both directions with the same weight.
    pub fn add_undirected_edge(&mut self, a: N, b: N, weight: f64) -> Result<&mut Self> {
        self.add_edge(a.clone(), b.clone(), weight)?;
        self.add_edge(b, a, weight)
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Outgoing edges of `node` as `(neighbor, weight)` pairs.
    pub fn neighbors<'a>(&'a self, node: &N) -> Result<impl Iterator<Item = (&'a N, f64)> + 'a> {
        self.adjacency
            .get(node)
            .map(|edges| edges.iter().map(|(n, w)| (n, *w)))
            .ok_or_else(|| Error::UnknownNode(node.to_string()))
    }

    pub fn edge_weight(&self, from: &N, to: &N) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Nodes with an adjacency entry, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of stored (directed) edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum()
    }

    /// Sum of edge weights along `path`.
    ///
    /// Returns `None` if two consecutive nodes are not connected, and
    /// `Some(0.0)` for empty and single-node paths.
    pub fn path_cost(&self, path: &[N]) -> Option<f64> {
        path.windows(2)
            .map(|pair| self.edge_weight(&pair[0], &pair[1]))
            .sum()
    }

    /// Edges whose reverse is missing or carries a different weight.
    pub fn asymmetric_edges(&self) -> Vec<(N, N)> {
        let mut asymmetric = Vec::new();
        for (from, edges) in &self.adjacency {
            for (to, weight) in edges {
                if self.edge_weight(to, from) != Some(*weight) {
                    asymmetric.push((from.clone(), to.clone()));
                }
            }
        }
        asymmetric
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> Graph<&'static str> {
        // A --1.0-- B --2.0-- C
        //           |
        //           4.0
        //           |
        //           D
        let mut graph = Graph::new();
        graph.add_undirected_edge("A", "B", 1.0).unwrap();
        graph.add_undirected_edge("B", "C", 2.0).unwrap();
        graph.add_undirected_edge("B", "D", 4.0).unwrap();
        graph
    }

    #[test]
    fn test_neighbors_follow_insertion_order() {
        let graph = create_test_graph();
        let neighbors: Vec<_> = graph.neighbors(&"B").unwrap().collect();
        assert_eq!(neighbors, vec![(&"A", 1.0), (&"C", 2.0), (&"D", 4.0)]);
    }

    #[test]
    fn test_unknown_node() {
        let graph = create_test_graph();
        let err = graph.neighbors(&"Z").err().unwrap();
        assert!(matches!(err, Error::UnknownNode(name) if name == "Z"));
    }

    #[test]
    fn test_path_cost() {
        let graph = create_test_graph();
        assert_eq!(graph.path_cost(&["A", "B", "D"]), Some(5.0));
        assert_eq!(graph.path_cost(&["A"]), Some(0.0));
        assert_eq!(graph.path_cost(&[]), Some(0.0));
        assert_eq!(graph.path_cost(&["A", "C"]), None);
    }

    #[test]
    fn test_rejects_negative_weight() {
        let mut graph = Graph::new();
        let err = graph.add_edge("A", "B", -3.0).err().unwrap();
        assert!(matches!(err, Error::InvalidEdge { .. }));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_asymmetric_edges() {
        let mut graph = create_test_graph();
        assert!(graph.asymmetric_edges().is_empty());

        graph.add_edge("C", "E", 1.0).unwrap();
        graph.add_edge("A", "B", 7.0).unwrap();
        let asymmetric = graph.asymmetric_edges();
        assert_eq!(asymmetric.len(), 3);
        assert!(asymmetric.contains(&("C", "E")));
        assert!(asymmetric.contains(&("A", "B")));
        assert!(asymmetric.contains(&("B", "A")));
    }

    #[test]
    fn test_counts() {
        let mut graph = create_test_graph();
        graph.add_node("E");
        assert_eq!(graph.len(), 5);
        assert_eq!(graph.edge_count(), 6);
        assert!(graph.contains(&"E"));
        assert_eq!(graph.neighbors(&"E").unwrap().count(), 0);
    }
}
