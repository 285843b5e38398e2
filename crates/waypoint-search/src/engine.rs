//! Search engine: the traversal loop shared by every strategy

use std::collections::HashSet;

use waypoint_core::{Graph, HeuristicEvaluator, NodeId};

use crate::error::{SearchError, SearchResult};
use crate::fringe::{FifoFringe, LifoFringe, PriorityFringe};
use crate::path::PathArena;
use crate::report::{SearchMetrics, SearchReport};
use crate::strategy::Strategy;
use crate::traits::{Fringe, FringeEntry};

/// Runs searches over a borrowed graph and, for informed strategies, a
/// borrowed heuristic.
///
/// The engine holds no state between calls: every search owns its fringe,
/// visited set and path arena, so one engine can serve any number of
/// queries.
#[derive(Debug, Clone)]
pub struct SearchEngine<'a, N: NodeId> {
    graph: &'a Graph<N>,
    heuristic: Option<HeuristicEvaluator<'a, N>>,
}

impl<'a, N: NodeId> SearchEngine<'a, N> {
    pub fn new(graph: &'a Graph<N>) -> Self {
        Self {
            graph,
            heuristic: None,
        }
    }

    /// Attach the heuristic used by best-first and A*
    pub fn with_heuristic(mut self, heuristic: HeuristicEvaluator<'a, N>) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    pub fn graph(&self) -> &'a Graph<N> {
        self.graph
    }

    /// Search for a path from `start` to `goal`.
    ///
    /// An unreachable or unknown goal yields a report with an empty path.
    /// Fails if `start` is not in the graph, or if an informed strategy is
    /// requested without a heuristic.
    pub fn search(&self, strategy: Strategy, start: &N, goal: &N) -> SearchResult<SearchReport<N>> {
        if !self.graph.contains(start) {
            return Err(SearchError::UnknownStartNode(start.to_string()));
        }

        let heuristic = if strategy.is_informed() {
            Some(
                self.heuristic
                    .as_ref()
                    .ok_or(SearchError::MissingHeuristic(strategy))?,
            )
        } else {
            None
        };

        tracing::debug!(
            "Executing {} search: start={}, goal={}",
            strategy,
            start,
            goal
        );

        let report = match strategy {
            Strategy::BreadthFirst => self.run(FifoFringe::new(), strategy, None, start, goal),
            Strategy::DepthFirst => self.run(LifoFringe::new(), strategy, None, start, goal),
            Strategy::BestFirst | Strategy::AStar => {
                self.run(PriorityFringe::new(), strategy, heuristic, start, goal)
            }
        };

        tracing::debug!(
            "{} search finished: found={}, nodes_expanded={}, max_fringe_size={}",
            strategy,
            report.is_found(),
            report.nodes_expanded,
            report.max_fringe_size
        );

        Ok(report)
    }

    fn run<F: Fringe>(
        &self,
        mut fringe: F,
        strategy: Strategy,
        heuristic: Option<&HeuristicEvaluator<'a, N>>,
        start: &N,
        goal: &N,
    ) -> SearchReport<N> {
        let estimate = |node: &N| heuristic.map_or(0.0, |h| h.estimate(node, goal));

        let mut metrics = SearchMetrics::start();
        let mut arena = PathArena::new();
        let mut visited: HashSet<N> = HashSet::new();

        fringe.push(FringeEntry {
            step: arena.root(start.clone()),
            cost: 0.0,
            priority: strategy.priority(0.0, estimate(start)),
        });

        while !fringe.is_empty() {
            metrics.observe_fringe(fringe.len());

            let Some(entry) = fringe.pop() else {
                break;
            };
            let node = arena.node(entry.step).clone();

            if &node == goal {
                return metrics.finish(arena.unwind(entry.step));
            }

            // Stale entry: the node was expanded through an earlier copy
            if visited.contains(&node) {
                continue;
            }
            visited.insert(node.clone());
            metrics.record_expansion();

            let neighbors = match self.graph.neighbors(&node) {
                Ok(neighbors) => neighbors,
                Err(_) => {
                    tracing::trace!("{} has no adjacency entry, treating as a dead end", node);
                    continue;
                }
            };

            tracing::trace!("Expanding {} (cost {})", node, entry.cost);

            for (neighbor, weight) in neighbors {
                if visited.contains(neighbor) {
                    continue;
                }
                let cost = entry.cost + weight;
                fringe.push(FringeEntry {
                    step: arena.extend(entry.step, neighbor.clone()),
                    cost,
                    priority: strategy.priority(cost, estimate(neighbor)),
                });
            }
        }

        metrics.finish(Vec::new())
    }
}

/// Run one search without constructing an engine first.
///
/// `heuristic` is only consulted by best-first and A*.
pub fn search<'a, N: NodeId>(
    strategy: Strategy,
    graph: &'a Graph<N>,
    heuristic: Option<HeuristicEvaluator<'a, N>>,
    start: &N,
    goal: &N,
) -> SearchResult<SearchReport<N>> {
    let mut engine = SearchEngine::new(graph);
    if let Some(heuristic) = heuristic {
        engine = engine.with_heuristic(heuristic);
    }
    engine.search(strategy, start, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_core::HeuristicTable;

    fn create_test_graph() -> Graph<&'static str> {
        // A --1-- B --2-- C --1-- D
        //         |       |
        //         1       1
        //         |       |
        //         E --3-- F
        let mut graph = Graph::new();
        graph.add_undirected_edge("A", "B", 1.0).unwrap();
        graph.add_undirected_edge("B", "C", 2.0).unwrap();
        graph.add_undirected_edge("C", "D", 1.0).unwrap();
        graph.add_undirected_edge("B", "E", 1.0).unwrap();
        graph.add_undirected_edge("C", "F", 1.0).unwrap();
        graph.add_undirected_edge("E", "F", 3.0).unwrap();
        graph
    }

    fn create_test_table() -> HeuristicTable<&'static str> {
        let estimates = [
            ("A", 4.0),
            ("B", 3.0),
            ("C", 1.0),
            ("D", 2.0),
            ("E", 3.0),
            ("F", 0.0),
        ]
        .into_iter()
        .collect();
        HeuristicTable::new("F", estimates).unwrap()
    }

    #[test]
    fn test_breadth_first_path() {
        let graph = create_test_graph();
        let report = SearchEngine::new(&graph)
            .search(Strategy::BreadthFirst, &"A", &"F")
            .unwrap();

        assert_eq!(report.path, vec!["A", "B", "C", "F"]);
        // A, B, C, E and D are expanded before F reaches the queue front
        assert_eq!(report.nodes_expanded, 5);
    }

    #[test]
    fn test_depth_first_follows_latest_neighbor() {
        let graph = create_test_graph();
        let report = SearchEngine::new(&graph)
            .search(Strategy::DepthFirst, &"A", &"F")
            .unwrap();

        assert_eq!(report.path, vec!["A", "B", "E", "F"]);
        assert_eq!(report.nodes_expanded, 3);
    }

    #[test]
    fn test_a_star_weighted_path() {
        // Via C: A->B->C->F = 1+2+1 = 4
        // Via E: A->B->E->F = 1+1+3 = 5
        let graph = create_test_graph();
        let table = create_test_table();
        let engine = SearchEngine::new(&graph).with_heuristic(HeuristicEvaluator::new(&table));
        let report = engine.search(Strategy::AStar, &"A", &"F").unwrap();

        assert_eq!(report.path, vec!["A", "B", "C", "F"]);
        assert_eq!(report.cost(&graph), Some(4.0));
        assert_eq!(report.nodes_expanded, 3);
    }

    #[test]
    fn test_best_first_path() {
        let graph = create_test_graph();
        let table = create_test_table();
        let report = search(
            Strategy::BestFirst,
            &graph,
            Some(HeuristicEvaluator::new(&table)),
            &"A",
            &"F",
        )
        .unwrap();

        assert_eq!(report.path, vec!["A", "B", "C", "F"]);
        assert_eq!(report.nodes_expanded, 3);
    }

    #[test]
    fn test_start_is_goal() {
        let graph = create_test_graph();
        let table = create_test_table();
        let engine = SearchEngine::new(&graph).with_heuristic(HeuristicEvaluator::new(&table));

        for strategy in Strategy::ALL {
            let report = engine.search(strategy, &"C", &"C").unwrap();
            assert_eq!(report.path, vec!["C"], "{}", strategy);
            assert_eq!(report.nodes_expanded, 0, "{}", strategy);
            assert_eq!(report.max_fringe_size, 1, "{}", strategy);
        }
    }

    #[test]
    fn test_no_path_found() {
        let mut graph = create_test_graph();
        graph.add_node("G");
        let table = create_test_table();
        let engine = SearchEngine::new(&graph).with_heuristic(HeuristicEvaluator::new(&table));

        for strategy in Strategy::ALL {
            for goal in ["G", "Nowhere"] {
                let report = engine.search(strategy, &"A", &goal).unwrap();
                assert!(report.path.is_empty(), "{} -> {}", strategy, goal);
                assert_eq!(report.nodes_expanded, 6, "{} -> {}", strategy, goal);
                assert!(report.max_fringe_size >= 1);
            }
        }
    }

    #[test]
    fn test_unknown_start() {
        let graph = create_test_graph();
        let err = SearchEngine::new(&graph)
            .search(Strategy::BreadthFirst, &"Z", &"A")
            .unwrap_err();
        assert_eq!(err, SearchError::UnknownStartNode("Z".to_string()));
    }

    #[test]
    fn test_informed_search_requires_heuristic() {
        let graph = create_test_graph();
        let engine = SearchEngine::new(&graph);
        for strategy in [Strategy::BestFirst, Strategy::AStar] {
            let err = engine.search(strategy, &"A", &"F").unwrap_err();
            assert_eq!(err, SearchError::MissingHeuristic(strategy));
        }
    }

    #[test]
    fn test_neighbor_without_entry_is_dead_end() {
        let mut graph = Graph::new();
        graph.add_edge("A", "X", 1.0).unwrap();
        graph.add_edge("A", "B", 5.0).unwrap();
        let engine = SearchEngine::new(&graph);

        let report = engine.search(Strategy::BreadthFirst, &"A", &"X").unwrap();
        assert_eq!(report.path, vec!["A", "X"]);

        let report = engine.search(Strategy::BreadthFirst, &"A", &"Y").unwrap();
        assert!(report.path.is_empty());
        assert_eq!(report.nodes_expanded, 3);
    }

    #[test]
    fn test_partial_table_still_finds_path() {
        let graph = create_test_graph();
        let estimates = [("F", 0.0), ("C", 1.0)].into_iter().collect();
        let table = HeuristicTable::new("F", estimates).unwrap();
        let engine = SearchEngine::new(&graph).with_heuristic(HeuristicEvaluator::new(&table));

        for strategy in [Strategy::BestFirst, Strategy::AStar] {
            let report = engine.search(strategy, &"A", &"D").unwrap();
            assert_eq!(report.path.first(), Some(&"A"));
            assert_eq!(report.path.last(), Some(&"D"));
            assert!(graph.path_cost(&report.path).is_some());
        }
    }
}
