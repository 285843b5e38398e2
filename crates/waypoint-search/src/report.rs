//! Search metrics and result record

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use waypoint_core::{Graph, NodeId};

/// Outcome of one search call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport<N> {
    /// Nodes from start to goal inclusive; empty when no path exists
    pub path: Vec<N>,

    /// Distinct nodes popped and expanded
    pub nodes_expanded: usize,

    /// High-water mark of the fringe size
    pub max_fringe_size: usize,

    /// Wall-clock duration of the search
    #[serde(
        default,
        rename = "elapsed_secs",
        with = "secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub elapsed: Option<Duration>,
}

impl<N> SearchReport<N> {
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path, `None` when no path was found
    pub fn hops(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// Same report with the timing replaced
    pub fn with_elapsed(mut self, elapsed: Option<Duration>) -> Self {
        self.elapsed = elapsed;
        self
    }
}

impl<N: NodeId> SearchReport<N> {
    /// Total edge weight of the path in `graph`, `None` when no path was found
    pub fn cost(&self, graph: &Graph<N>) -> Option<f64> {
        if self.path.is_empty() {
            return None;
        }
        graph.path_cost(&self.path)
    }
}

/// Counters accumulated while a search runs
#[derive(Debug)]
pub struct SearchMetrics {
    nodes_expanded: usize,
    max_fringe_size: usize,
    started: Instant,
}

impl Default for SearchMetrics {
    fn default() -> Self {
        Self::start()
    }
}

impl SearchMetrics {
    /// Start the clock with zeroed counters
    pub fn start() -> Self {
        Self {
            nodes_expanded: 0,
            max_fringe_size: 0,
            started: Instant::now(),
        }
    }

    pub fn observe_fringe(&mut self, len: usize) {
        self.max_fringe_size = self.max_fringe_size.max(len);
    }

    pub fn record_expansion(&mut self) {
        self.nodes_expanded += 1;
    }

    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    pub fn max_fringe_size(&self) -> usize {
        self.max_fringe_size
    }

    /// Package the counters and `path` into the final report
    pub fn finish<N>(self, path: Vec<N>) -> SearchReport<N> {
        SearchReport {
            path,
            nodes_expanded: self.nodes_expanded,
            max_fringe_size: self.max_fringe_size,
            elapsed: Some(self.started.elapsed()),
        }
    }
}

/// Serialize `Option<Duration>` as fractional seconds
mod secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(duration) => serializer.serialize_f64(duration.as_secs_f64()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
        let secs = Option::<f64>::deserialize(deserializer)?;
        Ok(secs
            .filter(|s| s.is_finite() && *s >= 0.0)
            .map(Duration::from_secs_f64))
    }
}
