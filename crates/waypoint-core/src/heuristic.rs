//! Straight-line heuristic table and evaluator

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::NodeId;
use crate::limits::validate_estimate;

/// Estimated distances from every node to one fixed reference node.
///
/// Nodes absent from the table have an infinite estimate.
#[derive(Debug, Clone)]
pub struct HeuristicTable<N: NodeId> {
    reference: N,
    estimates: IndexMap<N, f64>,
}

impl<N: NodeId> HeuristicTable<N> {
    /// Create a table of estimates towards `reference`, validating each value.
    pub fn new(reference: N, estimates: IndexMap<N, f64>) -> Result<Self> {
        for (node, estimate) in &estimates {
            validate_estimate(*estimate).map_err(|source| Error::InvalidEstimate {
                node: node.to_string(),
                source,
            })?;
        }
        if !estimates.contains_key(&reference) {
            tracing::warn!("Reference node {} has no entry in the heuristic table", reference);
        }
        Ok(Self {
            reference,
            estimates,
        })
    }

    /// Create a table whose reference is the single node with a zero estimate.
    pub fn with_inferred_reference(estimates: IndexMap<N, f64>) -> Result<Self> {
        let reference = Self::infer_reference(&estimates)?;
        Self::new(reference, estimates)
    }

    /// Find the unique zero-valued entry.
    pub fn infer_reference(estimates: &IndexMap<N, f64>) -> Result<N> {
        let zeros: Vec<&N> = estimates
            .iter()
            .filter(|(_, h)| **h == 0.0)
            .map(|(node, _)| node)
            .collect();

        match zeros.as_slice() {
            [] => Err(Error::MissingReference),
            [reference] => Ok((*reference).clone()),
            several => Err(Error::AmbiguousReference(
                several
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            )),
        }
    }

    pub fn reference(&self) -> &N {
        &self.reference
    }

    /// Estimate from `node` to the reference node, `+inf` when unknown.
    pub fn get(&self, node: &N) -> f64 {
        self.estimates.get(node).copied().unwrap_or(f64::INFINITY)
    }

    pub fn contains(&self, node: &N) -> bool {
        self.estimates.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, f64)> {
        self.estimates.iter().map(|(n, h)| (n, *h))
    }
}

/// How the evaluator estimates the distance between two non-reference nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectEstimate {
    /// `table[node] + table[goal]`, the same formula as the route through
    /// the reference node.
    #[default]
    ViaReference,
    /// `|table[node] - table[goal]|`, a lower bound whenever the table is
    /// consistent.
    ReverseTriangle,
}

impl std::fmt::Display for DirectEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ViaReference => write!(f, "via-reference"),
            Self::ReverseTriangle => write!(f, "reverse-triangle"),
        }
    }
}

impl std::str::FromStr for DirectEstimate {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "via-reference" | "via" => Ok(Self::ViaReference),
            "reverse-triangle" | "reverse" => Ok(Self::ReverseTriangle),
            other => Err(format!("unknown direct estimate: {}", other)),
        }
    }
}

/// Estimates the remaining distance from any node to any goal using a
/// table anchored at a single reference node.
#[derive(Debug, Clone)]
pub struct HeuristicEvaluator<'a, N: NodeId> {
    table: &'a HeuristicTable<N>,
    direct: DirectEstimate,
}

impl<'a, N: NodeId> HeuristicEvaluator<'a, N> {
    pub fn new(table: &'a HeuristicTable<N>) -> Self {
        Self {
            table,
            direct: DirectEstimate::default(),
        }
    }

    pub fn with_direct_estimate(mut self, direct: DirectEstimate) -> Self {
        self.direct = direct;
        self
    }

    pub fn table(&self) -> &'a HeuristicTable<N> {
        self.table
    }

    /// Estimated distance from `node` to `goal`. Never negative; `+inf` when
    /// the table lacks an entry it needs.
    pub fn estimate(&self, node: &N, goal: &N) -> f64 {
        if goal == self.table.reference() {
            return self.table.get(node);
        }

        let via_reference = self.table.get(node) + self.table.get(goal);
        via_reference.min(self.direct_estimate(node, goal))
    }

    fn direct_estimate(&self, node: &N, goal: &N) -> f64 {
        let to_reference = self.table.get(node);
        let goal_to_reference = self.table.get(goal);

        match self.direct {
            DirectEstimate::ViaReference => to_reference + goal_to_reference,
            DirectEstimate::ReverseTriangle => {
                // inf - inf is NaN
                if to_reference.is_infinite() || goal_to_reference.is_infinite() {
                    f64::INFINITY
                } else {
                    (to_reference - goal_to_reference).abs()
                }
            }
        }
    }
}
