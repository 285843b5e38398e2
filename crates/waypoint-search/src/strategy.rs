//! Search strategy selection

use serde::{Deserialize, Serialize};

/// The four traversal strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// FIFO fringe
    BreadthFirst,
    /// LIFO fringe
    DepthFirst,
    /// Greedy best-first: priority is the heuristic estimate alone
    BestFirst,
    /// Priority is accumulated cost plus heuristic estimate
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::BestFirst,
        Strategy::AStar,
    ];

    /// Whether the strategy consults a heuristic
    pub fn is_informed(self) -> bool {
        matches!(self, Self::BestFirst | Self::AStar)
    }

    /// Fringe priority for an entry with accumulated cost `cost` and
    /// heuristic estimate `estimate`. Uninformed strategies ignore it.
    pub fn priority(self, cost: f64, estimate: f64) -> f64 {
        match self {
            Self::BreadthFirst | Self::DepthFirst => 0.0,
            Self::BestFirst => estimate,
            Self::AStar => cost + estimate,
        }
    }

    /// Human-readable label used in experiment output
    pub fn label(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
            Self::BestFirst => "Best-First",
            Self::AStar => "A*",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::BreadthFirst => "breadth-first",
            Self::DepthFirst => "depth-first",
            Self::BestFirst => "best-first",
            Self::AStar => "a-star",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breadth-first" | "bfs" => Ok(Self::BreadthFirst),
            "depth-first" | "dfs" => Ok(Self::DepthFirst),
            "best-first" | "greedy" => Ok(Self::BestFirst),
            "a-star" | "astar" | "a*" => Ok(Self::AStar),
            other => Err(format!("unknown strategy: {}", other)),
        }
    }
}
