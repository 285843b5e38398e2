//! Repeated-run comparison of the search strategies

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::engine::SearchEngine;
use crate::error::SearchResult;
use crate::strategy::Strategy;

/// Runs per strategy when timing an experiment
pub const DEFAULT_REPETITIONS: u32 = 100;

/// A start/goal pair to compare strategies on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentCase {
    pub start: String,
    pub goal: String,
}

impl ExperimentCase {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }

    /// File-friendly name, e.g. `Arad_to_Bucharest`
    pub fn name(&self) -> String {
        format!("{}_to_{}", self.start, self.goal).replace(' ', "_")
    }

    /// The standard comparison cases on the Romania road map
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Arad", "Bucharest"),
            Self::new("Timisoara", "Craiova"),
            Self::new("Zerind", "Sibiu"),
            Self::new("Oradea", "Pitesti"),
            Self::new("Arad", "Neamt"),
        ]
    }
}

impl std::str::FromStr for ExperimentCase {
    type Err = String;

    /// Parse `START:GOAL`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((start, goal)) if !start.trim().is_empty() && !goal.trim().is_empty() => {
                Ok(Self::new(start.trim(), goal.trim()))
            }
            _ => Err(format!("expected START:GOAL, got '{}'", s)),
        }
    }
}

/// One row of experiment output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    pub algorithm: String,
    pub path_found: bool,
    pub nodes_expanded: usize,
    pub max_fringe_size: usize,
    /// Mean wall-clock time per run
    pub time_secs: f64,
    pub hops: Option<usize>,
    pub path_cost: Option<f64>,
}

/// Run every strategy in `strategies` on `case`, `repetitions` times each,
/// and report the metrics of the last run with the mean duration.
pub fn run_experiment(
    engine: &SearchEngine<'_, String>,
    case: &ExperimentCase,
    strategies: &[Strategy],
    repetitions: u32,
) -> SearchResult<Vec<ExperimentRecord>> {
    let repetitions = repetitions.max(1);
    tracing::info!(
        "Running experiment {} -> {} ({} repetitions)",
        case.start,
        case.goal,
        repetitions
    );

    let mut records = Vec::with_capacity(strategies.len());
    for &strategy in strategies {
        let started = Instant::now();
        let mut report = engine.search(strategy, &case.start, &case.goal)?;
        for _ in 1..repetitions {
            report = engine.search(strategy, &case.start, &case.goal)?;
        }
        let time_secs = started.elapsed().as_secs_f64() / f64::from(repetitions);

        records.push(ExperimentRecord {
            algorithm: strategy.label().to_string(),
            path_found: report.is_found(),
            nodes_expanded: report.nodes_expanded,
            max_fringe_size: report.max_fringe_size,
            time_secs,
            hops: report.hops(),
            path_cost: report.cost(engine.graph()),
        });
    }

    Ok(records)
}
