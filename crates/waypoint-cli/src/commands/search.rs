//! Search command

use clap::Args;
use serde::Serialize;

use crate::output::{format_output, optional, TableRow};
use crate::{AppContext, Cli};
use waypoint_core::RoadGraph;
use waypoint_search::{SearchReport, Strategy};

#[derive(Args)]
pub struct SearchArgs {
    /// Start location
    pub start: String,

    /// Goal location
    pub goal: String,

    /// Strategy: breadth-first, depth-first, best-first, a-star, all
    #[arg(short, long, default_value = "a-star")]
    pub strategy: String,

    /// Direct estimate for goals other than the reference: via-reference, reverse-triangle
    #[arg(short, long)]
    pub bound: Option<String>,
}

/// One search outcome as printed by the CLI
#[derive(Debug, Serialize)]
pub struct SearchRow {
    pub strategy: Strategy,
    pub start: String,
    pub goal: String,
    pub found: bool,
    pub path: Vec<String>,
    pub hops: Option<usize>,
    pub cost: Option<f64>,
    pub nodes_expanded: usize,
    pub max_fringe_size: usize,
    pub elapsed_secs: Option<f64>,
}

impl SearchRow {
    fn new(strategy: Strategy, args: &SearchArgs, report: SearchReport<String>, graph: &RoadGraph) -> Self {
        Self {
            strategy,
            start: args.start.clone(),
            goal: args.goal.clone(),
            found: report.is_found(),
            hops: report.hops(),
            cost: report.cost(graph),
            nodes_expanded: report.nodes_expanded,
            max_fringe_size: report.max_fringe_size,
            elapsed_secs: report.elapsed.map(|d| d.as_secs_f64()),
            path: report.path,
        }
    }
}

impl TableRow for SearchRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "strategy",
            "found",
            "path",
            "hops",
            "cost",
            "nodes_expanded",
            "max_fringe_size",
            "elapsed_secs",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.strategy.to_string(),
            self.found.to_string(),
            self.path.join(" -> "),
            optional(self.hops),
            optional(self.cost),
            self.nodes_expanded.to_string(),
            self.max_fringe_size.to_string(),
            self.elapsed_secs
                .map(|s| format!("{:.6}", s))
                .unwrap_or_default(),
        ]
    }
}

/// Parse a strategy name, or `all` for every strategy
fn parse_strategies(value: &str) -> anyhow::Result<Vec<Strategy>> {
    if value.eq_ignore_ascii_case("all") {
        return Ok(Strategy::ALL.to_vec());
    }
    let strategy: Strategy = value.parse().map_err(anyhow::Error::msg)?;
    Ok(vec![strategy])
}

pub fn run(args: &SearchArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let strategies = parse_strategies(&args.strategy)?;
    let engine = ctx.engine(ctx.bound(args.bound.as_deref())?);

    let mut rows = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let report = engine.search(strategy, &args.start, &args.goal)?;
        if !report.is_found() {
            tracing::info!(
                "{} search found no path from {} to {}",
                strategy,
                args.start,
                args.goal
            );
        }
        rows.push(SearchRow::new(strategy, args, report, &ctx.graph));
    }

    println!("{}", format_output(&rows, cli.format.as_str().into())?);
    Ok(())
}
