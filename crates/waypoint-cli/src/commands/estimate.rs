//! Heuristic estimate command

use anyhow::Context;
use clap::Args;
use serde::Serialize;

use crate::output::{format_output, TableRow};
use crate::{AppContext, Cli};
use waypoint_core::{DirectEstimate, HeuristicEvaluator};

#[derive(Args)]
pub struct EstimateArgs {
    /// Location to estimate from
    pub node: String,

    /// Goal location
    pub goal: String,

    /// Direct estimate for goals other than the reference: via-reference, reverse-triangle
    #[arg(short, long)]
    pub bound: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EstimateRow {
    pub node: String,
    pub goal: String,
    pub reference: String,
    pub bound: DirectEstimate,
    /// `None` when the table cannot bound the distance
    pub estimate: Option<f64>,
}

impl TableRow for EstimateRow {
    fn headers() -> Vec<&'static str> {
        vec!["node", "goal", "reference", "bound", "estimate"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.node.clone(),
            self.goal.clone(),
            self.reference.clone(),
            self.bound.to_string(),
            self.estimate
                .map_or_else(|| "inf".to_string(), |h| h.to_string()),
        ]
    }
}

pub fn run(args: &EstimateArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let table = ctx
        .heuristic
        .as_ref()
        .context("No heuristic table loaded; pass --heuristic or set it in the config")?;
    let bound = ctx.bound(args.bound.as_deref())?;

    let estimate = HeuristicEvaluator::new(table)
        .with_direct_estimate(bound)
        .estimate(&args.node, &args.goal);

    let row = EstimateRow {
        node: args.node.clone(),
        goal: args.goal.clone(),
        reference: table.reference().clone(),
        bound,
        estimate: Some(estimate).filter(|h| h.is_finite()),
    };

    println!("{}", format_output(&[row], cli.format.as_str().into())?);
    Ok(())
}
