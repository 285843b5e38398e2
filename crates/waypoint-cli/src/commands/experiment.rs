//! Experiment command: compare strategies over start/goal cases

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::output::{format_output, optional, TableRow};
use crate::{AppContext, Cli};
use waypoint_search::{run_experiment, ExperimentCase, ExperimentRecord, Strategy};

#[derive(Args)]
pub struct ExperimentArgs {
    /// Case as START:GOAL (repeatable; defaults to the standard Romania cases)
    #[arg(long = "case")]
    pub cases: Vec<String>,

    /// Runs per strategy
    #[arg(short = 'n', long)]
    pub repetitions: Option<u32>,

    /// Directory for metrics CSV files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Print the summary without writing CSV files
    #[arg(long)]
    pub no_write: bool,

    /// Direct estimate for goals other than the reference: via-reference, reverse-triangle
    #[arg(short, long)]
    pub bound: Option<String>,
}

/// Summary row: an experiment record tagged with its case
#[derive(Debug, Serialize)]
pub struct ExperimentRow {
    pub case: String,
    #[serde(flatten)]
    pub record: ExperimentRecord,
}

impl TableRow for ExperimentRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "case",
            "algorithm",
            "path_found",
            "nodes_expanded",
            "max_fringe_size",
            "time_secs",
            "hops",
            "path_cost",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.case.clone(),
            self.record.algorithm.clone(),
            self.record.path_found.to_string(),
            self.record.nodes_expanded.to_string(),
            self.record.max_fringe_size.to_string(),
            format!("{:.9}", self.record.time_secs),
            optional(self.record.hops),
            optional(self.record.path_cost),
        ]
    }
}

fn write_csv(path: &Path, records: &[ExperimentRecord]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn run(args: &ExperimentArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let cases = if args.cases.is_empty() {
        ExperimentCase::defaults()
    } else {
        args.cases
            .iter()
            .map(|c| c.parse::<ExperimentCase>().map_err(anyhow::Error::msg))
            .collect::<anyhow::Result<Vec<ExperimentCase>>>()?
    };

    let repetitions = args.repetitions.unwrap_or(ctx.config.repetitions);
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| ctx.config.output_dir.clone());

    let strategies: Vec<Strategy> = if ctx.heuristic.is_some() {
        Strategy::ALL.to_vec()
    } else {
        tracing::warn!("No heuristic table loaded, running uninformed strategies only");
        Strategy::ALL
            .into_iter()
            .filter(|s| !s.is_informed())
            .collect()
    };

    if !args.no_write {
        std::fs::create_dir_all(&output_dir)?;
    }

    let engine = ctx.engine(ctx.bound(args.bound.as_deref())?);
    let mut summary = Vec::new();

    for case in &cases {
        let records = run_experiment(&engine, case, &strategies, repetitions)?;

        if !args.no_write {
            let path = output_dir.join(format!("metrics_{}.csv", case.name()));
            write_csv(&path, &records)?;
            tracing::info!("Wrote {:?}", path);
        }

        summary.extend(records.into_iter().map(|record| ExperimentRow {
            case: format!("{} -> {}", case.start, case.goal),
            record,
        }));
    }

    println!("{}", format_output(&summary, cli.format.as_str().into())?);
    Ok(())
}
