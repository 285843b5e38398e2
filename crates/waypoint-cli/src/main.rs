//! Waypoint CLI - Command line interface for graph search

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{completions, estimate, experiment, search};
use config::Config;
use waypoint_core::{load_graph, load_heuristic, DirectEstimate, HeuristicEvaluator, RoadGraph, RoadHeuristic};
use waypoint_search::SearchEngine;

#[derive(Parser)]
#[command(name = "waypoint")]
#[command(author, version, about = "Breadth-first, depth-first, best-first and A* search over road maps")]
pub struct Cli {
    /// Road map JSON file
    #[arg(short, long, global = true)]
    pub map: Option<PathBuf>,

    /// Heuristic table JSON file
    #[arg(long, global = true)]
    pub heuristic: Option<PathBuf>,

    /// Reference node of the heuristic table (default: its zero-valued entry)
    #[arg(short, long, global = true)]
    pub reference: Option<String>,

    /// Config file
    #[arg(short, long, global = true, env = "WAYPOINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: table, json, csv
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(config::default_config_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find a path between two locations
    Search(search::SearchArgs),
    /// Print the heuristic estimate between two locations
    Estimate(estimate::EstimateArgs),
    /// Compare all strategies on a set of start/goal cases
    Experiment(experiment::ExperimentArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the loaded road map and heuristic table
pub struct AppContext {
    pub config: Config,
    pub graph: RoadGraph,
    pub heuristic: Option<RoadHeuristic>,
}

impl AppContext {
    pub fn new(cli: &Cli, config: Config) -> anyhow::Result<Self> {
        let map_path = cli.map.clone().unwrap_or_else(|| config.map.clone());
        let graph = load_graph(&map_path)
            .with_context(|| format!("Failed to load road map {}", map_path.display()))?;

        let heuristic_path = cli
            .heuristic
            .clone()
            .unwrap_or_else(|| config.heuristic.clone());
        let reference = cli.reference.as_deref().or(config.reference.as_deref());

        let heuristic = if heuristic_path.exists() {
            let table = load_heuristic(&heuristic_path, reference).with_context(|| {
                format!("Failed to load heuristic table {}", heuristic_path.display())
            })?;
            Some(table)
        } else if cli.heuristic.is_some() {
            anyhow::bail!("Heuristic table not found: {}", heuristic_path.display());
        } else {
            tracing::warn!(
                "No heuristic table at {}; informed strategies are unavailable",
                heuristic_path.display()
            );
            None
        };

        Ok(Self {
            config,
            graph,
            heuristic,
        })
    }

    /// Resolve the direct estimate from a command flag, falling back to config
    pub fn bound(&self, flag: Option<&str>) -> anyhow::Result<DirectEstimate> {
        match flag {
            Some(value) => value.parse().map_err(anyhow::Error::msg),
            None => Ok(self.config.bound),
        }
    }

    /// Build a search engine over the loaded data
    pub fn engine(&self, bound: DirectEstimate) -> SearchEngine<'_, String> {
        let engine = SearchEngine::new(&self.graph);
        match &self.heuristic {
            Some(table) => {
                engine.with_heuristic(HeuristicEvaluator::new(table).with_direct_estimate(bound))
            }
            None => engine,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting waypoint CLI");

    let config_path = cli.config_path();
    let config = Config::load_from(&config_path)?;

    match &cli.command {
        Commands::Search(args) => search::run(args, &cli, &AppContext::new(&cli, config)?)?,
        Commands::Estimate(args) => estimate::run(args, &cli, &AppContext::new(&cli, config)?)?,
        Commands::Experiment(args) => {
            experiment::run(args, &cli, &AppContext::new(&cli, config)?)?
        }
        Commands::Config(args) => commands::config::run(args, &config_path)?,
        Commands::Completions(args) => completions::run(args)?,
    }

    Ok(())
}
