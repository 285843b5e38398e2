//! CLI configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use waypoint_core::DirectEstimate;
use waypoint_search::DEFAULT_REPETITIONS;

/// Get default config file path
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("waypoint")
        .join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub map: PathBuf,
    pub heuristic: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub repetitions: u32,
    pub output_dir: PathBuf,
    pub bound: DirectEstimate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map: PathBuf::from("data/romania_map.json"),
            heuristic: PathBuf::from("data/heuristic_to_bucharest.json"),
            reference: None,
            repetitions: DEFAULT_REPETITIONS,
            output_dir: PathBuf::from("results"),
            bound: DirectEstimate::default(),
        }
    }
}

impl Config {
    /// Load config from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Write config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["map", "heuristic", "reference", "repetitions", "output_dir", "bound"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "map" => Some(self.map.display().to_string()),
            "heuristic" => Some(self.heuristic.display().to_string()),
            "reference" => self.reference.clone(),
            "repetitions" => Some(self.repetitions.to_string()),
            "output_dir" => Some(self.output_dir.display().to_string()),
            "bound" => Some(self.bound.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "map" => self.map = PathBuf::from(value),
            "heuristic" => self.heuristic = PathBuf::from(value),
            "reference" => {
                self.reference = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            "repetitions" => self.repetitions = value.parse()?,
            "output_dir" => self.output_dir = PathBuf::from(value),
            "bound" => self.bound = value.parse().map_err(anyhow::Error::msg)?,
            _ => anyhow::bail!(
                "Unknown config key: {}. Available keys: {}",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }
}
