use crate::search::eval::{CornerSet, Heuristic, HeuristicKind, DEFAULT_CORNER_WEIGHT};
use crate::search::timer::DEFAULT_TIMER_THRESHOLD_MS;
use crate::search::{SearchParams, DEFAULT_SEARCH_DEPTH};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings for one search agent. Every field has a default, so a JSON file
/// only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Plies searched by fixed-depth minimax.
    pub search_depth: u32,
    /// Remaining milliseconds at which a search aborts.
    pub timer_threshold_ms: f64,
    pub heuristic: HeuristicKind,
    /// Penalty for standing on a corner in the corner variants.
    pub corner_weight: f64,
    pub seed: u64,
    /// Optional cap for iterative deepening.
    pub max_depth: Option<u32>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            timer_threshold_ms: DEFAULT_TIMER_THRESHOLD_MS,
            heuristic: HeuristicKind::CornerDistance,
            corner_weight: DEFAULT_CORNER_WEIGHT,
            seed: 0,
            max_depth: None,
        }
    }
}

impl AgentConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: AgentConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::Invalid("search_depth must be at least 1".to_string()));
        }
        if !(self.timer_threshold_ms >= 0.0) {
            return Err(ConfigError::Invalid(format!("timer_threshold_ms must be >= 0, got {}", self.timer_threshold_ms)));
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::Invalid("max_depth must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            depth: self.search_depth,
            timer_threshold_ms: self.timer_threshold_ms,
            max_depth: self.max_depth,
            seed: self.seed,
        }
    }

    pub fn heuristic_for(&self, width: i32, height: i32) -> Heuristic {
        Heuristic::new(self.heuristic, CornerSet::for_board(width, height, self.corner_weight))
    }
}
