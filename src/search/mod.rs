pub mod alphabeta;
pub mod eval;
pub mod minimax;
pub mod timer;

use crate::board::{BoardError, Move};
use timer::{SearchTimeout, DEFAULT_TIMER_THRESHOLD_MS};

pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    /// Fixed depth for minimax; ignored by iterative deepening.
    pub depth: u32,
    pub timer_threshold_ms: f64,
    /// Optional cap on iterative deepening.
    pub max_depth: Option<u32>,
    /// Seed for the alpha-beta root fallback move.
    pub seed: u64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            timer_threshold_ms: DEFAULT_TIMER_THRESHOLD_MS,
            max_depth: None,
            seed: 0,
        }
    }
}

/// Outcome of one completed fixed-depth search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub score: f64,
    pub best_move: Move,
    pub nodes: u64,
    pub depth: u32,
}

/// Why a recursive search stopped early.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Timeout(#[from] SearchTimeout),

    #[error(transparent)]
    Board(#[from] BoardError),
}
