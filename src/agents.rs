//! Agents that can sit at an Isolation board.
//!
//! `MinimaxPlayer` and `AlphaBetaPlayer` are the real engines; `RandomPlayer`
//! and `GreedyPlayer` are baselines for matches and tournaments.

use crate::board::{Board, BoardError, GameState, Move};
use crate::config::AgentConfig;
use crate::search::alphabeta::AlphaBetaPlayer;
use crate::search::eval::{Evaluator, Heuristic};
use crate::search::minimax::MinimaxPlayer;
use crate::search::timer::TimeLeft;
use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

pub trait Agent {
    /// Picks a move for the side to move in `state`. `Move::NONE` means the
    /// agent has nothing to play.
    fn get_move(&mut self, state: &Board, time_left: &dyn TimeLeft) -> Result<Move, BoardError>;

    fn name(&self) -> &str;
}

impl<E: Evaluator<Board>> Agent for MinimaxPlayer<E> {
    fn get_move(&mut self, state: &Board, time_left: &dyn TimeLeft) -> Result<Move, BoardError> {
        MinimaxPlayer::get_move(self, state, time_left)
    }

    fn name(&self) -> &str { "minimax" }
}

impl<E: Evaluator<Board>> Agent for AlphaBetaPlayer<E> {
    fn get_move(&mut self, state: &Board, time_left: &dyn TimeLeft) -> Result<Move, BoardError> {
        AlphaBetaPlayer::get_move(self, state, time_left)
    }

    fn name(&self) -> &str { "alphabeta" }
}

/// Plays a uniformly random legal move.
pub struct RandomPlayer {
    rng: SmallRng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self { Self { rng: SmallRng::seed_from_u64(seed) } }
}

impl Agent for RandomPlayer {
    fn get_move(&mut self, state: &Board, _time_left: &dyn TimeLeft) -> Result<Move, BoardError> {
        Ok(state.get_legal_moves().choose(&mut self.rng).copied().unwrap_or(Move::NONE))
    }

    fn name(&self) -> &str { "random" }
}

/// One-ply lookahead: plays the move whose successor scores best.
pub struct GreedyPlayer<E> {
    evaluator: E,
}

impl<E> GreedyPlayer<E> {
    pub fn new(evaluator: E) -> Self { Self { evaluator } }
}

impl<E: Evaluator<Board>> Agent for GreedyPlayer<E> {
    fn get_move(&mut self, state: &Board, _time_left: &dyn TimeLeft) -> Result<Move, BoardError> {
        let me = state.active_player();
        let mut best: Option<(f64, Move)> = None;
        for mv in state.get_legal_moves() {
            let score = self.evaluator.score(&state.forecast_move(mv)?, me);
            if best.map_or(true, |(b, _)| score > b) { best = Some((score, mv)); }
        }
        Ok(best.map_or(Move::NONE, |(_, mv)| mv))
    }

    fn name(&self) -> &str { "greedy" }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    Random,
    Greedy,
    Minimax,
    AlphaBeta,
}

impl AgentKind {
    pub const ALL: [AgentKind; 4] = [AgentKind::Random, AgentKind::Greedy, AgentKind::Minimax, AgentKind::AlphaBeta];

    /// Builds an agent for a `width` x `height` board from `cfg`.
    pub fn build(self, cfg: &AgentConfig, width: i32, height: i32) -> Box<dyn Agent + Send> {
        let heuristic: Heuristic = cfg.heuristic_for(width, height);
        debug!("building {} agent for {}x{} with {:?} heuristic", self, width, height, heuristic.kind());
        match self {
            AgentKind::Random => Box::new(RandomPlayer::new(cfg.seed)),
            AgentKind::Greedy => Box::new(GreedyPlayer::new(heuristic)),
            AgentKind::Minimax => Box::new(MinimaxPlayer::with_params(heuristic, cfg.search_params())),
            AgentKind::AlphaBeta => Box::new(AlphaBetaPlayer::with_params(heuristic, cfg.search_params())),
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AgentKind::Random => "random",
            AgentKind::Greedy => "greedy",
            AgentKind::Minimax => "minimax",
            AgentKind::AlphaBeta => "alphabeta",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(|c: char| c == '-' || c == '_', "").as_str() {
            "random" => Ok(AgentKind::Random),
            "greedy" => Ok(AgentKind::Greedy),
            "minimax" | "mm" => Ok(AgentKind::Minimax),
            "alphabeta" | "ab" => Ok(AgentKind::AlphaBeta),
            other => Err(format!("unknown agent: {other}")),
        }
    }
}
