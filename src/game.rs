use crate::agents::Agent;
use crate::board::{Board, GameState, Move, Player};
use crate::search::timer::{Deadline, TimeLeft};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIME_LIMIT_MS: u64 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The side to move had no legal move.
    Isolated,
    /// The agent returned after its turn budget ran out.
    Timeout,
    /// The agent played an illegal move while legal ones existed, or failed.
    Forfeit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: Player,
    pub history: Vec<Move>,
    pub reason: EndReason,
}

impl GameOutcome {
    pub fn loser(&self) -> Player { self.winner.opponent() }
}

/// Plays `board` to the end. `seats[0]` plays `Player::One`. Each turn gets a
/// fresh `time_limit_ms` budget; returning with less than zero left loses.
pub fn play(mut board: Board, mut seats: [&mut dyn Agent; 2], time_limit_ms: u64) -> GameOutcome {
    let mut history = Vec::new();
    loop {
        let side = board.active_player();
        let played = board.move_count();
        let legal = board.get_legal_moves();
        let agent = &mut seats[side.index()];
        let deadline = Deadline::after_ms(time_limit_ms);
        let choice = agent.get_move(&board, &deadline);
        let left = deadline.time_left_ms();

        let finish = |reason: EndReason, history: Vec<Move>| {
            let outcome = GameOutcome { winner: side.opponent(), history, reason };
            info!("player {} wins ({:?}) after {} moves", outcome.winner, reason, outcome.history.len());
            outcome
        };

        if left < 0.0 {
            warn!("{} (player {}) overran its budget by {:.1} ms", agent.name(), side, -left);
            return finish(EndReason::Timeout, history);
        }
        let mv = match choice {
            Ok(mv) => mv,
            Err(e) => {
                warn!("{} (player {}) failed: {}", agent.name(), side, e);
                return finish(EndReason::Forfeit, history);
            }
        };
        if !legal.contains(&mv) {
            let reason = if legal.is_empty() { EndReason::Isolated } else { EndReason::Forfeit };
            return finish(reason, history);
        }
        debug!("move {}: player {} ({}) plays {}", played + 1, side, agent.name(), mv);
        if let Err(e) = board.apply_move(mv) {
            warn!("rejected {} for player {}: {}", mv, side, e);
            return finish(EndReason::Forfeit, history);
        }
        history.push(mv);
    }
}
