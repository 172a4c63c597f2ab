pub mod isolation;

pub use isolation::Board;

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two seats at the board. `One` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "1"),
            Player::Two => write!(f, "2"),
        }
    }
}

/// Target cell of a move, `(row, col)`. `Move::NONE` is the "no move" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    pub const NONE: Move = Move { row: -1, col: -1 };

    pub const fn new(row: i32, col: i32) -> Self { Self { row, col } }

    pub fn is_none(&self) -> bool { *self == Move::NONE }
}

impl From<(i32, i32)> for Move {
    fn from((row, col): (i32, i32)) -> Self { Move { row, col } }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Precondition violations raised by the board. These are caller bugs, never
/// part of normal search flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("illegal move {mv} for player {player}")]
    IllegalMove { mv: Move, player: Player },

    #[error("cell {mv} is outside a {width}x{height} board")]
    OutOfBounds { mv: Move, width: i32, height: i32 },

    #[error("invalid board setup: {0}")]
    InvalidSetup(String),
}

/// The narrow view of a game position that the search engines consume.
///
/// Implementations must enumerate moves in a deterministic order and must
/// never mutate `self` in `forecast_move`.
pub trait GameState: Clone {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    fn active_player(&self) -> Player;
    fn inactive_player(&self) -> Player { self.active_player().opponent() }
    fn get_opponent(&self, player: Player) -> Player { player.opponent() }

    /// Legal moves for the side to move.
    fn get_legal_moves(&self) -> Vec<Move> { self.get_legal_moves_for(self.active_player()) }
    fn get_legal_moves_for(&self, player: Player) -> Vec<Move>;

    /// Successor state after the active player plays `mv`. Fails with
    /// `BoardError::IllegalMove` when `mv` is not currently legal.
    fn forecast_move(&self, mv: Move) -> Result<Self, BoardError>;

    fn get_player_location(&self, player: Player) -> Option<Move>;

    /// Number of moves applied so far.
    fn move_count(&self) -> u32;
    /// Number of cells still open.
    fn blank_count(&self) -> usize;

    /// `player` won: the opponent is to move and has no legal moves.
    fn is_winner(&self, player: Player) -> bool {
        player == self.inactive_player() && self.get_legal_moves().is_empty()
    }

    /// `player` lost: it is to move and has no legal moves.
    fn is_loser(&self, player: Player) -> bool {
        player == self.active_player() && self.get_legal_moves().is_empty()
    }

    /// Terminal utility from `player`'s point of view: `+inf` on a win,
    /// `-inf` on a loss, `0.0` while the game is still running.
    fn utility(&self, player: Player) -> f64 {
        if !self.get_legal_moves().is_empty() {
            return 0.0;
        }
        if player == self.inactive_player() { f64::INFINITY } else { f64::NEG_INFINITY }
    }
}
