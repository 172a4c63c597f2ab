use super::{BoardError, GameState, Move, Player};
use std::fmt;

pub const DEFAULT_WIDTH: i32 = 7;
pub const DEFAULT_HEIGHT: i32 = 7;
/// Largest accepted side length.
pub const MAX_DIMENSION: i32 = 1 << 12;

// Knight offsets in enumeration order; search tie-breaks depend on this order.
const DIRECTIONS: [(i32, i32); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

/// Knight's-move Isolation board.
///
/// A player that has not been placed yet may move to any blank cell; after
/// that it moves like a chess knight onto blank cells only. Every cell a
/// player lands on stays blocked for the rest of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
    locations: [Option<Move>; 2],
    active: Player,
    move_count: u32,
}

impl Default for Board {
    fn default() -> Self { Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT) }
}

impl Board {
    /// Empty board with both players unplaced.
    ///
    /// # Panics
    ///
    /// When either side is outside `1..=MAX_DIMENSION`; use [`Board::try_new`]
    /// for sizes that come from user input.
    pub fn new(width: i32, height: i32) -> Self {
        match Self::try_new(width, height) {
            Ok(board) => board,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_new(width: i32, height: i32) -> Result<Self, BoardError> {
        if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
            return Err(BoardError::InvalidSetup(format!(
                "dimensions {width}x{height} outside 1..={MAX_DIMENSION}"
            )));
        }
        Ok(Self {
            width,
            height,
            blocked: vec![false; width as usize * height as usize],
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        })
    }

    /// Builds a mid-game position: `blocked` cells plus both players placed.
    /// The player cells are blocked as well. Fails when the players share a
    /// cell or stand on a cell listed in `blocked`.
    pub fn with_positions(
        width: i32,
        height: i32,
        p1: Move,
        p2: Move,
        blocked: &[Move],
        active: Player,
    ) -> Result<Self, BoardError> {
        let mut board = Self::try_new(width, height)?;
        if p1 == p2 {
            return Err(BoardError::InvalidSetup(format!("both players placed on {p1}")));
        }
        if let Some(cell) = blocked.iter().find(|&&c| c == p1 || c == p2) {
            return Err(BoardError::InvalidSetup(format!("player placed on blocked cell {cell}")));
        }
        for &cell in blocked.iter().chain([p1, p2].iter()) {
            let idx = board.index(cell)?;
            board.blocked[idx] = true;
        }
        board.locations = [Some(p1), Some(p2)];
        board.active = active;
        board.move_count = 2;
        Ok(board)
    }

    fn in_bounds(&self, mv: Move) -> bool {
        mv.row >= 0 && mv.row < self.height && mv.col >= 0 && mv.col < self.width
    }

    fn index(&self, mv: Move) -> Result<usize, BoardError> {
        if !self.in_bounds(mv) {
            return Err(BoardError::OutOfBounds { mv, width: self.width, height: self.height });
        }
        Ok((mv.row + mv.col * self.height) as usize)
    }

    pub fn is_blank(&self, mv: Move) -> bool {
        self.index(mv).map(|i| !self.blocked[i]).unwrap_or(false)
    }

    /// Open cells, column by column.
    pub fn get_blank_spaces(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(self.blocked.len());
        for col in 0..self.width {
            for row in 0..self.height {
                let m = Move::new(row, col);
                if self.is_blank(m) { out.push(m); }
            }
        }
        out
    }

    pub fn move_is_legal(&self, mv: Move) -> bool {
        self.get_legal_moves().contains(&mv)
    }

    /// Plays `mv` for the side to move in place.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.move_is_legal(mv) {
            return Err(BoardError::IllegalMove { mv, player: self.active });
        }
        let idx = self.index(mv)?;
        self.blocked[idx] = true;
        self.locations[self.active.index()] = Some(mv);
        self.active = self.active.opponent();
        self.move_count += 1;
        Ok(())
    }

    fn knight_moves(&self, from: Move) -> Vec<Move> {
        DIRECTIONS
            .iter()
            .map(|&(dr, dc)| Move::new(from.row + dr, from.col + dc))
            .filter(|&m| self.is_blank(m))
            .collect()
    }
}

impl GameState for Board {
    fn width(&self) -> i32 { self.width }
    fn height(&self) -> i32 { self.height }
    fn active_player(&self) -> Player { self.active }

    fn get_legal_moves_for(&self, player: Player) -> Vec<Move> {
        match self.locations[player.index()] {
            None => self.get_blank_spaces(),
            Some(loc) => self.knight_moves(loc),
        }
    }

    fn forecast_move(&self, mv: Move) -> Result<Self, BoardError> {
        let mut next = self.clone();
        next.apply_move(mv)?;
        Ok(next)
    }

    fn get_player_location(&self, player: Player) -> Option<Move> {
        self.locations[player.index()]
    }

    fn move_count(&self) -> u32 { self.move_count }

    fn blank_count(&self) -> usize { self.blocked.iter().filter(|b| !**b).count() }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for col in 0..self.width { write!(f, " {:>2} ", col)?; }
        writeln!(f)?;
        for row in 0..self.height {
            write!(f, "{:>2}  |", row)?;
            for col in 0..self.width {
                let m = Move::new(row, col);
                let mark = if self.locations[0] == Some(m) {
                    "1"
                } else if self.locations[1] == Some(m) {
                    "2"
                } else if !self.is_blank(m) {
                    "-"
                } else {
                    " "
                };
                write!(f, " {} |", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
