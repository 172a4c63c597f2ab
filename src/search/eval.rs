use crate::board::{GameState, Move, Player};
use serde::{Deserialize, Serialize};

/// Anything that can score a position for one player. Higher is better for
/// `player`; `+inf` means `player` has already won.
pub trait Evaluator<S: GameState> {
    fn score(&self, state: &S, player: Player) -> f64;
}

impl<S: GameState, F: Fn(&S, Player) -> f64> Evaluator<S> for F {
    fn score(&self, state: &S, player: Player) -> f64 { self(state, player) }
}

pub const DEFAULT_CORNER_WEIGHT: f64 = 2.0;

/// Cells that the corner-penalty variants treat as traps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornerSet {
    pub cells: Vec<Move>,
    pub weight: f64,
}

impl CornerSet {
    /// The four corners of a `width` x `height` board.
    pub fn for_board(width: i32, height: i32, weight: f64) -> Self {
        let (r, c) = (height - 1, width - 1);
        let cells = vec![Move::new(0, 0), Move::new(0, c), Move::new(r, 0), Move::new(r, c)];
        Self { cells, weight }
    }

    fn penalty<S: GameState>(&self, state: &S, player: Player) -> f64 {
        match state.get_player_location(player) {
            Some(loc) if self.cells.contains(&loc) => self.weight,
            _ => 0.0,
        }
    }
}

/// Which heuristic a player scores positions with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    Null,
    OpenMove,
    Improved,
    Center,
    Aggressive,
    CornerPenalty,
    Distance,
    CornerDistance,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 8] = [
        HeuristicKind::Null,
        HeuristicKind::OpenMove,
        HeuristicKind::Improved,
        HeuristicKind::Center,
        HeuristicKind::Aggressive,
        HeuristicKind::CornerPenalty,
        HeuristicKind::Distance,
        HeuristicKind::CornerDistance,
    ];
}

impl std::str::FromStr for HeuristicKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "null" => Ok(Self::Null),
            "open_move" | "open" => Ok(Self::OpenMove),
            "improved" => Ok(Self::Improved),
            "center" => Ok(Self::Center),
            "aggressive" => Ok(Self::Aggressive),
            "corner_penalty" | "corner" => Ok(Self::CornerPenalty),
            "distance" => Ok(Self::Distance),
            "corner_distance" | "custom" => Ok(Self::CornerDistance),
            other => Err(format!("unknown heuristic: {other}")),
        }
    }
}

/// A configured heuristic. Corner cells are fixed when this value is built
/// and never change during a search.
#[derive(Debug, Clone, PartialEq)]
pub struct Heuristic {
    kind: HeuristicKind,
    corners: CornerSet,
}

impl Heuristic {
    pub fn new(kind: HeuristicKind, corners: CornerSet) -> Self { Self { kind, corners } }

    /// Heuristic sized for a `width` x `height` board with the default corner weight.
    pub fn for_board(kind: HeuristicKind, width: i32, height: i32) -> Self {
        Self::new(kind, CornerSet::for_board(width, height, DEFAULT_CORNER_WEIGHT))
    }

    pub fn kind(&self) -> HeuristicKind { self.kind }
}

impl<S: GameState> Evaluator<S> for Heuristic {
    fn score(&self, state: &S, player: Player) -> f64 {
        if state.is_winner(player) { return f64::INFINITY; }
        if state.is_loser(player) { return f64::NEG_INFINITY; }

        let own = state.get_legal_moves_for(player).len() as f64;
        let opp = state.get_legal_moves_for(state.get_opponent(player)).len() as f64;
        match self.kind {
            HeuristicKind::Null => 0.0,
            HeuristicKind::OpenMove => own,
            HeuristicKind::Improved => own - opp,
            HeuristicKind::Center => center_distance_sq(state, player),
            HeuristicKind::Aggressive => own - 2.0 * opp,
            HeuristicKind::CornerPenalty => (own - self.corners.penalty(state, player)) - 2.0 * opp,
            HeuristicKind::Distance => (own + player_distance(state, player)) - 2.0 * opp,
            HeuristicKind::CornerDistance => {
                let adjusted = own - self.corners.penalty(state, player) + player_distance(state, player);
                adjusted - 2.0 * opp
            }
        }
    }
}

/// Euclidean distance between the two players; 0 while either is unplaced.
pub fn player_distance<S: GameState>(state: &S, player: Player) -> f64 {
    let me = state.get_player_location(player);
    let them = state.get_player_location(state.get_opponent(player));
    match (me, them) {
        (Some(a), Some(b)) => {
            let dr = (a.row - b.row) as f64;
            let dc = (a.col - b.col) as f64;
            (dr * dr + dc * dc).sqrt()
        }
        _ => 0.0,
    }
}

fn center_distance_sq<S: GameState>(state: &S, player: Player) -> f64 {
    let Some(loc) = state.get_player_location(player) else { return 0.0 };
    let w = state.width() as f64 / 2.0;
    let h = state.height() as f64 / 2.0;
    (h - loc.row as f64).powi(2) + (w - loc.col as f64).powi(2)
}
