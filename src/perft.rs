use crate::board::{BoardError, GameState};

// Leaf count at exactly `depth` plies (terminal positions above it count as 0).
// A generated move that the state then rejects is surfaced as an error.
pub fn perft<S: GameState>(state: &S, depth: u32) -> Result<u64, BoardError> {
    if depth == 0 { return Ok(1); }
    let mut nodes = 0u64;
    for m in state.get_legal_moves() {
        nodes += perft(&state.forecast_move(m)?, depth - 1)?;
    }
    Ok(nodes)
}

// Every node of the tree down to `depth`, root included. Terminal nodes are
// counted but not expanded; this is what an unpruned search enters.
pub fn tree_nodes<S: GameState>(state: &S, depth: u32) -> Result<u64, BoardError> {
    let mut nodes = 1u64;
    if depth == 0 { return Ok(nodes); }
    for m in state.get_legal_moves() {
        nodes += tree_nodes(&state.forecast_move(m)?, depth - 1)?;
    }
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Move, Player};

    #[test]
    fn empty_board_first_plies() {
        let b = Board::new(3, 3);
        assert_eq!(perft(&b, 1).unwrap(), 9);
        assert_eq!(perft(&b, 2).unwrap(), 72);
        assert_eq!(tree_nodes(&b, 2).unwrap(), 1 + 9 + 72);
    }

    #[test]
    fn placed_players_branch_like_knights() {
        let b = Board::with_positions(3, 3, Move::new(0, 0), Move::new(2, 2), &[], Player::One).unwrap();
        assert_eq!(perft(&b, 1).unwrap(), 2);
        assert_eq!(tree_nodes(&b, 1).unwrap(), 3);
    }

    #[derive(Clone)]
    struct Rejecting(Board);

    impl GameState for Rejecting {
        fn width(&self) -> i32 { self.0.width() }
        fn height(&self) -> i32 { self.0.height() }
        fn active_player(&self) -> Player { self.0.active_player() }
        fn get_legal_moves_for(&self, player: Player) -> Vec<Move> { self.0.get_legal_moves_for(player) }
        fn forecast_move(&self, mv: Move) -> Result<Self, BoardError> {
            Err(BoardError::IllegalMove { mv, player: self.active_player() })
        }
        fn get_player_location(&self, player: Player) -> Option<Move> { self.0.get_player_location(player) }
        fn move_count(&self) -> u32 { self.0.move_count() }
        fn blank_count(&self) -> usize { self.0.blank_count() }
    }

    #[test]
    fn inconsistent_move_generation_is_reported() {
        let s = Rejecting(Board::new(3, 3));
        assert!(matches!(perft(&s, 1), Err(BoardError::IllegalMove { .. })));
        assert!(tree_nodes(&s, 2).is_err());
        assert_eq!(tree_nodes(&s, 0).unwrap(), 1);
    }
}
