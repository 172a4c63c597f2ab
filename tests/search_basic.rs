use isobot::board::{Board, GameState, Move, Player};
use std::cell::Cell;

fn plenty() -> f64 { 1.0e9 }

fn stuck_3x3() -> Board {
    // Player one at (0,0) with both knight targets blocked.
    Board::with_positions(3, 3, Move::new(0, 0), Move::new(2, 2), &[Move::new(1, 2), Move::new(2, 1)], Player::One)
        .expect("valid position")
}

#[test]
fn minimax_3x3_depth_one_visits_each_successor_once() {
    use isobot::search::eval::{Evaluator, Heuristic, HeuristicKind};
    use isobot::search::minimax::MinimaxPlayer;
    use isobot::search::SearchParams;

    let b = Board::with_positions(3, 3, Move::new(0, 0), Move::new(2, 2), &[], Player::One).unwrap();
    let seen = Cell::new(Vec::<Option<Move>>::new());
    let baseline = Heuristic::for_board(HeuristicKind::Aggressive, 3, 3);
    let eval = |s: &Board, p: Player| {
        let mut v = seen.take();
        v.push(s.get_player_location(Player::One));
        seen.set(v);
        baseline.score(s, p)
    };
    let mut player = MinimaxPlayer::with_params(eval, SearchParams { depth: 1, ..SearchParams::default() });
    let mv = player.get_move(&b, &plenty).unwrap();
    assert_eq!(seen.take(), vec![Some(Move::new(1, 2)), Some(Move::new(2, 1))]);
    assert_eq!(mv, Move::new(1, 2), "ties must keep the first enumerated move");
}

#[test]
fn both_engines_return_sentinel_without_moves() {
    use isobot::search::alphabeta::AlphaBetaPlayer;
    use isobot::search::eval::{Heuristic, HeuristicKind};
    use isobot::search::minimax::MinimaxPlayer;

    let b = stuck_3x3();
    let h = Heuristic::for_board(HeuristicKind::CornerDistance, 3, 3);
    let mut mm = MinimaxPlayer::new(h.clone());
    let mut ab = AlphaBetaPlayer::new(h);
    assert_eq!(mm.get_move(&b, &plenty).unwrap(), Move::new(-1, -1));
    assert_eq!(ab.get_move(&b, &plenty).unwrap(), Move::new(-1, -1));
}

#[test]
fn engines_return_legal_moves_on_an_empty_board() {
    use isobot::search::alphabeta::AlphaBetaPlayer;
    use isobot::search::eval::{Heuristic, HeuristicKind};
    use isobot::search::minimax::MinimaxPlayer;
    use isobot::search::SearchParams;

    let b = Board::new(4, 4);
    let h = Heuristic::for_board(HeuristicKind::Improved, 4, 4);
    let params = SearchParams { depth: 2, max_depth: Some(3), ..SearchParams::default() };
    let mut mm = MinimaxPlayer::with_params(h.clone(), params);
    let mut ab = AlphaBetaPlayer::with_params(h, params);
    assert!(b.move_is_legal(mm.get_move(&b, &plenty).unwrap()));
    assert!(b.move_is_legal(ab.get_move(&b, &plenty).unwrap()));
}

#[test]
fn search_takes_an_immediate_win() {
    use isobot::search::alphabeta::AlphaBetaPlayer;
    use isobot::search::eval::{Heuristic, HeuristicKind};

    // Player two at (2,2) can only reach (0,1) once (1,0) is blocked; player
    // one at (2,0) wins by landing there.
    let b = Board::with_positions(3, 3, Move::new(2, 0), Move::new(2, 2), &[Move::new(1, 0)], Player::One).unwrap();
    assert_eq!(b.get_legal_moves(), vec![Move::new(0, 1), Move::new(1, 2)]);
    let mut ab = AlphaBetaPlayer::new(Heuristic::for_board(HeuristicKind::Improved, 3, 3));
    let mv = ab.get_move(&b, &plenty).unwrap();
    assert_eq!(mv, Move::new(0, 1));
    // A proven win ends the deepening loop.
    assert_eq!(ab.completed_depth(), 1);
    assert!(b.forecast_move(mv).unwrap().is_winner(Player::One));
}
