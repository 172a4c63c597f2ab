use criterion::{criterion_group, criterion_main, Criterion, black_box};
use isobot::board::{Board, Move, Player};
use isobot::search::alphabeta::AlphaBetaPlayer;
use isobot::search::eval::{Heuristic, HeuristicKind};
use isobot::search::minimax::MinimaxPlayer;
use isobot::search::timer::SearchTimer;

fn midgame() -> Board {
    Board::with_positions(
        7, 7, Move::new(3, 3), Move::new(1, 5),
        &[Move::new(2, 1), Move::new(4, 5), Move::new(0, 0), Move::new(5, 2)],
        Player::One,
    ).expect("valid position")
}

fn bench_search(c: &mut Criterion) {
    let b = midgame();
    let plenty = || 1.0e9;
    let h = Heuristic::for_board(HeuristicKind::CornerDistance, 7, 7);
    c.bench_function("minimax_depth_3_midgame", |ben| {
        ben.iter(|| {
            let timer = SearchTimer::new(&plenty, 15.0);
            let mut s = MinimaxPlayer::new(h.clone());
            let r = s.minimax(black_box(&b), 3, &timer).expect("no timeout");
            black_box(r.nodes)
        })
    });
    c.bench_function("alphabeta_depth_5_midgame", |ben| {
        ben.iter(|| {
            let timer = SearchTimer::new(&plenty, 15.0);
            let mut s = AlphaBetaPlayer::new(h.clone());
            let r = s.alphabeta(black_box(&b), 5, f64::NEG_INFINITY, f64::INFINITY, &timer).expect("no timeout");
            black_box(r.nodes)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
