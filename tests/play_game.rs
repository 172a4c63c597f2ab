use isobot::agents::AgentKind;
use isobot::board::Board;
use isobot::config::AgentConfig;
use isobot::game::{play, EndReason};

#[test]
fn search_agents_play_a_full_game() {
    let cfg = AgentConfig { search_depth: 2, max_depth: Some(3), ..AgentConfig::default() };
    let mut mm = AgentKind::Minimax.build(&cfg, 5, 5);
    let mut ab = AgentKind::AlphaBeta.build(&cfg, 5, 5);
    assert_eq!((mm.name(), ab.name()), ("minimax", "alphabeta"));

    let out = play(Board::new(5, 5), [mm.as_mut(), ab.as_mut()], 1_000);
    assert_eq!(out.reason, EndReason::Isolated, "game ended by {:?}", out.reason);

    let mut replay = Board::new(5, 5);
    for &mv in &out.history { replay.apply_move(mv).unwrap(); }
}

#[test]
fn alphabeta_and_random_finish_cleanly() {
    let cfg = AgentConfig { max_depth: Some(3), ..AgentConfig::default() };
    for seed in 0..2u64 {
        let rcfg = AgentConfig { seed, ..cfg.clone() };
        let mut ab = AgentKind::AlphaBeta.build(&cfg, 5, 5);
        let mut rnd = AgentKind::Random.build(&rcfg, 5, 5);
        let first = play(Board::new(5, 5), [ab.as_mut(), rnd.as_mut()], 1_000);
        let second = play(Board::new(5, 5), [rnd.as_mut(), ab.as_mut()], 1_000);
        for out in [first, second] {
            assert_eq!(out.reason, EndReason::Isolated, "seed {seed}: {:?}", out.reason);
        }
    }
}
