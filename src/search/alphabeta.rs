use crate::board::{BoardError, GameState, Move, Player};
use crate::search::eval::Evaluator;
use crate::search::timer::{SearchTimer, TimeLeft};
use crate::search::{SearchError, SearchParams, SearchResult};
use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Alpha-beta search driven by iterative deepening.
///
/// Moves are searched in generator order. The root best move is seeded with
/// a uniformly sampled legal move from a `SmallRng` seeded by
/// `SearchParams::seed`; that seed survives only when every root move scores
/// `-inf`, so it is the single nondeterministic choice and is reproducible.
pub struct AlphaBetaPlayer<E> {
    params: SearchParams,
    evaluator: E,
    rng: SmallRng,
    nodes: u64,
    completed_depth: u32,
}

impl<E> AlphaBetaPlayer<E> {
    pub fn new(evaluator: E) -> Self { Self::with_params(evaluator, SearchParams::default()) }

    pub fn with_params(evaluator: E, params: SearchParams) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(params.seed),
            params,
            evaluator,
            nodes: 0,
            completed_depth: 0,
        }
    }

    /// Nodes entered by the last search, including abandoned iterations.
    pub fn nodes(&self) -> u64 { self.nodes }

    /// Deepest iteration that finished during the last `get_move`.
    pub fn completed_depth(&self) -> u32 { self.completed_depth }

    /// Deepens one ply at a time until the clock runs out and returns the best
    /// move of the last iteration that finished. `Move::NONE` when the root has
    /// no legal move or not even depth 1 completed.
    pub fn get_move<S>(&mut self, state: &S, time_left: &dyn TimeLeft) -> Result<Move, BoardError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.nodes = 0;
        self.completed_depth = 0;
        if state.get_legal_moves().is_empty() {
            return Ok(Move::NONE);
        }

        let timer = SearchTimer::new(time_left, self.params.timer_threshold_ms);
        let mut best_move = Move::NONE;
        let mut depth = 1;
        loop {
            match self.alphabeta(state, depth, f64::NEG_INFINITY, f64::INFINITY, &timer) {
                Ok(res) => {
                    best_move = res.best_move;
                    self.completed_depth = depth;
                    debug!("alphabeta depth={} score={} move={} nodes={}", depth, res.score, res.best_move, self.nodes);
                    // The result is settled: forced outcome, whole tree seen, or capped.
                    if res.score.is_infinite()
                        || depth as usize >= state.blank_count()
                        || self.params.max_depth.is_some_and(|m| depth >= m)
                    {
                        break;
                    }
                    depth += 1;
                }
                Err(SearchError::Timeout(t)) => {
                    trace!("alphabeta depth {} abandoned: {}", depth, t);
                    break;
                }
                Err(SearchError::Board(e)) => return Err(e),
            }
        }
        Ok(best_move)
    }

    /// One alpha-beta search to `depth` plies inside the `(alpha, beta)`
    /// window. Fail-soft: a score `<= alpha` is an upper bound and a score
    /// `>= beta` a lower bound on the true value.
    pub fn alphabeta<S>(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: f64,
        beta: f64,
        timer: &SearchTimer,
    ) -> Result<SearchResult, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        timer.check()?;
        self.nodes += 1;
        let me = state.active_player();

        let moves = state.get_legal_moves();
        if moves.is_empty() {
            return Ok(SearchResult { score: state.utility(me), best_move: Move::NONE, nodes: self.nodes, depth });
        }
        if depth == 0 {
            let score = self.evaluator.score(state, me);
            return Ok(SearchResult { score, best_move: Move::NONE, nodes: self.nodes, depth });
        }

        let mut best_score = f64::NEG_INFINITY;
        let mut best_move = moves[self.rng.gen_range(0..moves.len())];
        for mv in moves {
            let child = state.forecast_move(mv)?;
            let score = self.min_value(&child, depth - 1, alpha, beta, me, timer)?;
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
            if best_score >= beta { break; }
            alpha = alpha.max(score);
        }
        Ok(SearchResult { score: best_score, best_move, nodes: self.nodes, depth })
    }

    fn max_value<S>(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: f64,
        beta: f64,
        me: Player,
        timer: &SearchTimer,
    ) -> Result<f64, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        timer.check()?;
        self.nodes += 1;

        let moves = state.get_legal_moves();
        if moves.is_empty() { return Ok(state.utility(me)); }
        if depth == 0 { return Ok(self.evaluator.score(state, me)); }

        let mut value = f64::NEG_INFINITY;
        for mv in moves {
            let child = state.forecast_move(mv)?;
            value = value.max(self.min_value(&child, depth - 1, alpha, beta, me, timer)?);
            if value >= beta { return Ok(value); }
            alpha = alpha.max(value);
        }
        Ok(value)
    }

    fn min_value<S>(
        &mut self,
        state: &S,
        depth: u32,
        alpha: f64,
        mut beta: f64,
        me: Player,
        timer: &SearchTimer,
    ) -> Result<f64, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        timer.check()?;
        self.nodes += 1;

        let moves = state.get_legal_moves();
        if moves.is_empty() { return Ok(state.utility(me)); }
        if depth == 0 { return Ok(self.evaluator.score(state, me)); }

        let mut value = f64::INFINITY;
        for mv in moves {
            let child = state.forecast_move(mv)?;
            value = value.min(self.max_value(&child, depth - 1, alpha, beta, me, timer)?);
            if value <= alpha { return Ok(value); }
            beta = beta.min(value);
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::search::eval::{Heuristic, HeuristicKind};
    use crate::search::minimax::MinimaxPlayer;

    fn plenty() -> f64 { 1.0e9 }

    fn midgame() -> Board {
        Board::with_positions(
            7, 7, Move::new(3, 3), Move::new(1, 5),
            &[Move::new(2, 1), Move::new(4, 5), Move::new(0, 0), Move::new(5, 2)],
            Player::One,
        ).unwrap()
    }

    #[test]
    fn root_without_moves_returns_sentinel() {
        let b = Board::with_positions(
            3, 3, Move::new(0, 0), Move::new(2, 2),
            &[Move::new(1, 2), Move::new(2, 1)], Player::One,
        ).unwrap();
        let mut p = AlphaBetaPlayer::new(Heuristic::for_board(HeuristicKind::Aggressive, 3, 3));
        assert_eq!(p.get_move(&b, &plenty).unwrap(), Move::NONE);
        assert_eq!(p.completed_depth(), 0);
    }

    #[test]
    fn matches_minimax_score_at_each_depth() {
        let b = midgame();
        let h = Heuristic::for_board(HeuristicKind::Improved, 7, 7);
        let timer = SearchTimer::new(&plenty, 15.0);
        for depth in 1..=4 {
            let mut mm = MinimaxPlayer::new(h.clone());
            let mut ab = AlphaBetaPlayer::new(h.clone());
            let a = mm.minimax(&b, depth, &timer).unwrap();
            let c = ab.alphabeta(&b, depth, f64::NEG_INFINITY, f64::INFINITY, &timer).unwrap();
            assert_eq!(a.score, c.score, "score differs at depth {depth}");
            if a.score.is_finite() {
                assert_eq!(a.best_move, c.best_move, "move differs at depth {depth}");
            }
            assert!(ab.nodes() <= mm.nodes(), "pruning grew the tree at depth {depth}: {} vs {}", ab.nodes(), mm.nodes());
        }
    }

    #[test]
    fn narrow_window_fails_high_and_low() {
        let b = midgame();
        let h = Heuristic::for_board(HeuristicKind::Improved, 7, 7);
        let timer = SearchTimer::new(&plenty, 15.0);
        let full = AlphaBetaPlayer::new(h.clone())
            .alphabeta(&b, 3, f64::NEG_INFINITY, f64::INFINITY, &timer)
            .unwrap()
            .score;
        assert!(full.is_finite());

        let (lo, hi) = (full + 1.0, full + 2.0);
        let low = AlphaBetaPlayer::new(h.clone()).alphabeta(&b, 3, lo, hi, &timer).unwrap();
        assert!(low.score <= lo, "expected fail-low: {} vs alpha {lo}", low.score);
        assert!(low.score >= full);

        let (lo, hi) = (full - 2.0, full - 1.0);
        let mut ab = AlphaBetaPlayer::new(h.clone());
        let high = ab.alphabeta(&b, 3, lo, hi, &timer).unwrap();
        assert!(high.score >= hi, "expected fail-high: {} vs beta {hi}", high.score);
        assert!(high.score <= full);
        assert!(b.get_legal_moves().contains(&high.best_move));

        let exact = AlphaBetaPlayer::new(h).alphabeta(&b, 3, full - 0.5, full + 0.5, &timer).unwrap();
        assert_eq!(exact.score, full);
    }

    #[test]
    fn deepening_stops_once_the_tree_is_exhausted() {
        let b = Board::with_positions(3, 3, Move::new(0, 0), Move::new(2, 2), &[], Player::One).unwrap();
        let mut p = AlphaBetaPlayer::new(Heuristic::for_board(HeuristicKind::Aggressive, 3, 3));
        let mv = p.get_move(&b, &plenty).unwrap();
        assert!(b.get_legal_moves().contains(&mv));
        assert!(p.completed_depth() as usize <= b.blank_count());
    }

    #[test]
    fn max_depth_caps_iterations() {
        let b = midgame();
        let params = SearchParams { max_depth: Some(2), ..SearchParams::default() };
        let mut p = AlphaBetaPlayer::with_params(Heuristic::for_board(HeuristicKind::Improved, 7, 7), params);
        p.get_move(&b, &plenty).unwrap();
        assert_eq!(p.completed_depth(), 2);
    }
}
