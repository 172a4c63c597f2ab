use crate::board::{BoardError, GameState, Move, Player};
use crate::search::eval::Evaluator;
use crate::search::timer::{SearchTimer, TimeLeft};
use crate::search::{SearchError, SearchParams, SearchResult};
use log::{debug, trace};

/// Fixed-depth minimax. Visits every node of the game tree down to
/// `params.depth` when time allows: no pruning, no caching, no reordering.
pub struct MinimaxPlayer<E> {
    params: SearchParams,
    evaluator: E,
    nodes: u64,
}

impl<E> MinimaxPlayer<E> {
    pub fn new(evaluator: E) -> Self { Self::with_params(evaluator, SearchParams::default()) }

    pub fn with_params(evaluator: E, params: SearchParams) -> Self {
        Self { params, evaluator, nodes: 0 }
    }

    /// Nodes entered by the last search.
    pub fn nodes(&self) -> u64 { self.nodes }

    /// Best move for the side to move, or `Move::NONE` when there is no legal
    /// move or the deadline hits before the search finishes.
    pub fn get_move<S>(&mut self, state: &S, time_left: &dyn TimeLeft) -> Result<Move, BoardError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.nodes = 0;
        let timer = SearchTimer::new(time_left, self.params.timer_threshold_ms);
        match self.minimax(state, self.params.depth, &timer) {
            Ok(res) => {
                debug!("minimax depth={} score={} move={} nodes={}", res.depth, res.score, res.best_move, res.nodes);
                Ok(res.best_move)
            }
            Err(SearchError::Timeout(t)) => {
                trace!("minimax abandoned after {} nodes: {}", self.nodes, t);
                Ok(Move::NONE)
            }
            Err(SearchError::Board(e)) => Err(e),
        }
    }

    /// Depth-limited minimax from `state` for its side to move.
    pub fn minimax<S>(&mut self, state: &S, depth: u32, timer: &SearchTimer) -> Result<SearchResult, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        timer.check()?;
        let me = state.active_player();
        let (score, best_move) = self.min_max(state, depth, true, me, timer)?;
        Ok(SearchResult { score, best_move, nodes: self.nodes, depth })
    }

    fn min_max<S>(
        &mut self,
        state: &S,
        depth: u32,
        maximizing: bool,
        me: Player,
        timer: &SearchTimer,
    ) -> Result<(f64, Move), SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        timer.check()?;
        self.nodes += 1;

        let moves = state.get_legal_moves();
        if moves.is_empty() {
            return Ok((state.utility(me), Move::NONE));
        }
        if depth == 0 {
            return Ok((self.evaluator.score(state, me), Move::NONE));
        }

        let mut best: Option<(f64, Move)> = None;
        for mv in moves {
            let child = state.forecast_move(mv)?;
            let (score, _) = self.min_max(&child, depth - 1, !maximizing, me, timer)?;
            // Strict comparison keeps the first-seen move on ties.
            let improves = match best {
                None => true,
                Some((b, _)) if maximizing => score > b,
                Some((b, _)) => score < b,
            };
            if improves { best = Some((score, mv)); }
        }
        Ok(best.unwrap_or((state.utility(me), Move::NONE)))
    }
}
