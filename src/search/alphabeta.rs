use crate::board::{Board, Move, Side};
use crate::search::eval::{terminal_score, Score, DRAW_SCORE, SCORE_INF};
use crate::search::terminal::is_terminal;
use log::{debug, trace};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Alpha-beta cutoffs. Disabling gives plain minimax over the full tree.
    pub pruning: bool,
    /// Root moves are scored on separate board copies when > 1.
    pub threads: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { pruning: true, threads: 1 }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best: Option<Move>,
    pub score: Score,
    pub nodes: u64,
}

/// Exhaustive minimax searcher. Holds only per-call counters; nothing
/// learned in one search is reused by the next.
#[derive(Debug, Default)]
pub struct Searcher {
    params: SearchParams,
    pub(crate) nodes: u64,
    cutoffs: u64,
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        Self { params, nodes: 0, cutoffs: 0 }
    }

    pub fn params(&self) -> SearchParams { self.params }
    pub fn nodes(&self) -> u64 { self.nodes }
    pub fn cutoffs(&self) -> u64 { self.cutoffs }

    /// Scores `board` from `engine_side`'s perspective. `maximizing` selects
    /// who acts at this ply: `engine_side` when true, its opponent otherwise.
    ///
    /// The board is mutated in place (mark, recurse, clear) and is restored
    /// before returning, including when a cutoff ends the move loop early.
    /// Callers should not pass an already-won board; doing so just yields
    /// its terminal score.
    pub fn evaluate(
        &mut self,
        board: &mut Board,
        depth: i32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        engine_side: Side,
    ) -> Score {
        self.nodes += 1;
        if let Some(score) = terminal_score(board, depth, engine_side) { return score; }

        let acting = if maximizing { engine_side } else { engine_side.opponent() };
        let mut best = if maximizing { -SCORE_INF } else { SCORE_INF };
        for mv in board.legal_moves() {
            board.mark(mv, acting);
            let score = self.evaluate(board, depth + 1, alpha, beta, !maximizing, engine_side);
            board.clear(mv.row, mv.col);
            if maximizing {
                if score > best { best = score; }
                if best > alpha { alpha = best; }
            } else {
                if score < best { best = score; }
                if best < beta { beta = best; }
            }
            if self.params.pruning && beta <= alpha {
                self.cutoffs += 1;
                trace!("cutoff at depth {} after {} (alpha={}, beta={})", depth, mv, alpha, beta);
                break;
            }
        }
        best
    }

    /// Exact score of every legal move for `side`, in row-major order.
    /// Empty when the board is already won or full.
    pub fn root_scores(&mut self, board: &mut Board, side: Side) -> Vec<(Move, Score)> {
        self.nodes = 0;
        self.cutoffs = 0;
        if is_terminal(board) { return Vec::new(); }
        if self.params.threads > 1 { return self.root_scores_parallel(board, side); }

        let mut scored = Vec::with_capacity(9);
        for mv in board.legal_moves() {
            board.mark(mv, side);
            // Full window per root move keeps every root score exact, so ties
            // resolve the same with or without pruning.
            let score = self.evaluate(board, 0, -SCORE_INF, SCORE_INF, false, side);
            board.clear(mv.row, mv.col);
            scored.push((mv, score));
        }
        scored
    }

    fn root_scores_parallel(&mut self, board: &Board, side: Side) -> Vec<(Move, Score)> {
        let worker_params = SearchParams { threads: 1, ..self.params };
        let results: Vec<(Move, Score, u64, u64)> = board.legal_moves().par_iter().map(|&mv| {
            let mut child = *board;
            child.mark(mv, side);
            let mut w = Searcher::new(worker_params);
            let score = w.evaluate(&mut child, 0, -SCORE_INF, SCORE_INF, false, side);
            (mv, score, w.nodes, w.cutoffs)
        }).collect();

        // collect() keeps input order, so row-major order survives the split.
        let mut scored = Vec::with_capacity(results.len());
        for (mv, score, nodes, cutoffs) in results {
            self.nodes += nodes;
            self.cutoffs += cutoffs;
            scored.push((mv, score));
        }
        scored
    }

    /// Best move for `side`: the first move in row-major order reaching the
    /// highest score. No move on a won or full board.
    pub fn search(&mut self, board: &mut Board, side: Side) -> SearchResult {
        let scored = self.root_scores(board, side);
        let result = match pick_best(&scored) {
            Some((mv, score)) => SearchResult { best: Some(mv), score, nodes: self.nodes },
            None => SearchResult {
                best: None,
                score: terminal_score(board, 0, side).unwrap_or(DRAW_SCORE),
                nodes: self.nodes,
            },
        };
        debug!(
            "search side={} board={} best={:?} score={} nodes={} cutoffs={}",
            side, board, result.best, result.score, self.nodes, self.cutoffs
        );
        result
    }
}

/// First move reaching the highest score, in the order given.
pub fn pick_best(scored: &[(Move, Score)]) -> Option<(Move, Score)> {
    let mut best: Option<(Move, Score)> = None;
    for &(mv, score) in scored {
        if best.map_or(true, |(_, bs)| score > bs) { best = Some((mv, score)); }
    }
    best
}

/// One-off [`Searcher::evaluate`] with default parameters.
pub fn evaluate(
    board: &mut Board,
    depth: i32,
    alpha: Score,
    beta: Score,
    maximizing: bool,
    engine_side: Side,
) -> Score {
    Searcher::default().evaluate(board, depth, alpha, beta, maximizing, engine_side)
}

/// Unbeatable move for `side`, or `None` if the game is already over.
/// The board is searched in place and handed back unchanged.
pub fn best_move(board: &mut Board, side: Side) -> Option<Move> {
    Searcher::default().search(board, side).best
}
