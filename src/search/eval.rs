use crate::board::{Board, Side};
use crate::search::terminal::has_won;

pub type Score = i32;

// Terminal scores are offset by depth; WIN_SCORE must exceed the deepest ply (9)
// so that any win outranks any draw.
pub const WIN_SCORE: Score = 10;
pub const DRAW_SCORE: Score = 0;
pub const SCORE_INF: Score = 1_000;

/// Depth-adjusted score of a finished game from `engine_side`'s perspective,
/// or `None` while the game is still running. A loss is checked first.
pub fn terminal_score(board: &Board, depth: i32, engine_side: Side) -> Option<Score> {
    if has_won(board, engine_side.opponent()) { return Some(-WIN_SCORE + depth); }
    if has_won(board, engine_side) { return Some(WIN_SCORE - depth); }
    if board.is_full() { return Some(DRAW_SCORE); }
    None
}
