use crate::board::{Board, Side};
use crate::search::terminal::is_terminal;

// Make/unmake enumeration on a single board (no cloning). Sequences stop at
// terminal positions, so a game decided early contributes nothing deeper.
pub fn perft(board: &mut Board, side: Side, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    if is_terminal(board) { return 0; }
    let mut nodes = 0u64;
    for mv in board.legal_moves() {
        board.mark(mv, side);
        nodes += perft(board, side.opponent(), depth - 1);
        board.clear(mv.row, mv.col);
    }
    nodes
}

/// Number of distinct complete games reachable from `board` with `side` to move.
pub fn count_games(board: &mut Board, side: Side) -> u64 {
    if is_terminal(board) { return 1; }
    let mut games = 0u64;
    for mv in board.legal_moves() {
        board.mark(mv, side);
        games += count_games(board, side.opponent());
        board.clear(mv.row, mv.col);
    }
    games
}
