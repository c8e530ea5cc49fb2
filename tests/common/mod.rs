use oxo::search::terminal::is_terminal;
use oxo::{Board, Side};
use std::collections::HashSet;

/// Every position reachable from the empty board under alternating play,
/// terminal ones included.
pub fn reachable_positions() -> Vec<Board> {
    fn walk(board: &mut Board, side: Side, seen: &mut HashSet<Board>, out: &mut Vec<Board>) {
        if !seen.insert(*board) { return; }
        out.push(*board);
        if is_terminal(board) { return; }
        for mv in board.legal_moves() {
            board.play(mv, side).unwrap();
            walk(board, side.opponent(), seen, out);
            board.clear(mv.row, mv.col);
        }
    }
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(&mut Board::empty(), Side::X, &mut seen, &mut out);
    out
}
