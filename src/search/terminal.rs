use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Side, SIZE};

/// Rows, columns, then both diagonals, as (row, col) triples.
pub const LINES: [[(usize, usize); SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Side),
    Draw,
}

/// Returns true if `side` holds a complete row, column or diagonal.
pub fn has_won(board: &Board, side: Side) -> bool {
    let target = Cell::Mark(side);
    LINES.iter().any(|line| line.iter().all(|&(r, c)| board.cell(r, c) == target))
}

/// Winning side, if any. X is checked before O; both holding a line cannot
/// happen under alternating play.
pub fn winner(board: &Board) -> Option<Side> {
    [Side::X, Side::O].into_iter().find(|&side| has_won(board, side))
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(side) = winner(board) { return Some(Outcome::Win(side)); }
    if board.is_full() { return Some(Outcome::Draw); }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_every_line() {
        for line in LINES {
            let mut b = Board::empty();
            for (r, c) in line { b.place(r, c, Side::O).unwrap(); }
            assert_eq!(winner(&b), Some(Side::O), "line {line:?}");
            assert!(is_terminal(&b));
        }
    }

    #[test]
    fn x_is_reported_first_when_both_hold_lines() {
        // Unreachable in play, but the order is fixed.
        let b: Board = "XXX/OOO/...".parse().unwrap();
        assert_eq!(winner(&b), Some(Side::X));
    }
}
