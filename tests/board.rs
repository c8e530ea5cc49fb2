use oxo::{Board, BoardError, Cell, Move, Side};

#[test]
fn cell_access_is_range_checked() {
    let b = Board::empty();
    assert_eq!(b.cell_at(2, 2), Ok(Cell::Empty));
    assert_eq!(b.cell_at(3, 1), Err(BoardError::OutOfRange { row: 3, col: 1 }));
    assert_eq!(b.cell_at(0, 9), Err(BoardError::OutOfRange { row: 0, col: 9 }));
}

#[test]
fn place_never_overwrites() {
    let mut b = Board::empty();
    b.place(0, 2, Side::X).unwrap();
    assert_eq!(b.place(0, 2, Side::O), Err(BoardError::CellOccupied { row: 0, col: 2 }));
    assert_eq!(b.cell_at(0, 2), Ok(Cell::Mark(Side::X)));
    assert_eq!(b.play(Move::new(0, 3), Side::O), Err(BoardError::OutOfRange { row: 0, col: 3 }));
}

#[test]
fn clear_undoes_place() {
    let mut b = Board::empty();
    b.place(1, 0, Side::O).unwrap();
    b.clear(1, 0);
    assert_eq!(b, Board::empty());
}

#[test]
fn legal_moves_are_row_major_empty_cells() {
    let b: Board = "X.O/.X./O..".parse().unwrap();
    let moves = b.legal_moves();
    assert_eq!(moves, vec![Move::new(0, 1), Move::new(1, 0), Move::new(1, 2), Move::new(2, 1), Move::new(2, 2)]);
    assert_eq!(Board::empty().legal_moves().len(), 9);
    assert_eq!(Board::empty().legal_moves()[0], Move::new(0, 0));
}

#[test]
fn full_board_has_no_moves() {
    let b: Board = "XOX/XOO/OXX".parse().unwrap();
    assert!(b.is_full());
    assert!(b.legal_moves().is_empty());
    assert!(!Board::empty().is_full());
}

#[test]
fn side_to_move_follows_alternation() {
    assert_eq!(Board::empty().side_to_move(), Some(Side::X));
    let b: Board = "X../.../...".parse().unwrap();
    assert_eq!(b.side_to_move(), Some(Side::O));
    let b: Board = "XO./.../...".parse().unwrap();
    assert_eq!(b.side_to_move(), Some(Side::X));
    let bad: Board = "XX./.../...".parse().unwrap();
    assert_eq!(bad.side_to_move(), None);
    let bad: Board = "O../.../...".parse().unwrap();
    assert_eq!(bad.side_to_move(), None);
}

#[test]
fn render_matches_classic_grid() {
    let b: Board = "X.O/.X./...".parse().unwrap();
    let expected = " X |   | O \n---|---|---\n   | X |   \n---|---|---\n   |   |   \n";
    assert_eq!(b.render(), expected);
}
