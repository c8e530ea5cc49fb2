use oxo::search::terminal::{outcome, Outcome};
use oxo::{best_move, Board, Side};

// Engine plays `engine_side`; every opponent reply is tried. Returns (games, draws).
fn explore(board: &mut Board, to_move: Side, engine_side: Side) -> (u64, u64) {
    if let Some(result) = outcome(board) {
        assert_ne!(result, Outcome::Win(engine_side.opponent()), "engine lost: {board}");
        return (1, (result == Outcome::Draw) as u64);
    }
    if to_move == engine_side {
        let mv = best_move(board, engine_side).expect("engine must move on a live board");
        board.play(mv, engine_side).unwrap();
        let r = explore(board, to_move.opponent(), engine_side);
        board.clear(mv.row, mv.col);
        r
    } else {
        let mut total = (0, 0);
        for mv in board.legal_moves() {
            board.play(mv, to_move).unwrap();
            let (g, d) = explore(board, to_move.opponent(), engine_side);
            board.clear(mv.row, mv.col);
            total.0 += g;
            total.1 += d;
        }
        total
    }
}

#[test]
fn engine_as_x_never_loses_to_any_line() {
    let (games, _) = explore(&mut Board::empty(), Side::X, Side::X);
    assert!(games > 0);
}

#[test]
fn engine_as_o_never_loses_to_any_line() {
    let (games, draws) = explore(&mut Board::empty(), Side::X, Side::O);
    assert!(games > 0);
    assert!(draws > 0);
}

#[test]
fn engine_against_itself_draws() {
    let mut b = Board::empty();
    let mut side = Side::X;
    while outcome(&b).is_none() {
        let mv = best_move(&mut b, side).expect("live board has a move");
        b.play(mv, side).unwrap();
        side = side.opponent();
    }
    assert_eq!(outcome(&b), Some(Outcome::Draw));
    assert!(b.is_full());
}

#[test]
fn engine_wins_when_the_opponent_blunders() {
    // O answered the corner opening with an edge; X can force a win.
    let mut b: Board = "XO./.../...".parse().unwrap();
    let mut side = Side::X;
    while outcome(&b).is_none() {
        let mv = best_move(&mut b, side).expect("live board has a move");
        b.play(mv, side).unwrap();
        side = side.opponent();
    }
    assert_eq!(outcome(&b), Some(Outcome::Win(Side::X)));
}
