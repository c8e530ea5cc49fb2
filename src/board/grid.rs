use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::BoardError;

/// Board edge length. Only the 3x3 game is supported.
pub const SIZE: usize = 3;

/// The two players. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    X,
    O,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Side::X => 'X',
            Side::O => 'O',
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::X => 0,
            Side::O => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Side {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Side::X),
            "o" => Ok(Side::O),
            other => Err(BoardError::Parse(format!("unknown side '{other}', use 'x' or 'o'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Side),
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Mark(side) => side.to_char(),
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Mark(Side::X)),
            'O' | 'o' => Some(Cell::Mark(Side::O)),
            _ => None,
        }
    }
}

/// A cell coordinate. Range is checked by [`Board`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = BoardError;

    // Accepts "r c" and "r,c".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();
        if parts.len() != 2 {
            return Err(BoardError::Parse(format!("expected 'row col', got '{}'", s.trim())));
        }
        let coord = |t: &str| {
            t.parse::<usize>()
                .map_err(|_| BoardError::Parse(format!("'{t}' is not a cell coordinate")))
        };
        Ok(Move::new(coord(parts[0])?, coord(parts[1])?))
    }
}

/// 3x3 grid, owned by the game loop and borrowed by the searcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    fn check_range(row: usize, col: usize) -> Result<(), BoardError> {
        if row >= SIZE || col >= SIZE {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(())
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Self::check_range(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Marks an empty cell. Never overwrites an existing mark.
    pub fn place(&mut self, row: usize, col: usize, side: Side) -> Result<(), BoardError> {
        Self::check_range(row, col)?;
        if self.cells[row][col] != Cell::Empty {
            return Err(BoardError::CellOccupied { row, col });
        }
        self.cells[row][col] = Cell::Mark(side);
        Ok(())
    }

    pub fn play(&mut self, mv: Move, side: Side) -> Result<(), BoardError> {
        self.place(mv.row, mv.col, side)
    }

    /// Resets a cell. Only meant for undoing a mark the caller just placed,
    /// so the coordinates must be in range; out-of-range input panics.
    pub fn clear(&mut self, row: usize, col: usize) {
        debug_assert!(row < SIZE && col < SIZE, "clear({row}, {col}) outside the board");
        self.cells[row][col] = Cell::Empty;
    }

    // Unchecked accessors for the search hot path; callers pass moves from legal_moves().
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub(crate) fn mark(&mut self, mv: Move, side: Side) {
        debug_assert_eq!(self.cells[mv.row][mv.col], Cell::Empty);
        self.cells[mv.row][mv.col] = Cell::Mark(side);
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c != Cell::Empty)
    }

    /// Empty cells in row-major order. Tie-breaks depend on this order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(SIZE * SIZE);
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col] == Cell::Empty {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == Cell::Mark(side)).count()
    }

    /// Side to act under strict alternation with X first, or `None` if the
    /// mark counts cannot arise from alternating play.
    pub fn side_to_move(&self) -> Option<Side> {
        let (x, o) = (self.count(Side::X), self.count(Side::O));
        if x == o {
            Some(Side::X)
        } else if x == o + 1 {
            Some(Side::O)
        } else {
            None
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter().enumerate().map(move |(col, &c)| (Move::new(row, col), c))
        })
    }

    /// Human-facing grid used by the interactive game.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (row, line) in self.cells.iter().enumerate() {
            let marks: Vec<char> = line
                .iter()
                .map(|c| match c {
                    Cell::Empty => ' ',
                    Cell::Mark(side) => side.to_char(),
                })
                .collect();
            out.push_str(&format!(" {} | {} | {} \n", marks[0], marks[1], marks[2]));
            if row + 1 < SIZE {
                out.push_str("---|---|---\n");
            }
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.cells.iter().enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for c in line {
                write!(f, "{}", c.to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Nine cells in row-major order; `/`, newlines and tabs between cells are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);
        for ch in s.trim_matches(|c: char| c == '\n' || c == '\r').chars() {
            if matches!(ch, '/' | '\n' | '\r' | '\t') {
                continue;
            }
            match Cell::from_char(ch) {
                Some(c) => cells.push(c),
                None => return Err(BoardError::Parse(format!("unexpected character '{ch}'"))),
            }
        }
        if cells.len() != SIZE * SIZE {
            return Err(BoardError::Parse(format!(
                "expected {} cells, found {}",
                SIZE * SIZE,
                cells.len()
            )));
        }
        let mut board = Board::empty();
        for (i, c) in cells.into_iter().enumerate() {
            board.cells[i / SIZE][i % SIZE] = c;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_rejects_occupied_and_out_of_range() {
        let mut b = Board::empty();
        b.place(1, 1, Side::X).unwrap();
        assert_eq!(b.place(1, 1, Side::O), Err(BoardError::CellOccupied { row: 1, col: 1 }));
        assert_eq!(b.place(3, 0, Side::O), Err(BoardError::OutOfRange { row: 3, col: 0 }));
        assert_eq!(b.cell_at(0, 5), Err(BoardError::OutOfRange { row: 0, col: 5 }));
        assert_eq!(b.cell_at(1, 1), Ok(Cell::Mark(Side::X)));
    }

    #[test]
    #[should_panic]
    fn clear_outside_the_board_panics() {
        let mut b = Board::empty();
        b.clear(5, 5);
    }

    #[test]
    fn text_form_round_trips() {
        let b: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(b.to_string(), "XO./.X./..O");
        let flat: Board = "XO..X...O".parse().unwrap();
        assert_eq!(flat, b);
        let spaced: Board = "XO \n X \n  O".parse().unwrap();
        assert_eq!(spaced, b);
        assert!("XO".parse::<Board>().is_err());
        assert!("XOZ......".parse::<Board>().is_err());
    }

    #[test]
    fn move_parses_both_separators() {
        assert_eq!("1 2".parse::<Move>().unwrap(), Move::new(1, 2));
        assert_eq!("2,0".parse::<Move>().unwrap(), Move::new(2, 0));
        assert!("1".parse::<Move>().is_err());
        assert!("a b".parse::<Move>().is_err());
    }
}
