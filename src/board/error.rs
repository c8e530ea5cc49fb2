use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the 3x3 board")]
    OutOfRange { row: usize, col: usize },
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
    #[error("parse error: {0}")]
    Parse(String),
}
