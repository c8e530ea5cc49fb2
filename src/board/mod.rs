pub mod error;
pub mod grid;

pub use error::BoardError;
pub use grid::{Board, Cell, Move, Side, SIZE};
