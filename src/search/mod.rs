pub mod alphabeta;
pub mod eval;
pub mod terminal;
pub mod zobrist;
