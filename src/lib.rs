// Tic-tac-toe engine: exhaustive minimax with alpha-beta pruning
pub mod board;
pub mod perft;
pub mod search;
pub mod selfplay;

pub use board::{Board, BoardError, Cell, Move, Side};
pub use search::alphabeta::{best_move, evaluate, pick_best, SearchParams, SearchResult, Searcher};
pub use search::eval::Score;
pub use search::terminal::{is_draw, winner, Outcome};
