use crate::board::{Board, BoardError, Move, Side};
use crate::search::alphabeta::Searcher;
use crate::search::terminal::{outcome, Outcome};
use crate::search::zobrist;
use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Engine,
    Random,
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "engine" | "e" => Ok(PlayerKind::Engine),
            "random" | "r" => Ok(PlayerKind::Random),
            other => Err(format!("unknown player kind '{other}', use 'engine' or 'random'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelfPlayParams {
    pub games: usize,
    pub seed: u64,
    pub x: PlayerKind,
    pub o: PlayerKind,
    pub noise_plies: usize, // engine players move at random for the first N plies
    pub threads: usize,     // games are played in parallel when > 1
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 100, seed: 42, x: PlayerKind::Engine, o: PlayerKind::Engine, noise_plies: 0, threads: 1 }
    }
}

impl SelfPlayParams {
    fn player(&self, side: Side) -> PlayerKind {
        match side {
            Side::X => self.x,
            Side::O => self.o,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    /// Position key before each move; `keys[i]` is the board `moves[i]` was played on.
    pub keys: Vec<u64>,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

pub fn tally(games: &[GameRecord]) -> Tally {
    let mut t = Tally::default();
    for g in games {
        match g.outcome {
            Outcome::Win(Side::X) => t.x_wins += 1,
            Outcome::Win(Side::O) => t.o_wins += 1,
            Outcome::Draw => t.draws += 1,
        }
    }
    t
}

pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    generate_games_with(params, |_| {})
}

/// Like [`generate_games`], calling `on_game` once per finished game (from
/// worker threads when `threads > 1`). Results stay in game-index order.
pub fn generate_games_with<F>(params: &SelfPlayParams, on_game: F) -> Vec<GameRecord>
where
    F: Fn(&GameRecord) + Sync,
{
    let run = |gi: usize| {
        let g = play_game(params, gi);
        on_game(&g);
        g
    };
    if params.threads > 1 {
        match rayon::ThreadPoolBuilder::new().num_threads(params.threads).build() {
            Ok(pool) => return pool.install(|| (0..params.games).into_par_iter().map(&run).collect()),
            Err(e) => warn!("thread pool unavailable ({e}), playing games sequentially"),
        }
    }
    (0..params.games).map(&run).collect()
}

/// Plays one game from the empty board. Random choices depend only on the
/// seed, the game index and the current position.
pub fn play_game(params: &SelfPlayParams, game_index: usize) -> GameRecord {
    let game_seed = params.seed ^ (game_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let mut board = Board::empty();
    let mut side = Side::X;
    let mut moves = Vec::with_capacity(9);
    let mut keys = Vec::with_capacity(9);
    while outcome(&board).is_none() {
        let noisy = moves.len() < params.noise_plies;
        let choice = match params.player(side) {
            PlayerKind::Engine if !noisy => Searcher::default().search(&mut board, side).best,
            _ => {
                let mut rng = SmallRng::seed_from_u64(game_seed ^ zobrist::compute(&board));
                select_random_move(&board, &mut rng)
            }
        };
        let Some(mv) = choice else { break };
        keys.push(zobrist::compute(&board));
        board.mark(mv, side);
        moves.push(mv);
        side = side.opponent();
    }
    let result = outcome(&board).unwrap_or(Outcome::Draw);
    debug!("game {} finished {:?} after {} plies", game_index, result, moves.len());
    GameRecord { moves, keys, outcome: result }
}

fn select_random_move(board: &Board, rng: &mut SmallRng) -> Option<Move> {
    let moves = board.legal_moves();
    if moves.is_empty() { None } else { Some(moves[rng.gen_range(0..moves.len())]) }
}

/// Re-applies a recorded game from the empty board, X first.
pub fn replay(record: &GameRecord) -> Result<Board, BoardError> {
    let mut board = Board::empty();
    let mut side = Side::X;
    for &mv in &record.moves {
        board.play(mv, side)?;
        side = side.opponent();
    }
    Ok(board)
}

/// Writes one JSON object per line.
pub fn write_records<P: AsRef<Path>>(path: P, games: &[GameRecord]) -> std::io::Result<()> {
    if let Some(dir) = path.as_ref().parent() {
        if !dir.as_os_str().is_empty() { create_dir_all(dir)?; }
    }
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()
}

pub fn read_records<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        let l = line.trim();
        if l.is_empty() { continue; }
        out.push(serde_json::from_str(l)?);
    }
    Ok(out)
}
