use anyhow::{bail, Result};
use oxo::perft::{count_games, perft};
use oxo::Board;
use std::time::Instant;

#[derive(clap::Parser, Debug)]
#[command(name = "oxo-perft", about = "Perft driver for the tic-tac-toe move generator")]
struct Args {
    /// Deepest ply count to report
    #[arg(value_name = "DEPTH", default_value_t = 9)]
    depth: u32,
    /// Board text or "empty"
    #[arg(value_name = "BOARD", default_value = "empty")]
    board: String,
    /// Also count complete games
    #[arg(long, default_value_t = false)]
    games: bool,
}

fn main() -> Result<()> {
    use clap::Parser;
    env_logger::init();
    let args = Args::parse();
    let mut board = if args.board == "empty" { Board::empty() } else { args.board.parse::<Board>()? };
    let Some(side) = board.side_to_move() else { bail!("board {} does not follow X-first alternation", board) };

    for d in 1..=args.depth {
        let t0 = Instant::now();
        let nodes = perft(&mut board, side, d);
        let dt = t0.elapsed().as_secs_f64();
        println!("depth {d} nodes: {nodes} elapsed: {dt:.3}s");
    }
    if args.games {
        println!("games: {}", count_games(&mut board, side));
    }
    Ok(())
}
