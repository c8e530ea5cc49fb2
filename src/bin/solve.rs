use anyhow::{bail, Result};
use clap::Parser;
use oxo::search::terminal::outcome;
use oxo::{pick_best, Board, SearchParams, Searcher, Side};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "oxo-solve", about = "Score every move of a tic-tac-toe position")]
struct Args {
    /// Position, nine cells row-major ("X", "O", "."), rows optionally split by '/'
    #[arg(value_name = "BOARD", default_value = ".........")]
    board: Board,
    /// Side to search for; defaults to the side to move
    #[arg(long)]
    side: Option<Side>,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Disable alpha-beta cutoffs (plain minimax)
    #[arg(long, default_value_t = false)]
    no_pruning: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut board = args.board;
    let side = match args.side.or_else(|| board.side_to_move()) {
        Some(s) => s,
        None => bail!("cannot infer side to move for {}; pass --side", board),
    };
    println!("{}", board.render());
    if let Some(result) = outcome(&board) {
        println!("game over: {:?}", result);
        return Ok(());
    }

    let params = SearchParams { pruning: !args.no_pruning, threads: args.threads.max(1) };
    let mut searcher = Searcher::new(params);
    let t0 = Instant::now();
    let scored = searcher.root_scores(&mut board, side);
    let dt = t0.elapsed().as_secs_f64();
    for (mv, score) in &scored {
        println!("{mv}: {score}");
    }
    match pick_best(&scored) {
        Some((mv, score)) => println!("bestmove {} side {} score {} nodes {} cutoffs {} elapsed {:.3}s", mv, side, score, searcher.nodes(), searcher.cutoffs(), dt),
        None => println!("bestmove none"),
    }
    Ok(())
}
