use anyhow::{bail, Context, Result};
use clap::Parser;
use oxo::search::terminal::{outcome, Outcome};
use oxo::{pick_best, Board, BoardError, Move, SearchParams, Searcher, Side};
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play tic-tac-toe against an unbeatable engine", long_about = None)]
struct Args {
    /// Your side: 'x' moves first, 'o' lets the engine open
    #[arg(long, default_value = "x")]
    human: Side,

    /// Starting position, nine cells row-major (e.g. "X../.O./...")
    #[arg(long)]
    board: Option<Board>,

    /// Threads used to score the engine's candidate moves
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Print the engine's per-move scores
    #[arg(long)]
    verbose: bool,
}

// Reads "row col" until a legal move is entered. Returns None on end of input.
fn get_human_move(board: &Board, side: Side, input: &mut impl BufRead) -> Result<Option<Move>> {
    loop {
        print!("Enter your move as 'row col' (0-2): ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 { return Ok(None); }
        let mv: Move = match line.parse() {
            Ok(mv) => mv,
            Err(e) => { println!("{e}. Try again."); continue; }
        };
        let mut trial = *board;
        match trial.play(mv, side) {
            Ok(()) => return Ok(Some(mv)),
            Err(BoardError::CellOccupied { .. }) => println!("Invalid move. That cell is taken, try again."),
            Err(e) => println!("Invalid move: {e}. Try again."),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut board = args.board.unwrap_or_default();
    let Some(mut current) = board.side_to_move() else {
        bail!("board {} does not follow X-first alternation", board);
    };
    let engine_side = args.human.opponent();
    let mut searcher = Searcher::new(SearchParams { threads: args.threads.max(1), ..SearchParams::default() });
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("\n{}", board.render());
        if let Some(result) = outcome(&board) {
            match result {
                Outcome::Win(side) if side == args.human => println!("You win!"),
                Outcome::Win(_) => println!("AI wins!"),
                Outcome::Draw => println!("It's a tie!"),
            }
            break;
        }

        if current == args.human {
            let Some(mv) = get_human_move(&board, current, &mut input)? else { break };
            board.play(mv, current).with_context(|| format!("applying human move {mv}"))?;
        } else {
            println!("AI is making a move...");
            let scored = searcher.root_scores(&mut board, engine_side);
            let Some((mv, score)) = pick_best(&scored) else { bail!("engine found no move on {}", board) };
            if args.verbose {
                for (m, s) in &scored {
                    println!("  {m}: {s}");
                }
                println!("Engine plays {mv} (score {score}, {} nodes)", searcher.nodes());
            }
            board.play(mv, current).with_context(|| format!("applying engine move {mv}"))?;
        }
        current = current.opponent();
    }
    Ok(())
}
