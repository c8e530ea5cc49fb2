use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use oxo::selfplay::{generate_games_with, tally, write_records, PlayerKind, SelfPlayParams};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "oxo-selfplay", about = "Play engine/random games and write them as JSON Lines")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Player for X: engine | random
    #[arg(long, default_value = "engine")]
    x: PlayerKind,
    /// Player for O: engine | random
    #[arg(long, default_value = "random")]
    o: PlayerKind,
    /// Engine players move at random for this many opening plies
    #[arg(long, default_value_t = 0)]
    noise_plies: usize,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams { games: a.games, seed: a.seed, x: a.x, o: a.o, noise_plies: a.noise_plies, threads: a.threads };
    eprintln!("Generating {} games (x={:?}, o={:?}, noise_plies={}, threads={})", a.games, a.x, a.o, a.noise_plies, a.threads);

    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}]")?);
    let games = generate_games_with(&params, |_| pb.inc(1));
    pb.finish();

    write_records(&a.out, &games)?;
    let t = tally(&games);
    eprintln!("Wrote {} games to {}", games.len(), a.out.display());
    println!("x wins: {} o wins: {} draws: {}", t.x_wins, t.o_wins, t.draws);
    Ok(())
}
