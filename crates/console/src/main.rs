use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chess_core::{Board, Color};
use minimax_engine::{Difficulty, EngineConfig};

mod session;

use session::{Flow, Session};

#[derive(Parser, Debug)]
#[command(name = "chess_console", about = "Play chess against the minimax engine")]
struct Args {
    /// TOML file with engine settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// easy, medium, hard or expert
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Base search depth (1-8) the difficulty is derived from
    #[arg(long)]
    depth: Option<u8>,

    /// Search budget per machine move, in seconds
    #[arg(long)]
    time_limit: Option<f64>,

    /// Side the machine plays: white or black
    #[arg(long, value_parser = parse_color)]
    machine_color: Option<Color>,

    /// Start from this FEN instead of the standard position
    #[arg(long)]
    fen: Option<String>,
}

fn parse_color(s: &str) -> std::result::Result<Color, String> {
    match s.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        _ => Err(format!("expected white or black, got `{s}`")),
    }
}

fn build_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(d) = args.difficulty {
        config.difficulty = d;
    }
    if let Some(depth) = args.depth {
        config.max_depth = depth;
    }
    if let Some(secs) = args.time_limit {
        config.time_limit_secs = secs;
    }
    if let Some(color) = args.machine_color {
        config.machine_color = color;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;
    let board = match &args.fen {
        Some(fen) => Board::from_fen(fen)?,
        None => Board::startpos(),
    };

    tracing::info!(
        difficulty = %config.difficulty,
        depth = config.search_depth(),
        machine = %config.machine_color,
        "starting session"
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new(board, config);

    // the machine may have the first move
    session.machine_turn(&mut stdout)?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match session.handle(&line, &mut stdout) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => writeln!(stdout, "error: {e:#}")?,
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}
