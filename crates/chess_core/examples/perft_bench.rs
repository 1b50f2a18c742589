//! Perft timing over a few reference positions, for profiling the generator.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_core -- [depth] [fen]

use std::env;
use std::time::{Duration, Instant};

use chess_core::{perft, Board};

const POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
    (
        "Open middlegame",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - -",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);

    let positions: Vec<(&str, &str)> = match args.get(2) {
        Some(fen) => vec![("Custom", fen.as_str())],
        None => POSITIONS.to_vec(),
    };

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;
    for (name, fen) in positions {
        let mut board = match Board::from_fen(fen) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };
        let start = Instant::now();
        let nodes = perft(&mut board, depth);
        let elapsed = start.elapsed();
        total_nodes += nodes;
        total_time += elapsed;
        println!("{name:.<30} {nodes:>10} nodes in {elapsed:>8.3?} ({:>10.0} nps)", nps(nodes, elapsed));
    }
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)", nps(total_nodes, total_time));
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        nodes as f64 / secs
    } else {
        0.0
    }
}
