//! Minimax Chess Engine
//!
//! Depth- and time-bounded minimax with alpha-beta pruning over a
//! material, piece-square, king-safety, center and mobility evaluation.

mod config;
mod eval;
mod player;
mod search;

use chess_core::{Board, Color, Engine, SearchLimits, SearchResult};
use tracing::debug;

/// Alpha-beta engine that scores positions for one fixed side.
///
/// With no side pinned it plays for whoever is to move on the board it is
/// handed.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    machine: Option<Color>,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine that always searches for `machine`, whoever is to move.
    pub fn for_color(machine: Color) -> Self {
        Self {
            machine: Some(machine),
            nodes: 0,
        }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();

        let machine = self.machine.unwrap_or_else(|| board.side_to_move());
        let outcome = search::pick_best_move(
            board,
            machine,
            limits.depth,
            &mut self.nodes,
            &limits.time_control,
        );
        debug!(nodes = self.nodes, elapsed = ?limits.time_control.elapsed(), "search finished");

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0.0),
            depth: limits.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

pub use config::{ConfigError, Difficulty, EngineConfig, Result, MAX_DEPTH, MIN_DEPTH};
pub use eval::evaluate;
pub use player::{EngineEvent, MachinePlayer};
pub use search::{pick_best_move, SearchOutcome, MATED, MATING};
