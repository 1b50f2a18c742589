//! Chess rules engine: board state, legality, move generation, execution
//! with check/checkmate/stalemate detection, and the [`Engine`] seam that
//! move-picking engines plug into.

pub mod board;
pub mod error;
pub mod events;
pub mod fen;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod perft;
pub mod piece;
pub mod record;
pub mod rules;
pub mod time_control;
pub mod types;

pub use board::*;
pub use error::{ChessError, Result};
pub use events::{EventBus, GameEvent};
pub use game::Game;
pub use moves::*;
pub use perft::perft;
pub use piece::Piece;
pub use record::GameRecord;
pub use rules::MoveOutcome;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move picker
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if the side to move has no legal move)
    pub best_move: Option<Move>,
    /// Score of `best_move` from the engine's own perspective
    pub score: f64,
    /// Depth searched
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
    /// Whether the search was cut short by the time limit
    pub stopped: bool,
}

/// Trait that all move pickers implement, so hosts can swap them.
pub trait Engine: Send {
    /// Pick a move for the side to move on `board`.
    ///
    /// The live board is only read; engines search on their own copy.
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult;

    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "chess_core"
    }

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
