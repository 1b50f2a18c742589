//! The game facade: the single writer of the live board.
//!
//! Hosts submit moves here; every accepted move is re-validated against the
//! live board, executed, and announced on the event bus.

use crossbeam_channel::Receiver;
use tracing::{debug, info};

use crate::board::Board;
use crate::events::{EventBus, GameEvent};
use crate::moves::{Move, MoveList};
use crate::record::GameRecord;
use crate::rules::MoveOutcome;
use crate::types::{Color, PieceKind, Square};

#[derive(Debug)]
pub struct Game {
    board: Board,
    events: EventBus<GameEvent>,
}

impl Game {
    /// A fresh game from the standard starting position.
    pub fn new() -> Self {
        Self::from_board(Board::startpos())
    }

    /// Continues play from an arbitrary board, e.g. one set up from FEN.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            events: EventBus::new(),
        }
    }

    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        self.events.subscribe()
    }

    pub fn reset(&mut self) {
        self.board.reset();
        info!("game reset");
        self.events.publish(GameEvent::GameReset);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Moves the side to move's piece from `from` to `to`, promoting to a
    /// queen if a pawn reaches the last rank. Returns the executed record,
    /// or `None` if the move is illegal or the game is over.
    pub fn try_move(&mut self, from: Square, to: Square) -> Option<Move> {
        self.try_move_promoting(from, to, PieceKind::Queen)
    }

    pub fn try_move_promoting(
        &mut self,
        from: Square,
        to: Square,
        promotion: PieceKind,
    ) -> Option<Move> {
        if self.board.is_game_over() {
            debug!(%from, %to, "move refused: game over");
            return None;
        }
        if matches!(promotion, PieceKind::Pawn | PieceKind::King) {
            return None;
        }
        let side = self.board.side_to_move();
        if !matches!(self.board.piece_at(from), Some(pc) if pc.color == side) {
            return None;
        }
        let Some(mut mv) = self.board.legal_moves_for_piece(from).find(from, to).copied() else {
            debug!(%from, %to, "move refused: illegal");
            return None;
        };
        mv.promotion_piece = promotion;
        self.apply(mv)
    }

    /// Executes a move produced elsewhere (e.g. by an engine) after
    /// re-validating it against the live board.
    pub fn execute(&mut self, mv: Move) -> Option<Move> {
        self.try_move_promoting(mv.from, mv.to, mv.promotion_piece)
    }

    fn apply(&mut self, mv: Move) -> Option<Move> {
        let (done, outcome) = self.board.execute_move(mv)?;
        debug!(mv = %done.to_coord(), san = %done, "move executed");

        let opponent = done.color.other();
        match outcome {
            MoveOutcome::Continue => {}
            MoveOutcome::CheckDeclared => {
                info!(%opponent, "check");
                self.events.publish(GameEvent::Check(opponent));
            }
            MoveOutcome::CheckmateDeclared => {
                info!(winner = %done.color, "checkmate");
                self.events.publish(GameEvent::Check(opponent));
                self.events.publish(GameEvent::Checkmate { loser: opponent });
            }
            MoveOutcome::StalemateDeclared => {
                info!("stalemate");
                self.events.publish(GameEvent::Stalemate);
            }
        }
        self.events.publish(GameEvent::MoveMade(done));
        Some(done)
    }

    pub fn legal_moves(&self, color: Color) -> MoveList {
        self.board.legal_moves(color)
    }

    pub fn legal_moves_for_piece(&self, square: Square) -> MoveList {
        self.board.legal_moves_for_piece(square)
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    pub fn winner(&self) -> Option<Color> {
        self.board.winner()
    }

    pub fn history(&self) -> &[Move] {
        self.board.history()
    }

    pub fn record(&self) -> GameRecord {
        GameRecord::from_board(&self.board)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
