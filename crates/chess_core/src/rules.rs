//! Move execution and game-end detection.

use crate::{board::Board, moves::Move, types::*};

/// Where the game stands after a move has been executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Play goes on, nobody is in check.
    Continue,
    /// The opponent is in check but has a reply.
    CheckDeclared,
    /// The opponent is in check with no reply; game over.
    CheckmateDeclared,
    /// The opponent is not in check and has no legal move; game over.
    StalemateDeclared,
}

impl MoveOutcome {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            MoveOutcome::CheckmateDeclared | MoveOutcome::StalemateDeclared
        )
    }
}

impl Board {
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_king_in_check(color) && !self.has_legal_move(color)
    }

    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_king_in_check(color) && !self.has_legal_move(color)
    }

    /// Executes a move for the side to move, or returns `None` and leaves the
    /// board untouched when `from -> to` is not legal for that side.
    ///
    /// The returned record carries the captured piece and the check/mate
    /// flags, and is the one appended to the history. The turn passes to the
    /// opponent even when the game ends.
    pub fn execute_move(&mut self, mut mv: Move) -> Option<(Move, MoveOutcome)> {
        let mover = self.side_to_move;
        if !self.is_legal_move_for(mover, mv.from, mv.to) {
            return None;
        }
        let pc = self.piece_at(mv.from)?;
        mv.piece = pc.kind;
        mv.color = pc.color;
        mv.is_promotion = pc.kind == PieceKind::Pawn && mv.to.rank() == pc.color.last_rank();
        mv.captured = self.piece_at(mv.to);
        mv.is_capture = mv.captured.is_some();

        self.make_move(&mv);

        let opponent = mover.other();
        mv.causes_check = self.is_king_in_check(opponent);
        let outcome = if mv.causes_check {
            mv.causes_checkmate = !self.has_legal_move(opponent);
            if mv.causes_checkmate {
                self.game_over = true;
                self.winner = Some(mover);
                MoveOutcome::CheckmateDeclared
            } else {
                MoveOutcome::CheckDeclared
            }
        } else if !self.has_legal_move(opponent) {
            self.game_over = true;
            MoveOutcome::StalemateDeclared
        } else {
            MoveOutcome::Continue
        };

        self.history.push(mv);
        self.side_to_move = opponent;
        Some((mv, outcome))
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
