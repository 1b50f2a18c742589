//! Legality checks and legal-move generation.
//!
//! Generation scans pieces in canonical board order and, for each piece,
//! candidate targets in the same order; the result order is relied upon by
//! the search and by tests.

use crate::{board::Board, moves::Move, moves::MoveList, types::*};

impl Board {
    /// Legality for the side to move.
    pub fn is_legal_move(&mut self, from: Square, to: Square) -> bool {
        let side = self.side_to_move;
        self.is_legal_move_for(side, from, to)
    }

    /// Legality for an explicit color, independent of whose turn it is.
    pub fn is_legal_move_for(&mut self, color: Color, from: Square, to: Square) -> bool {
        match self.candidate_move(color, from, to) {
            Some(mv) => !self.exposes_king(&mv),
            None => false,
        }
    }

    /// Builds the move record for `from -> to` if it passes every check short
    /// of the exposure check.
    fn candidate_move(&self, color: Color, from: Square, to: Square) -> Option<Move> {
        let pc = self.piece_at(from)?;
        if pc.color != color {
            return None;
        }
        let target = self.piece_at(to);
        if matches!(target, Some(t) if t.color == pc.color) {
            return None;
        }
        if !pc.matches_movement_pattern(to) {
            return None;
        }
        if pc.kind == PieceKind::Pawn {
            let straight = from.file() == to.file();
            // forward steps land on empty cells, diagonal steps must capture
            if straight == target.is_some() {
                return None;
            }
        }
        if pc.needs_clear_path() && !self.is_path_clear(from, to) {
            return None;
        }

        let mut mv = Move::new(from, to, pc.kind, pc.color);
        mv.is_capture = target.is_some();
        mv.is_promotion = pc.kind == PieceKind::Pawn && to.rank() == pc.color.last_rank();
        Some(mv)
    }

    /// Plays the move on this board, asks whether the mover's king is now
    /// attacked, and restores the board before returning.
    fn exposes_king(&mut self, mv: &Move) -> bool {
        let undo = self.make_move(mv);
        let exposed = self.is_king_in_check(mv.color);
        self.unmake_move(mv, undo);
        exposed
    }

    /// Visits legal moves of `color` in canonical order until `visit` returns false.
    fn scan_legal(&mut self, color: Color, mut visit: impl FnMut(Move) -> bool) {
        for from in Square::all() {
            if !matches!(self.piece_at(from), Some(pc) if pc.color == color) {
                continue;
            }
            for to in Square::all() {
                if let Some(mv) = self.candidate_move(color, from, to) {
                    if !self.exposes_king(&mv) && !visit(mv) {
                        return;
                    }
                }
            }
        }
    }

    /// Generate all legal moves of `color` into `out`, reusing its allocation.
    ///
    /// Check flags are left unset; see [`Board::legal_moves`].
    pub fn legal_moves_into(&mut self, color: Color, out: &mut MoveList) {
        out.clear();
        self.scan_legal(color, |mv| {
            out.push(mv);
            true
        });
    }

    /// All legal moves of `color`, with `causes_check` filled in.
    pub fn legal_moves(&self, color: Color) -> MoveList {
        let mut tmp = self.clone();
        let mut out = MoveList::with_capacity(64);
        tmp.legal_moves_into(color, &mut out);
        tmp.annotate_checks(&mut out);
        out
    }

    /// Legal moves of whatever piece stands on `from`.
    pub fn legal_moves_for_piece(&self, from: Square) -> MoveList {
        let Some(pc) = self.piece_at(from) else {
            return MoveList::new();
        };
        let mut tmp = self.clone();
        let mut out = MoveList::with_capacity(32);
        for to in Square::all() {
            if let Some(mv) = tmp.candidate_move(pc.color, from, to) {
                if !tmp.exposes_king(&mv) {
                    out.push(mv);
                }
            }
        }
        tmp.annotate_checks(&mut out);
        out
    }

    fn annotate_checks(&mut self, moves: &mut MoveList) {
        for mv in moves.iter_mut() {
            let undo = self.make_move(mv);
            mv.causes_check = self.is_king_in_check(mv.color.other());
            self.unmake_move(mv, undo);
        }
    }

    /// Stops at the first legal move found.
    pub fn has_legal_move(&mut self, color: Color) -> bool {
        let mut found = false;
        self.scan_legal(color, |_| {
            found = true;
            false
        });
        found
    }

    /// Number of legal moves of `color` without materializing them.
    pub fn count_legal_moves(&mut self, color: Color) -> usize {
        let mut n = 0;
        self.scan_legal(color, |_| {
            n += 1;
            true
        });
        n
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
