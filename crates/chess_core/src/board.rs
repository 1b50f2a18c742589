use serde::{Deserialize, Serialize};

use crate::moves::Move;
use crate::piece::Piece;
use crate::types::*;

/// Castling eligibility latches. Rights are only ever revoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
    pub white_king_moved: bool,
    pub black_king_moved: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            white_king_side: true,
            white_queen_side: true,
            black_king_side: true,
            black_queen_side: true,
            white_king_moved: false,
            black_king_moved: false,
        }
    }

    pub fn none() -> Self {
        Self {
            white_king_side: false,
            white_queen_side: false,
            black_king_side: false,
            black_queen_side: false,
            white_king_moved: false,
            black_king_moved: false,
        }
    }

    pub fn king_moved(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_moved,
            Color::Black => self.black_king_moved,
        }
    }

    /// Rights-only query: the king has not moved and no rook of that color has
    /// moved off the matching corner file. Path and attack conditions are not examined.
    pub fn can_castle(&self, color: Color, king_side: bool) -> bool {
        if self.king_moved(color) {
            return false;
        }
        match (color, king_side) {
            (Color::White, true) => self.white_king_side,
            (Color::White, false) => self.white_queen_side,
            (Color::Black, true) => self.black_king_side,
            (Color::Black, false) => self.black_queen_side,
        }
    }

    fn revoke_for_king(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_king_moved = true;
                self.white_king_side = false;
                self.white_queen_side = false;
            }
            Color::Black => {
                self.black_king_moved = true;
                self.black_king_side = false;
                self.black_queen_side = false;
            }
        }
    }

    fn revoke_for_rook(&mut self, color: Color, from_file: i8) {
        match (color, from_file) {
            (Color::White, 0) => self.white_queen_side = false,
            (Color::White, 7) => self.white_king_side = false,
            (Color::Black, 0) => self.black_queen_side = false,
            (Color::Black, 7) => self.black_king_side = false,
            _ => {}
        }
    }
}

/// The live game state: grid, turn, castling latches and move history.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) grid: [Option<Piece>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) game_over: bool,
    pub(crate) winner: Option<Color>,
    pub(crate) castling: CastlingRights,
    /// Carried for completeness; the generator never produces en-passant.
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) history: Vec<Move>,
}

/// What `make_move` needs to put the board back exactly as it was.
#[derive(Clone, Copy, Debug)]
pub struct Undo {
    /// `None` when the origin square was empty and nothing was moved.
    pub moved: Option<Piece>,
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub side_to_move: Color,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// A board with no pieces, White to move.
    pub fn empty() -> Self {
        Board {
            grid: [None; 64],
            side_to_move: Color::White,
            game_over: false,
            winner: None,
            castling: CastlingRights::none(),
            en_passant_target: None,
            history: Vec::new(),
        }
    }

    /// The standard starting position.
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        b.castling = CastlingRights::all();

        for (f, &kind) in BACK_RANK.iter().enumerate() {
            let f = f as i8;
            b.place(kind, Color::White, f, 0);
            b.place(PieceKind::Pawn, Color::White, f, 1);
            b.place(PieceKind::Pawn, Color::Black, f, 6);
            b.place(kind, Color::Black, f, 7);
        }
        b
    }

    /// Reinitializes to the standard starting position, clearing history.
    pub fn reset(&mut self) {
        *self = Board::startpos();
    }

    fn place(&mut self, kind: PieceKind, color: Color, file: i8, rank: i8) {
        if let Some(s) = Square::new(file, rank) {
            self.grid[s.index()] = Some(Piece::new(kind, color, s));
        }
    }

    /// Puts `piece` on its own `position`, replacing any occupant.
    pub fn put_piece(&mut self, piece: Piece) {
        self.grid[piece.position.index()] = Some(piece);
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.index()]
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Winner of a decided game; `None` while playing or after stalemate.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub fn can_castle(&self, color: Color, king_side: bool) -> bool {
        self.castling.can_castle(color, king_side)
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Occupied squares with their pieces, in canonical scan order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        Square::all().filter_map(move |s| self.grid[s.index()])
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.pieces()
            .find(|pc| pc.color == c && pc.kind == PieceKind::King)
            .map(|pc| pc.position)
    }

    /// True when every cell strictly between `from` and `to` is empty.
    /// Walks in unit steps along the sign of each axis.
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let df = (to.file() - from.file()).signum();
        let dr = (to.rank() - from.rank()).signum();
        let mut cur = from.offset(df, dr);
        while let Some(s) = cur {
            if s == to {
                return true;
            }
            if self.grid[s.index()].is_some() {
                return false;
            }
            cur = s.offset(df, dr);
        }
        true
    }

    /// Whether `piece` threatens `target` on the current grid.
    pub fn attacks(&self, piece: &Piece, target: Square) -> bool {
        if piece.position == target {
            return false;
        }
        if piece.kind == PieceKind::Pawn {
            return piece.pawn_attacks(target);
        }
        piece.matches_movement_pattern(target)
            && (!piece.needs_clear_path() || self.is_path_clear(piece.position, target))
    }

    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        self.pieces()
            .any(|pc| pc.color == by && self.attacks(&pc, target))
    }

    pub fn is_king_in_check(&self, c: Color) -> bool {
        match self.king_square(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    /// Relocates the moving piece, applying promotion and castling latches,
    /// and passes the turn. History and game-over flags are untouched, so this
    /// is what both the exposure check and the search use.
    pub fn make_move(&mut self, mv: &Move) -> Undo {
        let moved = self.grid[mv.from.index()];
        let captured = self.grid[mv.to.index()];
        let undo = Undo {
            moved,
            captured,
            castling: self.castling,
            side_to_move: self.side_to_move,
        };
        let Some(moved) = moved else {
            return undo;
        };

        let mut piece = moved;
        piece.position = mv.to;
        piece.has_moved = true;
        if mv.is_promotion && moved.kind == PieceKind::Pawn {
            piece.kind = mv.promotion_piece;
        }
        self.grid[mv.from.index()] = None;
        self.grid[mv.to.index()] = Some(piece);

        match moved.kind {
            PieceKind::King => self.castling.revoke_for_king(moved.color),
            PieceKind::Rook => self.castling.revoke_for_rook(moved.color, mv.from.file()),
            _ => {}
        }

        self.side_to_move = self.side_to_move.other();
        undo
    }

    pub fn unmake_move(&mut self, mv: &Move, undo: Undo) {
        self.side_to_move = undo.side_to_move;
        self.castling = undo.castling;
        if let Some(moved) = undo.moved {
            self.grid[mv.to.index()] = undo.captured;
            self.grid[mv.from.index()] = Some(moved);
        }
    }

    /// Eight-line text diagram, rank 8 at the top, upper case for White.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(200);
        for rank in (0..8).rev() {
            out.push((b'1' + rank as u8) as char);
            out.push(' ');
            for file in 0..8 {
                let ch = Square::new(file, rank)
                    .and_then(|s| self.piece_at(s))
                    .map(|pc| {
                        let c = pc.kind.letter().unwrap_or('P');
                        match pc.color {
                            Color::White => c,
                            Color::Black => c.to_ascii_lowercase(),
                        }
                    })
                    .unwrap_or('.');
                out.push(ch);
                if file < 7 {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h\n");
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::startpos()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
