//! Piece model: identity, material weight and raw movement geometry.

use serde::{Deserialize, Serialize};

use crate::types::{Color, PieceKind, Square};

impl PieceKind {
    /// Fixed material weight. The king's 100 only matters to the search.
    pub fn value_points(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 100,
        }
    }
}

/// One piece on the board.
///
/// `position` mirrors the cell that holds the piece; the board keeps the two
/// in sync whenever a piece is relocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Square,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, position: Square) -> Self {
        Self {
            kind,
            color,
            position,
            has_moved: false,
        }
    }

    pub fn value_points(&self) -> i32 {
        self.kind.value_points()
    }

    /// Whether the geometric delta to `target` fits this piece's movement rule.
    ///
    /// Occupancy and obstruction are ignored. A pawn's forward diagonal step
    /// matches regardless of whether anything is there to capture.
    pub fn matches_movement_pattern(&self, target: Square) -> bool {
        let df = target.file() - self.position.file();
        let dr = target.rank() - self.position.rank();
        if df == 0 && dr == 0 {
            return false;
        }
        let (ax, ay) = (df.abs(), dr.abs());

        match self.kind {
            PieceKind::Pawn => self.matches_pawn_pattern(df, dr),
            PieceKind::Rook => ax == 0 || ay == 0,
            PieceKind::Bishop => ax == ay,
            PieceKind::Knight => (ax == 2 && ay == 1) || (ax == 1 && ay == 2),
            PieceKind::Queen => ax == 0 || ay == 0 || ax == ay,
            PieceKind::King => ax <= 1 && ay <= 1,
        }
    }

    fn matches_pawn_pattern(&self, df: i8, dr: i8) -> bool {
        let dir = self.color.forward();
        if df == 0 {
            dr == dir || (!self.has_moved && dr == 2 * dir)
        } else {
            df.abs() == 1 && dr == dir
        }
    }

    /// Squares a pawn threatens: the two forward diagonals only.
    pub fn pawn_attacks(&self, target: Square) -> bool {
        let df = target.file() - self.position.file();
        let dr = target.rank() - self.position.rank();
        df.abs() == 1 && dr == self.color.forward()
    }

    /// Pieces that slide along a line and can be blocked.
    pub fn needs_clear_path(&self) -> bool {
        self.kind != PieceKind::Knight
    }
}

#[cfg(test)]
#[path = "piece_tests.rs"]
mod piece_tests;
