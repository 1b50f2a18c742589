//! Move records, move lists and algebraic notation.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::{ChessError, Result};
use crate::piece::Piece;
use crate::types::{Color, PieceKind, Square};

/// A transition from one square to another.
///
/// Generation fills in what is known up front (capture, promotion); execution
/// fills in the rest (captured piece, check, mate) before the record is
/// appended to the board's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub color: Color,
    pub is_capture: bool,
    pub is_castling: bool,
    pub is_en_passant: bool,
    pub is_promotion: bool,
    pub promotion_piece: PieceKind,
    pub causes_check: bool,
    pub causes_checkmate: bool,
    pub captured: Option<Piece>,
}

impl Move {
    pub fn new(from: Square, to: Square, piece: PieceKind, color: Color) -> Self {
        Self {
            from,
            to,
            piece,
            color,
            is_capture: false,
            is_castling: false,
            is_en_passant: false,
            is_promotion: false,
            promotion_piece: PieceKind::Queen,
            causes_check: false,
            causes_checkmate: false,
            captured: None,
        }
    }

    /// Standard algebraic notation of an executed move, e.g. `Nf3`, `exd5`, `Qh4#`.
    pub fn to_algebraic(&self) -> String {
        if self.is_castling {
            return if self.to.file() > self.from.file() {
                "O-O".to_string()
            } else {
                "O-O-O".to_string()
            };
        }

        let mut s = String::with_capacity(8);
        if let Some(letter) = self.piece.letter() {
            s.push(letter);
        }
        if self.is_capture {
            if self.piece == PieceKind::Pawn {
                s.push(self.from.file_char());
            }
            s.push('x');
        }
        s.push_str(&self.to.to_string());
        if self.is_promotion {
            s.push('=');
            if let Some(letter) = self.promotion_piece.letter() {
                s.push(letter);
            }
        }
        if self.causes_checkmate {
            s.push('#');
        } else if self.causes_check {
            s.push('+');
        }
        s
    }

    /// Coordinate form, e.g. `e2e4` or `e7e8q`.
    pub fn to_coord(&self) -> String {
        let mut s = format!("{}{}", self.from, self.to);
        if self.is_promotion {
            if let Some(letter) = self.promotion_piece.letter() {
                s.push(letter.to_ascii_lowercase());
            }
        }
        s
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}

/// Squares (and optional promotion piece) parsed from coordinate text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

/// Parses `e2e4`, `e2-e4` or `e7e8q` into squares, rejecting anything off-board.
pub fn parse_coord_move(txt: &str) -> Result<CoordMove> {
    let cleaned: String = txt.chars().filter(|c| *c != '-').collect();
    if cleaned.len() < 4 || cleaned.len() > 5 || !cleaned.is_ascii() {
        return Err(ChessError::InvalidMoveText(txt.to_string()));
    }
    let from: Square = cleaned[0..2].parse()?;
    let to: Square = cleaned[2..4].parse()?;
    let promotion = match cleaned[4..].chars().next() {
        None => None,
        Some(c) => match PieceKind::from_letter(c) {
            Some(PieceKind::Pawn) | Some(PieceKind::King) | None => {
                return Err(ChessError::InvalidMoveText(txt.to_string()));
            }
            kind => kind,
        },
    };
    Ok(CoordMove {
        from,
        to,
        promotion,
    })
}

/// Moves in generation order (board scan order, see [`Square::all`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList(Vec<Move>);

impl MoveList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self(Vec::with_capacity(cap))
    }

    pub fn push(&mut self, mv: Move) {
        self.0.push(mv);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn find(&self, from: Square, to: Square) -> Option<&Move> {
        self.0.iter().find(|m| m.from == from && m.to == to)
    }

    pub fn for_piece(&self, kind: PieceKind) -> MoveList {
        self.0.iter().filter(|m| m.piece == kind).copied().collect()
    }

    pub fn captures(&self) -> MoveList {
        self.0.iter().filter(|m| m.is_capture).copied().collect()
    }

    pub fn checks(&self) -> MoveList {
        self.0.iter().filter(|m| m.causes_check).copied().collect()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Move> {
        self.0.iter_mut()
    }
}

impl Deref for MoveList {
    type Target = [Move];

    fn deref(&self) -> &[Move] {
        &self.0
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
