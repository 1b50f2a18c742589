use crate::board::{Board, CastlingRights};
use crate::error::{ChessError, Result};
use crate::piece::Piece;
use crate::types::*;

fn fen_err(msg: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(msg.into())
}

impl Board {
    /// Forsyth-Edwards Notation parser used by tests and hosts that start
    /// from a custom position.
    ///
    /// Each side must have exactly one king, and the side not to move must
    /// not be in check. Clocks are accepted and ignored. `has_moved` is inferred: a piece off
    /// its home square counts as moved, and a king or rook whose castling
    /// right is absent counts as moved too.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(fen_err("expected at least 2 fields"));
        }

        let board_part = parts[0];
        let stm_part = parts[1];
        let castle_part = parts.get(2).copied().unwrap_or("-");
        let ep_part = parts.get(3).copied().unwrap_or("-");

        let mut b = Board::empty();
        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(fen_err("board section needs 8 ranks"));
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: i8 = 0;
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = PieceKind::from_letter(ch)
                        .ok_or_else(|| fen_err(format!("invalid piece char `{ch}`")))?;
                    let s = Square::new(file, rank)
                        .ok_or_else(|| fen_err(format!("too many files in rank {}", rank + 1)))?;
                    b.put_piece(Piece::new(kind, color, s));
                    file += 1;
                }
                if file > 8 {
                    return Err(fen_err(format!("too many files in rank {}", rank + 1)));
                }
            }
            if file != 8 {
                return Err(fen_err(format!("not enough files in rank {}", rank + 1)));
            }
        }

        b.side_to_move = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(fen_err(format!("invalid side to move `{stm_part}`"))),
        };

        let mut castling = CastlingRights::none();
        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => castling.white_king_side = true,
                    'Q' => castling.white_queen_side = true,
                    'k' => castling.black_king_side = true,
                    'q' => castling.black_queen_side = true,
                    _ => return Err(fen_err(format!("invalid castling char `{c}`"))),
                }
            }
        }
        castling.white_king_moved = !(castling.white_king_side || castling.white_queen_side)
            && !b.king_on_home(Color::White);
        castling.black_king_moved = !(castling.black_king_side || castling.black_queen_side)
            && !b.king_on_home(Color::Black);
        b.castling = castling;

        b.en_passant_target = if ep_part == "-" {
            None
        } else {
            Some(ep_part.parse()?)
        };

        for s in Square::all() {
            if let Some(mut pc) = b.grid[s.index()] {
                pc.has_moved = !is_home_square(&pc, &castling);
                b.grid[s.index()] = Some(pc);
            }
        }

        for color in [Color::White, Color::Black] {
            let kings = b
                .pieces()
                .filter(|p| p.kind == PieceKind::King && p.color == color)
                .count();
            if kings != 1 {
                return Err(fen_err(format!("expected one {color} king, found {kings}")));
            }
        }
        if b.is_king_in_check(b.side_to_move.other()) {
            return Err(fen_err("side not to move is in check"));
        }
        Ok(b)
    }

    fn king_on_home(&self, c: Color) -> bool {
        let home = match c {
            Color::White => Square::new(4, 0),
            Color::Black => Square::new(4, 7),
        };
        self.king_square(c) == home
    }
}

fn is_home_square(pc: &Piece, castling: &CastlingRights) -> bool {
    let back = pc.color.home_rank();
    let (f, r) = (pc.position.file(), pc.position.rank());
    match pc.kind {
        PieceKind::Pawn => r == back + pc.color.forward(),
        PieceKind::King => r == back && f == 4 && !castling.king_moved(pc.color),
        PieceKind::Rook => {
            r == back
                && ((f == 0 && castling.can_castle(pc.color, false))
                    || (f == 7 && castling.can_castle(pc.color, true)))
        }
        PieceKind::Knight => r == back && (f == 1 || f == 6),
        PieceKind::Bishop => r == back && (f == 2 || f == 5),
        PieceKind::Queen => r == back && f == 3,
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
