//! Static position scoring from the machine side's point of view.

use chess_core::{Board, Color, Piece, PieceKind, Square};

/// Piece-square bonus for pawns. White reads row `rank`, Black reads row `7 - rank`.
#[rustfmt::skip]
const PAWN_TABLE: [[i32; 8]; 8] = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [ 10,  10,  20,  30,  30,  20,  10,  10],
    [  5,   5,  10,  25,  25,  10,   5,   5],
    [  0,   0,   0,  20,  20,   0,   0,   0],
    [  5,  -5, -10,   0,   0, -10,  -5,   5],
    [  5,  10,  10, -20, -20,  10,  10,   5],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

const KING_SAFETY_WEIGHT: f64 = 0.1;
const CENTER_WEIGHT: f64 = 0.05;
const MOBILITY_WEIGHT: f64 = 0.02;

/// Evaluates `board` for `machine`: positive favors the machine side.
///
/// Material and piece-square bonuses are summed per piece, then king
/// safety, center occupation and mobility are added as weighted
/// machine-minus-opponent differences. Mobility generates moves, hence `&mut`;
/// the board is left unchanged.
pub fn evaluate(board: &mut Board, machine: Color) -> f64 {
    let opponent = machine.other();

    let mut score = 0.0;
    for pc in board.pieces() {
        let value = piece_value(&pc) as f64;
        if pc.color == machine {
            score += value;
        } else {
            score -= value;
        }
    }

    let safety = king_safety(board, machine) - king_safety(board, opponent);
    score += safety as f64 * KING_SAFETY_WEIGHT;

    score += center_control(board, machine) as f64 * CENTER_WEIGHT;

    let mobility =
        board.count_legal_moves(machine) as i64 - board.count_legal_moves(opponent) as i64;
    score += mobility as f64 * MOBILITY_WEIGHT;

    score
}

/// Material in centipawns plus the piece-square bonus.
pub fn piece_value(pc: &Piece) -> i32 {
    pc.value_points() * 100 + positional_bonus(pc)
}

/// Only pawns and knights have tables; every other kind scores zero.
pub fn positional_bonus(pc: &Piece) -> i32 {
    let table = match pc.kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        _ => return 0,
    };
    let rank = pc.position.rank() as usize;
    let row = match pc.color {
        Color::White => rank,
        Color::Black => 7 - rank,
    };
    table[row][pc.position.file() as usize]
}

/// +10 for each friendly pawn on the rank just ahead of the king, within one file.
pub fn king_safety(board: &Board, color: Color) -> i32 {
    let Some(ksq) = board.king_square(color) else {
        return 0;
    };
    (-1..=1)
        .filter_map(|df| ksq.offset(df, color.forward()))
        .filter_map(|s| board.piece_at(s))
        .filter(|pc| pc.kind == PieceKind::Pawn && pc.color == color)
        .count() as i32
        * 10
}

/// ±5 for each occupied central square, by owner.
pub fn center_control(board: &Board, machine: Color) -> i32 {
    [(3, 3), (3, 4), (4, 3), (4, 4)]
        .into_iter()
        .filter_map(|(f, r)| Square::new(f, r))
        .filter_map(|s| board.piece_at(s))
        .map(|pc| if pc.color == machine { 5 } else { -5 })
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
