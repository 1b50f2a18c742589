//! Minimax search with alpha-beta pruning and a wall-clock budget.
//!
//! The search owns one scratch copy of the board and walks the tree with
//! make/unmake; move buffers are allocated once per ply up front.

use chess_core::{Board, Color, Move, MoveList, TimeControl};
use tracing::debug;

use crate::eval::evaluate;

/// Score for the machine side being mated.
pub const MATED: f64 = f64::MIN;
/// Score for the machine side delivering mate.
pub const MATING: f64 = f64::MAX;

/// Result from pick_best_move indicating whether search completed or was stopped.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// Best move and its score, `None` when the machine side has no legal move
    pub best_move: Option<(Move, f64)>,
    /// True if the time budget ran out before every root move was scored
    pub stopped: bool,
}

/// Scores every legal root move of `machine` in generation order and keeps the
/// first one with the strictly greatest score.
///
/// The root loop stops once the budget is spent, but only after at least one
/// move has been scored, so a legal move is always returned when one exists.
pub fn pick_best_move(
    board: &Board,
    machine: Color,
    depth: u8,
    nodes: &mut u64,
    tc: &TimeControl,
) -> SearchOutcome {
    let mut tmp = board.clone();
    tmp.set_side_to_move(machine);

    let mut layers = vec![MoveList::with_capacity(64); depth.max(1) as usize];
    let Some((root, rest)) = layers.split_first_mut() else {
        return SearchOutcome {
            best_move: None,
            stopped: false,
        };
    };
    tmp.legal_moves_into(machine, root);

    if root.is_empty() {
        return SearchOutcome {
            best_move: None,
            stopped: false,
        };
    }

    let mut best: Option<(Move, f64)> = None;
    let mut stopped = false;

    for mv in root.iter() {
        if best.is_some() && tc.check_time() {
            debug!(elapsed = ?tc.elapsed(), "time limit reached, keeping best move so far");
            stopped = true;
            break;
        }

        let undo = tmp.make_move(mv);
        *nodes += 1;
        let score = minimax(
            &mut tmp,
            machine,
            depth.saturating_sub(1),
            f64::NEG_INFINITY,
            f64::INFINITY,
            false,
            rest,
            nodes,
            tc,
        );
        tmp.unmake_move(mv, undo);

        debug!(mv = %mv.to_coord(), score, "root move scored");
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((*mv, score));
        }
    }

    SearchOutcome {
        best_move: best,
        stopped,
    }
}

/// Recursive minimax with alpha-beta pruning, scored for `machine`.
///
/// `maximizing` is true on plies where the machine side is to act. Once the
/// budget is spent every node returns its static evaluation.
#[allow(clippy::too_many_arguments)]
fn minimax(
    board: &mut Board,
    machine: Color,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
    layers: &mut [MoveList],
    nodes: &mut u64,
    tc: &TimeControl,
) -> f64 {
    if tc.check_time() || depth == 0 {
        return evaluate(board, machine);
    }
    let Some((moves, rest)) = layers.split_first_mut() else {
        return evaluate(board, machine);
    };

    let side = if maximizing { machine } else { machine.other() };
    board.legal_moves_into(side, moves);

    if moves.is_empty() {
        if board.is_king_in_check(side) {
            return if maximizing { MATED } else { MATING };
        }
        return 0.0;
    }

    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for mv in moves.iter() {
        let undo = board.make_move(mv);
        *nodes += 1;
        let score = minimax(
            board,
            machine,
            depth - 1,
            alpha,
            beta,
            !maximizing,
            rest,
            nodes,
            tc,
        );
        board.unmake_move(mv, undo);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
