use crate::{board::Board, moves::MoveList};

/// Counts leaf positions reachable from `board` in exactly `depth` plies,
/// starting with the side to move. The board is restored on return.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    fn inner(board: &mut Board, depth: u8, layers: &mut [MoveList]) -> u64 {
        if depth == 0 {
            return 1;
        }
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        let side = board.side_to_move();
        board.legal_moves_into(side, buf);

        let mut nodes = 0u64;
        for mv in buf.iter() {
            let undo = board.make_move(mv);
            nodes += inner(board, depth - 1, rest);
            board.unmake_move(mv, undo);
        }
        nodes
    }

    let mut layers = vec![MoveList::with_capacity(64); depth as usize];
    inner(board, depth, &mut layers)
}
