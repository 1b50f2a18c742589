use chess_core::{perft, Board};

fn run(fen: &str, expected: &[(u8, u64)]) {
    let mut board = Board::from_fen(fen).unwrap();
    for &(depth, nodes) in expected {
        assert_eq!(perft(&mut board, depth), nodes, "{fen} depth {depth}");
    }
    // perft leaves the board as it found it
    assert_eq!(board.history().len(), 0);
    assert_eq!(perft(&mut board, 1), expected[0].1);
}

#[test]
fn test_perft_startpos() {
    let mut board = Board::startpos();
    assert_eq!(perft(&mut board, 0), 1);
    assert_eq!(perft(&mut board, 1), 20);
    assert_eq!(perft(&mut board, 2), 400);
    assert_eq!(perft(&mut board, 3), 8_902);
}

#[test]
fn test_perft_endgame_position() {
    // no castling rights; the one en-passant reply to e2e4 would expose the black king
    run("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", &[(1, 14), (2, 191)]);
}

#[test]
#[ignore = "slow on the mailbox generator; run with --ignored"]
fn test_perft_startpos_depth_4() {
    let mut board = Board::startpos();
    assert_eq!(perft(&mut board, 4), 197_281);
}
