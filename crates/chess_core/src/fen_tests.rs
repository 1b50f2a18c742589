use super::*;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_fen_startpos_matches_setup() {
    let fen = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let start = Board::startpos();
    for s in Square::all() {
        assert_eq!(fen.piece_at(s), start.piece_at(s), "mismatch on {s}");
    }
    assert_eq!(fen.castling_rights(), start.castling_rights());
    assert_eq!(fen.side_to_move(), Color::White);
}

#[test]
fn test_fen_infers_has_moved() {
    let b = Board::from_fen("4k3/8/8/8/4P3/8/3P4/4K3 w - - 0 1").unwrap();
    assert!(!b.piece_at(sq("d2")).unwrap().has_moved);
    assert!(b.piece_at(sq("e4")).unwrap().has_moved);
}

#[test]
fn test_fen_reads_en_passant_field() {
    let b = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").unwrap();
    assert_eq!(b.en_passant_target(), Some(sq("d6")));
}

#[test]
fn test_fen_rejects_garbage() {
    assert!(Board::from_fen("").is_err());
    assert!(Board::from_fen("8/8/8 w - -").is_err());
    assert!(Board::from_fen("9/8/8/8/8/8/8/8 w - -").is_err());
    assert!(Board::from_fen("x7/8/8/8/8/8/8/8 w - -").is_err());
    assert!(Board::from_fen("4k3/8/8/8/8/8/8/4K3 x - -").is_err());
}

#[test]
fn test_fen_requires_one_king_per_side() {
    assert!(Board::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").is_err());
    assert!(Board::from_fen("4k3/8/8/8/8/8/8/8 w - - 0 1").is_err());
    assert!(Board::from_fen("4k3/8/8/8/8/8/8/K3K3 w - - 0 1").is_err());
    assert!(Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").is_ok());
}

#[test]
fn test_fen_rejects_side_not_to_move_in_check() {
    // black king attacked by the a1 rook with White to move
    let err = Board::from_fen("k7/8/8/8/8/8/8/R6K w - - 0 1").unwrap_err();
    assert!(matches!(err, ChessError::InvalidFen(_)));
    // the same layout with Black to move is a legal check
    assert!(Board::from_fen("k7/8/8/8/8/8/8/R6K b - - 0 1").is_ok());
}
