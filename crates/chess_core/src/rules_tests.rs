use super::*;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn play(board: &mut Board, from: &str, to: &str) -> (Move, MoveOutcome) {
    let moves = board.legal_moves(board.side_to_move());
    let mv = *moves
        .find(sq(from), sq(to))
        .unwrap_or_else(|| panic!("{from}{to} should be legal"));
    board.execute_move(mv).unwrap()
}

#[test]
fn test_fools_mate() {
    let mut b = Board::startpos();
    assert_eq!(play(&mut b, "f2", "f3").1, MoveOutcome::Continue);
    assert_eq!(play(&mut b, "e7", "e5").1, MoveOutcome::Continue);
    assert_eq!(play(&mut b, "g2", "g4").1, MoveOutcome::Continue);
    let (mv, outcome) = play(&mut b, "d8", "h4");

    assert_eq!(outcome, MoveOutcome::CheckmateDeclared);
    assert!(outcome.is_terminal());
    assert!(b.is_game_over());
    assert_eq!(b.winner(), Some(Color::Black));
    assert!(mv.causes_check && mv.causes_checkmate);
    assert_eq!(mv.to_algebraic(), "Qh4#");
    assert!(b.is_checkmate(Color::White));
    assert!(!b.is_stalemate(Color::White));
    // turn still passes for a consistent record
    assert_eq!(b.side_to_move(), Color::White);
    assert_eq!(b.history().len(), 4);
}

#[test]
fn test_knight_development_notation() {
    let mut b = Board::startpos();
    let (mv, outcome) = play(&mut b, "g1", "f3");
    assert_eq!(outcome, MoveOutcome::Continue);
    assert_eq!(mv.to_algebraic(), "Nf3");
    assert_eq!(b.history()[0], mv);
}

#[test]
fn test_stalemate_distinguished_from_checkmate() {
    // Black king in corner, white queen on b6 and king on c7
    let mut b = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(b.is_stalemate(Color::Black));
    assert!(!b.is_checkmate(Color::Black));
}

#[test]
fn test_move_into_stalemate_ends_game() {
    let mut b = Board::from_fen("k7/2K5/8/1Q6/8/8/8/8 w - - 0 1").unwrap();
    let (mv, outcome) = play(&mut b, "b5", "b6");
    assert_eq!(outcome, MoveOutcome::StalemateDeclared);
    assert!(!mv.causes_check);
    assert!(b.is_game_over());
    assert_eq!(b.winner(), None);
}

#[test]
fn test_check_declared() {
    let mut b = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    let (mv, outcome) = play(&mut b, "a1", "a8");
    assert_eq!(outcome, MoveOutcome::CheckDeclared);
    assert_eq!(mv.to_algebraic(), "Ra8+");
    assert!(!b.is_game_over());
}

#[test]
fn test_capture_recorded() {
    let mut b = Board::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
    let (mv, _) = play(&mut b, "e4", "d5");
    assert!(mv.is_capture);
    let captured = mv.captured.unwrap();
    assert_eq!(captured.kind, PieceKind::Pawn);
    assert_eq!(captured.color, Color::Black);
    assert_eq!(mv.to_algebraic(), "exd5");
    assert_eq!(b.pieces().count(), 3);
}

#[test]
fn test_promotion_replaces_pawn() {
    let mut b = Board::from_fen("7k/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let (mv, outcome) = play(&mut b, "a7", "a8");
    assert!(mv.is_promotion);
    assert_eq!(b.piece_at(sq("a8")).unwrap().kind, PieceKind::Queen);
    assert_eq!(mv.to_algebraic(), "a8=Q+");
    assert_eq!(outcome, MoveOutcome::CheckDeclared);
}

#[test]
fn test_rook_moves_latch_castling_rights() {
    let mut b = Board::from_fen("r3k2r/p6p/8/8/8/8/P6P/R3K2R w KQkq - 0 1").unwrap();
    play(&mut b, "h1", "g1");
    assert!(!b.can_castle(Color::White, true));
    assert!(b.can_castle(Color::White, false));
    play(&mut b, "a8", "b8");
    assert!(!b.can_castle(Color::Black, false));
    assert!(b.can_castle(Color::Black, true));
    // moving the rook back does not restore the right
    play(&mut b, "g1", "h1");
    assert!(!b.can_castle(Color::White, true));
}

#[test]
fn test_rook_leaving_corner_file_latches_right() {
    // the a4 rook has never stood in a corner, but it still sits on the a-file
    let mut b = Board::from_fen("4k3/8/8/8/R7/8/8/R3K2R w KQ - 0 1").unwrap();
    play(&mut b, "a4", "b4");
    assert!(!b.can_castle(Color::White, false));
    assert!(b.can_castle(Color::White, true));
}

#[test]
fn test_execute_move_rejects_illegal_requests() {
    let mut b = Board::startpos();
    let before = b.grid;

    // empty origin square
    let empty = Move::new(sq("e4"), sq("e5"), PieceKind::Pawn, Color::White);
    assert!(b.execute_move(empty).is_none());
    // opponent's piece
    let theirs = Move::new(sq("e7"), sq("e5"), PieceKind::Pawn, Color::Black);
    assert!(b.execute_move(theirs).is_none());
    // own piece, unreachable destination
    let jump = Move::new(sq("a1"), sq("a5"), PieceKind::Rook, Color::White);
    assert!(b.execute_move(jump).is_none());

    assert_eq!(b.grid, before);
    assert_eq!(b.side_to_move(), Color::White);
    assert!(b.history().is_empty());
    assert!(b.can_castle(Color::White, false));
}

#[test]
fn test_turn_alternates() {
    let mut b = Board::startpos();
    let line = [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")];
    for (i, (from, to)) in line.iter().enumerate() {
        play(&mut b, from, to);
        let expected = if i % 2 == 0 { Color::Black } else { Color::White };
        assert_eq!(b.side_to_move(), expected);
        assert_eq!(b.history().len(), i + 1);
    }
    assert!(b.history().iter().step_by(2).all(|m| m.color == Color::White));
}
