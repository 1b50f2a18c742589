use super::*;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_value_points() {
    assert_eq!(PieceKind::Pawn.value_points(), 1);
    assert_eq!(PieceKind::Knight.value_points(), 3);
    assert_eq!(PieceKind::Bishop.value_points(), 3);
    assert_eq!(PieceKind::Rook.value_points(), 5);
    assert_eq!(PieceKind::Queen.value_points(), 9);
    assert_eq!(PieceKind::King.value_points(), 100);
}

#[test]
fn test_pawn_pattern() {
    let mut pawn = Piece::new(PieceKind::Pawn, Color::White, sq("e2"));
    assert!(pawn.matches_movement_pattern(sq("e3")));
    assert!(pawn.matches_movement_pattern(sq("e4")));
    assert!(pawn.matches_movement_pattern(sq("d3")));
    assert!(pawn.matches_movement_pattern(sq("f3")));
    assert!(!pawn.matches_movement_pattern(sq("e1")));
    assert!(!pawn.matches_movement_pattern(sq("e5")));

    pawn.has_moved = true;
    assert!(!pawn.matches_movement_pattern(sq("e4")));

    let black = Piece::new(PieceKind::Pawn, Color::Black, sq("d7"));
    assert!(black.matches_movement_pattern(sq("d5")));
    assert!(black.matches_movement_pattern(sq("c6")));
    assert!(!black.matches_movement_pattern(sq("d8")));
}

#[test]
fn test_slider_and_leaper_patterns() {
    let rook = Piece::new(PieceKind::Rook, Color::White, sq("a1"));
    assert!(rook.matches_movement_pattern(sq("a8")));
    assert!(rook.matches_movement_pattern(sq("h1")));
    assert!(!rook.matches_movement_pattern(sq("b2")));

    let bishop = Piece::new(PieceKind::Bishop, Color::White, sq("c1"));
    assert!(bishop.matches_movement_pattern(sq("h6")));
    assert!(!bishop.matches_movement_pattern(sq("c3")));

    let queen = Piece::new(PieceKind::Queen, Color::Black, sq("d8"));
    assert!(queen.matches_movement_pattern(sq("h4")));
    assert!(queen.matches_movement_pattern(sq("d1")));
    assert!(!queen.matches_movement_pattern(sq("e6")));

    let knight = Piece::new(PieceKind::Knight, Color::White, sq("g1"));
    assert!(knight.matches_movement_pattern(sq("f3")));
    assert!(knight.matches_movement_pattern(sq("e2")));
    assert!(!knight.matches_movement_pattern(sq("g3")));

    let king = Piece::new(PieceKind::King, Color::White, sq("e1"));
    assert!(king.matches_movement_pattern(sq("f2")));
    assert!(!king.matches_movement_pattern(sq("g1")));
}

#[test]
fn test_no_null_pattern() {
    let queen = Piece::new(PieceKind::Queen, Color::White, sq("d4"));
    assert!(!queen.matches_movement_pattern(sq("d4")));
}

#[test]
fn test_pawn_attacks_only_diagonally() {
    let pawn = Piece::new(PieceKind::Pawn, Color::White, sq("e4"));
    assert!(pawn.pawn_attacks(sq("d5")));
    assert!(pawn.pawn_attacks(sq("f5")));
    assert!(!pawn.pawn_attacks(sq("e5")));
}
