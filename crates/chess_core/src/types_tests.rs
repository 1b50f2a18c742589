use super::*;

#[test]
fn test_square_bounds() {
    assert!(Square::new(0, 0).is_some());
    assert!(Square::new(7, 7).is_some());
    assert!(Square::new(8, 0).is_none());
    assert!(Square::new(0, -1).is_none());
}

#[test]
fn test_square_parse_and_display() {
    let e4: Square = "e4".parse().unwrap();
    assert_eq!(e4.file(), 4);
    assert_eq!(e4.rank(), 3);
    assert_eq!(e4.to_string(), "e4");

    assert!("i1".parse::<Square>().is_err());
    assert!("a9".parse::<Square>().is_err());
    assert!("e".parse::<Square>().is_err());
}

#[test]
fn test_canonical_scan_order_is_file_major() {
    let order: Vec<Square> = Square::all().collect();
    assert_eq!(order.len(), 64);
    assert_eq!(order[0].to_string(), "a1");
    assert_eq!(order[1].to_string(), "a2");
    assert_eq!(order[7].to_string(), "a8");
    assert_eq!(order[8].to_string(), "b1");
    assert_eq!(order[63].to_string(), "h8");
}

#[test]
fn test_color_helpers() {
    assert_eq!(Color::White.other(), Color::Black);
    assert_eq!(Color::White.forward(), 1);
    assert_eq!(Color::Black.forward(), -1);
    assert_eq!(Color::Black.last_rank(), 0);
}
