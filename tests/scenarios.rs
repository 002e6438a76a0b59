use std::collections::HashMap;

use chess_movegen::board::{
    color_of, Color, Coordinate, CoordinateError, CoordinateSet, Piece, PieceTableBuilder,
    PieceType,
};

fn c(s: &str) -> Coordinate {
    s.parse().expect("valid coordinate")
}

#[test]
fn rook_in_corner_attacks_fourteen_squares() {
    let rook = Piece::new(Color::White, PieceType::Rook, c("a1"));
    let board: HashMap<Coordinate, Piece> = HashMap::new();
    let attacks = rook.attack_squares(&board);
    assert_eq!(attacks.len(), 14);
    assert!(attacks.contains(c("a8")));
    assert!(attacks.contains(c("h1")));
}

#[test]
fn rook_stops_on_first_blocker_each_way() {
    let rook = Piece::new(Color::White, PieceType::Rook, c("d4"));
    let mut board = HashMap::new();
    board.insert(c("d6"), Piece::new(Color::Black, PieceType::Pawn, c("d6")));
    board.insert(c("f4"), Piece::new(Color::White, PieceType::Pawn, c("f4")));

    let attacks = rook.attack_squares(&board);
    for sq in ["d5", "d6", "e4", "f4"] {
        assert!(attacks.contains(c(sq)), "{sq} should be attacked");
    }
    for sq in ["d7", "d8", "g4", "h4"] {
        assert!(!attacks.contains(c(sq)), "{sq} should not be attacked");
    }

    let moves = rook.legal_moves(&board);
    assert!(moves.contains(c("d6")));
    assert!(!moves.contains(c("f4")));
}

#[test]
fn bishop_center_and_corner_counts() {
    let board: HashMap<Coordinate, Piece> = HashMap::new();
    let center = Piece::new(Color::White, PieceType::Bishop, c("d4"));
    let corner = Piece::new(Color::White, PieceType::Bishop, c("a1"));
    assert_eq!(center.attack_squares(&board).len(), 13);
    assert_eq!(corner.attack_squares(&board).len(), 7);
}

#[test]
fn invalid_coordinates_are_rejected() {
    assert_eq!(
        "e9".parse::<Coordinate>(),
        Err(CoordinateError::InvalidRank { rank: '9' })
    );
    assert_eq!(
        Coordinate::new('z', '1'),
        Err(CoordinateError::InvalidFile { file: 'z' })
    );
}

#[test]
fn corner_square_colors() {
    assert_eq!(color_of(c("a1")), Color::Black);
    assert_eq!(color_of(c("a8")), Color::White);
    assert_eq!(color_of(c("h1")), Color::White);
    assert_eq!(color_of(c("h8")), Color::Black);
}

#[test]
fn starting_position_mobility() {
    let table = PieceTableBuilder::starting_position().build();
    let white_moves: usize = table
        .pieces_of(Color::White)
        .map(|piece| piece.legal_moves(&table).len())
        .sum();
    // 16 pawn moves + 4 knight moves
    assert_eq!(white_moves, 20);

    let white_rook = table.piece_at(c("a1")).expect("rook on a1");
    assert_eq!(
        table.attack_squares(white_rook.id()).expect("live piece"),
        [c("a2"), c("b1")].into_iter().collect::<CoordinateSet>()
    );
}

#[test]
fn attacked_squares_after_relocation() {
    let mut table = PieceTableBuilder::new()
        .piece(Color::White, PieceType::Rook, c("a1"))
        .piece(Color::Black, PieceType::King, c("h8"))
        .build();
    assert!(!table.is_attacked_by(c("h8"), Color::White));

    let rook = table.piece_at(c("a1")).expect("rook").id();
    let captured = table.relocate(rook, c("a8")).expect("live rook");
    assert!(captured.is_none());
    assert!(table.is_attacked_by(c("h8"), Color::White));
    assert!(table.get(rook).expect("rook").has_moved());
}
