use super::super::occupancy::Occupancy;
use super::super::{Color, Coordinate, CoordinateSet, Direction, Piece};
use super::step_attacks;

/// The two forward diagonals, occupied or not.
pub(crate) fn pawn_attacks(from: Coordinate, color: Color) -> CoordinateSet {
    let forward = color.forward();
    step_attacks(
        from,
        &[Direction::new(-1, forward), Direction::new(1, forward)],
    )
}

/// Pawns advance straight onto empty squares and capture only diagonally.
///
/// The double step needs both squares empty and an unmoved pawn on its
/// starting rank. En passant and promotion belong to the game layer.
pub(crate) fn pawn_moves<O: Occupancy + ?Sized>(pawn: &Piece, occupancy: &O) -> CoordinateSet {
    let color = pawn.color();
    let from = pawn.coordinate();
    let ahead = Direction::new(0, color.forward());
    let mut moves = CoordinateSet::EMPTY;

    if let Some(one) = ahead.step_from(from).filter(|&sq| !occupancy.is_occupied(sq)) {
        moves.insert(one);
        if !pawn.has_moved() && from.rank_index() == color.start_rank() {
            if let Some(two) = ahead.step_from(one).filter(|&sq| !occupancy.is_occupied(sq)) {
                moves.insert(two);
            }
        }
    }

    for target in pawn_attacks(from, color) {
        if occupancy.color_at(target) == Some(color.opposite()) {
            moves.insert(target);
        }
    }
    moves
}
