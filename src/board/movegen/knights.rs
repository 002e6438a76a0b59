use super::super::{Coordinate, CoordinateSet, Direction};
use super::step_attacks;

pub(crate) fn knight_attacks(from: Coordinate) -> CoordinateSet {
    step_attacks(from, &Direction::KNIGHT_MOVES)
}
