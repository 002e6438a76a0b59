use super::super::{Coordinate, CoordinateSet, Direction};
use super::step_attacks;

pub(crate) fn king_attacks(from: Coordinate) -> CoordinateSet {
    step_attacks(from, &Direction::ALL_EIGHT)
}
