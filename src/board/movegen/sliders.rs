use super::super::occupancy::Occupancy;
use super::super::{Coordinate, CoordinateSet, Direction};

/// Squares attacked by a slider on `from` moving along `directions`.
///
/// Each ray is walked outward and stops on the first occupied square, which is
/// itself attacked regardless of its color.
pub(crate) fn slider_attacks<O: Occupancy + ?Sized>(
    from: Coordinate,
    directions: &[Direction],
    occupancy: &O,
) -> CoordinateSet {
    let mut attacks = CoordinateSet::EMPTY;
    for &direction in directions {
        for target in direction.ray_from(from) {
            attacks.insert(target);
            if occupancy.is_occupied(target) {
                break;
            }
        }
    }
    attacks
}
