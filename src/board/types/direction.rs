//! File/rank offset vectors and ray expansion.

use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// A movement offset in files and ranks, e.g. `(1, 2)` for a knight jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Direction {
    pub file_offset: i8,
    pub rank_offset: i8,
}

impl Direction {
    pub const NONE: Direction = Direction::new(0, 0);

    pub const NORTH: Direction = Direction::new(0, 1);
    pub const SOUTH: Direction = Direction::new(0, -1);
    pub const EAST: Direction = Direction::new(1, 0);
    pub const WEST: Direction = Direction::new(-1, 0);

    pub const NORTHEAST: Direction = Direction::new(1, 1);
    pub const NORTHWEST: Direction = Direction::new(-1, 1);
    pub const SOUTHEAST: Direction = Direction::new(1, -1);
    pub const SOUTHWEST: Direction = Direction::new(-1, -1);

    /// Rook lines
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::NORTH,
        Direction::SOUTH,
        Direction::EAST,
        Direction::WEST,
    ];

    /// Bishop lines
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NORTHEAST,
        Direction::NORTHWEST,
        Direction::SOUTHEAST,
        Direction::SOUTHWEST,
    ];

    /// Queen lines and king steps
    pub const ALL_EIGHT: [Direction; 8] = [
        Direction::NORTH,
        Direction::SOUTH,
        Direction::EAST,
        Direction::WEST,
        Direction::NORTHEAST,
        Direction::NORTHWEST,
        Direction::SOUTHEAST,
        Direction::SOUTHWEST,
    ];

    pub const KNIGHT_MOVES: [Direction; 8] = [
        Direction::new(2, 1),
        Direction::new(2, -1),
        Direction::new(-2, 1),
        Direction::new(-2, -1),
        Direction::new(1, 2),
        Direction::new(1, -2),
        Direction::new(-1, 2),
        Direction::new(-1, -2),
    ];

    #[inline]
    #[must_use]
    pub const fn new(file_offset: i8, rank_offset: i8) -> Self {
        Direction {
            file_offset,
            rank_offset,
        }
    }

    /// Apply this offset once, returning `None` if the result leaves the board.
    #[must_use]
    pub fn step_from(self, coord: Coordinate) -> Option<Coordinate> {
        let file = coord.file_index() as isize + self.file_offset as isize;
        let rank = coord.rank_index() as isize + self.rank_offset as isize;
        if !(0..8).contains(&file) || !(0..8).contains(&rank) {
            return None;
        }
        Coordinate::from_indices(file as usize, rank as usize)
    }

    /// Every coordinate reached by repeatedly stepping from `coord` until the
    /// board edge, nearest first. The start is never included and occupancy is
    /// not consulted.
    ///
    /// `NONE` would never leave the board, so its ray is empty.
    #[must_use]
    pub fn ray_from(self, coord: Coordinate) -> Vec<Coordinate> {
        let mut ray = Vec::with_capacity(7);
        if self == Direction::NONE {
            return ray;
        }
        let mut current = coord;
        while let Some(next) = self.step_from(current) {
            ray.push(next);
            current = next;
        }
        ray
    }
}

impl Neg for Direction {
    type Output = Direction;

    #[inline]
    fn neg(self) -> Direction {
        Direction::new(-self.file_offset, -self.rank_offset)
    }
}
