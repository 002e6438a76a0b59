//! Board squares and their checkerboard color.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::coordinate::Coordinate;

/// Checkerboard color of a coordinate: light (White) when the file and rank
/// indices sum to an odd number, dark (Black) otherwise.
#[inline]
#[must_use]
pub const fn color_of(coord: Coordinate) -> Color {
    if (coord.file_index() + coord.rank_index()) % 2 == 1 {
        Color::White
    } else {
        Color::Black
    }
}

/// A square on the board. Only the coordinate is state; the color is derived,
/// so equality and hashing follow the coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(Coordinate);

impl Square {
    #[inline]
    #[must_use]
    pub const fn new(coord: Coordinate) -> Self {
        Square(coord)
    }

    #[inline]
    #[must_use]
    pub const fn coordinate(self) -> Coordinate {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        color_of(self.0)
    }
}

impl From<Coordinate> for Square {
    fn from(coord: Coordinate) -> Self {
        Square::new(coord)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
