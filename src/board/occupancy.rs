//! Read-only views of which squares hold a piece.
//!
//! Move generation only ever asks two questions of the board: is a square
//! occupied, and by which color. Any map from `Coordinate` to something with a
//! color can answer them.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::{Color, Coordinate, Piece};

/// A snapshot of board occupancy, consulted but never mutated by move generation.
pub trait Occupancy {
    /// Color of the piece on `coord`, or `None` if the square is empty.
    fn color_at(&self, coord: Coordinate) -> Option<Color>;

    #[inline]
    fn is_occupied(&self, coord: Coordinate) -> bool {
        self.color_at(coord).is_some()
    }
}

impl<S: BuildHasher> Occupancy for HashMap<Coordinate, Piece, S> {
    #[inline]
    fn color_at(&self, coord: Coordinate) -> Option<Color> {
        self.get(&coord).map(Piece::color)
    }
}

impl Occupancy for BTreeMap<Coordinate, Piece> {
    #[inline]
    fn color_at(&self, coord: Coordinate) -> Option<Color> {
        self.get(&coord).map(Piece::color)
    }
}

impl<S: BuildHasher> Occupancy for HashMap<Coordinate, Color, S> {
    #[inline]
    fn color_at(&self, coord: Coordinate) -> Option<Color> {
        self.get(&coord).copied()
    }
}

impl<T: Occupancy + ?Sized> Occupancy for &T {
    #[inline]
    fn color_at(&self, coord: Coordinate) -> Option<Color> {
        (**self).color_at(coord)
    }
}
