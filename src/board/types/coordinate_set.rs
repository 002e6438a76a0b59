//! A set of coordinates packed into 64 bits.

use std::fmt;
use std::ops::{BitAnd, BitOr, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// A set of board coordinates, one bit per square (a1 = bit 0, h8 = bit 63).
///
/// Iteration is in index order, so results are deterministic.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordinateSet(u64);

impl CoordinateSet {
    pub const EMPTY: CoordinateSet = CoordinateSet(0);
    pub const ALL: CoordinateSet = CoordinateSet(!0);

    /// Create a set with a single coordinate
    #[inline]
    #[must_use]
    pub const fn from_coordinate(coord: Coordinate) -> Self {
        CoordinateSet(1 << coord.as_index())
    }

    #[inline]
    pub fn insert(&mut self, coord: Coordinate) {
        self.0 |= 1 << coord.as_index();
    }

    #[inline]
    pub fn remove(&mut self, coord: Coordinate) {
        self.0 &= !(1 << coord.as_index());
    }

    /// Returns true if the given coordinate is set
    #[inline]
    #[must_use]
    pub const fn contains(self, coord: Coordinate) -> bool {
        self.0 & (1 << coord.as_index()) != 0
    }

    /// Number of coordinates in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every coordinate in `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: CoordinateSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns an iterator over the coordinates in index order
    #[inline]
    #[must_use]
    pub fn iter(self) -> CoordinateSetIter {
        CoordinateSetIter(self.0)
    }
}

impl BitOr for CoordinateSet {
    type Output = CoordinateSet;

    #[inline]
    fn bitor(self, rhs: CoordinateSet) -> CoordinateSet {
        CoordinateSet(self.0 | rhs.0)
    }
}

impl BitAnd for CoordinateSet {
    type Output = CoordinateSet;

    #[inline]
    fn bitand(self, rhs: CoordinateSet) -> CoordinateSet {
        CoordinateSet(self.0 & rhs.0)
    }
}

impl Sub for CoordinateSet {
    type Output = CoordinateSet;

    #[inline]
    fn sub(self, rhs: CoordinateSet) -> CoordinateSet {
        CoordinateSet(self.0 & !rhs.0)
    }
}

impl FromIterator<Coordinate> for CoordinateSet {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut set = CoordinateSet::EMPTY;
        set.extend(iter);
        set
    }
}

impl Extend<Coordinate> for CoordinateSet {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        for coord in iter {
            self.insert(coord);
        }
    }
}

impl IntoIterator for CoordinateSet {
    type Item = Coordinate;
    type IntoIter = CoordinateSetIter;

    fn into_iter(self) -> CoordinateSetIter {
        self.iter()
    }
}

impl fmt::Debug for CoordinateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the coordinates in a `CoordinateSet`
pub struct CoordinateSetIter(u64);

impl Iterator for CoordinateSetIter {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(Coordinate::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CoordinateSetIter {}
