//! Board coordinates in file/rank form.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::CoordinateError;

pub(crate) const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
pub(crate) const RANKS: [char; 8] = ['1', '2', '3', '4', '5', '6', '7', '8'];

fn file_to_index(file: char) -> Result<u8, CoordinateError> {
    match file {
        'a'..='h' => Ok(file as u8 - b'a'),
        _ => Err(CoordinateError::InvalidFile { file }),
    }
}

fn rank_to_index(rank: char) -> Result<u8, CoordinateError> {
    match rank {
        '1'..='8' => Ok(rank as u8 - b'1'),
        _ => Err(CoordinateError::InvalidRank { rank }),
    }
}

/// A validated coordinate on the 8x8 board, such as `e4`.
///
/// Stored as zero-based file and rank indices (`a` = 0, `1` = 0).
/// Equality and hashing are structural.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Coordinate {
    file: u8,
    rank: u8,
}

impl Coordinate {
    /// Create a coordinate from its file (`'a'..='h'`) and rank (`'1'..='8'`) characters.
    pub fn new(file: char, rank: char) -> Result<Self, CoordinateError> {
        Ok(Coordinate {
            file: file_to_index(file)?,
            rank: rank_to_index(rank)?,
        })
    }

    /// Create a coordinate from zero-based indices, or `None` if off the board.
    #[must_use]
    pub const fn from_indices(file_index: usize, rank_index: usize) -> Option<Self> {
        if file_index < 8 && rank_index < 8 {
            Some(Coordinate {
                file: file_index as u8,
                rank: rank_index as u8,
            })
        } else {
            None
        }
    }

    /// Create a coordinate from a 0-63 index (a1=0, b1=1, ..., h8=63).
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Coordinate {
            file: (idx % 8) as u8,
            rank: (idx / 8) as u8,
        }
    }

    /// File character, `'a'..='h'`
    #[inline]
    #[must_use]
    pub const fn file(self) -> char {
        FILES[self.file as usize]
    }

    /// Rank character, `'1'..='8'`
    #[inline]
    #[must_use]
    pub const fn rank(self) -> char {
        RANKS[self.rank as usize]
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file_index(self) -> usize {
        self.file as usize
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank_index(self) -> usize {
        self.rank as usize
    }

    /// `(row, col)` for a rendered grid with rank 8 on row 0 and file a on column 0.
    ///
    /// For display only; rules code works with file and rank indices.
    #[inline]
    #[must_use]
    pub const fn display_indices(self) -> (usize, usize) {
        (7 - self.rank_index(), self.file_index())
    }

    /// Get the coordinate's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// All 64 coordinates in index order.
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..64).map(Coordinate::from_index)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({self})")
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(char, char)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((file, rank): (char, char)) -> Result<Self, Self::Error> {
        Coordinate::new(file, rank)
    }
}

impl TryFrom<(usize, usize)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        Coordinate::from_indices(file, rank)
            .ok_or(CoordinateError::IndexOutOfBounds { file, rank })
    }
}

impl TryFrom<String> for Coordinate {
    type Error = CoordinateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Coordinate> for String {
    fn from(coord: Coordinate) -> String {
        coord.to_string()
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Coordinate::new(file, rank),
            _ => Err(CoordinateError::InvalidLength {
                notation: s.to_string(),
            }),
        }
    }
}
