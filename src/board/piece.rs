//! Live pieces on a board.
//!
//! A `Piece` is an entity: its position and moved flag change over a game,
//! while its `PieceId` stays fixed. Value equality (`==`) compares color, kind
//! and coordinate only; collections of live pieces key on `PieceId`.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::movegen;
use super::occupancy::Occupancy;
use super::{Color, Coordinate, CoordinateSet, PieceType};

static NEXT_PIECE_ID: AtomicU64 = AtomicU64::new(0);

/// Stable identity of a piece, unique within the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId(u64);

impl PieceId {
    fn fresh() -> Self {
        PieceId(NEXT_PIECE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece of one color and kind standing on a coordinate.
#[derive(Clone)]
pub struct Piece {
    id: PieceId,
    color: Color,
    kind: PieceType,
    coordinate: Coordinate,
    has_moved: bool,
}

impl Piece {
    /// Create a piece that has not moved yet, with a fresh identity.
    #[must_use]
    pub fn new(color: Color, kind: PieceType, coordinate: Coordinate) -> Self {
        Piece {
            id: PieceId::fresh(),
            color,
            kind,
            coordinate,
            has_moved: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceType {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[inline]
    #[must_use]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// One-character symbol, uppercase for White and lowercase for Black
    #[inline]
    #[must_use]
    pub const fn symbol(&self) -> char {
        self.kind.symbol(self.color)
    }

    /// Record that the piece has moved. Idempotent.
    #[inline]
    pub fn mark_moved(&mut self) {
        self.has_moved = true;
    }

    /// Move the piece to `coordinate`. Owned by whatever applies moves; move
    /// generation never calls this.
    #[inline]
    pub fn set_coordinate(&mut self, coordinate: Coordinate) {
        self.coordinate = coordinate;
    }

    /// Every square this piece threatens, whatever the occupant's color.
    #[must_use]
    pub fn attack_squares<O: Occupancy + ?Sized>(&self, occupancy: &O) -> CoordinateSet {
        movegen::attack_squares(self, occupancy)
    }

    /// Squares this piece may move to, ignoring check.
    #[must_use]
    pub fn legal_moves<O: Occupancy + ?Sized>(&self, occupancy: &O) -> CoordinateSet {
        movegen::legal_moves(self, occupancy)
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color && self.kind == other.kind && self.coordinate == other.coordinate
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at {} ({}{})",
            self.color,
            self.kind,
            self.coordinate,
            self.id,
            if self.has_moved { ", moved" } else { "" }
        )
    }
}
