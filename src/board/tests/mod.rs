//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `sliders.rs` - Ray termination for rooks, bishops and queens
//! - `steppers.rs` - Knight and king offsets
//! - `pawns.rs` - Pawn attack/move split
//! - `proptest.rs` - Property-based tests


use std::collections::HashMap;

use crate::board::{Color, Coordinate, Piece, PieceType};

pub(super) fn c(s: &str) -> Coordinate {
    s.parse().unwrap()
}

pub(super) fn coords(list: &[&str]) -> crate::board::CoordinateSet {
    list.iter().map(|s| c(s)).collect()
}

/// Occupancy map holding the given pieces, keyed by their coordinates.
pub(super) fn board(pieces: &[(Color, PieceType, &str)]) -> HashMap<Coordinate, Piece> {
    pieces
        .iter()
        .map(|&(color, kind, sq)| (c(sq), Piece::new(color, kind, c(sq))))
        .collect()
}
