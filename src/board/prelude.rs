//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! # Example
//! ```
//! use chess_movegen::board::prelude::*;
//! ```

pub use super::{
    Color, Coordinate, CoordinateError, CoordinateSet, Direction, Occupancy, Piece, PieceId,
    PieceTable, PieceTableBuilder, PieceType, Square,
};
