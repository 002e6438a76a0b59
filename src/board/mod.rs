//! Board geometry and per-piece move generation.
//!
//! Coordinates, directions and rays describe the 8x8 board. Each piece
//! computes the squares it attacks from a read-only occupancy snapshot, and
//! its legal moves by dropping squares held by its own color.
//!
//! # Example
//! ```
//! use chess_movegen::board::{Color, Coordinate, Piece, PieceType};
//! use std::collections::HashMap;
//!
//! let d4: Coordinate = "d4".parse().unwrap();
//! let rook = Piece::new(Color::White, PieceType::Rook, d4);
//! let board: HashMap<Coordinate, Piece> = HashMap::new();
//! assert_eq!(rook.attack_squares(&board).len(), 14);
//! ```

mod builder;
mod error;
mod movegen;
mod occupancy;
mod piece;
pub mod prelude;
mod table;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PieceTableBuilder;
pub use error::{CoordinateError, TableError};
pub use movegen::{attack_squares, filter_own, is_attacked_by, legal_moves};
pub use occupancy::Occupancy;
pub use piece::{Piece, PieceId};
pub use table::PieceTable;
pub use types::{
    color_of, Color, Coordinate, CoordinateSet, CoordinateSetIter, Direction, PieceType, Square,
};
