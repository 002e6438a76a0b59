//! Fluent builder for piece tables.
//!
//! # Example
//! ```
//! use chess_movegen::board::{Color, Coordinate, PieceTableBuilder, PieceType};
//!
//! let e1: Coordinate = "e1".parse().unwrap();
//! let e8: Coordinate = "e8".parse().unwrap();
//! let table = PieceTableBuilder::new()
//!     .piece(Color::White, PieceType::King, e1)
//!     .piece(Color::Black, PieceType::King, e8)
//!     .build();
//! assert_eq!(table.len(), 2);
//! ```

use super::{Color, Coordinate, Piece, PieceTable, PieceType};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// A fluent builder for constructing a `PieceTable`.
#[derive(Clone, Debug, Default)]
pub struct PieceTableBuilder {
    pieces: Vec<(Color, PieceType, Coordinate)>,
}

impl PieceTableBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder holding the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            for (color, back, pawns) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
                if let Some(coord) = Coordinate::from_indices(file, back) {
                    builder.pieces.push((color, kind, coord));
                }
                if let Some(coord) = Coordinate::from_indices(file, pawns) {
                    builder.pieces.push((color, PieceType::Pawn, coord));
                }
            }
        }
        builder
    }

    /// Place a piece, replacing whatever stood on `coord`.
    #[must_use]
    pub fn piece(mut self, color: Color, kind: PieceType, coord: Coordinate) -> Self {
        self.pieces.retain(|&(_, _, sq)| sq != coord);
        self.pieces.push((color, kind, coord));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, coord: Coordinate) -> Self {
        self.pieces.retain(|&(_, _, sq)| sq != coord);
        self
    }

    /// Build the table. Every piece starts unmoved with a fresh id.
    #[must_use]
    pub fn build(self) -> PieceTable {
        let mut table = PieceTable::new();
        for (color, kind, coord) in self.pieces {
            table.place(Piece::new(color, kind, coord));
        }
        table
    }
}
