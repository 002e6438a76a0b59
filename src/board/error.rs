//! Error types for board geometry and piece table operations.

use std::fmt;

use super::{Coordinate, PieceId};

/// Error type for invalid coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// File character outside `a..=h`
    InvalidFile { file: char },
    /// Rank character outside `1..=8`
    InvalidRank { rank: char },
    /// Algebraic notation that is not exactly two characters
    InvalidLength { notation: String },
    /// Zero-based indices outside the 8x8 board
    IndexOutOfBounds { file: usize, rank: usize },
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::InvalidFile { file } => {
                write!(f, "Invalid file '{file}', expected 'a'-'h'")
            }
            CoordinateError::InvalidRank { rank } => {
                write!(f, "Invalid rank '{rank}', expected '1'-'8'")
            }
            CoordinateError::InvalidLength { notation } => {
                write!(f, "Coordinate must be 2 characters, found '{notation}'")
            }
            CoordinateError::IndexOutOfBounds { file, rank } => {
                write!(f, "Indices ({file}, {rank}) out of bounds (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

/// Error type for piece table mutations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The coordinate already holds a piece
    Occupied { coordinate: Coordinate },
    /// No live piece has this id
    UnknownPiece { id: PieceId },
    /// A piece with this id is already in the table
    DuplicatePiece { id: PieceId },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Occupied { coordinate } => {
                write!(f, "Square {coordinate} is already occupied")
            }
            TableError::UnknownPiece { id } => {
                write!(f, "No piece with id {id} in the table")
            }
            TableError::DuplicatePiece { id } => {
                write!(f, "Piece {id} is already in the table")
            }
        }
    }
}

impl std::error::Error for TableError {}
