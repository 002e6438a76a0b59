pub mod board;

pub use board::{Color, Coordinate, CoordinateSet, Direction, Occupancy, Piece, PieceType, Square};
