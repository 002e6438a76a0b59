//! Core value types.
//!
//! This module contains the geometry types used throughout move generation:
//! - `Color` - piece and square colors
//! - `Coordinate` - validated file/rank pair
//! - `Direction` - file/rank offsets with ray expansion
//! - `Square` - coordinate with derived checkerboard color
//! - `PieceType` - piece kinds and their symbols
//! - `CoordinateSet` - 64-bit set of coordinates

mod color;
mod coordinate;
mod coordinate_set;
mod direction;
mod piece;
mod square;

pub use color::Color;
pub use coordinate::Coordinate;
pub use coordinate_set::{CoordinateSet, CoordinateSetIter};
pub use direction::Direction;
pub use piece::PieceType;
pub use square::{color_of, Square};
