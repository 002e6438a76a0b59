//! Piece kinds.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::direction::Direction;

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// All piece types in index order
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Parse a piece type from its symbol, ignoring case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }

    /// Convert piece type to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    /// Symbol with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub const fn symbol(self, color: Color) -> char {
        let c = self.to_char();
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Returns true if this piece slides along rays (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }

    /// Ray directions for sliders; empty for every other kind.
    #[must_use]
    pub const fn directions(self) -> &'static [Direction] {
        match self {
            PieceType::Rook => &Direction::ORTHOGONAL,
            PieceType::Bishop => &Direction::DIAGONAL,
            PieceType::Queen => &Direction::ALL_EIGHT,
            PieceType::Pawn | PieceType::Knight | PieceType::King => &[],
        }
    }

    /// Capitalized name, e.g. `"Rook"`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceType::Pawn => "Pawn",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Rook => "Rook",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for kind in PieceType::ALL {
            assert_eq!(PieceType::from_char(kind.to_char()), Some(kind));
            assert_eq!(
                PieceType::from_char(kind.to_char().to_ascii_uppercase()),
                Some(kind)
            );
        }
        assert_eq!(PieceType::from_char('x'), None);
    }

    #[test]
    fn test_symbol_case() {
        assert_eq!(PieceType::Rook.symbol(Color::White), 'R');
        assert_eq!(PieceType::Rook.symbol(Color::Black), 'r');
        assert_eq!(PieceType::Knight.symbol(Color::White), 'N');
    }

    #[test]
    fn test_slider_directions() {
        assert_eq!(PieceType::Rook.directions(), &Direction::ORTHOGONAL);
        assert_eq!(PieceType::Bishop.directions(), &Direction::DIAGONAL);
        assert_eq!(PieceType::Queen.directions().len(), 8);
        for kind in PieceType::ALL {
            assert_eq!(kind.is_slider(), !kind.directions().is_empty());
        }
    }
}
