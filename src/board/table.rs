//! Table of live pieces.
//!
//! Pieces are stored by `PieceId` with a 64-entry mailbox from coordinate to
//! occupant. The table is the one place that mutates pieces; it applies the
//! relocations it is told to and checks no rules.

use std::collections::BTreeMap;
use std::fmt;

use super::error::TableError;
use super::occupancy::Occupancy;
use super::{Color, Coordinate, CoordinateSet, Piece, PieceId};

/// Owner of the live pieces of one position.
#[derive(Clone, Debug)]
pub struct PieceTable {
    pieces: BTreeMap<PieceId, Piece>,
    squares: [Option<PieceId>; 64],
}

impl Default for PieceTable {
    fn default() -> Self {
        PieceTable {
            pieces: BTreeMap::new(),
            squares: [None; 64],
        }
    }
}

impl PieceTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a piece on its current coordinate.
    pub fn insert(&mut self, piece: Piece) -> Result<PieceId, TableError> {
        if self.pieces.contains_key(&piece.id()) {
            return Err(TableError::DuplicatePiece { id: piece.id() });
        }
        let coordinate = piece.coordinate();
        if self.squares[coordinate.as_index()].is_some() {
            return Err(TableError::Occupied { coordinate });
        }
        Ok(self.place(piece))
    }

    /// Store a piece, overwriting the mailbox entry for its coordinate.
    pub(super) fn place(&mut self, piece: Piece) -> PieceId {
        let id = piece.id();
        #[cfg(feature = "logging")]
        log::debug!("placing {piece:?}");
        self.squares[piece.coordinate().as_index()] = Some(id);
        self.pieces.insert(id, piece);
        id
    }

    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// The piece standing on `coord`
    #[must_use]
    pub fn piece_at(&self, coord: Coordinate) -> Option<&Piece> {
        self.squares[coord.as_index()].and_then(|id| self.pieces.get(&id))
    }

    /// Take a piece off the board.
    pub fn remove(&mut self, id: PieceId) -> Option<Piece> {
        let piece = self.pieces.remove(&id)?;
        self.squares[piece.coordinate().as_index()] = None;
        #[cfg(feature = "logging")]
        log::debug!("removed {piece:?}");
        Some(piece)
    }

    /// Move a piece to `to` and mark it moved, returning any piece it displaced.
    ///
    /// No legality check is made.
    pub fn relocate(&mut self, id: PieceId, to: Coordinate) -> Result<Option<Piece>, TableError> {
        let from = self
            .pieces
            .get(&id)
            .map(Piece::coordinate)
            .ok_or(TableError::UnknownPiece { id })?;

        let captured = match self.squares[to.as_index()] {
            Some(occupant) if occupant != id => self.pieces.remove(&occupant),
            _ => None,
        };

        self.squares[from.as_index()] = None;
        self.squares[to.as_index()] = Some(id);
        if let Some(piece) = self.pieces.get_mut(&id) {
            piece.set_coordinate(to);
            piece.mark_moved();
        }

        #[cfg(feature = "logging")]
        log::debug!("relocated {id} {from} -> {to}, captured {captured:?}");
        Ok(captured)
    }

    /// Live pieces in id order
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.iter().filter(move |piece| piece.color() == color)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Squares held by any piece
    #[must_use]
    pub fn occupied(&self) -> CoordinateSet {
        self.iter().map(Piece::coordinate).collect()
    }

    /// Attack squares of a live piece against this table.
    pub fn attack_squares(&self, id: PieceId) -> Result<CoordinateSet, TableError> {
        self.get(id)
            .map(|piece| piece.attack_squares(self))
            .ok_or(TableError::UnknownPiece { id })
    }

    /// Legal moves of a live piece against this table.
    pub fn legal_moves(&self, id: PieceId) -> Result<CoordinateSet, TableError> {
        self.get(id)
            .map(|piece| piece.legal_moves(self))
            .ok_or(TableError::UnknownPiece { id })
    }

    /// Whether any piece of `attacker` attacks `target`.
    #[must_use]
    pub fn is_attacked_by(&self, target: Coordinate, attacker: Color) -> bool {
        super::movegen::is_attacked_by(target, attacker, self.iter(), self)
    }
}

impl Occupancy for PieceTable {
    #[inline]
    fn color_at(&self, coord: Coordinate) -> Option<Color> {
        self.piece_at(coord).map(Piece::color)
    }
}

impl fmt::Display for PieceTable {
    /// Diagram with rank 8 on top, `.` for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut grid = [['.'; 8]; 8];
        for piece in self.iter() {
            let (row, col) = piece.coordinate().display_indices();
            grid[row][col] = piece.symbol();
        }
        for (row, cells) in grid.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceType;

    fn c(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut table = PieceTable::new();
        let id = table
            .insert(Piece::new(Color::White, PieceType::Rook, c("a1")))
            .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(id).map(Piece::kind), Some(PieceType::Rook));
        assert_eq!(table.piece_at(c("a1")).map(Piece::id), Some(id));
        assert!(table.piece_at(c("a2")).is_none());
    }

    #[test]
    fn test_insert_occupied_fails() {
        let mut table = PieceTable::new();
        table
            .insert(Piece::new(Color::White, PieceType::Rook, c("a1")))
            .unwrap();
        let err = table
            .insert(Piece::new(Color::Black, PieceType::Rook, c("a1")))
            .unwrap_err();
        assert_eq!(err, TableError::Occupied { coordinate: c("a1") });
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_insert_same_piece_twice_fails() {
        let mut table = PieceTable::new();
        let mut piece = Piece::new(Color::White, PieceType::Knight, c("b1"));
        table.insert(piece.clone()).unwrap();
        piece.set_coordinate(c("c3"));
        let id = piece.id();
        assert_eq!(table.insert(piece), Err(TableError::DuplicatePiece { id }));
    }

    #[test]
    fn test_reinsert_on_same_square_is_duplicate() {
        let mut table = PieceTable::new();
        let piece = Piece::new(Color::Black, PieceType::Bishop, c("c8"));
        let id = table.insert(piece.clone()).unwrap();
        assert_eq!(table.insert(piece), Err(TableError::DuplicatePiece { id }));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_occupied_tracks_relocation() {
        let mut table = PieceTable::new();
        let king = table
            .insert(Piece::new(Color::White, PieceType::King, c("e1")))
            .unwrap();
        table
            .insert(Piece::new(Color::Black, PieceType::King, c("e8")))
            .unwrap();
        let kings: CoordinateSet = [c("e1"), c("e8")].into_iter().collect();
        assert_eq!(table.occupied(), kings);

        table.relocate(king, c("e2")).unwrap();
        let kings: CoordinateSet = [c("e2"), c("e8")].into_iter().collect();
        assert_eq!(table.occupied(), kings);
        assert!(table.occupied().iter().all(|sq| table.is_occupied(sq)));
    }

    #[test]
    fn test_relocate_captures() {
        let mut table = PieceTable::new();
        let rook = table
            .insert(Piece::new(Color::White, PieceType::Rook, c("d4")))
            .unwrap();
        let victim = table
            .insert(Piece::new(Color::Black, PieceType::Knight, c("d6")))
            .unwrap();

        let captured = table.relocate(rook, c("d6")).unwrap();
        assert_eq!(captured.map(|p| p.id()), Some(victim));
        assert!(table.get(victim).is_none());
        assert!(table.piece_at(c("d4")).is_none());

        let moved = table.get(rook).unwrap();
        assert_eq!(moved.coordinate(), c("d6"));
        assert!(moved.has_moved());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_relocate_unknown_piece() {
        let mut table = PieceTable::new();
        let stray = Piece::new(Color::White, PieceType::King, c("e1"));
        assert_eq!(
            table.relocate(stray.id(), c("e2")),
            Err(TableError::UnknownPiece { id: stray.id() })
        );
    }

    #[test]
    fn test_remove() {
        let mut table = PieceTable::new();
        let id = table
            .insert(Piece::new(Color::Black, PieceType::Queen, c("d8")))
            .unwrap();
        let removed = table.remove(id).unwrap();
        assert_eq!(removed.coordinate(), c("d8"));
        assert!(table.is_empty());
        assert!(!table.is_occupied(c("d8")));
        assert!(table.remove(id).is_none());
    }

    #[test]
    fn test_display() {
        let mut table = PieceTable::new();
        table
            .insert(Piece::new(Color::Black, PieceType::King, c("e8")))
            .unwrap();
        table
            .insert(Piece::new(Color::White, PieceType::Rook, c("a1")))
            .unwrap();
        let text = table.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 . . . . k . . .");
        assert_eq!(lines[7], "1 R . . . . . . .");
        assert_eq!(lines[8], "  a b c d e f g h");
    }
}
