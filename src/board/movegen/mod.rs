//! Attack-square and legal-move generation for single pieces.
//!
//! Two tiers:
//! - `attack_squares` is every square a piece threatens. Sliders include the
//!   first blocker on each ray whatever its color, so a defended piece shows
//!   up as attacked by its defenders.
//! - `legal_moves` drops squares held by the mover's own color. Pawns override
//!   this because they advance and capture along different lines.
//!
//! Nothing here looks at turn order, check or pins.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::occupancy::Occupancy;
use super::{Color, Coordinate, CoordinateSet, Direction, Piece, PieceType};

use kings::king_attacks;
use knights::knight_attacks;
use pawns::{pawn_attacks, pawn_moves};
use sliders::slider_attacks;

/// Targets of fixed single-step offsets. No blocking: every in-bounds
/// destination is attacked.
pub(crate) fn step_attacks(from: Coordinate, offsets: &[Direction]) -> CoordinateSet {
    offsets.iter().filter_map(|d| d.step_from(from)).collect()
}

/// Every square `piece` attacks on `occupancy`.
pub fn attack_squares<O: Occupancy + ?Sized>(piece: &Piece, occupancy: &O) -> CoordinateSet {
    let from = piece.coordinate();
    let attacks = match piece.kind() {
        PieceType::Pawn => pawn_attacks(from, piece.color()),
        PieceType::Knight => knight_attacks(from),
        PieceType::King => king_attacks(from),
        PieceType::Bishop | PieceType::Rook | PieceType::Queen => {
            slider_attacks(from, piece.kind().directions(), occupancy)
        }
    };
    #[cfg(feature = "logging")]
    log::trace!("{piece:?} attacks {} squares", attacks.len());
    attacks
}

/// Squares `piece` may move to on `occupancy`, before any check test.
pub fn legal_moves<O: Occupancy + ?Sized>(piece: &Piece, occupancy: &O) -> CoordinateSet {
    match piece.kind() {
        PieceType::Pawn => pawn_moves(piece, occupancy),
        _ => filter_own(attack_squares(piece, occupancy), piece.color(), occupancy),
    }
}

/// Remove every square occupied by `color`. Empty squares and squares held by
/// the other color stay.
pub fn filter_own<O: Occupancy + ?Sized>(
    attacks: CoordinateSet,
    color: Color,
    occupancy: &O,
) -> CoordinateSet {
    attacks
        .iter()
        .filter(|&target| occupancy.color_at(target) != Some(color))
        .collect()
}

/// Whether any of `pieces` belonging to `attacker` attacks `target`.
pub fn is_attacked_by<'a, O, I>(
    target: Coordinate,
    attacker: Color,
    pieces: I,
    occupancy: &O,
) -> bool
where
    O: Occupancy + ?Sized,
    I: IntoIterator<Item = &'a Piece>,
{
    pieces
        .into_iter()
        .filter(|piece| piece.color() == attacker)
        .any(|piece| attack_squares(piece, occupancy).contains(target))
}
