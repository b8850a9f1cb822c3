//! Immutable position snapshot and its derived state.

use std::fmt;

use crate::zobrist::ZOBRIST;

use super::attack_tables::{
    black_pawn_attacks, diagonal_attacks, flip_a1h8, king_attacks, knight_attacks,
    rotate_45_anticlockwise, rotate_45_clockwise, straight_attacks, white_pawn_attacks,
};
use super::error::PositionError;
use super::types::{squares, BoardFlags, Color, Piece, Square};

const START_PIECES: [u64; 6] = [
    0x00FF_0000_0000_FF00,
    0x4200_0000_0000_0042,
    0x2400_0000_0000_0024,
    0x8100_0000_0000_0081,
    0x0800_0000_0000_0008,
    0x1000_0000_0000_0010,
];
const START_WHITE: u64 = 0x0000_0000_0000_FFFF;
const START_BLACK: u64 = 0xFFFF_0000_0000_0000;

/// A complete board state.
///
/// Positions are plain `Copy` values and are never mutated once built: every
/// move produces a new position. Besides the piece and colour masks each
/// position caches the occupancy in the four orientations used by the slider
/// lookups, the squares attacked by each side, and its Zobrist hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub(crate) hash: u64,
    pub(crate) flags: BoardFlags,
    pub(crate) en_passant: u64,

    pub(crate) occupied: u64,
    pub(crate) flipped: u64,
    pub(crate) rot45c: u64,
    pub(crate) rot45a: u64,

    pub(crate) white: u64,
    pub(crate) black: u64,
    pub(crate) white_attacks: u64,
    pub(crate) black_attacks: u64,

    /// Piece masks indexed by [`Piece::index`], colour-agnostic
    pub(crate) pieces: [u64; 6],
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut pos = Position {
            hash: 0,
            flags: BoardFlags::START,
            en_passant: 0,
            occupied: 0,
            flipped: 0,
            rot45c: 0,
            rot45a: 0,
            white: START_WHITE,
            black: START_BLACK,
            white_attacks: 0,
            black_attacks: 0,
            pieces: START_PIECES,
        };
        pos.refresh_derived();
        pos.hash = pos.full_hash();
        pos
    }

    /// Build a position from raw masks, checking the board invariants.
    pub fn from_parts(
        pieces: [u64; 6],
        white: u64,
        black: u64,
        flags: BoardFlags,
        en_passant: u64,
    ) -> Result<Self, PositionError> {
        let mut pos = Position {
            hash: 0,
            flags,
            en_passant,
            occupied: 0,
            flipped: 0,
            rot45c: 0,
            rot45a: 0,
            white,
            black,
            white_attacks: 0,
            black_attacks: 0,
            pieces,
        };
        pos.validate()?;
        pos.refresh_derived();
        pos.hash = pos.full_hash();
        Ok(pos)
    }

    /// Check the structural invariants of the piece and colour masks.
    ///
    /// Run once when a position enters the engine; positions produced by
    /// [`Position::apply_move`] preserve these by construction, except that a
    /// king may be captured during search.
    pub fn validate(&self) -> Result<(), PositionError> {
        let union = self.pieces.iter().fold(0u64, |acc, m| acc | m);
        let total: u32 = self.pieces.iter().map(|m| m.count_ones()).sum();
        if total != union.count_ones() {
            let mut overlap = 0u64;
            for (i, a) in self.pieces.iter().enumerate() {
                for b in &self.pieces[i + 1..] {
                    overlap |= a & b;
                }
            }
            return Err(PositionError::OverlappingPieces { mask: overlap });
        }
        if self.white & self.black != 0 || union != self.white | self.black {
            return Err(PositionError::ColorMismatch);
        }
        for (mask, name) in [(self.white, "White"), (self.black, "Black")] {
            let count = (self.pieces[Piece::King.index()] & mask).count_ones();
            if count != 1 {
                return Err(PositionError::KingCount { color: name, count });
            }
        }
        let stray = self.pieces[Piece::Pawn.index()] & 0xFF00_0000_0000_00FF;
        if stray != 0 {
            return Err(PositionError::PawnOnBackRank { mask: stray });
        }
        Ok(())
    }

    /// Recompute every mask derived from the piece and colour masks.
    pub(crate) fn refresh_derived(&mut self) {
        self.occupied = self.white | self.black;
        self.flipped = flip_a1h8(self.occupied);
        self.rot45c = rotate_45_clockwise(self.occupied);
        self.rot45a = rotate_45_anticlockwise(self.occupied);
        self.white_attacks = self.compute_attacks(Color::White);
        self.black_attacks = self.compute_attacks(Color::Black);
    }

    /// Squares attacked by one piece of `kind` and `color` standing on `sq`.
    #[inline]
    #[must_use]
    pub fn attacks_of(&self, kind: Piece, color: Color, sq: usize) -> u64 {
        match kind {
            Piece::Pawn => match color {
                Color::White => white_pawn_attacks(1u64 << sq),
                Color::Black => black_pawn_attacks(1u64 << sq),
            },
            Piece::Knight => knight_attacks(sq),
            Piece::Bishop => diagonal_attacks(self.rot45c, self.rot45a, sq),
            Piece::Rook => straight_attacks(self.occupied, self.flipped, sq),
            Piece::Queen => {
                straight_attacks(self.occupied, self.flipped, sq)
                    | diagonal_attacks(self.rot45c, self.rot45a, sq)
            }
            Piece::King => king_attacks(sq),
        }
    }

    fn compute_attacks(&self, color: Color) -> u64 {
        let own = self.color_mask(color);
        let pawns = self.pieces[Piece::Pawn.index()] & own;
        let mut attacks = match color {
            Color::White => white_pawn_attacks(pawns),
            Color::Black => black_pawn_attacks(pawns),
        };
        for kind in [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen, Piece::King] {
            for sq in squares(self.pieces[kind.index()] & own) {
                attacks |= self.attacks_of(kind, color, sq.index());
            }
        }
        attacks
    }

    /// Hash recomputed from scratch over all 64 squares.
    #[must_use]
    pub fn full_hash(&self) -> u64 {
        (0..64).fold(0u64, |hash, sq| {
            hash ^ match self.piece_at(Square::from_index(sq)) {
                Some((piece, color)) => ZOBRIST.piece(piece, color, sq),
                None => ZOBRIST.empty(sq),
            }
        })
    }

    /// The same position with colours swapped and the board flipped vertically.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut pieces = self.pieces;
        for mask in &mut pieces {
            *mask = mask.swap_bytes();
        }
        let mut pos = Position {
            hash: 0,
            flags: self.flags.mirrored(),
            en_passant: self.en_passant.swap_bytes(),
            occupied: 0,
            flipped: 0,
            rot45c: 0,
            rot45a: 0,
            white: self.black.swap_bytes(),
            black: self.white.swap_bytes(),
            white_attacks: 0,
            black_attacks: 0,
            pieces,
        };
        pos.refresh_derived();
        pos.hash = pos.full_hash();
        pos
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn flags(&self) -> BoardFlags {
        self.flags
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.flags.white_to_move() {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> u64 {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> u64 {
        self.occupied
    }

    /// Mask of all pieces of `kind`, both colours
    #[inline]
    #[must_use]
    pub fn pieces(&self, kind: Piece) -> u64 {
        self.pieces[kind.index()]
    }

    #[inline]
    #[must_use]
    pub fn pieces_of(&self, kind: Piece, color: Color) -> u64 {
        self.pieces[kind.index()] & self.color_mask(color)
    }

    #[inline]
    #[must_use]
    pub fn color_mask(&self, color: Color) -> u64 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Every square attacked by `color`
    #[inline]
    #[must_use]
    pub fn attacks_by(&self, color: Color) -> u64 {
        match color {
            Color::White => self.white_attacks,
            Color::Black => self.black_attacks,
        }
    }

    #[inline]
    #[must_use]
    pub fn king_count(&self) -> u32 {
        self.pieces[Piece::King.index()].count_ones()
    }

    #[inline]
    #[must_use]
    pub fn has_king(&self, color: Color) -> bool {
        self.pieces_of(Piece::King, color) != 0
    }

    /// True when the king of the side to move stands on an attacked square
    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        let us = self.side_to_move();
        self.pieces_of(Piece::King, us) & self.attacks_by(us.opponent()) != 0
    }

    /// True when `color` owns anything besides pawns and its king
    #[inline]
    #[must_use]
    pub fn has_non_pawn_material(&self, color: Color) -> bool {
        let pawns_and_kings = self.pieces[Piece::Pawn.index()] | self.pieces[Piece::King.index()];
        self.color_mask(color) & !pawns_and_kings != 0
    }

    #[inline]
    #[must_use]
    pub fn piece_count(&self) -> u32 {
        self.occupied.count_ones()
    }

    /// Kind of the piece on `sq`, found by scanning the piece masks
    #[inline]
    #[must_use]
    pub fn piece_kind_at(&self, sq: Square) -> Option<Piece> {
        let bit = sq.bit();
        Piece::ALL
            .into_iter()
            .find(|p| self.pieces[p.index()] & bit != 0)
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        let piece = self.piece_kind_at(sq)?;
        let color = if self.white & sq.bit() != 0 {
            Color::White
        } else {
            Color::Black
        };
        Some((piece, color))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let sq = Square::from_index(rank * 8 + file);
                let c = self
                    .piece_at(sq)
                    .map_or('.', |(piece, color)| piece.to_fen_char(color));
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")?;
        write!(f, "{} to move, hash {:016x}", self.side_to_move(), self.hash)
    }
}
