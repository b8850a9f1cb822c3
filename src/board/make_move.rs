//! Position transitions.
//!
//! Every transition returns a fresh [`Position`]; the source is left untouched.

use crate::zobrist::{EMPTY_ROW, ZOBRIST};

use super::state::Position;
use super::types::{BoardFlags, Color, Move, Piece, Square};

const BACK_RANKS: u64 = 0xFF00_0000_0000_00FF;

impl Position {
    /// Apply a move given as origin, destination and the kind of the moving piece.
    ///
    /// The piece kind is trusted, not looked up. Pawns reaching a back rank
    /// become queens ([`Position::with_promotion`] rewrites that afterwards).
    /// A pawn landing on the en-passant target removes the passed pawn, and a
    /// king moving two files brings the matching rook along.
    #[must_use]
    pub fn apply_move(&self, from: Square, to: Square, piece: Piece) -> Position {
        let us = self.side_to_move();
        let off = us.zobrist_offset();
        let their_off = off ^ 7;
        let from_bit = from.bit();
        let to_bit = to.bit();
        let (f, t) = (from.index(), to.index());

        let captured = self.piece_kind_at(to);

        let mut next = *self;
        next.flags = self.flags.after_move(from_bit | to_bit);
        next.en_passant = if piece == Piece::Pawn && f.abs_diff(t) == 16 {
            1u64 << ((f + t) / 2)
        } else {
            0
        };

        if let Some(kind) = captured {
            next.pieces[kind.index()] &= !to_bit;
        }
        let moved = &mut next.pieces[piece.index()];
        *moved = (*moved & !from_bit) | to_bit;
        let (own, theirs) = match us {
            Color::White => (&mut next.white, &mut next.black),
            Color::Black => (&mut next.black, &mut next.white),
        };
        *own = (*own & !from_bit) | to_bit;
        *theirs &= !to_bit;

        let taken_row = captured.map_or(EMPTY_ROW, Piece::zobrist_row) + their_off;
        let piece_row = piece.zobrist_row() + off;
        next.hash ^= ZOBRIST.row(taken_row, t)
            ^ ZOBRIST.row(piece_row, t)
            ^ ZOBRIST.row(piece_row, f)
            ^ ZOBRIST.empty(f);

        match piece {
            Piece::Pawn if to_bit & BACK_RANKS != 0 => {
                next.pieces[Piece::Pawn.index()] &= !to_bit;
                next.pieces[Piece::Queen.index()] |= to_bit;
                next.hash ^= ZOBRIST.piece(Piece::Pawn, us, t) ^ ZOBRIST.piece(Piece::Queen, us, t);
            }
            Piece::Pawn if to_bit == self.en_passant => {
                let victim = f / 8 * 8 + t % 8;
                let victim_bit = 1u64 << victim;
                next.pieces[Piece::Pawn.index()] &= !victim_bit;
                match us {
                    Color::White => next.black &= !victim_bit,
                    Color::Black => next.white &= !victim_bit,
                }
                next.hash ^=
                    ZOBRIST.piece(Piece::Pawn, us.opponent(), victim) ^ ZOBRIST.empty(victim);
            }
            Piece::King if f.abs_diff(t) == 2 => {
                let (rook_from, rook_to) = if t > f { (t + 1, t - 1) } else { (t - 2, t + 1) };
                let rook_bits = (1u64 << rook_from) | (1u64 << rook_to);
                next.pieces[Piece::Rook.index()] ^= rook_bits;
                match us {
                    Color::White => next.white ^= rook_bits,
                    Color::Black => next.black ^= rook_bits,
                }
                next.flags = next.flags.with((1u64 << rook_from) & BoardFlags::GATING_SQUARES);
                next.hash ^= ZOBRIST.piece(Piece::Rook, us, rook_from)
                    ^ ZOBRIST.empty(rook_from)
                    ^ ZOBRIST.empty(rook_to)
                    ^ ZOBRIST.piece(Piece::Rook, us, rook_to);
            }
            _ => {}
        }

        next.refresh_derived();
        next
    }

    /// Apply a generated move.
    #[inline]
    #[must_use]
    pub fn play(&self, mv: Move) -> Position {
        self.apply_move(mv.from, mv.to, mv.piece)
    }

    /// Replace the queen on `sq` with `piece`, for promotions to anything but a queen.
    ///
    /// Returns the position unchanged when `sq` holds no queen or `piece` is not
    /// a knight, bishop or rook.
    #[must_use]
    pub fn with_promotion(&self, sq: Square, piece: Piece) -> Position {
        let bit = sq.bit();
        let Some((Piece::Queen, color)) = self.piece_at(sq) else {
            return *self;
        };
        if !matches!(piece, Piece::Knight | Piece::Bishop | Piece::Rook) {
            return *self;
        }
        let mut next = *self;
        next.pieces[Piece::Queen.index()] &= !bit;
        next.pieces[piece.index()] |= bit;
        next.hash ^= ZOBRIST.piece(Piece::Queen, color, sq.index())
            ^ ZOBRIST.piece(piece, color, sq.index());
        next.refresh_derived();
        next
    }

    /// Pass the turn: the side flips and the en-passant target is cleared.
    ///
    /// Nothing else changes, the hash included. Searches key their tables on
    /// the hash combined with the side to move.
    #[inline]
    #[must_use]
    pub fn null_move(&self) -> Position {
        let mut next = *self;
        next.flags = self.flags.toggled();
        next.en_passant = 0;
        next
    }
}
