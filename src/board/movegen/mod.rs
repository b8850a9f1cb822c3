//! Pseudo-legal move generation.
//!
//! Moves that leave the mover's own king attacked are generated, and so are
//! moves that capture the enemy king. The search treats a missing king as the
//! end of the game, which makes a separate legality filter unnecessary.
//!
//! Moves come out ordered by origin square, then destination square. The
//! order is a pure function of the position, so a move's index in the list
//! can be remembered and reused as an ordering hint.

mod kings;
mod pawns;

use super::attack_tables::king_attacks;
use super::state::Position;
use super::types::{squares, Move, MoveList, Piece, Square};

impl Position {
    /// Destination mask for the side to move's `kind` standing on `from`.
    #[must_use]
    pub fn destinations(&self, from: Square, kind: Piece) -> u64 {
        let us = self.side_to_move();
        let own = self.color_mask(us);
        match kind {
            Piece::Pawn => self.pawn_destinations(from.bit(), us),
            Piece::King => (king_attacks(from.index()) & !own) | self.castling_destinations(us),
            Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen => {
                self.attacks_of(kind, us, from.index()) & !own
            }
        }
    }

    /// Every pseudo-legal move for the side to move.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        self.collect_moves(!0)
    }

    /// Moves landing on an enemy piece, used by quiescence search.
    ///
    /// En-passant captures and quiet promotions land on empty squares and are
    /// not included; promotions that capture are.
    #[must_use]
    pub fn generate_captures(&self) -> MoveList {
        self.collect_moves(self.color_mask(self.side_to_move().opponent()))
    }

    fn collect_moves(&self, target_filter: u64) -> MoveList {
        let mut moves = MoveList::new();
        for from in squares(self.color_mask(self.side_to_move())) {
            let Some(kind) = self.piece_kind_at(from) else {
                unreachable!("square {from} is coloured but holds no piece");
            };
            for to in squares(self.destinations(from, kind) & target_filter) {
                moves.push(Move::new(from, to, kind));
            }
        }
        moves
    }
}
