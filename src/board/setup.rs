//! Building root positions from a start position plus a move sequence.

use super::error::MoveParseError;
use super::state::Position;
use super::types::{MoveInput, Piece};

/// The root position of a new game.
#[must_use]
pub fn new_game() -> Position {
    Position::new()
}

/// Apply `moves` in order to `start`.
///
/// Each move is applied with the kind of the piece found on its origin
/// square. A promotion to anything but a queen is patched in afterwards.
pub fn load_position(start: Position, moves: &[MoveInput]) -> Result<Position, MoveParseError> {
    moves
        .iter()
        .try_fold(start, |pos, &input| pos.apply_input(input))
}

impl Position {
    /// Apply an externally supplied move.
    ///
    /// Fails only when the origin square holds no piece of the side to move;
    /// the move itself is not checked for legality.
    pub fn apply_input(&self, input: MoveInput) -> Result<Position, MoveParseError> {
        let own = self.color_mask(self.side_to_move());
        let piece = self
            .piece_kind_at(input.from)
            .filter(|_| own & input.from.bit() != 0)
            .ok_or_else(|| MoveParseError::EmptyOrigin {
                square: input.from.to_string(),
            })?;

        let next = self.apply_move(input.from, input.to, piece);
        Ok(match input.promotion {
            Some(choice) if piece == Piece::Pawn && choice != Piece::Queen => {
                next.with_promotion(input.to, choice)
            }
            _ => next,
        })
    }
}
