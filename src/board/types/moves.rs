//! Move types and move list.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;
use crate::board::error::MoveParseError;

/// Upper bound on pseudo-legal moves in any reachable position
pub const MAX_MOVES: usize = 256;

/// A generated move: origin, destination and the kind of piece standing on the origin.
///
/// Promotions are implicit. A pawn reaching the back rank becomes a queen when the
/// move is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
}

pub(crate) const EMPTY_MOVE: Move = Move {
    from: Square(0),
    to: Square(0),
    piece: Piece::Pawn,
};

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, piece: Piece) -> Self {
        Move { from, to, piece }
    }

    /// Pawn move landing on either back rank
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        matches!(self.piece, Piece::Pawn) && (self.to.0 > 55 || self.to.0 < 8)
    }
}

impl fmt::Display for Move {
    /// Long algebraic notation, appending `q` for promotions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if self.is_promotion() {
            write!(f, "q")?;
        }
        Ok(())
    }
}

/// A move as received from outside: squares plus an optional promotion choice.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveInput {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl MoveInput {
    /// Parse a move in long algebraic form (e.g., "e2e4", "e7e8n").
    pub fn parse(text: &str) -> Result<Self, MoveParseError> {
        text.parse()
    }
}

impl FromStr for MoveInput {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }
        let square = |part: &str| {
            part.parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: part.to_string(),
                })
        };
        let from = square(&s[0..2])?;
        let to = square(&s[2..4])?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece) if piece.is_promotion_choice() => Some(piece),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };
        Ok(MoveInput {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for MoveInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

/// Fixed-capacity list of moves, in generation order.
///
/// The order is stable for a given position, so an index into the list can be
/// remembered across searches and used as a move-ordering hint.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES, "move list overflow");
        if self.len < MAX_MOVES {
            self.moves[self.len] = mv;
            self.len += 1;
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    /// Find the generated move matching an external move's squares
    #[must_use]
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.iter().copied().find(|m| m.from == from && m.to == to)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.as_slice()[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_promotion_moves() {
        let mv: MoveInput = "e2e4".parse().expect("e2e4");
        assert_eq!(mv.from, Square(12));
        assert_eq!(mv.to, Square(28));
        assert_eq!(mv.promotion, None);

        let promo = MoveInput::parse("b7b8n").expect("b7b8n");
        assert_eq!(promo.promotion, Some(Piece::Knight));
        assert_eq!(promo.to_string(), "b7b8n");
    }

    #[test]
    fn rejects_malformed_moves() {
        assert_eq!(
            "e2".parse::<MoveInput>(),
            Err(MoveParseError::InvalidLength { len: 2 })
        );
        assert!(matches!(
            "e2z4".parse::<MoveInput>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert_eq!(
            "e7e8k".parse::<MoveInput>(),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        );
    }

    #[test]
    fn pawn_moves_to_back_rank_display_with_queen() {
        let mv = Move::new(Square(52), Square(60), Piece::Pawn);
        assert_eq!(mv.to_string(), "e7e8q");
        let rook = Move::new(Square(52), Square(60), Piece::Rook);
        assert_eq!(rook.to_string(), "e7e8");
    }
}
