use std::str::FromStr;

use super::error::FenError;
use super::state::Position;
use super::types::{BoardFlags, Color, Piece, Square};

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// Only the placement, side to move, castling and en-passant fields are
    /// read; the last two default to `-` when absent. Move counters are
    /// ignored. A castling right whose king or rook is not on its start square
    /// is dropped.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut pieces = [0u64; 6];
        let mut white = 0u64;
        let mut black = 0u64;

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let sq = Square::new(rank, file).ok_or(FenError::BadRankWidth {
                    rank: rank + 1,
                    files: file + 1,
                })?;
                pieces[piece.index()] |= sq.bit();
                if c.is_ascii_uppercase() {
                    white |= sq.bit();
                } else {
                    black |= sq.bit();
                }
                file += 1;
            }
            if file != 8 {
                return Err(FenError::BadRankWidth {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        let mut flags = match parts[1] {
            "w" => BoardFlags(BoardFlags::WHITE_TO_MOVE | BoardFlags::GATING_SQUARES),
            "b" => BoardFlags(BoardFlags::GATING_SQUARES),
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts.get(2).copied().unwrap_or("-").chars() {
            let open = match c {
                'K' => BoardFlags::E1 | BoardFlags::H1,
                'Q' => BoardFlags::E1 | BoardFlags::A1,
                'k' => BoardFlags::E8 | BoardFlags::H8,
                'q' => BoardFlags::E8 | BoardFlags::A8,
                '-' => 0,
                _ => return Err(FenError::InvalidCastling { char: c }),
            };
            flags.0 &= !open;
        }
        // Gates whose original occupant is not in place are closed
        let home = [
            (BoardFlags::E1, Piece::King, white),
            (BoardFlags::A1, Piece::Rook, white),
            (BoardFlags::H1, Piece::Rook, white),
            (BoardFlags::E8, Piece::King, black),
            (BoardFlags::A8, Piece::Rook, black),
            (BoardFlags::H8, Piece::Rook, black),
        ];
        for (gate, piece, side) in home {
            if pieces[piece.index()] & side & gate == 0 {
                flags.0 |= gate;
            }
        }

        let en_passant = match parts.get(3).copied().unwrap_or("-") {
            "-" => 0,
            text => {
                let invalid = || FenError::InvalidEnPassant {
                    found: text.to_string(),
                };
                let sq = text.parse::<Square>().map_err(|_| invalid())?;
                // The target is the empty square a double-pushed enemy pawn just crossed
                let (rank, passed) = if flags.white_to_move() {
                    (5, (sq.bit() >> 8) & black)
                } else {
                    (2, (sq.bit() << 8) & white)
                };
                let occupied = white | black;
                if sq.rank() != rank
                    || occupied & sq.bit() != 0
                    || passed & pieces[Piece::Pawn.index()] == 0
                {
                    return Err(invalid());
                }
                sq.bit()
            }
        };

        Position::from_parts(pieces, white, black, flags, en_passant).map_err(FenError::from)
    }

    /// Convert the position to FEN notation. Move counters are written as `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let sq = Square::from_index(rank * 8 + file);
                if let Some((piece, color)) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move() {
            Color::White => "w",
            Color::Black => "b",
        };
        let mut castling = String::new();
        for (gates, c) in [
            (BoardFlags::E1 | BoardFlags::H1, 'K'),
            (BoardFlags::E1 | BoardFlags::A1, 'Q'),
            (BoardFlags::E8 | BoardFlags::H8, 'k'),
            (BoardFlags::E8 | BoardFlags::A8, 'q'),
        ] {
            if !self.flags.any(gates) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = if self.en_passant == 0 {
            "-".to_string()
        } else {
            Square::from_index(self.en_passant.trailing_zeros() as usize).to_string()
        };

        format!("{} {} {} {} 0 1", rows.join("/"), active, castling, ep)
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_fen_matches_new() {
        let pos = Position::from_fen(START_FEN).expect("start fen");
        assert_eq!(pos, Position::new());
        assert_eq!(pos.to_fen(), START_FEN);
    }

    #[test]
    fn castling_field_opens_matching_gates() {
        let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").expect("fen");
        assert!(!pos.flags().any(BoardFlags::E1 | BoardFlags::H1));
        assert!(pos.flags().any(BoardFlags::A1));
        assert!(!pos.flags().any(BoardFlags::E8 | BoardFlags::A8));
        assert!(pos.flags().any(BoardFlags::H8));
        assert!(pos.to_fen().contains(" Kq "));
    }

    #[test]
    fn dash_closes_every_gate() {
        let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b - - 0 1").expect("fen");
        assert_eq!(pos.flags().0 & BoardFlags::GATING_SQUARES, BoardFlags::GATING_SQUARES);
        assert!(pos.to_fen().contains(" b - - "));
    }

    #[test]
    fn rights_without_rook_are_dropped() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w KQ - 0 1").expect("fen");
        assert!(pos.flags().any(BoardFlags::A1));
        assert!(!pos.flags().any(BoardFlags::H1));
    }

    #[test]
    fn reads_en_passant_target() {
        let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("fen");
        assert_eq!(pos.en_passant(), "d6".parse::<Square>().expect("d6").bit());
    }

    #[test]
    fn en_passant_target_must_follow_a_double_push() {
        let pos = Position::from_fen("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1").expect("fen");
        assert_eq!(pos.en_passant(), "e3".parse::<Square>().expect("e3").bit());

        for fen in [
            // Target holds a piece of the side to move
            "4k3/8/8/8/8/2N5/3P4/4K3 w - c3 0 1",
            // Wrong rank for the side to move
            "4k3/8/8/3pP3/8/8/8/4K3 b - d6 0 1",
            // No enemy pawn behind the target
            "4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1",
            "4k3/8/3n4/3pP3/8/8/8/4K3 w - d6 0 1",
        ] {
            assert!(
                matches!(Position::from_fen(fen), Err(FenError::InvalidEnPassant { .. })),
                "{fen}"
            );
        }
    }

    #[test]
    fn rejects_malformed_fens() {
        assert!(matches!(
            Position::from_fen("8/8/8 w"),
            Err(FenError::WrongRankCount { found: 3 })
        ));
        assert!(matches!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w - -"),
            Err(FenError::InvalidPiece { char: 'X' })
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - -"),
            Err(FenError::Position(_))
        ));
        assert!(matches!(
            Position::from_fen(START_FEN.replace(" w ", " x ").as_str()),
            Err(FenError::InvalidSideToMove { .. })
        ));
    }
}
