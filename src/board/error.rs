//! Error types for board text parsing and position validation.

use thiserror::Error;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 2)
    #[error("FEN must have at least 2 parts, found {found}")]
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    #[error("Invalid piece character '{char}' in FEN")]
    InvalidPiece { char: char },
    /// Invalid castling character
    #[error("Invalid castling character '{char}' in FEN")]
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    #[error("Invalid side to move '{found}', expected 'w' or 'b'")]
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    #[error("Invalid en passant square '{found}'")]
    InvalidEnPassant { found: String },
    /// Wrong number of ranks in the placement field
    #[error("FEN placement must have 8 ranks, found {found}")]
    WrongRankCount { found: usize },
    /// Too many or too few files in a rank
    #[error("Rank {rank} describes {files} files, expected 8")]
    BadRankWidth { rank: usize, files: usize },
    /// The decoded position violates a board invariant
    #[error(transparent)]
    Position(#[from] PositionError),
}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    #[error("Move must be 4 or 5 characters, found {len}")]
    InvalidLength { len: usize },
    /// Invalid square notation in move
    #[error("Invalid square '{notation}' in move")]
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    #[error("Invalid promotion piece '{char}'")]
    InvalidPromotion { char: char },
    /// No piece of the side to move stands on the origin square
    #[error("No piece of the side to move on {square}")]
    EmptyOrigin { square: String },
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("Invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
}

/// Board invariant violations found while loading a position
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("{color} has {count} kings, expected exactly one")]
    KingCount { color: &'static str, count: u32 },
    #[error("piece masks overlap on {mask:#018x}")]
    OverlappingPieces { mask: u64 },
    #[error("colour masks do not match the piece masks")]
    ColorMismatch,
    #[error("pawn on a back rank ({mask:#018x})")]
    PawnOnBackRank { mask: u64 },
}
