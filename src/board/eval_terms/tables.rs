//! Evaluation constants and tables.
//!
//! Values come in opening/endgame pairs and are blended by game phase.

// ============================================================================
// MATERIAL
// ============================================================================

pub const PAWN_VALUE: (i32, i32) = (124, 206);
pub const KNIGHT_VALUE: (i32, i32) = (781, 854);
pub const BISHOP_VALUE: (i32, i32) = (825, 915);
pub const ROOK_VALUE: (i32, i32) = (1276, 1380);
pub const QUEEN_VALUE: (i32, i32) = (2538, 2682);

/// Non-pawn material (both sides, opening values) above which the game is
/// still in the opening.
pub const MIDGAME_LIMIT: i32 = 15258;
/// Non-pawn material at or below which the game is an endgame.
pub const ENDGAME_LIMIT: i32 = 3915;

// ============================================================================
// PAWN STRUCTURE
// ============================================================================

pub const CONNECTED_BONUS: (i32, i32) = (20, 45);
pub const PASSED_BONUS: (i32, i32) = (30, 75);
/// Credited to the opponent of the side owning the doubled pawn.
pub const DOUBLED_PENALTY: (i32, i32) = (45, 95);

// ============================================================================
// PIECES
// ============================================================================

/// Central 4x4 block whose occupancy decides how open the position is.
pub const CENTER_BLOCK: u64 = 0x0000_3C3C_3C3C_0000;

pub const OPEN_BONUS_HIGH: i32 = 45;
pub const OPEN_BONUS_LOW: i32 = 25;

/// Outer two rings minus the extended centre files on the back ranks.
pub const KNIGHT_RIM: u64 = 0xFFFF_C3C3_C3C3_FFFF;
pub const KNIGHT_RIM_PENALTY: i32 = 15;

pub const BISHOP_PAIR_BONUS: i32 = 65;
pub const BISHOP_ADJACENT_DIAGONALS: i32 = 25;

/// Files a, b, g and h.
pub const ROOK_EDGE_FILES: u64 = 0xC3C3_C3C3_C3C3_C3C3;
pub const ROOK_EDGE_PENALTY: i32 = 30;
pub const ROOK_OPEN_FILE_BONUS: i32 = 20;

// ============================================================================
// KING SAFETY AND COVERAGE
// ============================================================================

pub const KING_RING_ATTACK: i32 = 15;
pub const KING_SHELTER_PAWN: i32 = 20;
pub const KING_WING_BONUS: i32 = 70;
/// a1, b1, c1, g1, h1 and a2, b2, g2, h2: the castled corners.
pub const WHITE_KING_WINGS: u64 = 0x0000_0000_0000_C3C7;
pub const BLACK_KING_WINGS: u64 = 0xC7C3_0000_0000_0000;

pub const COVERAGE_SQUARE: i32 = 3;
pub const COVERAGE_OCCUPIED: i32 = 4;

// ============================================================================
// PAWN SQUARE TABLES
// ============================================================================

/// Opening pawn values indexed by square for White (a1 = 0).
/// Black looks up `sq ^ 56`.
#[rustfmt::skip]
pub const PAWN_TABLE_OPENING: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
    112, 118, 130, 100, 100, 130, 118, 112,
    112, 118, 130, 130, 130, 130, 118, 112,
    112, 118, 136, 148, 148, 136, 118, 112,
    120, 128, 145, 156, 156, 145, 128, 120,
    132, 138, 155, 174, 174, 155, 138, 132,
    132, 138, 155, 174, 174, 155, 138, 132,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
pub const PAWN_TABLE_ENDGAME: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
    236, 206, 196, 186, 186, 196, 206, 236,
    236, 206, 196, 186, 186, 196, 206, 236,
    248, 216, 206, 186, 186, 206, 216, 248,
    262, 231, 218, 206, 206, 218, 231, 262,
    288, 256, 238, 216, 216, 238, 256, 288,
    288, 256, 238, 216, 216, 238, 256, 288,
      0,   0,   0,   0,   0,   0,   0,   0,
];
