//! Side-to-move and castling gate flags.
//!
//! Each gating square (a1, e1, h1, a8, e8, h8) owns the flag bit equal to its
//! own square bit. A set flag means the original occupant of that square has
//! moved or been captured, so castling through it is no longer possible.

/// Packed position flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct BoardFlags(pub u64);

impl BoardFlags {
    /// Side to move is White. Bit 1 (b1) is never a gating square.
    pub const WHITE_TO_MOVE: u64 = 1 << 1;

    pub const A1: u64 = 1 << 0;
    pub const E1: u64 = 1 << 4;
    pub const H1: u64 = 1 << 7;
    pub const A8: u64 = 1 << 56;
    pub const E8: u64 = 1 << 60;
    pub const H8: u64 = 1 << 63;

    /// Union of all gating squares
    pub const GATING_SQUARES: u64 = 0x9100_0000_0000_0091;

    /// Flags of a fresh game: White to move, nothing moved.
    pub const START: BoardFlags = BoardFlags(Self::WHITE_TO_MOVE);

    #[inline]
    #[must_use]
    pub const fn white_to_move(self) -> bool {
        self.0 & Self::WHITE_TO_MOVE != 0
    }

    /// True when any of the given flag bits is set
    #[inline]
    #[must_use]
    pub const fn any(self, bits: u64) -> bool {
        self.0 & bits != 0
    }

    /// Flags after a move touching `touched` squares: toggles the side and
    /// marks any gating square in `touched`.
    #[inline]
    #[must_use]
    pub const fn after_move(self, touched: u64) -> Self {
        BoardFlags((self.0 ^ Self::WHITE_TO_MOVE) | (touched & Self::GATING_SQUARES))
    }

    /// Flags with only the side to move flipped
    #[inline]
    #[must_use]
    pub const fn toggled(self) -> Self {
        BoardFlags(self.0 ^ Self::WHITE_TO_MOVE)
    }

    #[inline]
    #[must_use]
    pub const fn with(self, bits: u64) -> Self {
        BoardFlags(self.0 | bits)
    }

    /// Colour-swapped flags: the side flips and every gate moves to the other back rank
    #[inline]
    #[must_use]
    pub const fn mirrored(self) -> Self {
        let gates = (self.0 & Self::GATING_SQUARES).swap_bytes();
        BoardFlags(((self.0 & Self::WHITE_TO_MOVE) ^ Self::WHITE_TO_MOVE) | gates)
    }
}
