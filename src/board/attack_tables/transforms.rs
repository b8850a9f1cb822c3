//! Occupancy transforms that turn files and diagonals into contiguous bit runs.
//!
//! - `flip_a1h8` mirrors the board across the long diagonal, so file `f`
//!   becomes rank `f` with the old rank as the bit position.
//! - `rotate_45_clockwise` moves square (rank r, file f) to (rank r - f mod 8, file f);
//!   every a1-h8 diagonal ends up inside a single rank.
//! - `rotate_45_anticlockwise` moves (r, f) to (r + f - 7 mod 8, f); every
//!   h1-a8 diagonal ends up inside a single rank.
//!
//! All three are bijections on the 64 squares, so they can be applied to the
//! occupancy once per position and reused by every slider lookup.

/// Reflect a mask across the a1-h8 diagonal.
#[inline]
#[must_use]
pub fn flip_a1h8(mut x: u64) -> u64 {
    const K1: u64 = 0x5500_5500_5500_5500;
    const K2: u64 = 0x3333_0000_3333_0000;
    const K4: u64 = 0x0F0F_0F0F_0000_0000;
    let mut t = K4 & (x ^ (x << 28));
    x ^= t ^ (t >> 28);
    t = K2 & (x ^ (x << 14));
    x ^= t ^ (t >> 14);
    t = K1 & (x ^ (x << 7));
    x ^= t ^ (t >> 7);
    x
}

/// Pseudo-rotate a mask by 45 degrees clockwise.
#[inline]
#[must_use]
pub fn rotate_45_clockwise(mut x: u64) -> u64 {
    const K1: u64 = 0xAAAA_AAAA_AAAA_AAAA;
    const K2: u64 = 0xCCCC_CCCC_CCCC_CCCC;
    const K4: u64 = 0xF0F0_F0F0_F0F0_F0F0;
    x ^= K1 & (x ^ x.rotate_right(8));
    x ^= K2 & (x ^ x.rotate_right(16));
    x ^= K4 & (x ^ x.rotate_right(32));
    x
}

/// Pseudo-rotate a mask by 45 degrees anticlockwise.
#[inline]
#[must_use]
pub fn rotate_45_anticlockwise(mut x: u64) -> u64 {
    const K1: u64 = 0x5555_5555_5555_5555;
    const K2: u64 = 0x3333_3333_3333_3333;
    const K4: u64 = 0x0F0F_0F0F_0F0F_0F0F;
    x ^= K1 & (x ^ x.rotate_right(8));
    x ^= K2 & (x ^ x.rotate_right(16));
    x ^= K4 & (x ^ x.rotate_right(32));
    x
}
