//! Precomputed attack tables.
//!
//! Leapers (knights, kings) get one mask per square. Sliders get one
//! [`LineTable`] per line direction, indexed by square and by the 8-bit
//! occupancy of the line through that square.

use once_cell::sync::Lazy;

fn leaper_table(deltas: &[(isize, isize); 8]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        let mut mask = 0u64;
        for &(dr, df) in deltas {
            let nr = r + dr;
            let nf = f + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                mask |= 1u64 << ((nr as usize) * 8 + (nf as usize));
            }
        }
        *slot = mask;
    }
    attacks
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    leaper_table(&[
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ])
});

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    leaper_table(&[
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ])
});

/// Which line through a square a table covers, and in which transformed board
/// that line is a contiguous bit run.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Line {
    /// Rank, read from the plain occupancy
    Rank,
    /// File, read from the a1-h8 flipped occupancy
    File,
    /// a1-h8 diagonal, read from the clockwise-rotated occupancy
    Diagonal,
    /// h1-a8 diagonal, read from the anticlockwise-rotated occupancy
    AntiDiagonal,
}

/// Where the line through a square lives in its transformed board.
struct LineGeometry {
    /// Bit offset of the line's first square in the transformed board
    shift: u8,
    /// Number of squares on the line
    len: usize,
    /// Position of the square itself along the line
    pos: usize,
    /// Board index of each line square, in line order
    squares: [u8; 8],
}

impl Line {
    fn geometry(self, sq: usize) -> LineGeometry {
        let y = (sq / 8) as isize;
        let x = (sq % 8) as isize;
        let mut squares = [0u8; 8];
        let (shift, len, pos) = match self {
            Line::Rank => {
                for (k, s) in squares.iter_mut().enumerate() {
                    *s = (y * 8) as u8 + k as u8;
                }
                (y * 8, 8, x)
            }
            Line::File => {
                for (k, s) in squares.iter_mut().enumerate() {
                    *s = (k as isize * 8 + x) as u8;
                }
                (x * 8, 8, y)
            }
            Line::Diagonal => {
                let d = y - x;
                let len = 8 - d.abs();
                for k in 0..len {
                    let (rank, file) = if d >= 0 { (k + d, k) } else { (k, k - d) };
                    squares[k as usize] = (rank * 8 + file) as u8;
                }
                if d >= 0 {
                    (d * 8, len, x)
                } else {
                    ((d + 8) * 8 - d, len, y)
                }
            }
            Line::AntiDiagonal => {
                let d = x + y - 7;
                let len = 8 - d.abs();
                for k in 0..len {
                    let (rank, file) = if d >= 0 { (7 - k, d + k) } else { (d + 7 - k, k) };
                    squares[k as usize] = (rank * 8 + file) as u8;
                }
                if d >= 0 {
                    (d * 9, len, x - d)
                } else {
                    ((d + 8) * 8, len, x)
                }
            }
        };
        LineGeometry {
            shift: shift as u8,
            len: len as usize,
            pos: pos as usize,
            squares,
        }
    }
}

/// Slider attacks along one line direction for every square and line occupancy.
pub(crate) struct LineTable {
    shift: [u8; 64],
    mask: [u8; 64],
    attacks: Box<[[u64; 256]]>,
}

impl LineTable {
    fn build(line: Line) -> Self {
        let mut shift = [0u8; 64];
        let mut mask = [0u8; 64];
        let mut attacks = vec![[0u64; 256]; 64].into_boxed_slice();

        for sq in 0..64 {
            let geo = line.geometry(sq);
            shift[sq] = geo.shift;
            mask[sq] = ((1u16 << geo.len) - 1) as u8;

            for occ in 0..(1usize << geo.len) {
                let mut set = 0u64;
                for step in [1isize, -1] {
                    let mut k = geo.pos as isize + step;
                    while (0..geo.len as isize).contains(&k) {
                        set |= 1u64 << geo.squares[k as usize];
                        if occ & (1 << k) != 0 {
                            break;
                        }
                        k += step;
                    }
                }
                attacks[sq][occ] = set;
            }
        }

        LineTable {
            shift,
            mask,
            attacks,
        }
    }

    /// Attacks from `sq` along this line, given the matching transformed occupancy.
    #[inline(always)]
    pub(crate) fn lookup(&self, transformed: u64, sq: usize) -> u64 {
        let idx = ((transformed >> self.shift[sq]) as u8) & self.mask[sq];
        self.attacks[sq][idx as usize]
    }
}

pub(crate) static RANK_ATTACKS: Lazy<LineTable> = Lazy::new(|| LineTable::build(Line::Rank));
pub(crate) static FILE_ATTACKS: Lazy<LineTable> = Lazy::new(|| LineTable::build(Line::File));
pub(crate) static DIAGONAL_ATTACKS: Lazy<LineTable> =
    Lazy::new(|| LineTable::build(Line::Diagonal));
pub(crate) static ANTI_DIAGONAL_ATTACKS: Lazy<LineTable> =
    Lazy::new(|| LineTable::build(Line::AntiDiagonal));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_contains_its_own_square() {
        for line in [Line::Rank, Line::File, Line::Diagonal, Line::AntiDiagonal] {
            for sq in 0..64 {
                let geo = line.geometry(sq);
                assert!(geo.len >= 1 && geo.len <= 8);
                assert_eq!(usize::from(geo.squares[geo.pos]), sq, "{line:?} {sq}");
            }
        }
    }

    #[test]
    fn leaper_counts_in_corner_and_center() {
        assert_eq!(KNIGHT_ATTACKS[0].count_ones(), 2);
        assert_eq!(KNIGHT_ATTACKS[27].count_ones(), 8);
        assert_eq!(KING_ATTACKS[0].count_ones(), 3);
        assert_eq!(KING_ATTACKS[27].count_ones(), 8);
    }
}
