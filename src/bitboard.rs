// src/bitboard.rs
// Pure mask helpers over 64-bit boards (a1 = bit 0 … h8 = bit 63).

use once_cell::sync::Lazy;

pub const FILE_A: u64 = 0x0101_0101_0101_0101;
pub const FILE_B: u64 = FILE_A << 1;
pub const FILE_G: u64 = FILE_A << 6;
pub const FILE_H: u64 = 0x8080_8080_8080_8080;

pub const RANK_1: u64 = 0x0000_0000_0000_00FF;
pub const RANK_2: u64 = 0x0000_0000_0000_FF00;
pub const RANK_3: u64 = 0x0000_0000_00FF_0000;
pub const RANK_6: u64 = 0x0000_FF00_0000_0000;
pub const RANK_7: u64 = 0x00FF_0000_0000_0000;
pub const RANK_8: u64 = 0xFF00_0000_0000_0000;

/// d4, e4, d5, e5
pub const CENTER: u64 = 0x0000_0018_1800_0000;

const MAIN_DIAGONAL: u64 = 0x8040_2010_0804_0201;
const MAIN_ANTI_DIAGONAL: u64 = 0x0102_0408_1020_4080;

/// Diagonal masks indexed by `(rank - file) & 15`; slot 8 is unused.
const DIAG_MASKS: [u64; 16] = build_diag_masks();

/// Anti-diagonal masks indexed by `(rank + file) ^ 7`; slot 8 is unused.
const ANTI_DIAG_MASKS: [u64; 16] = build_anti_diag_masks();

const fn build_diag_masks() -> [u64; 16] {
    let mut t = [0u64; 16];
    let mut d: i32 = -7;
    while d <= 7 {
        let mask = if d >= 0 {
            MAIN_DIAGONAL << (8 * d)
        } else {
            MAIN_DIAGONAL >> (-8 * d)
        };
        t[(d & 15) as usize] = mask;
        d += 1;
    }
    t
}

const fn build_anti_diag_masks() -> [u64; 16] {
    let mut t = [0u64; 16];
    let mut s: i32 = 0;
    while s <= 14 {
        let shift = s - 7;
        let mask = if shift >= 0 {
            MAIN_ANTI_DIAGONAL << (8 * shift)
        } else {
            MAIN_ANTI_DIAGONAL >> (-8 * shift)
        };
        t[(s ^ 7) as usize] = mask;
        s += 1;
    }
    t
}

/// Index of the diagonal (a1-h8 direction) through `(file, rank)`.
#[inline(always)]
pub const fn diagonal_index(file: u8, rank: u8) -> usize {
    ((rank as i32 - file as i32) & 15) as usize
}

/// Index of the anti-diagonal (a8-h1 direction) through `(file, rank)`.
#[inline(always)]
pub const fn anti_diagonal_index(file: u8, rank: u8) -> usize {
    ((rank as usize + file as usize) ^ 7) & 15
}

#[inline(always)]
pub const fn mask_rank(rank: u8) -> u64 {
    RANK_1 << (8 * rank as u32)
}

#[inline(always)]
pub const fn mask_file(file: u8) -> u64 {
    FILE_A << file
}

#[inline(always)]
pub const fn mask_diag(index: usize) -> u64 {
    DIAG_MASKS[index & 15]
}

#[inline(always)]
pub const fn mask_antidiag(index: usize) -> u64 {
    ANTI_DIAG_MASKS[index & 15]
}

#[inline(always)]
pub const fn mask_cell(file: u8, rank: u8) -> u64 {
    mask_file(file) & mask_rank(rank)
}

#[inline(always)]
pub const fn clear_file(file: u8) -> u64 {
    !mask_file(file)
}

#[inline(always)]
pub const fn clear_rank(rank: u8) -> u64 {
    !mask_rank(rank)
}

/// Swaps every file with its mirror file (a<->h, b<->g, …); ranks stay put.
#[inline(always)]
pub const fn mirror(bb: u64) -> u64 {
    const K1: u64 = 0x5555_5555_5555_5555;
    const K2: u64 = 0x3333_3333_3333_3333;
    const K4: u64 = 0x0F0F_0F0F_0F0F_0F0F;
    let mut x = bb;
    x = ((x >> 1) & K1) | ((x & K1) << 1);
    x = ((x >> 2) & K2) | ((x & K2) << 2);
    ((x >> 4) & K4) | ((x & K4) << 4)
}

/// Swaps rank 1 with rank 8, rank 2 with rank 7, and so on.
#[inline(always)]
pub const fn flip_vertical(bb: u64) -> u64 {
    bb.swap_bytes()
}

#[inline(always)]
pub const fn count_bits(bb: u64) -> u32 {
    bb.count_ones()
}

/// Square index of the lowest set bit. The caller guarantees `bb != 0`.
#[inline(always)]
pub const fn cell_of_bit(bb: u64) -> u8 {
    bb.trailing_zeros() as u8
}

/// Maps a line onto itself reversed.
pub type Flip = fn(u64) -> u64;

/// Attacks along one line in both directions, stopping at the first blocker
/// each way. `flip` must map the line onto itself reversed.
///
/// Works whether or not `piece` is set in `occupancy`.
#[inline(always)]
pub fn line_attacks(occupancy: u64, piece: u64, line: u64, flip: Flip) -> u64 {
    let occ = (occupancy & line) | piece;
    let forward = occ.wrapping_sub(piece.wrapping_mul(2));
    let reverse = flip(flip(occ).wrapping_sub(flip(piece).wrapping_mul(2)));
    (forward ^ reverse) & line & !piece
}

/// The line (rank, file, diagonal or anti-diagonal) shared by two squares,
/// or `0` if they share none.
fn shared_line(a: u8, b: u8) -> (u64, Flip) {
    let (fa, ra) = (a & 7, a >> 3);
    let (fb, rb) = (b & 7, b >> 3);
    let vertical: Flip = flip_vertical;
    if ra == rb {
        (mask_rank(ra), mirror as Flip)
    } else if fa == fb {
        (mask_file(fa), vertical)
    } else if diagonal_index(fa, ra) == diagonal_index(fb, rb) {
        (mask_diag(diagonal_index(fa, ra)), vertical)
    } else if anti_diagonal_index(fa, ra) == anti_diagonal_index(fb, rb) {
        (mask_antidiag(anti_diagonal_index(fa, ra)), vertical)
    } else {
        (0, vertical)
    }
}

static BETWEEN: Lazy<Box<[[u64; 64]; 64]>> = Lazy::new(|| {
    let mut table = Box::new([[0u64; 64]; 64]);
    for a in 0..64u8 {
        for b in 0..64u8 {
            if a == b {
                continue;
            }
            let (line, flip) = shared_line(a, b);
            if line == 0 {
                continue;
            }
            let (ba, bb) = (1u64 << a, 1u64 << b);
            table[a as usize][b as usize] =
                line_attacks(bb, ba, line, flip) & line_attacks(ba, bb, line, flip);
        }
    }
    table
});

/// Squares strictly between `a` and `b` along a shared line; empty otherwise.
#[inline(always)]
pub fn mask_between(a: u8, b: u8) -> u64 {
    BETWEEN[a as usize & 63][b as usize & 63]
}

pub trait BitboardExt {
    /// Index of the least significant set bit.
    fn lsb(self) -> u8;
    /// Removes and returns the least significant set bit index.
    fn pop_lsb(&mut self) -> u8;
    fn popcount(self) -> u32;
}

impl BitboardExt for u64 {
    #[inline(always)]
    fn lsb(self) -> u8 {
        debug_assert!(self != 0, "lsb of empty bitboard");
        self.trailing_zeros() as u8
    }

    #[inline(always)]
    fn pop_lsb(&mut self) -> u8 {
        let sq = self.lsb();
        *self &= *self - 1;
        sq
    }

    #[inline(always)]
    fn popcount(self) -> u32 {
        self.count_ones()
    }
}

/// Iterates set squares least-significant first.
#[derive(Debug, Clone, Copy)]
pub struct BitIter(pub u64);

impl Iterator for BitIter {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.pop_lsb())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitIter {}
