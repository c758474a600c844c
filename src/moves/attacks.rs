// src/moves/attacks.rs
// Pseudo-legal destination masks per piece kind. Check safety is left to
// `square_control`.

use crate::bitboard::{
    BitIter, FILE_A, FILE_B, FILE_G, FILE_H, RANK_3, RANK_6, anti_diagonal_index, diagonal_index,
    flip_vertical, line_attacks, mask_antidiag, mask_between, mask_diag, mask_file, mask_rank,
    mirror,
};
use crate::board::{Color, Piece, Position, king_home, rook_home_for_right};
use crate::square::Square;

#[inline(always)]
pub const fn knight_attacks(bit: u64) -> u64 {
    ((bit & !FILE_H) << 17)
        | ((bit & !FILE_A) << 15)
        | ((bit & !(FILE_G | FILE_H)) << 10)
        | ((bit & !(FILE_A | FILE_B)) << 6)
        | ((bit & !FILE_A) >> 17)
        | ((bit & !FILE_H) >> 15)
        | ((bit & !(FILE_A | FILE_B)) >> 10)
        | ((bit & !(FILE_G | FILE_H)) >> 6)
}

/// One-step king moves, castling excluded.
#[inline(always)]
pub const fn king_attacks(bit: u64) -> u64 {
    let clip_a = bit & !FILE_A;
    let clip_h = bit & !FILE_H;
    (clip_a << 7)
        | (bit << 8)
        | (clip_h << 9)
        | (clip_h << 1)
        | (clip_h >> 7)
        | (bit >> 8)
        | (clip_a >> 9)
        | (clip_a >> 1)
}

/// Diagonal capture pattern of a pawn of `color` standing on `bit`.
#[inline(always)]
pub const fn pawn_attacks(bit: u64, color: Color) -> u64 {
    match color {
        Color::White => ((bit & !FILE_A) << 7) | ((bit & !FILE_H) << 9),
        Color::Black => ((bit & !FILE_H) >> 7) | ((bit & !FILE_A) >> 9),
    }
}

#[inline(always)]
fn push(bit: u64, color: Color) -> u64 {
    match color {
        Color::White => bit << 8,
        Color::Black => bit >> 8,
    }
}

#[inline(always)]
pub fn rook_attacks(sq: Square, occupancy: u64) -> u64 {
    let bit = sq.bit();
    line_attacks(occupancy, bit, mask_rank(sq.rank()), mirror)
        | line_attacks(occupancy, bit, mask_file(sq.file()), flip_vertical)
}

#[inline(always)]
pub fn bishop_attacks(sq: Square, occupancy: u64) -> u64 {
    let bit = sq.bit();
    let diag = mask_diag(diagonal_index(sq.file(), sq.rank()));
    let anti = mask_antidiag(anti_diagonal_index(sq.file(), sq.rank()));
    line_attacks(occupancy, bit, diag, flip_vertical)
        | line_attacks(occupancy, bit, anti, flip_vertical)
}

#[inline(always)]
pub fn queen_attacks(sq: Square, occupancy: u64) -> u64 {
    rook_attacks(sq, occupancy) | bishop_attacks(sq, occupancy)
}

/// Castle destinations whose right is held and whose king-rook path is empty.
fn castle_targets(pos: &Position, color: Color) -> u64 {
    let occupied = pos.all();
    let home = king_home(color);
    let mut targets = 0;
    let mut rights = pos.castling_rights(color);
    while rights != 0 {
        let right = rights & rights.wrapping_neg();
        rights ^= right;
        if let Some(rook_home) = rook_home_for_right(right) {
            if mask_between(home, rook_home) & occupied == 0 {
                targets |= right;
            }
        }
    }
    targets
}

fn pawn_targets(pos: &Position, sq: Square, color: Color) -> u64 {
    let bit = sq.bit();
    let empty = !pos.all();

    let single = push(bit, color) & empty;
    let double = if bit & pos.double_step(color) != 0 {
        push(single, color) & empty
    } else {
        0
    };

    // En passant lands on the third rank from the enemy side only.
    let ep_rank = match color {
        Color::White => RANK_6,
        Color::Black => RANK_3,
    };
    let capturable = pos.occupancy(color.opposite()) | (pos.en_passant() & ep_rank);

    single | double | (pawn_attacks(bit, color) & capturable)
}

/// Destinations the piece on `sq` could reach ignoring king safety, own
/// pieces removed. Empty square gives 0.
pub fn pseudo_legal(pos: &Position, sq: Square) -> u64 {
    let Some(kind) = pos.kind_at(sq) else {
        return 0;
    };
    let color = kind.color();
    let occupied = pos.all();

    let targets = match kind.piece() {
        Piece::Pawn => pawn_targets(pos, sq, color),
        Piece::Knight => knight_attacks(sq.bit()),
        Piece::Bishop => bishop_attacks(sq, occupied),
        Piece::Rook => rook_attacks(sq, occupied),
        Piece::Queen => queen_attacks(sq, occupied),
        Piece::King => {
            let castles = if sq.index() == king_home(color) {
                castle_targets(pos, color)
            } else {
                0
            };
            king_attacks(sq.bit()) | castles
        }
    };

    targets & !pos.occupancy(color)
}

/// Count of pseudo-legal destinations summed over every piece of `color`.
pub fn mobility(pos: &Position, color: Color) -> u32 {
    BitIter(pos.occupancy(color))
        .map(|sq| pseudo_legal(pos, Square::from_index(sq)).count_ones())
        .sum()
}
