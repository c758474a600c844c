// src/board/castle_bits.rs

use super::Color;

/// Castling rights are stored per color as the mask of king destinations
/// still available (g-file = kingside, c-file = queenside).
pub type CastleMask = u64;

pub const WHITE_KINGSIDE: CastleMask = 1 << 6; // g1
pub const WHITE_QUEENSIDE: CastleMask = 1 << 2; // c1
pub const BLACK_KINGSIDE: CastleMask = 1 << 62; // g8
pub const BLACK_QUEENSIDE: CastleMask = 1 << 58; // c8

pub const WHITE_KING_HOME: u8 = 4; // e1
pub const BLACK_KING_HOME: u8 = 60; // e8

#[inline(always)]
pub const fn king_home(color: Color) -> u8 {
    match color {
        Color::White => WHITE_KING_HOME,
        Color::Black => BLACK_KING_HOME,
    }
}

/// Both castle destinations for a color.
#[inline(always)]
pub const fn all_rights(color: Color) -> CastleMask {
    match color {
        Color::White => WHITE_KINGSIDE | WHITE_QUEENSIDE,
        Color::Black => BLACK_KINGSIDE | BLACK_QUEENSIDE,
    }
}

/// Rook (from, to) squares for a castling king landing on `king_to`.
#[inline(always)]
pub const fn rook_castle_squares(king_to: u8) -> Option<(u8, u8)> {
    match king_to {
        6 => Some((7, 5)),    // White O-O
        2 => Some((0, 3)),    // White O-O-O
        62 => Some((63, 61)), // Black O-O
        58 => Some((56, 59)), // Black O-O-O
        _ => None,
    }
}

/// The right tied to a rook standing on its home square, or 0.
#[inline(always)]
pub const fn right_for_rook_home(color: Color, rook_sq: u8) -> CastleMask {
    match (color, rook_sq) {
        (Color::White, 0) => WHITE_QUEENSIDE,  // a1
        (Color::White, 7) => WHITE_KINGSIDE,   // h1
        (Color::Black, 56) => BLACK_QUEENSIDE, // a8
        (Color::Black, 63) => BLACK_KINGSIDE,  // h8
        _ => 0,
    }
}

/// Home square of the rook that goes with a castle destination.
#[inline(always)]
pub const fn rook_home_for_right(right: CastleMask) -> Option<u8> {
    match right {
        WHITE_KINGSIDE => Some(7),
        WHITE_QUEENSIDE => Some(0),
        BLACK_KINGSIDE => Some(63),
        BLACK_QUEENSIDE => Some(56),
        _ => None,
    }
}
