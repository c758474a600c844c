use crate::bitboard::{BitIter, CENTER};
use crate::board::{Color, Piece, Position};
use crate::moves::attacks::mobility;
use crate::moves::square_control::attackers_to;
use crate::square::Square;

pub const PAWN_VAL: i32 = 100;
pub const KNIGHT_VAL: i32 = 320;
pub const BISHOP_VAL: i32 = 330;
pub const ROOK_VAL: i32 = 500;
pub const QUEEN_VAL: i32 = 900;
// Large enough to dwarf every other term; losing the king decides the game.
pub const KING_VAL: i32 = 1_000_000;

const PIECE_COUNT_WEIGHT: i32 = 10;
const CENTER_OCCUPATION_WEIGHT: i32 = 20;
const CENTER_ATTACK_WEIGHT: i32 = 10;
const MOBILITY_WEIGHT: i32 = 2;

#[inline(always)]
pub const fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => PAWN_VAL,
        Piece::Knight => KNIGHT_VAL,
        Piece::Bishop => BISHOP_VAL,
        Piece::Rook => ROOK_VAL,
        Piece::Queen => QUEEN_VAL,
        Piece::King => KING_VAL,
    }
}

fn material(pos: &Position, color: Color) -> i32 {
    Piece::ALL
        .iter()
        .map(|&piece| piece_value(piece) * pos.bb(color, piece).count_ones() as i32)
        .sum()
}

/// Attacks by `color` on d4, e4, d5 and e5, one per attacker per square.
fn center_attacks(pos: &Position, color: Color) -> i32 {
    BitIter(CENTER)
        .map(|sq| attackers_to(pos, Square::from_index(sq), color, 0).count_ones() as i32)
        .sum()
}

/// Material balance from `side`'s point of view; the dominant term of [`evaluate`].
pub fn eval_material(pos: &Position, side: Color) -> i32 {
    material(pos, side) - material(pos, side.opposite())
}

/// Static evaluation from `side`'s point of view. Antisymmetric:
/// `evaluate(p, c) == -evaluate(p, !c)`.
pub fn evaluate(pos: &Position, side: Color) -> i32 {
    let opp = side.opposite();

    let pieces = pos.piece_count(side) as i32 - pos.piece_count(opp) as i32;
    let center = pos.center_occupation(side) as i32 - pos.center_occupation(opp) as i32;
    let center_hits = center_attacks(pos, side) - center_attacks(pos, opp);
    let moves = mobility(pos, side) as i32 - mobility(pos, opp) as i32;

    eval_material(pos, side)
        + PIECE_COUNT_WEIGHT * pieces
        + CENTER_OCCUPATION_WEIGHT * center
        + CENTER_ATTACK_WEIGHT * center_hits
        + MOBILITY_WEIGHT * moves
}
