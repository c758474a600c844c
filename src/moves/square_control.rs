use crate::bitboard::{BitIter, BitboardExt, mask_between};
use crate::board::{Color, Piece, Position};
use crate::moves::attacks::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, pseudo_legal, rook_attacks,
};
use crate::moves::types::Move;
use crate::square::Square;

/// Pieces of color `by` attacking `target`, computed as if the squares in
/// `exclude` were empty. Pieces standing on `exclude` never count.
///
/// Each term places a piece of the matching role on `target` and intersects
/// its attack pattern with the attacker's pieces of that role. Pawns use the
/// pattern of a defending pawn, which mirrors the attacker's direction.
pub fn attackers_to(pos: &Position, target: Square, by: Color, exclude: u64) -> u64 {
    let occupied = pos.all() & !exclude;
    let bit = target.bit();

    let queens = pos.bb(by, Piece::Queen);
    let straight = pos.bb(by, Piece::Rook) | queens;
    let diagonal = pos.bb(by, Piece::Bishop) | queens;

    let attackers = (pawn_attacks(bit, by.opposite()) & pos.bb(by, Piece::Pawn))
        | (knight_attacks(bit) & pos.bb(by, Piece::Knight))
        | (king_attacks(bit) & pos.bb(by, Piece::King))
        | (rook_attacks(target, occupied) & straight)
        | (bishop_attacks(target, occupied) & diagonal);

    attackers & !exclude
}

#[inline(always)]
pub fn is_square_attacked(pos: &Position, sq: Square, by: Color) -> bool {
    attackers_to(pos, sq, by, 0) != 0
}

/// True when `side` has a king and it is attacked. A side without a king is
/// never in check.
#[inline(always)]
pub fn in_check(pos: &Position, side: Color) -> bool {
    pos.king_square(side)
        .is_some_and(|king| is_square_attacked(pos, king, side.opposite()))
}

/// Narrows the pseudo-legal destinations of the piece on `from` to the
/// legal ones.
///
/// The filter is deliberately approximate:
/// - a king may not step onto a square the opponent attacks once the king
///   has left its origin;
/// - any other piece whose removal uncovers a new attacker on its king is
///   treated as pinned and cannot move at all;
/// - under double check only the king moves; under single check a piece may
///   only block or capture the checker;
/// - castling checks the destination square only.
pub fn legal_destinations(pos: &Position, from: Square) -> u64 {
    let Some(kind) = pos.kind_at(from) else {
        return 0;
    };
    let color = kind.color();
    let opponent = color.opposite();
    let pseudo = pseudo_legal(pos, from);

    if kind.piece() == Piece::King {
        return BitIter(pseudo)
            .filter(|&to| attackers_to(pos, Square::from_index(to), opponent, from.bit()) == 0)
            .fold(0, |acc, to| acc | (1u64 << to));
    }

    let Some(king) = pos.king_square(color) else {
        return pseudo;
    };

    let a_priori = attackers_to(pos, king, opponent, 0);
    let a_posteriori = attackers_to(pos, king, opponent, from.bit());

    if a_posteriori & !a_priori != 0 {
        return 0;
    }

    match a_priori.popcount() {
        0 => pseudo,
        1 => pseudo & (mask_between(a_priori.lsb(), king.index()) | a_priori),
        _ => 0,
    }
}

/// Whether `mv` is among the legal moves of the piece on its source square.
#[inline(always)]
pub fn is_legal_move(pos: &Position, mv: &Move) -> bool {
    legal_destinations(pos, mv.from) & mv.to.bit() != 0
}
