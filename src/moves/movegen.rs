use crate::bitboard::{BitIter, BitboardExt, RANK_1, RANK_8};
use crate::board::{Color, Piece, PieceKind, Position};
use crate::moves::square_control::legal_destinations;
use crate::moves::types::{Move, MoveBuffer, PROMOTION_PIECES};
use crate::square::Square;

/// Rank a pawn of `color` promotes on.
#[inline(always)]
pub const fn promotion_rank(color: Color) -> u64 {
    match color {
        Color::White => RANK_8,
        Color::Black => RANK_1,
    }
}

/// Helper to push every move from `from` to the squares in `targets`,
/// expanding pawn moves onto the last rank into the four promotions.
#[inline(always)]
fn push_moves(kind: PieceKind, from: Square, targets: u64, move_list: &mut impl MoveBuffer) {
    let color = kind.color();
    let promoting = if kind.piece() == Piece::Pawn {
        targets & promotion_rank(color)
    } else {
        0
    };

    for to in BitIter(targets & !promoting) {
        move_list.push(Move::new(from, Square::from_index(to)));
    }
    for to in BitIter(promoting) {
        for piece in PROMOTION_PIECES {
            move_list.push(Move::with_promotion(
                from,
                Square::from_index(to),
                PieceKind::new(color, piece),
            ));
        }
    }
}

/// All legal moves of `color`, sources in ascending square order.
pub fn generate_legal(pos: &Position, color: Color, move_list: &mut impl MoveBuffer) {
    move_list.clear();
    for from in BitIter(pos.occupancy(color)) {
        let from = Square::from_index(from);
        let targets = legal_destinations(pos, from);
        if targets == 0 {
            continue;
        }
        if let Some(kind) = pos.kind_at(from) {
            push_moves(kind, from, targets, move_list);
        }
    }
}

pub fn legal_moves(pos: &Position, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    generate_legal(pos, color, &mut moves);
    moves
}

/// Whether `color` has at least one legal move.
pub fn has_legal_move(pos: &Position, color: Color) -> bool {
    BitIter(pos.occupancy(color)).any(|from| legal_destinations(pos, Square::from_index(from)) != 0)
}

impl Position {
    /// Legal destination mask of the piece on `sq`, or 0 for an empty square.
    #[inline(always)]
    pub fn legal_destinations(&self, sq: Square) -> u64 {
        legal_destinations(self, sq)
    }

    /// Steps through the legal destinations of one source square.
    ///
    /// A source different from the previous call restarts the walk; once the
    /// walk is exhausted the same source keeps returning `None` until
    /// [`Position::reset_cursor`] or a different source is queried.
    pub fn next_legal_move(&mut self, from: Square) -> Option<Move> {
        if self.cursor.source != Some(from) {
            self.cursor.source = Some(from);
            self.cursor.remaining = legal_destinations(self, from);
        }
        if self.cursor.remaining == 0 {
            return None;
        }
        let to = self.cursor.remaining.pop_lsb();
        Some(Move::new(from, Square::from_index(to)))
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = Default::default();
    }
}
