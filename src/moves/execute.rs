use crate::board::castle_bits::*;
use crate::board::{MoveCursor, Piece, PieceKind, Position};
use crate::moves::movegen::promotion_rank;
use crate::moves::types::Move;
use crate::square::Square;
use tracing::{trace, warn};

/// Applies `mv` to `pos` in place.
///
/// Legality is the caller's precondition: the move is not re-validated, and
/// applying an illegal move leaves the position in an unspecified (though
/// internally consistent) state. A move from an empty square is ignored.
pub fn apply_move(pos: &mut Position, mv: &Move) {
    let Some(kind) = pos.kind_at(mv.from) else {
        warn!(%mv, "no piece on source square; move ignored");
        return;
    };
    let color = kind.color();
    let ci = color as usize;
    let from_idx = mv.from.index();
    let to_idx = mv.to.index();

    pos.en_passant = 0;
    pos.cursor = MoveCursor::default();

    pos.remove(mv.from);

    // Capture
    let captured = pos.remove(mv.to);
    if let Some(victim) = captured {
        if victim.piece() == Piece::Rook {
            let right = right_for_rook_home(victim.color(), to_idx);
            pos.castling[victim.color() as usize] &= !right;
        }
    }

    let placed = match (kind.piece(), mv.promotion) {
        (Piece::Pawn, Some(promoted)) => promoted,
        (Piece::Pawn, None) if mv.to.bit() & promotion_rank(color) != 0 => {
            PieceKind::new(color, Piece::Queen)
        }
        _ => kind,
    };
    pos.put(placed, mv.to);

    match kind.piece() {
        Piece::Pawn => {
            pos.double_step[ci] &= !mv.from.bit();

            if from_idx.abs_diff(to_idx) == 16 {
                pos.en_passant = 1u64 << ((from_idx + to_idx) / 2);
            } else if mv.from.file() != mv.to.file() && captured.is_none() {
                // En passant: the victim sits beside the source, behind the destination.
                let victim_sq = Square::from_coords(mv.to.file(), mv.from.rank());
                if pos.kind_at(victim_sq) == Some(PieceKind::new(color.opposite(), Piece::Pawn)) {
                    pos.remove(victim_sq);
                    trace!(%mv, victim = %victim_sq, "en passant capture");
                }
            }
        }
        Piece::King => {
            let castles = pos.castling[ci] & mv.to.bit() != 0 && from_idx == king_home(color);
            if castles {
                if let Some((rook_from, rook_to)) = rook_castle_squares(to_idx) {
                    let (rook_from, rook_to) = (Square::from_index(rook_from), Square::from_index(rook_to));
                    if let Some(rook) = pos.remove(rook_from) {
                        pos.put(rook, rook_to);
                        trace!(%mv, rook_from = %rook_from, rook_to = %rook_to, "castle rook relocated");
                    }
                }
            }
            pos.castling[ci] = 0;
        }
        Piece::Rook => {
            pos.castling[ci] &= !right_for_rook_home(color, from_idx);
        }
        _ => {}
    }

    debug_assert!(pos.validate().is_ok(), "invalid position after {mv}");
}

impl Position {
    /// Applies `mv` in place. See [`apply_move`].
    #[inline(always)]
    pub fn apply(&mut self, mv: &Move) {
        apply_move(self, mv);
    }

    /// An independent copy with `mv` applied; `self` is untouched.
    pub fn after(&self, mv: &Move) -> Position {
        let mut child = self.clone();
        apply_move(&mut child, mv);
        child
    }
}
