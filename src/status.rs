use crate::board::{Color, Piece, Position};
use crate::moves::movegen::has_legal_move;
use crate::moves::square_control::in_check;

/// Outcome of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InPlay,
    DrawDeadPosition,
    Stalemate,
    Checkmate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InPlay
    }
}

pub fn is_insufficient_material(pos: &Position) -> bool {
    // Quick reject: any pawn/rook/queen on the board => mating material exists.
    let heavy = [Piece::Pawn, Piece::Rook, Piece::Queen]
        .iter()
        .any(|&p| pos.bb(Color::White, p) | pos.bb(Color::Black, p) != 0);
    if heavy {
        return false;
    }

    // Count minor pieces
    let wb = pos.bb(Color::White, Piece::Bishop).count_ones();
    let wn = pos.bb(Color::White, Piece::Knight).count_ones();
    let bb = pos.bb(Color::Black, Piece::Bishop).count_ones();
    let bn = pos.bb(Color::Black, Piece::Knight).count_ones();

    let w_minors = wb + wn;
    let b_minors = bb + bn;

    match w_minors + b_minors {
        // K vs K, K vs KB or KN
        0 | 1 => true,
        // KNN vs K, or one minor each
        2 => wn == 2 || bn == 2 || (w_minors == 1 && b_minors == 1),
        // 3+ minors total: conservatively say "not dead".
        _ => false,
    }
}

/// Status of the position with `side` to move.
///
/// Priority: `DrawDeadPosition`, then `Checkmate` / `Stalemate` / `InPlay`.
pub fn position_status(pos: &Position, side: Color) -> GameStatus {
    if is_insufficient_material(pos) {
        return GameStatus::DrawDeadPosition;
    }

    if has_legal_move(pos, side) {
        GameStatus::InPlay
    } else if in_check(pos, side) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}
