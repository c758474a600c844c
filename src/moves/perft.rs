use crate::board::{Color, Piece, Position};
use crate::moves::movegen::generate_legal;
use crate::moves::square_control::in_check;
use crate::moves::types::Move;
use arrayvec::ArrayVec;
use tracing::{debug, instrument};

const MAX_LOG_DEPTH: u32 = 3; // only trace details for shallow nodes

/// Upper bound on legal moves in one position, promotions expanded.
///
/// Layouts come from untrusted classifiers, so this bounds any board rather
/// than reachable ones: a source square yields at most 27 destinations (a
/// central queen), and a promoting pawn at most 3 x 4 = 12 moves.
pub const MAX_MOVES: usize = 64 * 27;

type MoveList = ArrayVec<Move, MAX_MOVES>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounters {
    pub nodes: u64,
    pub captures: u64,
    pub ep_captures: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

/// Leaf count of the legal move tree of `side` to `depth` plies.
///
/// Every child is a clone dropped before its sibling is built, so at most
/// `depth` clones are alive at once.
pub fn perft(pos: &Position, side: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = MoveList::new();
    generate_legal(pos, side, &mut moves);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| perft(&pos.after(mv), side.opposite(), depth - 1))
        .sum()
}

/// Per-root-move leaf counts, in generation order.
#[instrument(skip(pos), fields(depth))]
pub fn perft_divide(pos: &Position, side: Color, depth: u32) -> Vec<(Move, u64)> {
    let mut moves = MoveList::new();
    generate_legal(pos, side, &mut moves);

    if depth <= MAX_LOG_DEPTH {
        debug!(depth, moves = moves.len(), "divide: root legal moves");
    }

    let mut out = Vec::with_capacity(moves.len());
    let mut total = 0;
    for mv in &moves {
        let count = if depth <= 1 {
            1
        } else {
            perft(&pos.after(mv), side.opposite(), depth - 1)
        };
        if depth <= MAX_LOG_DEPTH {
            debug!(%mv, nodes = count, "divide: root child total");
        }
        total += count;
        out.push((*mv, count));
    }

    debug!(depth, total, "divide: total");
    out
}

/// Classifies edges at every ply and checks / mates at the leaves.
pub fn perft_count_with_breakdown(pos: &Position, side: Color, depth: u32, out: &mut PerftCounters) {
    if depth == 0 {
        out.nodes += 1;

        let side_in_check = in_check(pos, side);
        if side_in_check {
            out.checks += 1;
            let mut replies = MoveList::new();
            generate_legal(pos, side, &mut replies);
            if replies.is_empty() {
                out.checkmates += 1;
            }
        }
        return;
    }

    let mut moves = MoveList::new();
    generate_legal(pos, side, &mut moves);

    for mv in &moves {
        tag_move(pos, mv, out);
        perft_count_with_breakdown(&pos.after(mv), side.opposite(), depth - 1, out);
    }
}

fn tag_move(pos: &Position, mv: &Move, out: &mut PerftCounters) {
    let Some(kind) = pos.kind_at(mv.from) else {
        return;
    };
    let target_empty = pos.kind_at(mv.to).is_none();

    match kind.piece() {
        Piece::Pawn if target_empty && mv.from.file() != mv.to.file() => {
            out.captures += 1;
            out.ep_captures += 1;
        }
        Piece::King if mv.from.file().abs_diff(mv.to.file()) == 2 => out.castles += 1,
        _ if !target_empty => out.captures += 1,
        _ => {}
    }
    if mv.is_promotion() {
        out.promotions += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shallow_start_counts() {
        let p = Position::new();
        assert_eq!(perft(&p, Color::White, 0), 1);
        assert_eq!(perft(&p, Color::White, 1), 20);
        assert_eq!(perft(&p, Color::White, 2), 400);
    }

    #[test]
    fn breakdown_matches_plain_count() {
        let p = Position::new();
        let mut counters = PerftCounters::default();
        perft_count_with_breakdown(&p, Color::White, 2, &mut counters);
        assert_eq!(counters.nodes, 400);
        assert_eq!(counters.captures, 0);
        assert_eq!(counters.checks, 0);
    }
}
