use crate::board::{Color, Position};
use crate::moves::movegen::generate_legal;
use crate::moves::perft::MAX_MOVES;
use crate::moves::square_control::in_check;
use crate::moves::types::Move;
use crate::search::config::{SearchConfig, TieBreak};
use crate::search::eval::evaluate;
use crate::square::Square;
use arrayvec::ArrayVec;
use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};
use tracing::{debug, instrument, trace};

/// Score of a side that has been mated; also the search window bound.
pub const SCORE_INFINITE: i32 = 99_999_999;
const STALEMATE_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best: Move,
    pub nodes: u64,
}

/// Score of `mv`, played by `side`, seen from `side`'s point of view.
///
/// Fail-hard alpha-beta: the result is clamped to `[alpha, beta]`, so callers
/// must pass `alpha <= beta`. Each call owns exactly one child clone, dropped
/// on return.
pub fn negamax(
    pos: &Position,
    mv: &Move,
    depth: u32,
    side: Color,
    alpha: i32,
    beta: i32,
    nodes: &mut u64,
) -> i32 {
    debug_assert!(alpha <= beta, "empty window: alpha {alpha} > beta {beta}");
    *nodes += 1;
    let child = pos.after(mv);

    if depth == 0 {
        return evaluate(&child, side).clamp(alpha, beta);
    }

    let opponent = side.opposite();
    let mut replies = ArrayVec::<Move, MAX_MOVES>::new();
    generate_legal(&child, opponent, &mut replies);

    if replies.is_empty() {
        let score = if in_check(&child, opponent) {
            SCORE_INFINITE
        } else {
            STALEMATE_SCORE
        };
        trace!(%mv, depth, score, "terminal node");
        return score.clamp(alpha, beta);
    }

    // Window from the opponent's side
    let (mut a, b) = (-beta, -alpha);
    for reply in &replies {
        let score = negamax(&child, reply, depth - 1, opponent, a, b, nodes);
        if score > a {
            a = score;
        }
        if a >= b {
            trace!(%mv, %reply, depth, "cutoff");
            break;
        }
    }
    -a
}

pub struct Searcher {
    config: SearchConfig,
    rng: StdRng,
}

fn make_tie_break_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => {
            let mut seed = [0u8; 32];
            rand::rng().fill_bytes(&mut seed);
            StdRng::from_seed(seed)
        }
    }
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            rng: make_tie_break_rng(config.seed),
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn search(&mut self, pos: &Position, side: Color) -> SearchResult {
        self.search_with(pos, side, |_| {})
    }

    /// Scores every legal root move of `side` with a full window and keeps the
    /// strictly best one, calling `on_best` each time the best move changes.
    ///
    /// With no legal move the result carries `-SCORE_INFINITE` and a move
    /// from the king's square to itself flagged `checkmate`; stalemate is not
    /// told apart here (see `status::position_status`).
    #[instrument(skip(self, pos, on_best), fields(depth = self.config.depth, side = ?side))]
    pub fn search_with<F>(&mut self, pos: &Position, side: Color, mut on_best: F) -> SearchResult
    where
        F: FnMut(&Move),
    {
        let mut moves = ArrayVec::<Move, MAX_MOVES>::new();
        generate_legal(pos, side, &mut moves);

        let mut nodes = 0;
        let mut best: Option<(Move, i32)> = None;

        for mv in &moves {
            let score = negamax(
                pos,
                mv,
                self.config.depth,
                side,
                -SCORE_INFINITE,
                SCORE_INFINITE,
                &mut nodes,
            );
            debug!(%mv, score, "root move scored");

            let take = match best {
                None => true,
                Some((_, top)) if score > top => true,
                Some((_, top)) if score == top => {
                    self.config.tie_break == TieBreak::Random && self.rng.random_bool(0.5)
                }
                _ => false,
            };
            if take {
                debug!(%mv, score, "new best move");
                best = Some((*mv, score));
                on_best(mv);
            }
        }

        match best {
            Some((best, score)) => SearchResult { score, best, nodes },
            None => {
                let king = pos.king_square(side).unwrap_or(Square::A1);
                debug!(side = ?side, "no legal move");
                SearchResult {
                    score: -SCORE_INFINITE,
                    best: Move {
                        checkmate: true,
                        ..Move::new(king, king)
                    },
                    nodes,
                }
            }
        }
    }
}

/// One-shot search with a fresh [`Searcher`].
pub fn best_move(pos: &Position, side: Color, config: SearchConfig) -> SearchResult {
    Searcher::new(config).search(pos, side)
}
