//! Search wiring tests: depth-0 behavior, mate detection, terminal reporting,
//! tie-break configuration and color symmetry.
use bitmate::board::{Color, Position};
use bitmate::moves::movegen::legal_moves;
use bitmate::moves::square_control::in_check;
use bitmate::moves::types::Move;
use bitmate::search::eval::{KING_VAL, QUEEN_VAL, evaluate};
use bitmate::search::search::{SCORE_INFINITE, Searcher, best_move, negamax};
use bitmate::search::{SearchConfig, TieBreak};
use bitmate::square::Square;

fn board(diagram: &str) -> Position {
    Position::from_diagram(diagram).expect("valid diagram")
}

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Plain negamax without a window, scoring terminal children the same way.
fn minimax(pos: &Position, mv: &Move, depth: u32, side: Color, nodes: &mut u64) -> i32 {
    *nodes += 1;
    let child = pos.after(mv);
    if depth == 0 {
        return evaluate(&child, side);
    }
    let opponent = side.opposite();
    let replies = legal_moves(&child, opponent);
    if replies.is_empty() {
        return if in_check(&child, opponent) { SCORE_INFINITE } else { 0 };
    }
    let best = replies
        .iter()
        .map(|reply| minimax(&child, reply, depth - 1, opponent, nodes))
        .max()
        .unwrap();
    -best
}

const MIDDLEGAME: &str = "
    r...k...
    ppp..ppp
    ..n.....
    ...qp...
    ...P....
    ..N..N..
    PPP..PPP
    R..QK..R";

const CROWDED: &str = "kQ...QQQQ..QQ..QQ.Q....QQ......QQ......QQ......QQ......QBQQQQQQK";

const BACK_RANK: &str = "
    ......k.
    .....ppp
    ........
    ........
    ........
    ........
    ........
    R.....K.";

#[test]
fn depth0_equals_static_eval_of_child() {
    let p = Position::new();
    let mut nodes = 0;
    for mv in legal_moves(&p, Color::White) {
        let score = negamax(&p, &mv, 0, Color::White, -SCORE_INFINITE, SCORE_INFINITE, &mut nodes);
        assert_eq!(score, evaluate(&p.after(&mv), Color::White));
    }
    assert_eq!(nodes, 20);
}

#[test]
fn free_queen_is_taken_at_depth0() {
    let p = board(
        "k.......
         ........
         ........
         ...q....
         ........
         ........
         .......K
         ...Q....",
    );
    let result = best_move(&p, Color::White, SearchConfig::deterministic(0));
    assert_eq!((result.best.from, result.best.to), (sq("d1"), sq("d5")));
    assert!(result.score > QUEEN_VAL);
}

#[test]
fn finds_back_rank_mate() {
    let p = board(BACK_RANK);
    let result = best_move(&p, Color::White, SearchConfig::deterministic(1));
    assert_eq!((result.best.from, result.best.to), (sq("a1"), sq("a8")));
    assert_eq!(result.score, SCORE_INFINITE);
    assert!(!result.best.checkmate);
}

#[test]
fn mated_side_reports_flagged_king_move() {
    let p = board(
        "......rk
         ........
         ........
         ........
         ........
         ........
         .....PPP
         r.....K.",
    );
    let result = best_move(&p, Color::White, SearchConfig::default());
    assert_eq!(result.score, -SCORE_INFINITE);
    assert!(result.best.checkmate);
    assert_eq!(result.best.from, sq("g1"));
    assert_eq!(result.best.to, sq("g1"));
}

#[test]
fn stalemate_is_reported_the_same_way() {
    let p = board(
        ".......k
         .....Q..
         ......K.
         ........
         ........
         ........
         ........
         ........",
    );
    let result = best_move(&p, Color::Black, SearchConfig::default());
    assert!(result.best.checkmate);
    assert_eq!(result.best.from, sq("h8"));
    assert_eq!(result.score, -SCORE_INFINITE);
}

#[test]
fn stalemating_reply_scores_as_draw() {
    // Qf7 stalemates; it must not score as a mate.
    let p = board(
        ".......k
         ........
         ......K.
         .....Q..
         ........
         ........
         ........
         ........",
    );
    let stalemate = Move::new(sq("f5"), sq("f7"));
    let mut nodes = 0;
    let score = negamax(&p, &stalemate, 1, Color::White, -SCORE_INFINITE, SCORE_INFINITE, &mut nodes);
    assert_eq!(score, 0);
}

#[test]
fn callback_sees_every_new_best() {
    let p = board(BACK_RANK);
    let mut seen: Vec<Move> = Vec::new();
    let mut searcher = Searcher::new(SearchConfig::deterministic(1));
    let result = searcher.search_with(&p, Color::White, |mv| seen.push(*mv));

    assert!(!seen.is_empty());
    assert_eq!(seen.last().copied(), Some(result.best));
}

#[test]
fn seeded_random_ties_are_reproducible() {
    let p = Position::new();
    let config = SearchConfig {
        depth: 0,
        tie_break: TieBreak::Random,
        seed: Some(42),
    };
    let a = Searcher::new(config).search(&p, Color::White);
    let b = Searcher::new(config).search(&p, Color::White);
    assert_eq!(a, b);
}

#[test]
fn first_found_keeps_earliest_of_equal_moves() {
    let p = Position::new();
    let mut nodes = 0;
    let scored: Vec<(Move, i32)> = legal_moves(&p, Color::White)
        .into_iter()
        .map(|mv| {
            let s = negamax(&p, &mv, 0, Color::White, -SCORE_INFINITE, SCORE_INFINITE, &mut nodes);
            (mv, s)
        })
        .collect();
    let top = scored.iter().map(|(_, s)| *s).max().unwrap();
    let earliest = scored.iter().find(|(_, s)| *s == top).unwrap().0;

    let result = best_move(&p, Color::White, SearchConfig::deterministic(0));
    assert_eq!(result.best, earliest);
    assert_eq!(result.score, top);
}

#[test]
fn default_search_from_start_returns_a_legal_move() {
    let p = Position::new();
    let result = best_move(&p, Color::White, SearchConfig::default());
    assert!(legal_moves(&p, Color::White).contains(&result.best));
    assert!(result.score.abs() < KING_VAL);
    assert!(result.nodes > 20);
}

#[test]
fn negamax_is_color_symmetric() {
    let p = board(MIDDLEGAME);
    let flipped = p.color_flipped();

    for mv in legal_moves(&p, Color::White) {
        let mirrored = Move {
            from: mv.from.flip_rank(),
            to: mv.to.flip_rank(),
            promotion: mv.promotion.map(|k| k.flip_color()),
            checkmate: false,
        };
        let (mut n1, mut n2) = (0, 0);
        let s1 = negamax(&p, &mv, 1, Color::White, -SCORE_INFINITE, SCORE_INFINITE, &mut n1);
        let s2 = negamax(&flipped, &mirrored, 1, Color::Black, -SCORE_INFINITE, SCORE_INFINITE, &mut n2);
        assert_eq!(s1, s2, "{mv} vs {mirrored}");
    }
}

#[test]
fn pruning_keeps_minimax_scores_and_visits_fewer_nodes() {
    let p = board(MIDDLEGAME);
    let (mut pruned_nodes, mut full_nodes) = (0, 0);

    for mv in legal_moves(&p, Color::White) {
        let pruned = negamax(&p, &mv, 2, Color::White, -SCORE_INFINITE, SCORE_INFINITE, &mut pruned_nodes);
        let full = minimax(&p, &mv, 2, Color::White, &mut full_nodes);
        assert_eq!(pruned, full, "{mv}");
    }
    assert!(
        pruned_nodes < full_nodes,
        "alpha-beta visited {pruned_nodes} nodes, full tree {full_nodes}"
    );
}

#[test]
fn crowded_board_fits_the_move_list() {
    let p = board(CROWDED);
    let moves = legal_moves(&p, Color::White);
    assert!(moves.len() > 256);

    let result = best_move(&p, Color::White, SearchConfig::deterministic(0));
    assert!(moves.contains(&result.best));
    assert_eq!(result.nodes, moves.len() as u64);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "empty window")]
fn inverted_window_is_rejected() {
    let p = Position::new();
    let mut nodes = 0;
    negamax(&p, &Move::new(sq("e2"), sq("e4")), 0, Color::White, 10, -10, &mut nodes);
}
