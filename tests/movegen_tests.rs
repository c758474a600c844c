use arrayvec::ArrayVec;
use bitmate::board::{Color, PieceKind, Position};
use bitmate::moves::attacks::pseudo_legal;
use bitmate::moves::movegen::{generate_legal, has_legal_move, legal_moves};
use bitmate::moves::types::Move;
use bitmate::square::Square;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    let (f, t) = (sq(from), sq(to));
    moves.iter().any(|m| m.from == f && m.to == t)
}

#[test]
fn start_moves_for_both_colors() {
    let p = Position::new();
    let white = legal_moves(&p, Color::White);
    assert_eq!(white.len(), 20);
    assert!(has_move(&white, "e2", "e4"));
    assert!(has_move(&white, "b1", "c3"));
    assert!(!has_move(&white, "e1", "e2"));

    let black = legal_moves(&p, Color::Black);
    assert_eq!(black.len(), 20);
    assert!(has_move(&black, "g8", "f6"));
}

#[test]
fn promotions_expand_to_four_moves() {
    let p = Position::from_diagram(
        ".r..k...
         P.......
         ........
         ........
         ........
         ........
         ........
         ....K...",
    )
    .unwrap();
    let moves = legal_moves(&p, Color::White);
    let promos: Vec<_> = moves.iter().filter(|m| m.from == sq("a7")).collect();
    // a8 push and b8 capture, four pieces each
    assert_eq!(promos.len(), 8);
    assert!(promos.iter().all(|m| m.is_promotion()));
    assert!(promos.iter().any(|m| m.to == sq("b8") && m.promotion == Some(PieceKind::WhiteKnight)));
    assert!(promos.iter().any(|m| m.to == sq("a8") && m.promotion == Some(PieceKind::WhiteQueen)));
}

#[test]
fn black_promotes_on_first_rank() {
    let p = Position::from_diagram(
        "....k...
         ........
         ........
         ........
         ........
         ........
         .......p
         K.......",
    )
    .unwrap();
    let moves = legal_moves(&p, Color::Black);
    let kinds: Vec<_> = moves
        .iter()
        .filter(|m| m.from == sq("h2"))
        .filter_map(|m| m.promotion)
        .collect();
    assert_eq!(
        kinds,
        vec![
            PieceKind::BlackQueen,
            PieceKind::BlackRook,
            PieceKind::BlackBishop,
            PieceKind::BlackKnight
        ]
    );
}

#[test]
fn arrayvec_buffer_matches_vec() {
    let p = Position::new();
    let mut fixed: ArrayVec<Move, 256> = ArrayVec::new();
    generate_legal(&p, Color::White, &mut fixed);
    assert_eq!(fixed.as_slice(), legal_moves(&p, Color::White).as_slice());
}

#[test]
fn double_step_is_lost_once_pawn_moved() {
    let mut p = Position::new();
    p.apply(&Move::new(sq("e2"), sq("e3")));
    assert_eq!(pseudo_legal(&p, sq("e3")), sq("e4").bit());
    assert_eq!(p.double_step(Color::White) & sq("e2").bit(), 0);
}

#[test]
fn blocked_pawn_cannot_double_step() {
    let p = Position::from_diagram(
        "....k...
         ........
         ........
         ........
         ........
         ....n...
         ....P...
         ....K...",
    )
    .unwrap();
    assert_eq!(pseudo_legal(&p, sq("e2")), 0);
}

#[test]
fn cursor_walks_destinations_in_square_order() {
    let mut p = Position::new();
    let e2 = sq("e2");
    let first = p.next_legal_move(e2).unwrap();
    let second = p.next_legal_move(e2).unwrap();
    assert_eq!((first.from, first.to), (e2, sq("e3")));
    assert_eq!(second.to, sq("e4"));
    assert_eq!(p.next_legal_move(e2), None);
    // still exhausted on a repeat query
    assert_eq!(p.next_legal_move(e2), None);
}

#[test]
fn cursor_resets_on_new_source() {
    let mut p = Position::new();
    while p.next_legal_move(sq("b1")).is_some() {}
    assert!(p.next_legal_move(sq("d2")).is_some());
    // switching back restarts the walk for b1
    assert_eq!(p.next_legal_move(sq("b1")).map(|m| m.to), Some(sq("a3")));
}

#[test]
fn cursor_on_empty_or_blocked_square_is_none() {
    let mut p = Position::new();
    assert_eq!(p.next_legal_move(sq("e4")), None);
    assert_eq!(p.next_legal_move(sq("a1")), None);
}

#[test]
fn mated_side_has_no_moves() {
    let p = Position::from_diagram(
        "......rk
         ........
         ........
         ........
         ........
         ........
         .....PPP
         r.....K.",
    )
    .unwrap();
    assert!(!has_legal_move(&p, Color::White));
    assert!(legal_moves(&p, Color::White).is_empty());
    assert!(has_legal_move(&p, Color::Black));
}
