#[cfg(test)]
mod tests {
    use bitmate::board::{Color, Position};
    use bitmate::logger::init_logging;
    use bitmate::moves::perft::{PerftCounters, perft, perft_count_with_breakdown, perft_divide};

    fn run_startpos_depth(depth: u32, expected_nodes: u64) -> (u64, std::time::Duration) {
        use std::time::Instant;
        let board = Position::new();

        let start = Instant::now();
        let nodes = perft(&board, Color::White, depth);
        let elapsed = start.elapsed();

        assert_eq!(
            nodes, expected_nodes,
            "perft({depth}) from start: expected {expected_nodes}, got {nodes}"
        );
        (nodes, elapsed)
    }

    #[test]
    fn perft_startpos_depths() {
        run_startpos_depth(1, 20);
        run_startpos_depth(2, 400);
        let (_, elapsed) = run_startpos_depth(3, 8_902);
        println!("perft(3) took {:?}", elapsed);
    }

    #[test]
    fn perft_is_color_symmetric() {
        let board = Position::new();
        for depth in 1..=3 {
            assert_eq!(
                perft(&board, Color::White, depth),
                perft(&board, Color::Black, depth)
            );
        }
    }

    #[test]
    fn divide_sums_to_total() {
        init_logging("logs/perft.log", "bitmate::moves::perft=debug").expect("log file");

        let board = Position::new();
        let split = perft_divide(&board, Color::White, 2);
        assert_eq!(split.len(), 20);
        assert!(split.iter().all(|(_, n)| *n == 20));
        assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 400);
    }

    #[test]
    fn breakdown_counts_first_captures_at_three_plies() {
        let board = Position::new();
        let mut counters = PerftCounters::default();
        perft_count_with_breakdown(&board, Color::White, 3, &mut counters);
        assert_eq!(counters.nodes, 8_902);
        assert_eq!(counters.captures, 34);
        assert_eq!(counters.checks, 12);
        assert_eq!(counters.castles, 0);
        assert_eq!(counters.checkmates, 0);
    }

    #[test]
    fn promotion_position_counts_each_piece() {
        let board = Position::from_diagram(
            "....k...
             P.......
             ........
             ........
             ........
             ........
             ........
             ....K...",
        )
        .unwrap();
        // four promotions plus five king steps
        assert_eq!(perft(&board, Color::White, 1), 9);
    }

    #[test]
    fn crowded_board_counts_every_queen_move() {
        let board = Position::from_diagram(
            "kQ...QQQQ..QQ..QQ.Q....QQ......QQ......QQ......QQ......QBQQQQQQK",
        )
        .unwrap();
        assert_eq!(perft(&board, Color::White, 1), 272);
        let split = perft_divide(&board, Color::White, 1);
        assert_eq!(split.len(), 272);
    }
}
