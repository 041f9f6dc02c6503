//! Property tests for the game state machines and the move parser.

use proptest::prelude::*;

use puzzle_arena::{parse_move, Game, HanoiState, Move, NimState};

/// Collect every disk size on the board, sorted.
fn all_disks(state: &HanoiState) -> Vec<usize> {
    let mut disks: Vec<usize> = (0..3).flat_map(|i| state.peg(i).to_vec()).collect();
    disks.sort_unstable();
    disks
}

/// Within a peg, sizes strictly decrease from bottom to top.
fn pegs_strictly_decreasing(state: &HanoiState) -> bool {
    (0..3).all(|i| state.peg(i).windows(2).all(|w| w[0] > w[1]))
}

proptest! {
    #[test]
    fn hanoi_invariants_hold_under_arbitrary_moves(
        num_disks in 1usize..6,
        moves in prop::collection::vec((0usize..4, 0usize..4), 0..40),
    ) {
        let mut state = HanoiState::new(num_disks).unwrap();
        let expected: Vec<usize> = (1..=num_disks).collect();

        for (src, dst) in moves {
            let mv = Move(src, dst);
            let legal = state.legal_moves().contains(&mv);
            let before = state.fingerprint();
            let applied = state.apply(mv);

            // apply succeeds exactly on legal moves, and rejection is a no-op.
            prop_assert_eq!(applied, legal);
            if !applied {
                prop_assert_eq!(state.fingerprint(), before);
            }

            prop_assert_eq!(all_disks(&state), expected.clone());
            prop_assert!(pegs_strictly_decreasing(&state));
        }
    }

    #[test]
    fn hanoi_legal_moves_never_stack_larger_on_smaller(
        num_disks in 1usize..6,
        moves in prop::collection::vec((0usize..3, 0usize..3), 0..40),
    ) {
        let mut state = HanoiState::new(num_disks).unwrap();

        for (src, dst) in moves {
            for mv in state.legal_moves() {
                let moving = *state.peg(mv.0).last().unwrap();
                if let Some(&top) = state.peg(mv.1).last() {
                    prop_assert!(moving < top);
                }
            }
            state.apply(Move(src, dst));
        }
    }

    #[test]
    fn nim_apply_decrements_exactly_one_heap(
        heaps in prop::collection::vec(0usize..8, 1..5),
        heap in 0usize..6,
        count in 0usize..10,
    ) {
        let mut state = NimState::new(heaps.clone()).unwrap();
        let applied = state.apply(Move(heap, count));

        let legal = heap < heaps.len() && count >= 1 && count <= heaps[heap];
        prop_assert_eq!(applied, legal);

        if applied {
            for (i, &before) in heaps.iter().enumerate() {
                let after = state.heaps()[i];
                if i == heap {
                    prop_assert_eq!(after, before - count);
                } else {
                    prop_assert_eq!(after, before);
                }
            }
        } else {
            prop_assert_eq!(state.heaps(), heaps.as_slice());
        }
    }

    #[test]
    fn nim_double_rejection_is_byte_identical(
        heaps in prop::collection::vec(0usize..5, 1..4),
        heap in 0usize..6,
        count in 6usize..12,
    ) {
        // Counts above every heap bound are always rejected.
        let mut state = NimState::new(heaps).unwrap();
        let before = state.fingerprint();

        prop_assert!(!state.apply(Move(heap, count)));
        prop_assert_eq!(state.fingerprint(), before.clone());
        prop_assert!(!state.apply(Move(heap, count)));
        prop_assert_eq!(state.fingerprint(), before);
    }

    #[test]
    fn parser_never_panics(text in "\\PC*") {
        let _ = parse_move(&text);
    }

    #[test]
    fn parser_finds_embedded_pair(a in 0usize..100, b in 0usize..100, prefix in "[a-zA-Z .!]*") {
        let text = format!("{}({}, {})", prefix, a, b);
        prop_assert_eq!(parse_move(&text), Ok(Move(a, b)));
    }
}
