//! Property tests for the move algorithm and terminal detection.

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use slide2048::{Board, Direction};

fn board_from_flat(size: usize, values: &[u32]) -> Board {
    let rows: Vec<Vec<u32>> = values.chunks(size).map(|row| row.to_vec()).collect();
    Board::from_rows(&rows).expect("generated layouts are valid")
}

fn grid(board: &Board) -> Vec<Vec<u32>> {
    board
        .rows()
        .map(|row| row.iter().map(|tile| tile.value()).collect())
        .collect()
}

fn mirrored(rows: &[Vec<u32>]) -> Vec<Vec<u32>> {
    rows.iter()
        .map(|row| row.iter().rev().copied().collect())
        .collect()
}

fn transposed(rows: &[Vec<u32>]) -> Vec<Vec<u32>> {
    let size = rows.len();
    (0..size)
        .map(|col| (0..size).map(|row| rows[row][col]).collect())
        .collect()
}

fn any_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::all().to_vec())
}

/// Square boards of size 2 to 5 with a mix of empty cells and small tiles.
fn any_board() -> impl Strategy<Value = Board> {
    (2usize..=5).prop_flat_map(|size| {
        prop::collection::vec(prop::sample::select(vec![0u32, 0, 2, 4, 8, 16]), size * size)
            .prop_map(move |values| board_from_flat(size, &values))
    })
}

/// Completely filled boards, where terminal detection is interesting.
fn full_board() -> impl Strategy<Value = Board> {
    (2usize..=5).prop_flat_map(|size| {
        prop::collection::vec(prop::sample::select(vec![2u32, 4, 8, 16, 32]), size * size)
            .prop_map(move |values| board_from_flat(size, &values))
    })
}

proptest! {
    #[test]
    fn slide_conserves_tile_sum(board in any_board(), direction in any_direction()) {
        let outcome = board.slide(direction);
        prop_assert_eq!(outcome.board.tile_sum(), board.tile_sum());
        prop_assert_eq!(outcome.board.score(), board.score() + outcome.score_gained);
    }

    #[test]
    fn effective_move_adds_exactly_one_spawn(
        board in any_board(),
        direction in any_direction(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let slid = board.slide(direction);
        let next = board.make_move(direction, &mut rng);

        if slid.changed {
            let spawned = next.tile_sum() - board.tile_sum();
            prop_assert!(spawned == 2 || spawned == 4);
            let filled_before = slid.board.all_tiles().iter().filter(|t| !t.is_empty()).count();
            let filled_after = next.all_tiles().iter().filter(|t| !t.is_empty()).count();
            prop_assert_eq!(filled_after, filled_before + 1);
            prop_assert!(next.all_tiles().iter().all(|t| !t.is_merged()));
        } else {
            prop_assert_eq!(&next, &board);
        }
        prop_assert!(next.score() >= board.score());
    }

    #[test]
    fn blocked_move_is_idempotent(
        board in any_board(),
        direction in any_direction(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let once = board.make_move(direction, &mut rng);
        if once == board {
            let twice = once.make_move(direction, &mut rng);
            prop_assert_eq!(twice, board);
        }
    }

    #[test]
    fn right_mirrors_left(board in any_board()) {
        let rows = grid(&board);
        let mirror = Board::from_rows(&mirrored(&rows)).unwrap();

        let left = board.slide(Direction::Left);
        let right = mirror.slide(Direction::Right);

        prop_assert_eq!(mirrored(&grid(&right.board)), grid(&left.board));
        prop_assert_eq!(right.score_gained, left.score_gained);
        prop_assert_eq!(right.changed, left.changed);
    }

    #[test]
    fn up_matches_left_on_transposed_board(board in any_board()) {
        let rows = grid(&board);
        let transpose = Board::from_rows(&transposed(&rows)).unwrap();

        let left = board.slide(Direction::Left);
        let up = transpose.slide(Direction::Up);
        prop_assert_eq!(transposed(&grid(&up.board)), grid(&left.board));
        prop_assert_eq!(up.score_gained, left.score_gained);

        let right = board.slide(Direction::Right);
        let down = transpose.slide(Direction::Down);
        prop_assert_eq!(transposed(&grid(&down.board)), grid(&right.board));
    }

    #[test]
    fn terminal_detection_matches_exhaustive_search(board in full_board()) {
        let stuck = Direction::all().iter().all(|&d| !board.slide(d).changed);
        prop_assert_eq!(board.is_terminal_state(), stuck);
        prop_assert_eq!(board.is_game_over(), stuck);
    }

    #[test]
    fn boards_with_gaps_are_never_terminal(board in any_board()) {
        prop_assume!(board.tile_sum() > 0);
        let stuck = Direction::all().iter().all(|&d| !board.slide(d).changed);
        prop_assert_eq!(board.is_terminal_state(), stuck);
        if !board.empty_positions().is_empty() {
            prop_assert!(!stuck);
        }
    }

    #[test]
    fn won_is_sticky(
        board in any_board(),
        moves in prop::collection::vec(any_direction(), 1..30),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut current = board.with_win_value(16);
        let mut seen_win = current.is_won();
        for direction in moves {
            current = current.make_move(direction, &mut rng);
            if seen_win {
                prop_assert!(current.is_won());
            }
            seen_win |= current.is_won();
        }
    }
}

#[test]
fn three_equal_tiles_merge_first_pair_only() {
    let board = Board::from_rows(&[
        vec![2, 2, 2, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ])
    .unwrap();
    let slid = board.slide(Direction::Left);
    assert_eq!(grid(&slid.board)[0], vec![4, 2, 0, 0]);
}
