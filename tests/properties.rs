use minesweeper_engine::{reveal, Board, Game, GameState, Position};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn arb_board() -> impl Strategy<Value = Board> {
    // Densities up to 89% exercise both placement strategies
    (2u32..=10, 0u32..90, any::<u64>()).prop_map(|(size, density_pct, seed)| {
        let mines_count = size * size * density_pct / 100;
        let mut rng = StdRng::seed_from_u64(seed);
        Board::with_rng(size, mines_count, &mut rng).unwrap()
    })
}

fn safe_positions(board: &Board) -> Vec<Position> {
    board
        .iter_positions()
        .filter(|pos| !board.get_cell(*pos).unwrap().is_mine)
        .collect()
}

fn mine_positions(board: &Board) -> Vec<Position> {
    board
        .iter_positions()
        .filter(|pos| board.get_cell(*pos).unwrap().is_mine)
        .collect()
}

/// Brute-force flood fill on a fresh board: the zero-adjacency component
/// reachable from `start` plus its bordering positive-count cells.
fn reference_cascade(board: &Board, start: Position) -> HashSet<Position> {
    let mut seen = HashSet::from([start]);
    let mut stack = vec![start];

    while let Some(pos) = stack.pop() {
        let cell = board.get_cell(pos).unwrap();
        if !cell.is_mine && cell.adjacent_mines == 0 {
            for neighbor in pos.neighbors().filter(|p| board.is_within_bounds(*p)) {
                if seen.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }
    }

    seen
}

proptest! {
    #[test]
    fn prop_generated_boards_satisfy_invariants(board in arb_board()) {
        let mines = mine_positions(&board);
        prop_assert_eq!(mines.len(), board.mines_count() as usize);

        for pos in board.iter_positions() {
            let cell = board.get_cell(pos).unwrap();
            prop_assert!(!cell.is_revealed);
            prop_assert!(!cell.is_flagged);
            if cell.is_mine {
                continue;
            }
            let expected = pos
                .neighbors()
                .filter(|p| board.is_within_bounds(*p))
                .filter(|p| board.get_cell(*p).unwrap().is_mine)
                .count() as u8;
            prop_assert_eq!(cell.adjacent_mines, expected);
        }
    }

    #[test]
    fn prop_cascade_reveals_exactly_the_reachable_component(
        board in arb_board(),
        idx in any::<prop::sample::Index>(),
    ) {
        let safe = safe_positions(&board);
        let target = *idx.get(&safe);

        let (after, hit_mine) = reveal(&board, target).unwrap();
        prop_assert!(!hit_mine);

        let revealed: HashSet<Position> = after
            .iter_positions()
            .filter(|pos| after.get_cell(*pos).unwrap().is_revealed)
            .collect();
        let expected = reference_cascade(&board, target);

        prop_assert_eq!(&revealed, &expected);
        for pos in &revealed {
            prop_assert!(!after.get_cell(*pos).unwrap().is_mine);
        }
    }

    #[test]
    fn prop_reveal_is_idempotent(
        board in arb_board(),
        idx in any::<prop::sample::Index>(),
    ) {
        let positions: Vec<Position> = board.iter_positions().collect();
        let target = *idx.get(&positions);

        let (once, _) = reveal(&board, target).unwrap();
        let (twice, hit_mine) = reveal(&once, target).unwrap();

        prop_assert!(!hit_mine);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_loss_reveals_every_mine_and_no_safe_cell(
        board in arb_board(),
        idx in any::<prop::sample::Index>(),
    ) {
        let mines = mine_positions(&board);
        prop_assume!(!mines.is_empty());
        let target = *idx.get(&mines);

        let (after, hit_mine) = reveal(&board, target).unwrap();

        prop_assert!(hit_mine);
        for pos in &mines {
            prop_assert!(after.get_cell(*pos).unwrap().is_revealed);
        }
        for pos in safe_positions(&board) {
            prop_assert!(!after.get_cell(pos).unwrap().is_revealed);
        }
    }

    #[test]
    fn prop_won_exactly_when_all_safe_cells_revealed(board in arb_board()) {
        let safe = safe_positions(&board);
        let mut game = Game::with_board(board);

        for pos in safe {
            game.click(pos).unwrap();
            prop_assert_eq!(
                game.state() == GameState::Won,
                game.board().is_cleared()
            );
        }

        prop_assert_eq!(game.state(), GameState::Won);
        for pos in mine_positions(game.board()) {
            prop_assert!(!game.get_cell(pos).unwrap().is_revealed);
        }
    }
}
