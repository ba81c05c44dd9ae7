use crate::{reveal, Board, Position};
use rand::prelude::*;
use std::collections::HashSet;

/// Configuration for test board generation
#[derive(Debug, Clone)]
pub struct TestBoardConfig {
    pub size: u32,
    pub mine_density: f64,
}

impl Default for TestBoardConfig {
    fn default() -> Self {
        Self {
            size: 8,
            mine_density: 0.15,
        }
    }
}

/// Generates seeded boards together with their mine layouts
pub struct TestBoardGenerator {
    config: TestBoardConfig,
    rng: StdRng,
}

impl TestBoardGenerator {
    pub fn new(config: TestBoardConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(config: TestBoardConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a fresh board and the set of positions holding mines
    pub fn generate(&mut self) -> (Board, HashSet<Position>) {
        let total = self.config.size * self.config.size;
        let mines_count = (total as f64 * self.config.mine_density) as u32;
        let board = Board::with_rng(self.config.size, mines_count, &mut self.rng).unwrap();

        let mine_positions: HashSet<Position> = board
            .iter_positions()
            .filter(|pos| board.get_cell(*pos).unwrap().is_mine)
            .collect();

        (board, mine_positions)
    }

    /// Generates multiple test cases
    pub fn generate_batch(&mut self, count: usize) -> Vec<(Board, HashSet<Position>)> {
        (0..count).map(|_| self.generate()).collect()
    }

    /// Applies a number of reveals at randomly chosen safe positions,
    /// returning the resulting mid-game snapshot.
    pub fn play_random_safe(&mut self, board: &Board, clicks: usize) -> Board {
        let safe: Vec<Position> = board
            .iter_positions()
            .filter(|pos| !board.get_cell(*pos).unwrap().is_mine)
            .collect();

        let mut played = board.clone();
        for _ in 0..clicks {
            let pos = safe[self.rng.gen_range(0..safe.len())];
            let (next, _) = reveal(&played, pos).unwrap();
            played = next;
        }
        played
    }
}
