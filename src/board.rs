use crate::{GameError, Position};
use itertools::iproduct;
use rand::seq::index;
use rand::Rng;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    /// Player flag marker; carried on every cell but never set or read by
    /// the engine.
    pub is_flagged: bool,
    /// Mines in the clipped Moore neighborhood, fixed at generation time.
    /// Meaningful only when `is_mine` is false.
    pub adjacent_mines: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub(crate) cells: HashMap<Position, Cell>,
    size: u32,
    mines_count: u32,
}

impl Board {
    pub fn new(size: u32, mines_count: u32) -> Result<Self, GameError> {
        Self::with_rng(size, mines_count, &mut rand::thread_rng())
    }

    /// Generates a board from the given random source. The layout is
    /// deterministic given the source's output sequence.
    pub fn with_rng<R: Rng>(size: u32, mines_count: u32, rng: &mut R) -> Result<Self, GameError> {
        if mines_count >= size * size {
            return Err(GameError::TooManyMines {
                size,
                mines: mines_count,
            });
        }

        let mut board = Board {
            cells: HashMap::new(),
            size,
            mines_count,
        };
        board.initialize_cells();
        // Rejection sampling degrades as the grid fills up; switch to a
        // distinct-index sample at half density. Both are uniform.
        if 2 * mines_count >= size * size {
            board.place_mines_sampled(rng);
        } else {
            board.place_mines_rejection(rng);
        }
        board.compute_adjacency();
        Ok(board)
    }

    /// Builds a board with mines at exactly the given positions. Duplicate
    /// positions collapse into one mine.
    pub fn with_mines(size: u32, mines: &[Position]) -> Result<Self, GameError> {
        let mut board = Board {
            cells: HashMap::new(),
            size,
            mines_count: 0,
        };
        board.initialize_cells();

        for &pos in mines {
            let cell = board
                .cells
                .get_mut(&pos)
                .ok_or(GameError::OutOfBounds(pos))?;
            if !cell.is_mine {
                cell.is_mine = true;
                board.mines_count += 1;
            }
        }
        if board.mines_count >= size * size {
            return Err(GameError::TooManyMines {
                size,
                mines: board.mines_count,
            });
        }

        board.compute_adjacency();
        Ok(board)
    }

    fn initialize_cells(&mut self) {
        for pos in self.iter_positions() {
            self.cells.insert(pos, Cell::default());
        }
    }

    fn place_mines_rejection<R: Rng>(&mut self, rng: &mut R) {
        let mut mines_placed = 0;

        while mines_placed < self.mines_count {
            let row = rng.gen_range(0..self.size) as i32;
            let col = rng.gen_range(0..self.size) as i32;
            let pos = Position::new(row, col);

            if let Some(cell) = self.cells.get_mut(&pos) {
                if !cell.is_mine {
                    cell.is_mine = true;
                    mines_placed += 1;
                }
            }
        }
    }

    fn place_mines_sampled<R: Rng>(&mut self, rng: &mut R) {
        let size = self.size as usize;
        for idx in index::sample(rng, size * size, self.mines_count as usize) {
            let pos = Position::new((idx / size) as i32, (idx % size) as i32);
            if let Some(cell) = self.cells.get_mut(&pos) {
                cell.is_mine = true;
            }
        }
    }

    fn compute_adjacency(&mut self) {
        let counts: Vec<(Position, u8)> = self
            .iter_positions()
            .filter(|pos| matches!(self.cells.get(pos), Some(cell) if !cell.is_mine))
            .map(|pos| (pos, self.count_adjacent_mines(pos)))
            .collect();

        for (pos, count) in counts {
            if let Some(cell) = self.cells.get_mut(&pos) {
                cell.adjacent_mines = count;
            }
        }
    }

    pub fn count_adjacent_mines(&self, pos: Position) -> u8 {
        pos.neighbors()
            .filter(|p| self.is_within_bounds(*p))
            .filter(|p| matches!(self.cells.get(p), Some(cell) if cell.is_mine))
            .count() as u8
    }

    pub fn is_within_bounds(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.size as i32 && pos.col >= 0 && pos.col < self.size as i32
    }

    pub fn get_cell(&self, pos: Position) -> Result<&Cell, GameError> {
        self.cells.get(&pos).ok_or(GameError::OutOfBounds(pos))
    }

    pub fn iter_positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size as i32;
        iproduct!(0..size, 0..size).map(|(row, col)| Position::new(row, col))
    }

    /// True once every non-mine cell has been revealed.
    pub fn is_cleared(&self) -> bool {
        self.cells
            .values()
            .all(|cell| cell.is_mine || cell.is_revealed)
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn mines_count(&self) -> u32 {
        self.mines_count
    }
}
