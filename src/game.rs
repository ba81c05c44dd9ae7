use crate::{reveal, Board, Cell, GameError, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// Owned read-only view of a session: the board together with its state.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: Board,
    pub state: GameState,
}

pub struct Game {
    board: Board,
    state: GameState,
    size: u32,
    mines_count: u32,
}

impl Game {
    pub fn new(size: u32, mines_count: u32) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(size, mines_count)?,
            state: GameState::Playing,
            size,
            mines_count,
        })
    }

    /// Starts a session over a prepared board.
    pub fn with_board(board: Board) -> Self {
        let size = board.size();
        let mines_count = board.mines_count();
        Self {
            board,
            state: GameState::Playing,
            size,
            mines_count,
        }
    }

    /// Discards the session and starts over with a fresh board of the same
    /// dimensions. Valid from any state.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.board = Board::new(self.size, self.mines_count)?;
        self.state = GameState::Playing;
        Ok(())
    }

    /// Processes one player action. Ignored once the game is won or lost;
    /// out-of-bounds coordinates are rejected without advancing the session.
    pub fn click(&mut self, pos: Position) -> Result<(), GameError> {
        if self.state != GameState::Playing {
            return Ok(());
        }

        let (board, hit_mine) = reveal(&self.board, pos)?;
        self.board = board;

        if hit_mine {
            self.state = GameState::Lost;
        } else if self.board.is_cleared() {
            self.state = GameState::Won;
        }

        Ok(())
    }

    pub fn get_cell(&self, pos: Position) -> Result<&Cell, GameError> {
        self.board.get_cell(pos)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            state: self.state,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn mines_count(&self) -> u32 {
        self.mines_count
    }
}
