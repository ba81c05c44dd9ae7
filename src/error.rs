use crate::Position;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Position {0:?} is out of bounds")]
    OutOfBounds(Position),
    #[error("Too many mines ({mines}) for board size {size}x{size}")]
    TooManyMines { size: u32, mines: u32 },
}
