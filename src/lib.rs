pub mod board;
pub mod error;
pub mod game;
pub mod position;
pub mod reveal;
#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use board::{Board, Cell};
pub use error::GameError;
pub use game::{Game, GameSnapshot, GameState};
pub use position::Position;
pub use reveal::reveal;
