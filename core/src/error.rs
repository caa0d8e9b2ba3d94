use thiserror::Error;

use crate::TileValue;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid direction, expected one of up, down, left or right")]
    InvalidDirection,
    #[error("Board rows must form a non-empty square grid")]
    InvalidBoardShape,
    #[error("Invalid tile value {0}, expected 0 or a power of two")]
    InvalidTile(TileValue),
}

pub type Result<T> = core::result::Result<T, GameError>;
