use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must have at least one row and one column")]
    InvalidSize,
    #[error("Mine listed more than once")]
    DuplicateMine,
    #[error("Too many mines, requested {requested} but only {available} cells are eligible")]
    TooManyMines {
        requested: CellCount,
        available: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
