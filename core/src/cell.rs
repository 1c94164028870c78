use serde::{Deserialize, Serialize};

/// One board position. Its identity is its `(row, col)` index in the owning grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    pub adjacent_mines: u8,
}

impl Cell {
    /// Whether a reveal could still open this cell.
    pub const fn is_revealable(self) -> bool {
        !self.revealed && !self.flagged
    }
}
