use crate::*;
pub use random::*;

mod random;

/// Strategy for laying out mines around the first revealed cell.
pub trait MinePlacer {
    /// Returns a copy of `grid` with exactly `mines` mines, none inside the 3×3 safe zone around `safe`, and
    /// adjacency counts recomputed.
    fn place(self, grid: &Grid, mines: CellCount, safe: Coord2) -> Result<Grid>;
}

impl Grid {
    /// Places mines with the default random strategy, see [`RandomMinePlacer`].
    pub fn place_mines(&self, mines: CellCount, safe: Coord2, seed: u64) -> Result<Grid> {
        RandomMinePlacer::new(seed).place(self, mines, safe)
    }
}
