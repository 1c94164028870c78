use alloc::vec::Vec;

use super::*;

/// Uniformly random placement outside the safe zone, deterministic for a given seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinePlacer {
    seed: u64,
}

impl RandomMinePlacer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinePlacer for RandomMinePlacer {
    fn place(self, grid: &Grid, mines: CellCount, safe: Coord2) -> Result<Grid> {
        use rand::prelude::*;

        let safe = grid.validate_coords(safe)?;

        let mut eligible: Vec<Coord2> = grid
            .iter_cells()
            .map(|(coords, _)| coords)
            .filter(|&coords| !is_adjacent(coords, safe))
            .collect();
        let available = eligible.len().try_into().unwrap_or(CellCount::MAX);

        if mines > available {
            log::warn!(
                "Cannot place {} mines around {:?}, only {} cells are outside the safe zone",
                mines,
                safe,
                available
            );
            return Err(GameError::TooManyMines {
                requested: mines,
                available,
            });
        }

        // partial Fisher-Yates: the first `mines` entries are a uniform random subset
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let (chosen, _) = eligible.partial_shuffle(&mut rng, mines.into());
        let placed = grid.with_mines(chosen.iter().copied());

        log::debug!(
            "Placed {} mines on {:?} board, safe zone around {:?}",
            placed.mine_count(),
            placed.size(),
            safe
        );
        Ok(placed)
    }
}
