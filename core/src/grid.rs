use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular board of cells indexed by `(row, col)`.
///
/// A grid is a value: every transition clones it and returns the new state, so a previous
/// snapshot is never affected by a later move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Creates an unrevealed, unflagged board without mines.
    pub fn new(size: Coord2) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }
        Ok(Self::empty(size))
    }

    pub(crate) fn empty(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    /// Builds a fully placed board from explicit mine positions, with adjacency counts filled in.
    ///
    /// Every position must be in bounds and listed once, so the board holds exactly `mine_coords.len()` mines.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut grid = Self::new(size)?;
        for &coords in mine_coords {
            let coords = grid.validate_coords(coords)?;
            let cell = grid.cell_mut(coords);
            if cell.mine {
                return Err(GameError::DuplicateMine);
            }
            cell.mine = true;
        }
        grid.fill_adjacent_counts();
        Ok(grid)
    }

    /// Replaces the mine layout and recomputes every adjacency count.
    pub(crate) fn with_mines(&self, mine_coords: impl IntoIterator<Item = Coord2>) -> Self {
        let mut next = self.clone();
        for cell in next.cells.iter_mut() {
            cell.mine = false;
        }
        for coords in mine_coords {
            next.cell_mut(coords).mine = true;
        }
        next.fill_adjacent_counts();
        next
    }

    fn fill_adjacent_counts(&mut self) {
        let (rows, cols) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                let adjacent_mines = if self[coords].mine {
                    0
                } else {
                    self.count_neighbors(coords, |cell| cell.mine)
                };
                self.cell_mut(coords).adjacent_mines = adjacent_mines;
            }
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (
            rows.try_into().unwrap_or(Coord::MAX),
            cols.try_into().unwrap_or(Coord::MAX),
        )
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    /// # Panics
    ///
    /// If `coords` is out of bounds, use [`Grid::validate_coords`] first when the input is untrusted.
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self[coords]
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells.indexed_iter().map(|((row, col), &cell)| {
            // dimensions originate from `Coord` values
            ((row as Coord, col as Coord), cell)
        })
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub(crate) fn count_neighbors(&self, coords: Coord2, predicate: impl Fn(Cell) -> bool) -> u8 {
        let mut count = 0;
        for pos in self.iter_neighbors(coords) {
            if predicate(self[pos]) {
                count += 1;
            }
        }
        count
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    fn count_cells(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        let count = self.cells.iter().filter(|cell| predicate(cell)).count();
        count.try_into().unwrap_or(CellCount::MAX)
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_cells(|cell| cell.mine)
    }

    pub fn flag_count(&self) -> CellCount {
        self.count_cells(|cell| cell.flagged)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_cells(|cell| cell.revealed)
    }

    /// Every safe cell is revealed, flags on mines are not required.
    pub fn is_won(&self) -> bool {
        self.cells.iter().all(|cell| cell.mine || cell.revealed)
    }

    /// Some mine has been revealed.
    pub fn is_lost(&self) -> bool {
        self.cells.iter().any(|cell| cell.mine && cell.revealed)
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
