use alloc::collections::VecDeque;
use ndarray::Array2;

use crate::*;

/// Board transitions. Each one leaves `self` untouched and returns the next grid.
impl Grid {
    /// Reveals a cell, flood-filling outwards from cells with no adjacent mines.
    ///
    /// Revealed or flagged targets are left alone. A mine only reveals itself, detecting that is left to
    /// [`Grid::is_lost`].
    pub fn reveal(&self, coords: Coord2) -> Result<Grid> {
        let coords = self.validate_coords(coords)?;
        let mut next = self.clone();
        next.reveal_in_place(coords);
        Ok(next)
    }

    /// Reveals every unflagged neighbour of a numbered cell whose flagged-neighbour count matches its number
    /// exactly. Any other situation is a no-op.
    pub fn chord_reveal(&self, coords: Coord2) -> Result<Grid> {
        let coords = self.validate_coords(coords)?;
        let mut next = self.clone();

        if self.is_chordable(coords) {
            for neighbor in self.iter_neighbors(coords) {
                next.reveal_in_place(neighbor);
            }
        }

        Ok(next)
    }

    pub fn is_chordable(&self, coords: Coord2) -> bool {
        let cell = self[coords];
        cell.revealed
            && !cell.mine
            && cell.adjacent_mines != 0
            && self.count_neighbors(coords, |neighbor| neighbor.flagged) == cell.adjacent_mines
    }

    /// Flips the flag on an unrevealed cell, revealed cells keep no flag.
    pub fn toggle_flag(&self, coords: Coord2) -> Result<Grid> {
        let coords = self.validate_coords(coords)?;
        let mut next = self.clone();

        let cell = next.cell_mut(coords);
        if !cell.revealed {
            cell.flagged = !cell.flagged;
        }

        Ok(next)
    }

    /// Exposes the whole mine layout, all other cells are left as they are.
    pub fn reveal_all_mines(&self) -> Grid {
        let mut next = self.clone();
        for cell in next.cells_mut().filter(|cell| cell.mine) {
            cell.revealed = true;
        }
        next
    }

    fn reveal_in_place(&mut self, coords: Coord2) {
        let cell = self[coords];
        if !cell.is_revealable() {
            return;
        }

        if cell.mine {
            self.cell_mut(coords).revealed = true;
            log::debug!("Revealed mine at {:?}", coords);
            return;
        }

        let mut visited = Array2::from_elem(self.size().to_nd_index(), false);
        let mut to_visit = VecDeque::from([coords]);
        visited[coords.to_nd_index()] = true;

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = self.cell_mut(visit_coords);
            if cell.flagged || cell.mine || cell.revealed {
                continue;
            }

            cell.revealed = true;
            let adjacent_mines = cell.adjacent_mines;
            log::trace!(
                "Revealed cell at {:?}, adjacent mines: {}",
                visit_coords,
                adjacent_mines
            );

            if adjacent_mines == 0 {
                for neighbor in self.iter_neighbors(visit_coords) {
                    if !visited[neighbor.to_nd_index()] && !self[neighbor].revealed {
                        visited[neighbor.to_nd_index()] = true;
                        to_visit.push_back(neighbor);
                    }
                }
            }
        }
    }
}
