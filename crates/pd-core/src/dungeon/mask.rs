//! Dense cell sets indexed like the tile map
//!
//! Used for room footprints, the corridor blocked mask and search
//! bookkeeping. Cells outside the grid are never members; inserting one
//! is ignored.

use super::cell::{Cell, Grid};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMask {
    grid: Grid,
    bits: Vec<bool>,
    count: usize,
}

impl CellMask {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            bits: vec![false; grid.len()],
            count: 0,
        }
    }

    pub fn from_cells(grid: Grid, cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut mask = Self::new(grid);
        for c in cells {
            mask.insert(c);
        }
        mask
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn contains(&self, c: Cell) -> bool {
        self.grid.index(c).is_some_and(|i| self.bits[i])
    }

    /// Returns true if the cell was newly added
    pub fn insert(&mut self, c: Cell) -> bool {
        match self.grid.index(c) {
            Some(i) if !self.bits[i] => {
                self.bits[i] = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    /// Returns true if the cell was present
    pub fn remove(&mut self, c: Cell) -> bool {
        match self.grid.index(c) {
            Some(i) if self.bits[i] => {
                self.bits[i] = false;
                self.count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Members in index order
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &set)| set)
            .filter_map(|(i, _)| self.grid.cell_at(i))
    }

    /// Every in-bounds cell within Chebyshev radius `r` of a member
    ///
    /// Radius 0 (or less) is a plain copy.
    pub fn dilate(&self, r: i32) -> CellMask {
        let mut out = self.clone();
        if r <= 0 {
            return out;
        }
        for c in self.iter() {
            for dy in -r..=r {
                for dx in -r..=r {
                    out.insert(c.offset(dx, dy));
                }
            }
        }
        out
    }

    /// Remove the square of Chebyshev radius `r` around `center`
    pub fn clear_square(&mut self, center: Cell, r: i32) {
        if r < 0 {
            return;
        }
        for dy in -r..=r {
            for dx in -r..=r {
                self.remove(center.offset(dx, dy));
            }
        }
    }
}
