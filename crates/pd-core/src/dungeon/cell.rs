//! Cell coordinates and the fixed grid they live on

use serde::{Deserialize, Serialize};

/// The four axis-aligned unit steps
pub const CARDINALS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Integer coordinate pair
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// 4-directional neighbors in `CARDINALS` order
    pub fn neighbors(self) -> [Cell; 4] {
        CARDINALS.map(|(dx, dy)| self.offset(dx, dy))
    }
}

impl core::fmt::Display for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Fixed rectangular coordinate space, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Grid {
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Grid spanning `[-half_width, half_width] x [-half_height, half_height]`
    pub const fn centered(half_width: i32, half_height: i32) -> Self {
        Self::new(-half_width, -half_height, half_width, half_height)
    }

    pub const fn width(&self) -> i32 {
        if self.max_x >= self.min_x {
            self.max_x - self.min_x + 1
        } else {
            0
        }
    }

    pub const fn height(&self) -> i32 {
        if self.max_y >= self.min_y {
            self.max_y - self.min_y + 1
        } else {
            0
        }
    }

    pub const fn area(&self) -> i32 {
        self.width() * self.height()
    }

    /// Number of dense slots, `width * height`
    pub const fn len(&self) -> usize {
        self.area() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.area() == 0
    }

    pub const fn contains(&self, c: Cell) -> bool {
        c.x >= self.min_x && c.x <= self.max_x && c.y >= self.min_y && c.y <= self.max_y
    }

    /// Row-major dense index, `None` outside the bounds
    pub const fn index(&self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        let col = (c.x - self.min_x) as usize;
        let row = (c.y - self.min_y) as usize;
        Some(row * self.width() as usize + col)
    }

    /// Inverse of [`Grid::index`]
    pub const fn cell_at(&self, idx: usize) -> Option<Cell> {
        if idx >= self.len() {
            return None;
        }
        let w = self.width() as usize;
        Some(Cell::new(
            self.min_x + (idx % w) as i32,
            self.min_y + (idx / w) as i32,
        ))
    }

    /// All cells in index order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (self.min_y..=self.max_y)
            .flat_map(move |y| (self.min_x..=self.max_x).map(move |x| Cell::new(x, y)))
    }

    /// True for cells on the outermost ring
    pub const fn on_perimeter(&self, c: Cell) -> bool {
        self.contains(c)
            && (c.x == self.min_x || c.x == self.max_x || c.y == self.min_y || c.y == self.max_y)
    }

    /// True for cells strictly inside the outermost ring
    pub const fn is_interior(&self, c: Cell) -> bool {
        c.x > self.min_x && c.x < self.max_x && c.y > self.min_y && c.y < self.max_y
    }

    /// Outer ring, each cell once
    ///
    /// Walks the bottom row left to right, the right column upwards, the
    /// top row right to left and the left column downwards.
    pub fn perimeter(&self) -> Vec<Cell> {
        let (w, h) = (self.width(), self.height());
        if w == 0 || h == 0 {
            return Vec::new();
        }
        if w == 1 || h == 1 {
            return self.cells().collect();
        }

        let mut ring = Vec::with_capacity((2 * (w + h) - 4) as usize);
        for x in self.min_x..=self.max_x {
            ring.push(Cell::new(x, self.min_y));
        }
        for y in self.min_y + 1..=self.max_y {
            ring.push(Cell::new(self.max_x, y));
        }
        for x in (self.min_x..self.max_x).rev() {
            ring.push(Cell::new(x, self.max_y));
        }
        for y in (self.min_y + 1..self.max_y).rev() {
            ring.push(Cell::new(self.min_x, y));
        }
        ring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions() {
        let g = Grid::centered(20, 10);
        assert_eq!(g.width(), 41);
        assert_eq!(g.height(), 21);
        assert_eq!(g.len(), 41 * 21);
    }

    #[test]
    fn test_index_is_bijective() {
        let g = Grid::new(-2, -3, 4, 1);
        let mut seen = vec![false; g.len()];
        for c in g.cells() {
            let idx = g.index(c).unwrap();
            assert!(!seen[idx], "index {idx} produced twice");
            seen[idx] = true;
            assert_eq!(g.cell_at(idx), Some(c));
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_index_out_of_bounds() {
        let g = Grid::centered(3, 3);
        assert_eq!(g.index(Cell::new(4, 0)), None);
        assert_eq!(g.index(Cell::new(0, -4)), None);
        assert_eq!(g.cell_at(g.len()), None);
    }

    #[test]
    fn test_perimeter_ring() {
        let g = Grid::centered(3, 2);
        let ring = g.perimeter();
        assert_eq!(ring.len(), (2 * (g.width() + g.height()) - 4) as usize);
        assert!(ring.iter().all(|&c| g.on_perimeter(c)));

        let mut dedup = ring.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), ring.len());
    }

    #[test]
    fn test_perimeter_thin_grids() {
        assert_eq!(Grid::new(0, 0, 0, 0).perimeter(), vec![Cell::new(0, 0)]);
        assert_eq!(Grid::new(0, 0, 0, 2).perimeter().len(), 3);
    }

    #[test]
    fn test_interior() {
        let g = Grid::centered(3, 3);
        assert!(g.is_interior(Cell::new(2, -2)));
        assert!(!g.is_interior(Cell::new(3, 0)));
        assert!(!g.is_interior(Cell::new(0, -3)));
    }
}
