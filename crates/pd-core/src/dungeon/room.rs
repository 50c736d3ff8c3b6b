//! Room shapes, bounding boxes and footprint rasterization
//!
//! A room is a shape tag plus an inclusive bounding box. The footprint is
//! the set of cells the shape actually covers inside that box; the edge is
//! the part of the footprint with a 4-neighbor outside it.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use super::cell::{Cell, Grid};
use super::mask::CellMask;

/// Minimum side length of a room bounding box
pub const MIN_ROOM_SIZE: i32 = 3;

/// Room shape
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum RoomShape {
    Rectangle,
    Circle,
    Square,
    Triangle,
}

impl RoomShape {
    /// Circles and squares always get a square bounding box
    pub const fn is_square_boxed(&self) -> bool {
        matches!(self, RoomShape::Circle | RoomShape::Square)
    }
}

bitflags! {
    /// Set of shapes a generator may draw from
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShapeSet: u8 {
        const RECTANGLE = 0x01;
        const CIRCLE = 0x02;
        const SQUARE = 0x04;
        const TRIANGLE = 0x08;
    }
}

impl Default for ShapeSet {
    fn default() -> Self {
        ShapeSet::all()
    }
}

impl From<RoomShape> for ShapeSet {
    fn from(shape: RoomShape) -> Self {
        match shape {
            RoomShape::Rectangle => ShapeSet::RECTANGLE,
            RoomShape::Circle => ShapeSet::CIRCLE,
            RoomShape::Square => ShapeSet::SQUARE,
            RoomShape::Triangle => ShapeSet::TRIANGLE,
        }
    }
}

impl FromIterator<RoomShape> for ShapeSet {
    fn from_iter<I: IntoIterator<Item = RoomShape>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ShapeSet::empty(), |set, shape| set | shape.into())
    }
}

impl ShapeSet {
    /// Members in declaration order
    pub fn shapes(&self) -> Vec<RoomShape> {
        RoomShape::iter()
            .filter(|&s| self.contains(s.into()))
            .collect()
    }
}

// Serialized as a list of shape names rather than raw bits
impl Serialize for ShapeSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.shapes().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ShapeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let shapes = Vec::<RoomShape>::deserialize(deserializer)?;
        Ok(shapes.into_iter().collect())
    }
}

/// A placed room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    pub shape: RoomShape,
    /// Minimum corner (smallest x and y)
    pub top_left: Cell,
    /// Maximum corner, inclusive
    pub bottom_right: Cell,
}

impl Room {
    pub const fn new(shape: RoomShape, top_left: Cell, bottom_right: Cell) -> Self {
        Self {
            shape,
            top_left,
            bottom_right,
        }
    }

    /// Room with its minimum corner at `top_left` and the given box size
    pub const fn with_size(shape: RoomShape, top_left: Cell, width: i32, height: i32) -> Self {
        Self::new(shape, top_left, top_left.offset(width - 1, height - 1))
    }

    pub const fn width(&self) -> i32 {
        self.bottom_right.x - self.top_left.x + 1
    }

    pub const fn height(&self) -> i32 {
        self.bottom_right.y - self.top_left.y + 1
    }

    /// Bounding-box area, 0 for an inverted box
    pub const fn area(&self) -> i32 {
        let (w, h) = (self.width(), self.height());
        if w <= 0 || h <= 0 { 0 } else { w * h }
    }

    /// Bounding box as a grid, for containment checks
    pub const fn bounds(&self) -> Grid {
        Grid::new(
            self.top_left.x,
            self.top_left.y,
            self.bottom_right.x,
            self.bottom_right.y,
        )
    }

    /// Whether the bounding boxes come within `gap` cells of each other
    ///
    /// Both boxes are treated as inflated by `gap`; rooms are far enough
    /// apart only when one lies strictly beyond the other on some axis.
    pub const fn too_close(&self, other: &Room, gap: i32) -> bool {
        let (a, b) = (self, other);
        !(a.top_left.x > b.bottom_right.x + gap
            || b.top_left.x > a.bottom_right.x + gap
            || a.top_left.y > b.bottom_right.y + gap
            || b.top_left.y > a.bottom_right.y + gap)
    }

    /// Visit every footprint cell in row order
    pub fn for_each_cell(&self, mut f: impl FnMut(Cell)) {
        match self.shape {
            RoomShape::Rectangle | RoomShape::Square => self.each_rect(&mut f),
            RoomShape::Circle => self.each_circle(&mut f),
            RoomShape::Triangle => self.each_triangle(&mut f),
        }
    }

    pub fn footprint(&self) -> Vec<Cell> {
        let mut cells = Vec::new();
        self.for_each_cell(|c| cells.push(c));
        cells
    }

    /// Footprint cells with at least one 4-neighbor outside the footprint
    pub fn edge_cells(&self) -> Vec<Cell> {
        let footprint = self.footprint();
        let grid = self.bounds();
        let local = CellMask::from_cells(grid, footprint.iter().copied());
        footprint
            .into_iter()
            .filter(|c| c.neighbors().iter().any(|&n| !local.contains(n)))
            .collect()
    }

    fn each_rect(&self, f: &mut impl FnMut(Cell)) {
        for y in self.top_left.y..=self.bottom_right.y {
            for x in self.top_left.x..=self.bottom_right.x {
                f(Cell::new(x, y));
            }
        }
    }

    fn each_circle(&self, f: &mut impl FnMut(Cell)) {
        let cx = f64::from(self.top_left.x + self.bottom_right.x) / 2.0;
        let cy = f64::from(self.top_left.y + self.bottom_right.y) / 2.0;
        let r = f64::from(self.width().min(self.height())) / 2.0;
        // The 0.25 slack keeps integer sampling from shaving the rim
        let limit = r * r + 0.25;

        for y in self.top_left.y..=self.bottom_right.y {
            for x in self.top_left.x..=self.bottom_right.x {
                let dx = f64::from(x) - cx;
                let dy = f64::from(y) - cy;
                if dx * dx + dy * dy <= limit {
                    f(Cell::new(x, y));
                }
            }
        }
    }

    /// Apex on the top row, base on the bottom row
    fn each_triangle(&self, f: &mut impl FnMut(Cell)) {
        let apex_y = self.top_left.y;
        let base_y = self.bottom_right.y;
        if base_y <= apex_y {
            self.each_rect(f);
            return;
        }

        let rise = f64::from(base_y - apex_y);
        let cx = f64::from(self.top_left.x + self.bottom_right.x) / 2.0;
        let max_half_width = f64::from(self.bottom_right.x - self.top_left.x) / 2.0;

        for y in apex_y..=base_y {
            let half_width = max_half_width * f64::from(y - apex_y) / rise;
            let min_x = (cx - half_width).floor() as i32;
            let max_x = (cx + half_width).ceil() as i32;
            for x in min_x..=max_x {
                f(Cell::new(x, y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn room(shape: RoomShape, w: i32, h: i32) -> Room {
        Room::with_size(shape, Cell::new(0, 0), w, h)
    }

    #[test]
    fn test_room_dimensions() {
        let r = Room::new(RoomShape::Rectangle, Cell::new(-2, 3), Cell::new(4, 5));
        assert_eq!(r.width(), 7);
        assert_eq!(r.height(), 3);
        assert_eq!(r.area(), 21);

        let inverted = Room::new(RoomShape::Rectangle, Cell::new(4, 5), Cell::new(-2, 3));
        assert_eq!(inverted.area(), 0);
    }

    #[test]
    fn test_too_close() {
        let a = room(RoomShape::Rectangle, 3, 3);
        // One empty column between the boxes
        let near = Room::with_size(RoomShape::Rectangle, Cell::new(4, 0), 3, 3);
        // Two empty columns: x 3 and 4
        let far = Room::with_size(RoomShape::Rectangle, Cell::new(5, 0), 3, 3);
        assert!(a.too_close(&near, 2));
        assert!(!a.too_close(&far, 2));
        assert!(!far.too_close(&a, 2));

        let diagonal = Room::with_size(RoomShape::Rectangle, Cell::new(6, 6), 3, 3);
        assert!(!a.too_close(&diagonal, 2));
    }

    #[test]
    fn test_rect_footprint_fills_box() {
        let r = room(RoomShape::Rectangle, 4, 3);
        assert_eq!(r.footprint().len(), 12);
        // Everything except the 2x1 middle is edge
        assert_eq!(r.edge_cells().len(), 10);
    }

    #[test]
    fn test_circle_footprint() {
        let r = room(RoomShape::Circle, 5, 5);
        let cells = r.footprint();
        assert!(cells.contains(&Cell::new(2, 2)));
        assert!(cells.contains(&Cell::new(0, 2)));
        assert!(!cells.contains(&Cell::new(0, 0)));
        assert!(cells.len() < 25);
        assert!(cells.iter().all(|&c| r.bounds().contains(c)));
    }

    #[test]
    fn test_triangle_footprint() {
        let r = room(RoomShape::Triangle, 5, 3);
        let cells = r.footprint();
        let row = |y: i32| cells.iter().filter(|c| c.y == y).count();
        // Apex is the single center column, base spans the full box
        assert_eq!(row(0), 1);
        assert_eq!(row(2), 5);
        assert!(row(1) >= row(0) && row(1) <= row(2));
    }

    #[test]
    fn test_flat_triangle_is_rectangle() {
        let r = Room::new(RoomShape::Triangle, Cell::new(0, 0), Cell::new(4, 0));
        assert_eq!(r.footprint().len(), 5);
    }

    #[test]
    fn test_single_cell_room_is_all_edge() {
        let r = room(RoomShape::Square, 1, 1);
        assert_eq!(r.edge_cells(), vec![Cell::new(0, 0)]);
    }

    #[test]
    fn test_shape_set() {
        let set: ShapeSet = [RoomShape::Triangle, RoomShape::Circle].into_iter().collect();
        assert_eq!(set.shapes(), vec![RoomShape::Circle, RoomShape::Triangle]);
        assert!(ShapeSet::empty().shapes().is_empty());
        assert_eq!(ShapeSet::default().shapes().len(), 4);
    }

    #[test]
    fn test_shape_set_serde() {
        let set = ShapeSet::SQUARE | ShapeSet::RECTANGLE;
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["Rectangle","Square"]"#);
        let back: ShapeSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_shape_from_str() {
        assert_eq!(RoomShape::from_str("circle").unwrap(), RoomShape::Circle);
        assert_eq!(RoomShape::from_str("TRIANGLE").unwrap(), RoomShape::Triangle);
        assert!(RoomShape::from_str("hexagon").is_err());
    }
}
