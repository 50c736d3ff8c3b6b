//! Constrained random room placement
//!
//! Rooms are drawn one slot at a time. Each slot gets a fixed number of
//! candidates; the first one that fits both area budgets and keeps its
//! distance from every accepted room wins. A slot that exhausts its
//! candidates ends placement early.

use crate::error::ConfigError;
use crate::rng::DungeonRng;

use super::cell::{Cell, Grid};
use super::room::{MIN_ROOM_SIZE, Room, RoomShape, ShapeSet};

/// Largest fraction of the grid one room's bounding box may cover
pub const MAX_ROOM_AREA_FRACTION: f64 = 0.15;

/// Largest fraction of the grid all rooms together may cover
pub const MAX_TOTAL_ROOM_AREA_FRACTION: f64 = 0.45;

/// Minimum number of empty cells between two rooms' bounding boxes
pub const MIN_ROOM_GAP: i32 = 2;

/// Resamples of a rectangle/triangle size before falling back
const DIMENSION_TRIES: usize = 10;

/// Candidates per room slot
const PLACEMENT_TRIES: usize = 20;

/// Generates batches of non-overlapping rooms inside a grid
#[derive(Debug, Clone)]
pub struct RoomPlacer {
    grid: Grid,
    shapes: Vec<RoomShape>,
    room_area_cap: i32,
    total_area_cap: i32,
}

impl RoomPlacer {
    /// Fails when no shapes are enabled, since no room could ever be drawn
    pub fn new(grid: Grid, shapes: ShapeSet) -> Result<Self, ConfigError> {
        let shapes = shapes.shapes();
        if shapes.is_empty() {
            return Err(ConfigError::NoRoomShapes);
        }

        let sizing_area = grid.width().max(MIN_ROOM_SIZE) * grid.height().max(MIN_ROOM_SIZE);
        // Always leave room for at least a 3x3
        let room_area_cap = ((MAX_ROOM_AREA_FRACTION * f64::from(sizing_area)) as i32)
            .max(MIN_ROOM_SIZE * MIN_ROOM_SIZE);

        let grid_area = grid.area();
        let total_area_cap = match (MAX_TOTAL_ROOM_AREA_FRACTION * f64::from(grid_area)) as i32 {
            cap if cap <= 0 => grid_area,
            cap => cap,
        };

        Ok(Self {
            grid,
            shapes,
            room_area_cap,
            total_area_cap,
        })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Largest bounding-box area a single room may have
    pub fn room_area_cap(&self) -> i32 {
        self.room_area_cap
    }

    /// Largest combined bounding-box area of all rooms
    pub fn total_area_cap(&self) -> i32 {
        self.total_area_cap
    }

    /// Place up to `max_rooms` rooms
    ///
    /// Returns fewer when a slot runs out of candidates; that is an
    /// accepted outcome, not an error.
    pub fn place(&self, max_rooms: usize, rng: &mut DungeonRng) -> Vec<Room> {
        let mut rooms: Vec<Room> = Vec::with_capacity(max_rooms);
        let mut used_area = 0;

        while rooms.len() < max_rooms {
            let accepted = (0..PLACEMENT_TRIES).find_map(|_| {
                let candidate = self.random_room(rng);
                let fits = self.accepts(&candidate, &rooms, used_area);
                fits.then_some(candidate)
            });

            let Some(room) = accepted else {
                log::warn!(
                    "room placement stopped after {} of {} rooms",
                    rooms.len(),
                    max_rooms
                );
                break;
            };

            log::debug!(
                "placed {} room {}..{} (area {})",
                room.shape,
                room.top_left,
                room.bottom_right,
                room.area()
            );
            used_area += room.area();
            rooms.push(room);
        }

        rooms
    }

    /// Whether a candidate fits the budgets and spacing against `placed`
    pub fn accepts(&self, candidate: &Room, placed: &[Room], used_area: i32) -> bool {
        let area = candidate.area();
        area > 0
            && area <= self.room_area_cap
            && used_area + area <= self.total_area_cap
            && placed.iter().all(|r| !r.too_close(candidate, MIN_ROOM_GAP))
    }

    /// One candidate of a random enabled shape, fully inside the grid
    pub fn random_room(&self, rng: &mut DungeonRng) -> Room {
        let shape = self.shapes[rng.index(self.shapes.len())];
        let (width, height) = self.dimensions(shape, rng);

        let width = width.min(self.grid.width());
        let height = height.min(self.grid.height());

        let x = rng.range_inclusive(self.grid.min_x, self.grid.max_x - width + 1);
        let y = rng.range_inclusive(self.grid.min_y, self.grid.max_y - height + 1);

        Room::with_size(shape, Cell::new(x, y), width, height)
    }

    /// Bounding-box size for a shape, within the per-room area cap
    pub fn dimensions(&self, shape: RoomShape, rng: &mut DungeonRng) -> (i32, i32) {
        let grid_width = self.grid.width().max(MIN_ROOM_SIZE);
        let grid_height = self.grid.height().max(MIN_ROOM_SIZE);
        let cap = self.room_area_cap;

        if shape.is_square_boxed() {
            let by_area = f64::from(cap).sqrt() as i32;
            let max_side = by_area.min(grid_width.min(grid_height)).max(MIN_ROOM_SIZE);
            let side = rng.range_inclusive(MIN_ROOM_SIZE, max_side);
            return (side, side);
        }

        let max_w = (grid_width / 2).max(MIN_ROOM_SIZE);
        let max_h = (grid_height / 2).max(MIN_ROOM_SIZE);

        for _ in 0..DIMENSION_TRIES {
            let w = rng.range_inclusive(MIN_ROOM_SIZE, max_w);
            let h = rng.range_inclusive(MIN_ROOM_SIZE, max_h);
            if w * h <= cap {
                return (w, h);
            }
        }

        let w = (f64::from(cap).sqrt() as i32).clamp(MIN_ROOM_SIZE, max_w);
        let h = (cap / w).clamp(MIN_ROOM_SIZE, max_h);
        (w, h)
    }
}
