//! Dungeon layout
//!
//! Contains the grid and tile map, room shapes and placement, and the
//! corridor network that links rooms to the outer boundary.

mod cell;
mod corridor;
mod generation;
mod level;
mod mask;
mod placement;
mod room;
mod tile;

pub use cell::{CARDINALS, Cell, Grid};
pub use corridor::{CorridorNetwork, CorridorNetworkBuilder, DOOR_HALO, RoomLink};
pub use generation::{Generator, generate};
pub use level::Dungeon;
pub use mask::CellMask;
pub use placement::{
    MAX_ROOM_AREA_FRACTION, MAX_TOTAL_ROOM_AREA_FRACTION, MIN_ROOM_GAP, RoomPlacer,
};
pub use room::{MIN_ROOM_SIZE, Room, RoomShape, ShapeSet};
pub use tile::Tile;
