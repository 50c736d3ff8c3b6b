//! Per-cell occupancy labels

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// What occupies a cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Empty = 0,
    RoomFloor = 1,
    Corridor = 2,
    Door = 3,
    /// Display-only; inferred by renderers, never produced by generation
    Wall = 4,
}

impl Tile {
    pub const fn is_empty(&self) -> bool {
        matches!(self, Tile::Empty)
    }

    /// Tiles a walker can stand on
    pub const fn is_walkable(&self) -> bool {
        matches!(self, Tile::RoomFloor | Tile::Corridor | Tile::Door)
    }

    /// Tiles that make up the corridor network
    pub const fn is_network(&self) -> bool {
        matches!(self, Tile::Corridor | Tile::Door)
    }

    /// Get the display character for this tile
    pub const fn symbol(&self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::RoomFloor => '.',
            Tile::Corridor => '#',
            Tile::Door => '+',
            Tile::Wall => '▒',
        }
    }
}
