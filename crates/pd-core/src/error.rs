//! Error types for generator setup
//!
//! Generation itself never fails: rooms that cannot be placed or reached
//! show up as data on the finished dungeon. Only an unusable
//! configuration is an error.

use thiserror::Error;

/// Configuration problems detected before any generation happens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no room shapes enabled; at least one shape is required")]
    NoRoomShapes,

    #[error("corridor width must be at least 1, got {0}")]
    InvalidCorridorWidth(i32),

    #[error("corridor buffer must not be negative, got {0}")]
    NegativeCorridorBuffer(i32),

    #[error("grid half extents must be within 0..={max}, got {half_width}x{half_height}")]
    InvalidGridExtent {
        half_width: i32,
        half_height: i32,
        max: i32,
    },

    #[error("could not read config file '{path}': {reason}")]
    Io { path: String, reason: String },

    #[error("could not parse config: {0}")]
    Parse(String),
}

/// A deserialized dungeon whose parts do not fit together
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DungeonError {
    #[error("grid holds {expected} cells but {found} tiles were given")]
    TileCount { expected: usize, found: usize },

    #[error("{rooms} rooms but {links} room links")]
    LinkCount { rooms: usize, links: usize },
}
