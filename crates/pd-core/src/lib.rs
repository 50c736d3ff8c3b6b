//! pd-core: procedural dungeon layout generation
//!
//! Places non-overlapping rooms of several shapes on a centered grid,
//! gives each room one door and joins the doors to the grid boundary
//! with a breadth-first corridor network. No I/O beyond optional config
//! file loading; rendering lives in `pd-ascii`.

pub mod config;
pub mod dungeon;
pub mod error;
mod rng;

pub use config::{GeneratorConfig, MAX_HALF_EXTENT};
pub use dungeon::{Dungeon, Generator, generate};
pub use error::{ConfigError, DungeonError};
pub use rng::DungeonRng;
