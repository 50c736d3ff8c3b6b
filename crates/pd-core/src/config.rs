//! Generator configuration
//!
//! Plain serde data with defaults for every field, so a config file only
//! needs the keys it wants to change.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dungeon::{Grid, ShapeSet};
use crate::error::ConfigError;

/// Largest accepted half extent on either axis
pub const MAX_HALF_EXTENT: i32 = 4096;

/// Options recognized by the generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Grid spans `-grid_half_width..=grid_half_width` on x
    pub grid_half_width: i32,
    /// Grid spans `-grid_half_height..=grid_half_height` on y
    pub grid_half_height: i32,
    pub max_rooms: usize,
    pub room_shapes: ShapeSet,
    /// Side of the square block carved per path cell
    pub corridor_width: i32,
    /// Chebyshev distance corridors keep from room footprints
    pub corridor_buffer: i32,
    /// 0 derives a seed from the clock
    pub seed: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_half_width: 20,
            grid_half_height: 20,
            max_rooms: 10,
            room_shapes: ShapeSet::all(),
            corridor_width: 1,
            corridor_buffer: 1,
            seed: 0,
        }
    }
}

impl GeneratorConfig {
    /// Load a JSON config file; missing keys keep their defaults
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse_json(&contents)
    }

    pub fn parse_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_shapes.is_empty() {
            return Err(ConfigError::NoRoomShapes);
        }
        if self.corridor_width < 1 {
            return Err(ConfigError::InvalidCorridorWidth(self.corridor_width));
        }
        if self.corridor_buffer < 0 {
            return Err(ConfigError::NegativeCorridorBuffer(self.corridor_buffer));
        }
        let extent = 0..=MAX_HALF_EXTENT;
        if !extent.contains(&self.grid_half_width) || !extent.contains(&self.grid_half_height) {
            return Err(ConfigError::InvalidGridExtent {
                half_width: self.grid_half_width,
                half_height: self.grid_half_height,
                max: MAX_HALF_EXTENT,
            });
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::centered(self.grid_half_width, self.grid_half_height)
    }
}
