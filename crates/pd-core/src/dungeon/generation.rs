//! Full generation pipeline
//!
//! Rooms first, then doors and corridors, then room floors. Floors go
//! last and only into empty cells, so nothing already carved is lost.

use crate::config::GeneratorConfig;
use crate::error::ConfigError;
use crate::rng::DungeonRng;

use super::corridor::CorridorNetworkBuilder;
use super::level::Dungeon;
use super::placement::RoomPlacer;
use super::tile::Tile;

/// Validated generator bound to one RNG stream
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    rng: DungeonRng,
    placer: RoomPlacer,
    corridors: CorridorNetworkBuilder,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.grid();
        let placer = RoomPlacer::new(grid, config.room_shapes)?;
        let corridors =
            CorridorNetworkBuilder::new(grid, config.corridor_width, config.corridor_buffer);
        let rng = DungeonRng::from_config_seed(config.seed);

        Ok(Self {
            config,
            rng,
            placer,
            corridors,
        })
    }

    /// Seed actually in use, including one derived from the clock
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produce one dungeon
    ///
    /// Repeated calls continue the same RNG stream, so each call yields a
    /// different layout while the sequence stays reproducible per seed.
    pub fn generate(&mut self) -> Dungeon {
        let mut dungeon = Dungeon::new(self.placer.grid());

        let rooms = self.placer.place(self.config.max_rooms, &mut self.rng);
        let network = self.corridors.build(&mut dungeon, &rooms, &mut self.rng);

        for room in &rooms {
            room.for_each_cell(|c| {
                dungeon.paint(c, Tile::RoomFloor);
            });
        }

        dungeon.rooms = rooms;
        dungeon.links = network.links;
        dungeon.starts = network.starts;

        let connected = dungeon.connected_rooms().len();
        let unreachable = dungeon.rooms.len() - connected;
        log::info!(
            "generated {}/{} rooms ({} connected) with {} corridor cells, seed {}",
            dungeon.rooms.len(),
            self.config.max_rooms,
            connected,
            dungeon.count(Tile::Corridor),
            self.seed()
        );
        if unreachable > 0 {
            log::warn!("{unreachable} rooms are not connected to the corridor network");
        }

        dungeon
    }
}

/// Validate a config and generate a single dungeon from it
pub fn generate(config: &GeneratorConfig) -> Result<Dungeon, ConfigError> {
    Ok(Generator::new(config.clone())?.generate())
}
