//! The generated dungeon: a dense tile map plus the metadata renderers need

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::DungeonError;

use super::cell::{Cell, Grid};
use super::corridor::RoomLink;
use super::mask::CellMask;
use super::room::Room;
use super::tile::Tile;

/// Tile map over a fixed grid
///
/// Reads outside the grid yield [`Tile::Empty`]; writes outside it are
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDungeon")]
pub struct Dungeon {
    grid: Grid,
    tiles: Vec<Tile>,
    /// Placed rooms, in placement order
    pub rooms: Vec<Room>,
    /// Door and connection outcome per room, parallel to `rooms`
    pub links: Vec<RoomLink>,
    /// Cells where the corridor network touches the outer boundary
    pub starts: Vec<Cell>,
}

/// Unchecked wire form of [`Dungeon`]
#[derive(Deserialize)]
struct RawDungeon {
    grid: Grid,
    tiles: Vec<Tile>,
    rooms: Vec<Room>,
    links: Vec<RoomLink>,
    starts: Vec<Cell>,
}

impl TryFrom<RawDungeon> for Dungeon {
    type Error = DungeonError;

    fn try_from(raw: RawDungeon) -> Result<Self, Self::Error> {
        if raw.tiles.len() != raw.grid.len() {
            return Err(DungeonError::TileCount {
                expected: raw.grid.len(),
                found: raw.tiles.len(),
            });
        }
        if raw.links.len() != raw.rooms.len() {
            return Err(DungeonError::LinkCount {
                rooms: raw.rooms.len(),
                links: raw.links.len(),
            });
        }
        Ok(Self {
            grid: raw.grid,
            tiles: raw.tiles,
            rooms: raw.rooms,
            links: raw.links,
            starts: raw.starts,
        })
    }
}

impl Dungeon {
    /// Create an all-empty dungeon over the grid
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            tiles: vec![Tile::Empty; grid.len()],
            rooms: Vec::new(),
            links: Vec::new(),
            starts: Vec::new(),
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Dense tiles in [`Grid::index`] order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn in_bounds(&self, c: Cell) -> bool {
        self.grid.contains(c)
    }

    pub fn at(&self, c: Cell) -> Tile {
        match self.grid.index(c) {
            Some(i) => self.tiles[i],
            None => Tile::Empty,
        }
    }

    pub fn set(&mut self, c: Cell, tile: Tile) {
        if let Some(i) = self.grid.index(c) {
            self.tiles[i] = tile;
        }
    }

    /// Write only into an empty in-bounds cell; returns whether it wrote
    pub fn paint(&mut self, c: Cell, tile: Tile) -> bool {
        match self.grid.index(c) {
            Some(i) if self.tiles[i].is_empty() => {
                self.tiles[i] = tile;
                true
            }
            _ => false,
        }
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Door of every room that has one, in room order
    pub fn doors(&self) -> impl Iterator<Item = Cell> + '_ {
        self.links.iter().filter_map(RoomLink::door)
    }

    /// Indices of rooms whose door the network reached
    pub fn connected_rooms(&self) -> Vec<usize> {
        self.links
            .iter()
            .enumerate()
            .filter(|(_, link)| link.is_connected())
            .map(|(i, _)| i)
            .collect()
    }

    /// Starts plus every cell reachable from one over corridor and door
    /// tiles
    ///
    /// A start inside the room buffer is never carved but still seeds the
    /// search.
    pub fn network_reach(&self) -> CellMask {
        let mut seen = CellMask::new(self.grid);
        let mut queue = VecDeque::new();

        for &s in &self.starts {
            if seen.insert(s) {
                queue.push_back(s);
            }
        }

        while let Some(c) = queue.pop_front() {
            for n in c.neighbors() {
                if self.at(n).is_network() && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }

        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let d = Dungeon::new(Grid::centered(4, 2));
        assert_eq!(d.tiles().len(), 9 * 5);
        assert_eq!(d.count(Tile::Empty), 45);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut d = Dungeon::new(Grid::centered(2, 2));
        let outside = Cell::new(10, 0);
        d.set(outside, Tile::Corridor);
        assert_eq!(d.at(outside), Tile::Empty);
        assert!(!d.paint(outside, Tile::Corridor));
        assert_eq!(d.count(Tile::Corridor), 0);
    }

    #[test]
    fn test_paint_never_overwrites() {
        let mut d = Dungeon::new(Grid::centered(2, 2));
        let c = Cell::new(1, -1);
        assert!(d.paint(c, Tile::Door));
        assert!(!d.paint(c, Tile::Corridor));
        assert_eq!(d.at(c), Tile::Door);
    }

    #[test]
    fn test_network_reach() {
        let mut d = Dungeon::new(Grid::centered(3, 3));
        for x in -3..=0 {
            d.set(Cell::new(x, 0), Tile::Corridor);
        }
        d.set(Cell::new(1, 0), Tile::Door);
        // Disconnected stub
        d.set(Cell::new(3, 3), Tile::Corridor);
        d.starts.push(Cell::new(-3, 0));

        let reach = d.network_reach();
        assert_eq!(reach.len(), 5);
        assert!(reach.contains(Cell::new(1, 0)));
        assert!(!reach.contains(Cell::new(3, 3)));
    }

    #[test]
    fn test_deserialize_checks_tile_count() {
        let d = Dungeon::new(Grid::centered(1, 1));
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(serde_json::from_str::<Dungeon>(&json).unwrap(), d);

        let short = json.replacen("\"Empty\",", "", 1);
        let err = serde_json::from_str::<Dungeon>(&short).unwrap_err();
        assert!(err.to_string().contains("9 cells but 8 tiles"), "{err}");
    }

    #[test]
    fn test_uncarved_start_seeds_reach() {
        let mut d = Dungeon::new(Grid::centered(3, 3));
        // Start left empty inside a room buffer, corridor begins next to it
        d.set(Cell::new(-2, 0), Tile::Corridor);
        d.set(Cell::new(-1, 0), Tile::Door);
        d.starts.push(Cell::new(-3, 0));

        let reach = d.network_reach();
        assert!(reach.contains(Cell::new(-3, 0)));
        assert!(reach.contains(Cell::new(-1, 0)));
        assert_eq!(reach.len(), 3);
    }
}
