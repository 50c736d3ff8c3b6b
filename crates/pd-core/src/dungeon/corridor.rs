//! Corridor network construction
//!
//! Connects placed rooms into corridor networks that touch the outer
//! boundary:
//! 1. Pick one door per room on its footprint edge
//! 2. Block room footprints plus a buffer ring, then reopen a small halo
//!    around every door
//! 3. Grow the network room by room with breadth-first searches from the
//!    perimeter or from an already carved corridor cell
//! 4. Carve each path cell as a square block of the configured width

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::rng::DungeonRng;

use super::cell::{CARDINALS, Cell, Grid};
use super::level::Dungeon;
use super::mask::CellMask;
use super::room::Room;
use super::tile::Tile;

/// Chebyshev radius reopened around each door
///
/// Wider halos let corridors hug room walls and defeat the buffer.
pub const DOOR_HALO: i32 = 1;

/// Door and connection outcome for one room
///
/// `Doored` is the only pending state. Once the builder returns, every
/// link is `NoDoor`, `Connected` or `Unreachable`, and never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomLink {
    /// Footprint has no edge cell; the room still blocks corridors
    NoDoor,
    /// Door chosen, connection not attempted yet
    Doored { door: Cell },
    Connected { door: Cell },
    /// Search exhausted without reaching the door
    Unreachable { door: Cell },
}

impl RoomLink {
    pub const fn door(&self) -> Option<Cell> {
        match *self {
            RoomLink::NoDoor => None,
            RoomLink::Doored { door }
            | RoomLink::Connected { door }
            | RoomLink::Unreachable { door } => Some(door),
        }
    }

    pub const fn is_connected(&self) -> bool {
        matches!(self, RoomLink::Connected { .. })
    }

    pub const fn is_terminal(&self) -> bool {
        !matches!(self, RoomLink::Doored { .. })
    }

    /// Settle a pending link; terminal links are returned unchanged
    pub const fn resolve(self, reached: bool) -> Self {
        match self {
            RoomLink::Doored { door } if reached => RoomLink::Connected { door },
            RoomLink::Doored { door } => RoomLink::Unreachable { door },
            other => other,
        }
    }
}

impl core::fmt::Display for RoomLink {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RoomLink::NoDoor => write!(f, "no door"),
            RoomLink::Doored { door } => write!(f, "door at {door}, pending"),
            RoomLink::Connected { door } => write!(f, "connected at {door}"),
            RoomLink::Unreachable { door } => write!(f, "unreachable door at {door}"),
        }
    }
}

/// What the builder hands back besides the mutated tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorridorNetwork {
    /// One link per room, in room order
    pub links: Vec<RoomLink>,
    /// Boundary entry cells, in the order they were opened
    pub starts: Vec<Cell>,
}

/// Corridor cells eligible as the origin of the next search
struct NetworkCells {
    cells: Vec<Cell>,
    members: CellMask,
}

impl NetworkCells {
    fn new(grid: Grid) -> Self {
        Self {
            cells: Vec::new(),
            members: CellMask::new(grid),
        }
    }

    fn record(&mut self, dungeon: &Dungeon, c: Cell) {
        if dungeon.at(c) == Tile::Corridor && self.members.insert(c) {
            self.cells.push(c);
        }
    }

    fn pick(&self, rng: &mut DungeonRng) -> Option<Cell> {
        rng.choose(&self.cells).copied()
    }
}

/// Connects rooms with buffered, width-aware corridors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorridorNetworkBuilder {
    grid: Grid,
    width: i32,
    buffer: i32,
}

impl CorridorNetworkBuilder {
    /// Width is clamped to at least 1 and buffer to at least 0
    pub fn new(grid: Grid, width: i32, buffer: i32) -> Self {
        Self {
            grid,
            width: width.max(1),
            buffer: buffer.max(0),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn buffer(&self) -> i32 {
        self.buffer
    }

    /// Mark doors, then carve corridors until every doored room is settled
    pub fn build(
        &self,
        dungeon: &mut Dungeon,
        rooms: &[Room],
        rng: &mut DungeonRng,
    ) -> CorridorNetwork {
        let (mut links, solid) = self.place_doors(dungeon, rooms, rng);
        let doors: Vec<Cell> = links.iter().filter_map(RoomLink::door).collect();
        let blocked = self.blocked_mask(&solid, &doors);

        let mut network = NetworkCells::new(self.grid);
        let mut starts = Vec::new();

        for (i, link) in links.iter_mut().enumerate() {
            let Some(target) = link.door() else {
                continue;
            };

            let start = match network.pick(rng) {
                Some(c) => c,
                None => match self.perimeter_start(&solid, rng) {
                    Some(c) => {
                        log::debug!("room {i}: opening network at boundary cell {c}");
                        starts.push(c);
                        c
                    }
                    None => {
                        log::warn!("room {i}: every boundary cell is inside a room");
                        *link = link.resolve(false);
                        continue;
                    }
                },
            };

            if dungeon.at(start) != Tile::Door {
                self.carve(dungeon, start, &blocked);
            }
            network.record(dungeon, start);

            let Some(path) = self.find_path(start, target, &blocked, rng) else {
                log::warn!("room {i}: no corridor path from {start} to door {target}");
                *link = link.resolve(false);
                continue;
            };

            log::debug!("room {i}: {} step corridor to door {target}", path.len());
            for c in path {
                if dungeon.at(c) == Tile::Door {
                    continue;
                }
                self.carve(dungeon, c, &blocked);
                network.record(dungeon, c);
            }
            *link = link.resolve(true);
        }

        CorridorNetwork { links, starts }
    }

    /// Choose and mark one door per room; returns the links and the
    /// room-solid set (every footprint cell that is not a door)
    fn place_doors(
        &self,
        dungeon: &mut Dungeon,
        rooms: &[Room],
        rng: &mut DungeonRng,
    ) -> (Vec<RoomLink>, CellMask) {
        let mut solid = CellMask::new(self.grid);
        let mut links = Vec::with_capacity(rooms.len());

        for room in rooms {
            let door = self.choose_door(&room.edge_cells(), rng);
            if let Some(d) = door {
                dungeon.set(d, Tile::Door);
            }

            room.for_each_cell(|c| {
                if Some(c) != door {
                    solid.insert(c);
                }
            });

            links.push(match door {
                Some(door) => RoomLink::Doored { door },
                None => RoomLink::NoDoor,
            });
        }

        (links, solid)
    }

    /// Uniform pick among edge cells off the outer ring, else any edge cell
    pub fn choose_door(&self, edges: &[Cell], rng: &mut DungeonRng) -> Option<Cell> {
        let in_grid: Vec<Cell> = edges
            .iter()
            .copied()
            .filter(|&c| self.grid.contains(c))
            .collect();
        let inner: Vec<Cell> = in_grid
            .iter()
            .copied()
            .filter(|&c| self.grid.is_interior(c))
            .collect();

        let pool = if inner.is_empty() { &in_grid } else { &inner };
        rng.choose(pool).copied()
    }

    /// Room-solid cells dilated by the buffer, with every door and its
    /// halo reopened
    pub fn blocked_mask(&self, solid: &CellMask, doors: &[Cell]) -> CellMask {
        let mut blocked = solid.dilate(self.buffer);
        for &door in doors {
            blocked.clear_square(door, DOOR_HALO);
        }
        blocked
    }

    /// Uniform outer-ring cell outside every room footprint
    ///
    /// The cell may lie in the buffer; carving then leaves it unpainted.
    /// `None` only when room footprints cover the whole ring.
    fn perimeter_start(&self, solid: &CellMask, rng: &mut DungeonRng) -> Option<Cell> {
        let ring: Vec<Cell> = self
            .grid
            .perimeter()
            .into_iter()
            .filter(|&c| !solid.contains(c))
            .collect();
        rng.choose(&ring).copied()
    }

    /// Shortest 4-directional path from `start` to `target`
    ///
    /// Blocked cells are impassable except the target itself. The four
    /// directions are reshuffled before expanding each cell so ties do not
    /// favor one heading. The path excludes `start` and ends at `target`.
    pub fn find_path(
        &self,
        start: Cell,
        target: Cell,
        blocked: &CellMask,
        rng: &mut DungeonRng,
    ) -> Option<Vec<Cell>> {
        let grid = self.grid;
        let start_idx = grid.index(start)?;
        if start == target {
            return Some(Vec::new());
        }

        let mut prev: Vec<Option<usize>> = vec![None; grid.len()];
        let mut seen = CellMask::new(grid);
        seen.insert(start);
        let mut queue = VecDeque::from([start]);
        let mut dirs = CARDINALS;

        while let Some(c) = queue.pop_front() {
            rng.shuffle(&mut dirs);
            for (dx, dy) in dirs {
                let n = c.offset(dx, dy);
                let Some(n_idx) = grid.index(n) else {
                    continue;
                };
                if seen.contains(n) || (n != target && blocked.contains(n)) {
                    continue;
                }

                seen.insert(n);
                prev[n_idx] = grid.index(c);

                if n == target {
                    return Some(self.trace_back(&prev, start_idx, n_idx));
                }
                queue.push_back(n);
            }
        }

        None
    }

    fn trace_back(&self, prev: &[Option<usize>], start_idx: usize, target_idx: usize) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut cur = Some(target_idx);
        while let Some(i) = cur {
            if i == start_idx {
                break;
            }
            path.extend(self.grid.cell_at(i));
            cur = prev[i];
        }
        path.reverse();
        path
    }

    /// Paint the square of radius `width / 2` around `center` as corridor
    ///
    /// Cells that are out of bounds, blocked or already occupied are
    /// skipped.
    pub fn carve(&self, dungeon: &mut Dungeon, center: Cell, blocked: &CellMask) {
        let r = self.width / 2;
        for dy in -r..=r {
            for dx in -r..=r {
                let c = center.offset(dx, dy);
                if !blocked.contains(c) {
                    dungeon.paint(c, Tile::Corridor);
                }
            }
        }
    }
}
