//! ASCII rendering

use std::fmt::Write;

use crossterm::style::{Color, Stylize};

use pd_core::Dungeon;
use pd_core::dungeon::{Cell, Tile};

use crate::walls::infer_walls;

/// Drawn on corridor entry points and on frame cells next to them
pub const START_GLYPH: char = '*';

/// Renders dungeons as text, top row first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiRenderer {
    /// Emit ANSI color codes
    pub color: bool,
    /// Surround the grid with a one-cell wall frame
    pub border: bool,
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self {
            color: false,
            border: true,
        }
    }
}

impl AsciiRenderer {
    pub fn new(color: bool, border: bool) -> Self {
        Self { color, border }
    }

    /// Every row ends with a newline; every glyph is followed by a space
    pub fn render(&self, dungeon: &Dungeon) -> String {
        let grid = dungeon.grid();
        let tiles = infer_walls(dungeon);
        let pad = i32::from(self.border);

        let mut out = String::new();
        for y in (grid.min_y - pad..=grid.max_y + pad).rev() {
            for x in grid.min_x - pad..=grid.max_x + pad {
                let c = Cell::new(x, y);
                let (ch, color) = match grid.index(c) {
                    _ if dungeon.starts.contains(&c) => (START_GLYPH, Color::Green),
                    Some(i) => tile_display(tiles[i]),
                    None if touches_start(dungeon, c) => (START_GLYPH, Color::Green),
                    None => tile_display(Tile::Wall),
                };
                self.push_glyph(&mut out, ch, color);
            }
            out.push('\n');
        }
        out
    }

    fn push_glyph(&self, out: &mut String, ch: char, color: Color) {
        if self.color {
            let _ = write!(out, "{} ", ch.with(color));
        } else {
            out.push(ch);
            out.push(' ');
        }
    }
}

fn tile_display(tile: Tile) -> (char, Color) {
    let color = match tile {
        Tile::Empty => Color::Reset,
        Tile::RoomFloor => Color::White,
        Tile::Corridor => Color::DarkGrey,
        Tile::Door => Color::Yellow,
        Tile::Wall => Color::Grey,
    };
    (tile.symbol(), color)
}

fn touches_start(dungeon: &Dungeon, c: Cell) -> bool {
    c.neighbors().iter().any(|n| dungeon.starts.contains(n))
}

/// One line per room: index, shape, bounding box, area and link state
pub fn room_summary(dungeon: &Dungeon) -> String {
    let mut out = String::new();
    for (i, (room, link)) in dungeon.rooms.iter().zip(&dungeon.links).enumerate() {
        let _ = writeln!(
            out,
            "room {i}: {} {}..{} area {} ({link})",
            room.shape,
            room.top_left,
            room.bottom_right,
            room.area()
        );
    }
    out
}
