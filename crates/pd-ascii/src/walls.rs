//! Display-only wall inference

use pd_core::Dungeon;
use pd_core::dungeon::Tile;

/// Tile buffer with walls around everything carved
///
/// Every `Empty` cell with a floor, corridor or door 4-neighbor becomes
/// [`Tile::Wall`]. The result is in grid index order; the dungeon is not
/// modified.
pub fn infer_walls(dungeon: &Dungeon) -> Vec<Tile> {
    let grid = dungeon.grid();
    grid.cells()
        .map(|c| {
            let tile = dungeon.at(c);
            if tile.is_empty() && c.neighbors().iter().any(|&n| dungeon.at(n).is_walkable()) {
                Tile::Wall
            } else {
                tile
            }
        })
        .collect()
}
