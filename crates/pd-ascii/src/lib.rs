//! pd-ascii: text rendering for pd-core dungeons
//!
//! Draws a finished [`pd_core::Dungeon`] as rows of glyphs, optionally
//! colored for a terminal. Walls are inferred here for display only.

pub mod render;
pub mod walls;

pub use render::{AsciiRenderer, START_GLYPH, room_summary};
pub use walls::infer_walls;
