//! Snapshot module - render-facing copy of the game state
//!
//! The renderer never borrows into the engine; it gets a flat copy of
//! the tile grid plus the HUD fields once per frame.

use crate::types::{HeroFacing, Tile, GRID_HEIGHT, GRID_WIDTH};

/// Everything a frontend needs to draw one frame.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    pub tiles: [[Tile; GRID_WIDTH]; GRID_HEIGHT],
    pub facing: HeroFacing,
    /// Current level, 0-based. The HUD shows it 1-based.
    pub level: usize,
    /// Diamonds still required to open the door.
    pub diamonds: u32,
    /// Countdown seconds left.
    pub time: i32,
    pub sound_enabled: bool,
    /// Hero position, or the last known one once killed. Drives the
    /// scrolling camera.
    pub hero_pos: (usize, usize),
    /// True for the first second after a level loads; the view shows
    /// an intro banner while it holds.
    pub level_banner: bool,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.facing == HeroFacing::Killed
    }
}
