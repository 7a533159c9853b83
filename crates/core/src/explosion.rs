//! Explosion module - blast materialization and the per-tick sweep
//!
//! A blast overwrites the 3x3 block around its center with a debris
//! tile: `Crash` for ordinary explosions, `Diamond` when a Fly is
//! destroyed (Flies shatter into collectibles). Metal cells resist the
//! blast and are left untouched.
//!
//! `clear` runs first in every physics pass, so debris is visible for
//! exactly one full physics tick before it is swept back to Tunnel.

use crate::board::Board;
use crate::types::{Tile, GRID_HEIGHT, GRID_WIDTH};

/// Overwrite the 3x3 block centered on (row, col) with `debris`.
///
/// The caller must point at an interior cell; the impassable border
/// keeps the 3x3 block on the grid. Metal is indestructible.
pub fn trigger(board: &mut Board, debris: Tile, row: usize, col: usize) {
    for r in row - 1..=row + 1 {
        for c in col - 1..=col + 1 {
            if board.get(r, c) != Tile::Metal {
                board.set(r, c, debris);
            }
        }
    }
}

/// Sweep all Crash debris back to Tunnel.
///
/// Idempotent: a second call in a row finds nothing to do.
pub fn clear(board: &mut Board) {
    for r in 0..GRID_HEIGHT {
        for c in 0..GRID_WIDTH {
            if board.get(r, c) == Tile::Crash {
                board.set(r, c, Tile::Tunnel);
            }
        }
    }
}
