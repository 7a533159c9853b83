//! Physics module - gravity for Rocks and Diamonds
//!
//! One `step` advances every heavy object at most one cell. The scan
//! runs from the bottom row upward so an object that moves down is not
//! reprocessed in the same pass, and alternates direction per row (odd
//! rows right-to-left, even rows left-to-right) so cascades pick up no
//! systematic left/right bias. A blocked object first tries a diagonal
//! slide to a randomly chosen side; the side choice is the engine's only
//! randomness and comes from the injected [`SlideRng`].
//!
//! Lethality is cross-tick: an object crushes the hero only if it was
//! already in motion when the pass began, meaning its cell still carries
//! the `falling` flag set by the previous pass. An object that merely
//! starts the tick resting on the hero's head is harmless.

use crate::board::Board;
use crate::explosion;
use crate::rng::SlideRng;
use crate::types::{Tile, GRID_HEIGHT, GRID_WIDTH};

/// Advance all Rocks and Diamonds one physics step.
///
/// Returns true if any collision raised an explosion, so the caller can
/// request the explosion sound.
pub fn step(board: &mut Board, rng: &mut impl SlideRng) -> bool {
    let mut exploded = false;

    for row in (1..=GRID_HEIGHT - 2).rev() {
        if row % 2 == 1 {
            for col in (1..GRID_WIDTH - 1).rev() {
                exploded |= step_cell(board, rng, row, col);
            }
        } else {
            for col in 1..GRID_WIDTH - 1 {
                exploded |= step_cell(board, rng, row, col);
            }
        }
    }

    exploded
}

fn step_cell(board: &mut Board, rng: &mut impl SlideRng, row: usize, col: usize) -> bool {
    if !board.get(row, col).is_heavy() {
        return false;
    }

    let mut exploded = false;

    // Blocked below: try to roll off to one side.
    if board.get(row + 1, col).blocks_fall() {
        let side = if rng.coin() { 1i32 } else { -1i32 };
        slide(board, row, col, side);
    }

    // Free fall.
    if board.get(row + 1, col) == Tile::Tunnel && board.get(row, col).is_heavy() {
        let kind = board.get(row, col);
        board.set(row + 1, col, kind);
        board.set(row, col, Tile::Tunnel);
        board.set_falling(row + 1, col, true);
    }

    // Impact on whatever now sits below the original position. The hero
    // check reads the source cell's flag, i.e. whether the object was
    // already falling when this pass began.
    let below = board.get(row + 1, col);
    if below == Tile::Hero && board.falling(row, col) {
        explosion::trigger(board, Tile::Crash, row + 1, col);
        exploded = true;
    }
    if below == Tile::Box {
        explosion::trigger(board, Tile::Crash, row + 1, col);
        exploded = true;
    }
    if below == Tile::Fly {
        explosion::trigger(board, Tile::Diamond, row + 1, col);
        exploded = true;
    }

    // The flag now lives only on the destination, if the object moved.
    board.set_falling(row, col, false);

    exploded
}

/// Diagonal slide: both the side cell and the cell below it must be
/// open, otherwise the object stays put.
fn slide(board: &mut Board, row: usize, col: usize, side: i32) {
    let c = (col as i32 + side) as usize;
    if board.get(row, c) == Tile::Tunnel && board.get(row + 1, c) == Tile::Tunnel {
        board.set(row, c, board.get(row, col));
        board.set(row, col, Tile::Tunnel);
        board.set_falling(row, c, true);
    }
}
