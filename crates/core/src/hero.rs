//! Hero module - player movement, pushing and collection
//!
//! `move_hero` resolves one movement intent against the board: collect
//! a diamond, push a rock sideways, detonate an adjacent actor, or walk
//! into an open cell. It reports what happened through [`MoveOutcome`]
//! so the round state can request the right sound and update its
//! timestamps; it never touches anything beyond the board and the
//! diamond counter.
//!
//! The move mode is passed in per call. `Ghost` resolves the move by
//! clearing the target cell without relocating the hero; the caller is
//! expected to arm it for a single invocation only.

use thiserror::Error;

use crate::board::Board;
use crate::explosion;
use crate::types::{MoveMode, Tile, GRID_HEIGHT, GRID_WIDTH};

/// Internal consistency error: the board holds no hero.
///
/// Callers check round-alive state before issuing moves, so hitting this
/// means the caller's bookkeeping is wrong, not the player's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeroError {
    #[error("no hero on the board")]
    NoHero,
}

/// What a hero move did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The hero entered the target cell (or cleared it, in ghost mode).
    pub entered: bool,
    /// A diamond was collected.
    pub collected: bool,
    /// The move detonated a Box or a Fly.
    pub exploded: bool,
}

/// Resolve one movement intent of `(dr, dc)`, a unit vector.
pub fn move_hero(
    board: &mut Board,
    dr: i32,
    dc: i32,
    mode: MoveMode,
    diamonds: &mut u32,
) -> Result<MoveOutcome, HeroError> {
    let (row, col) = board.find(Tile::Hero).ok_or(HeroError::NoHero)?;

    let tr = row as i32 + dr;
    let tc = col as i32 + dc;
    let mut outcome = MoveOutcome::default();
    let mut target = board.get(tr as usize, tc as usize);

    match target {
        Tile::Diamond => {
            *diamonds = diamonds.saturating_sub(1);
            outcome.collected = true;
        }
        Tile::Rock => {
            // Rocks push only horizontally, and only into an open cell.
            if dc != 0 {
                let behind = tc + dc;
                if board.get(tr as usize, behind as usize) == Tile::Tunnel {
                    board.set(tr as usize, tc as usize, Tile::Tunnel);
                    board.set(tr as usize, behind as usize, Tile::Rock);
                }
            }
            target = board.get(tr as usize, tc as usize);
        }
        Tile::Box => {
            explosion::trigger(board, Tile::Crash, tr as usize, tc as usize);
            outcome.exploded = true;
            return Ok(outcome);
        }
        Tile::Fly => {
            explosion::trigger(board, Tile::Diamond, tr as usize, tc as usize);
            outcome.exploded = true;
            return Ok(outcome);
        }
        _ => {}
    }

    let in_bounds =
        tr >= 0 && tc >= 0 && (tr as usize) < GRID_HEIGHT && (tc as usize) < GRID_WIDTH;
    let passable = !matches!(target, Tile::Wall | Tile::Rock | Tile::Metal)
        && (target != Tile::Door || *diamonds == 0);

    if in_bounds && passable {
        match mode {
            MoveMode::Real => {
                board.set(row, col, Tile::Tunnel);
                board.set(tr as usize, tc as usize, Tile::Hero);
            }
            MoveMode::Ghost => {
                // Interact without moving: the target cell is consumed.
                board.set(tr as usize, tc as usize, Tile::Tunnel);
            }
        }
        outcome.entered = true;
    }

    Ok(outcome)
}
