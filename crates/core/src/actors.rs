//! Actors module - wall-following AI for Boxes and Flies
//!
//! Both actor kinds share one movement rule. Every physics tick each
//! actor tries, in order: the counterclockwise neighbor of its current
//! heading, the heading itself, the clockwise neighbor, and finally the
//! reverse. The first direction that works wins. Hugging the left wall
//! this way keeps actors patrolling cave perimeters instead of jittering.
//!
//! The pass is two-phase: first every `actor_moved` flag is cleared,
//! then the grid is scanned bottom-to-top, left-to-right. An actor that
//! has already been relocated this tick carries the flag and is skipped,
//! so nothing moves twice in one pass.

use crate::board::Board;
use crate::explosion;
use crate::types::{Direction, Tile, GRID_HEIGHT, GRID_WIDTH};

enum Outcome {
    Blocked,
    Moved,
    Exploded,
}

/// Advance every Box and Fly one step.
///
/// Returns true if any actor reached the hero and blew up.
pub fn step(board: &mut Board) -> bool {
    for row in 1..GRID_HEIGHT - 1 {
        for col in 1..GRID_WIDTH - 1 {
            board.set_actor_moved(row, col, false);
        }
    }

    let mut exploded = false;

    for row in (1..=GRID_HEIGHT - 2).rev() {
        for col in 1..GRID_WIDTH - 1 {
            if !board.get(row, col).is_actor() || board.actor_moved(row, col) {
                continue;
            }

            let heading = board.heading(row, col);
            for d in [heading.ccw(), heading, heading.cw(), heading.opposite()] {
                match try_step(board, row, col, d) {
                    Outcome::Blocked => continue,
                    Outcome::Moved => break,
                    Outcome::Exploded => {
                        exploded = true;
                        break;
                    }
                }
            }
        }
    }

    exploded
}

fn try_step(board: &mut Board, row: usize, col: usize, d: Direction) -> Outcome {
    let (dr, dc) = d.delta();
    let r = (row as i32 + dr) as usize;
    let c = (col as i32 + dc) as usize;

    if board.get(r, c) == Tile::Hero {
        // Boxes leave ordinary debris, Flies shatter into diamonds.
        let debris = if board.get(row, col) == Tile::Box {
            Tile::Crash
        } else {
            Tile::Diamond
        };
        explosion::trigger(board, debris, r, c);
        return Outcome::Exploded;
    }

    if board.get(r, c) == Tile::Tunnel {
        let kind = board.get(row, col);
        board.set(r, c, kind);
        board.set(row, col, Tile::Tunnel);
        board.set_actor_moved(r, c, true);
        board.set_heading(r, c, d);
        return Outcome::Moved;
    }

    Outcome::Blocked
}
