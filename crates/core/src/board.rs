//! Board module - the 40x22 grid and its per-cell transient flags
//!
//! Each cell is an explicit record of the tile kind plus the cross-tick
//! bookkeeping the physics and actor passes need: the `falling` flag
//! (was this Rock/Diamond set by a fall this tick), the `actor_moved`
//! flag (was this Box/Fly relocated here this tick), and the actor's
//! last `heading`.
//!
//! All accessors take grid-valid coordinates. The level loader guarantees
//! an impassable outer ring, so engine code can read any neighbor of an
//! interior cell without bounds checks.

use crate::types::{Direction, Tile, GRID_HEIGHT, GRID_WIDTH};

/// One grid cell: tile kind plus transient engine flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellState {
    pub kind: Tile,
    /// Set when a Rock/Diamond was moved into this cell by the gravity
    /// pass. Cross-tick memory: an object landing on the hero is lethal
    /// only if its source cell still carried this flag from the previous
    /// pass.
    pub falling: bool,
    /// Set when a Box/Fly was relocated into this cell during the current
    /// actor pass, so one pass never moves the same actor twice.
    pub actor_moved: bool,
    /// Last movement direction of the Box/Fly in this cell.
    pub heading: Direction,
}

impl Default for CellState {
    fn default() -> Self {
        Self {
            kind: Tile::Tunnel,
            falling: false,
            actor_moved: false,
            heading: Direction::North,
        }
    }
}

/// The fixed-size game grid.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [[CellState; GRID_WIDTH]; GRID_HEIGHT],
}

impl Board {
    /// Create an all-Tunnel board.
    pub fn new() -> Self {
        Self {
            cells: [[CellState::default(); GRID_WIDTH]; GRID_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        GRID_WIDTH
    }

    pub fn height(&self) -> usize {
        GRID_HEIGHT
    }

    /// Tile kind at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[row][col].kind
    }

    /// Overwrite the tile kind at (row, col).
    pub fn set(&mut self, row: usize, col: usize, kind: Tile) {
        self.cells[row][col].kind = kind;
    }

    pub fn falling(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].falling
    }

    pub fn set_falling(&mut self, row: usize, col: usize, v: bool) {
        self.cells[row][col].falling = v;
    }

    pub fn actor_moved(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].actor_moved
    }

    pub fn set_actor_moved(&mut self, row: usize, col: usize, v: bool) {
        self.cells[row][col].actor_moved = v;
    }

    pub fn heading(&self, row: usize, col: usize) -> Direction {
        self.cells[row][col].heading
    }

    pub fn set_heading(&mut self, row: usize, col: usize, d: Direction) {
        self.cells[row][col].heading = d;
    }

    /// Find the first cell holding `kind`, scanning the interior top to
    /// bottom, left to right.
    ///
    /// The border ring is skipped: it never holds game objects.
    pub fn find(&self, kind: Tile) -> Option<(usize, usize)> {
        for row in 1..GRID_HEIGHT - 1 {
            for col in 1..GRID_WIDTH - 1 {
                if self.cells[row][col].kind == kind {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// True if any interior cell holds `kind`.
    pub fn contains(&self, kind: Tile) -> bool {
        self.find(kind).is_some()
    }

    /// Number of interior cells holding `kind`.
    pub fn count(&self, kind: Tile) -> usize {
        let mut n = 0;
        for row in 1..GRID_HEIGHT - 1 {
            for col in 1..GRID_WIDTH - 1 {
                if self.cells[row][col].kind == kind {
                    n += 1;
                }
            }
        }
        n
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
