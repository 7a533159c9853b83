//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental vocabulary of the game. All types
//! are pure data structures with no external dependencies, so they can be
//! used from the rule engine, the input layer, and the renderer alike.
//!
//! # Grid Dimensions
//!
//! The level grid is fixed-size:
//!
//! - **Width**: 40 columns (indexed 0-39)
//! - **Height**: 22 rows (indexed 0-21)
//! - The outermost ring is always impassable (Wall or Metal), which is
//!   enforced by the level loader. Engine code relies on this to read
//!   neighbor cells without bounds checks.
//!
//! # Timing Constants
//!
//! The simulation runs two cadences off one fixed timestep:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `TICKS_PER_SECOND` | 60 | Full-rate ticks per countdown second |
//! | `PHYSICS_INTERVAL` | 12 | Full-rate ticks between physics passes |
//! | `IDLE_FIDGET_SECS` | 5 | Idle seconds before the hero starts fidgeting |
//!
//! # Tile Codes
//!
//! Level files encode tiles as single digits:
//!
//! | Digit | Tile |
//! |-------|------|
//! | 0 | Tunnel |
//! | 1 | Wall |
//! | 2 | Hero |
//! | 3 | Rock |
//! | 4 | Diamond |
//! | 5 | Ground |
//! | 6 | Metal |
//! | 7 | Box |
//! | 8 | Door |
//! | 9 | Fly |
//!
//! `Crash` has no file encoding; it only appears at runtime as blast
//! debris and is swept one physics tick later.

/// Grid width in cells (40 columns)
pub const GRID_WIDTH: usize = 40;

/// Grid height in cells (22 rows)
pub const GRID_HEIGHT: usize = 22;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Full-rate ticks per countdown second
pub const TICKS_PER_SECOND: u32 = 60;

/// Full-rate ticks between physics passes (gravity + actor AI)
pub const PHYSICS_INTERVAL: u32 = 12;

/// Seconds of inactivity before the idle animation alternates
pub const IDLE_FIDGET_SECS: i32 = 5;

/// The eleven tile kinds that can occupy a grid cell
///
/// - **Tunnel**: empty, freely walkable
/// - **Wall / Metal**: impassable; Metal additionally resists explosions
/// - **Rock / Diamond**: gravity-affected; Diamond is the collectible goal
/// - **Ground**: diggable filler the hero walks through
/// - **Box / Fly**: autonomous wall-following actors
/// - **Door**: exit, passable only once all required diamonds are collected
/// - **Crash**: transient blast debris, swept one physics tick after creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Tunnel,
    Wall,
    Hero,
    Rock,
    Diamond,
    Ground,
    Metal,
    Box,
    Door,
    Fly,
    Crash,
}

impl Tile {
    /// Parse a tile from its level-file digit
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_boulder_types::Tile;
    ///
    /// assert_eq!(Tile::from_digit('0'), Some(Tile::Tunnel));
    /// assert_eq!(Tile::from_digit('4'), Some(Tile::Diamond));
    /// assert_eq!(Tile::from_digit('x'), None);
    /// ```
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Tile::Tunnel),
            '1' => Some(Tile::Wall),
            '2' => Some(Tile::Hero),
            '3' => Some(Tile::Rock),
            '4' => Some(Tile::Diamond),
            '5' => Some(Tile::Ground),
            '6' => Some(Tile::Metal),
            '7' => Some(Tile::Box),
            '8' => Some(Tile::Door),
            '9' => Some(Tile::Fly),
            _ => None,
        }
    }

    /// The level-file digit for this tile, if it has one
    ///
    /// `Crash` is runtime-only and returns `None`.
    pub fn as_digit(&self) -> Option<char> {
        match self {
            Tile::Tunnel => Some('0'),
            Tile::Wall => Some('1'),
            Tile::Hero => Some('2'),
            Tile::Rock => Some('3'),
            Tile::Diamond => Some('4'),
            Tile::Ground => Some('5'),
            Tile::Metal => Some('6'),
            Tile::Box => Some('7'),
            Tile::Door => Some('8'),
            Tile::Fly => Some('9'),
            Tile::Crash => None,
        }
    }

    /// True for tiles subject to gravity (Rock and Diamond)
    pub fn is_heavy(&self) -> bool {
        matches!(self, Tile::Rock | Tile::Diamond)
    }

    /// True for the autonomous wall-following actors (Box and Fly)
    pub fn is_actor(&self) -> bool {
        matches!(self, Tile::Box | Tile::Fly)
    }

    /// True for tiles a falling object cannot pass through
    ///
    /// A Rock or Diamond resting on one of these tries to slide sideways
    /// instead of falling.
    pub fn blocks_fall(&self) -> bool {
        matches!(
            self,
            Tile::Rock | Tile::Diamond | Tile::Wall | Tile::Door | Tile::Metal
        )
    }
}

/// Movement headings for the wall-following actors
///
/// The preference cycle goes clockwise: North → East → South → West.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Rotate clockwise (90°)
    pub fn cw(&self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn ccw(&self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// The opposite heading (180°)
    pub fn opposite(&self) -> Self {
        self.cw().cw()
    }

    /// Unit (row, col) offset for one step in this direction
    ///
    /// Row 0 is the top of the grid, so North is `(-1, 0)`.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

/// Hero facing / animation state
///
/// `Killed` is terminal and absorbing until an explicit restart.
/// `Neutral1`/`Neutral2` alternate while the player is idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroFacing {
    Killed,
    Neutral1,
    Neutral2,
    Right,
    Left,
}

/// How the next hero move resolves
///
/// `Ghost` discards the target cell's contents without relocating the
/// hero. It is one-shot: the mode reverts to `Real` after a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMode {
    Real,
    Ghost,
}

/// Sound event requested by the engine, consumed once per loop iteration
///
/// Only one event is pending at a time; the last request wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEvent {
    Move,
    Collect,
    Explosion,
}

/// Commands on the engine's input surface
///
/// Invalid or currently-blocked commands are ignored, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the hero one cell in the given direction
    Move(Direction),
    /// Arm ghost mode for the next move; restarts the level while killed
    GhostInteract,
    /// Toggle the sound-enabled flag
    ToggleSound,
    /// Skip ahead to the next level
    NextLevel,
    /// Go back to the previous level
    PreviousLevel,
    /// Reload the current level
    Restart,
    /// Blow up the hero (debug)
    KillSelf,
    /// Put the hero back at its last known position (debug)
    RespawnAtLastPosition,
    /// Refill the countdown timer (debug)
    ResetTimer,
    /// Leave the game
    Quit,
}
