//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole rule engine: the board, the physics and
//! actor passes, explosions, player movement, level loading, and round
//! state. It does no I/O beyond reading level files and emits no frames;
//! frontends consume [`GameSnapshot`] copies and feed commands back.
//!
//! - **Deterministic**: one seed replays one game; the only randomness
//!   is the slide-side coin flip behind the [`SlideRng`] seam
//! - **Testable**: every pass is a plain function over [`Board`]
//! - **Portable**: runs headless, in a terminal, or under a test harness
//!
//! # Module Structure
//!
//! - [`board`]: 40x22 grid with per-cell transient flags
//! - [`physics`]: gravity pass for Rocks and Diamonds
//! - [`actors`]: wall-following AI pass for Boxes and Flies
//! - [`explosion`]: 3x3 blasts and the per-tick debris sweep
//! - [`hero`]: player movement, pushing, collection
//! - [`level`]: level text format, validation, store with fallback
//! - [`game_state`]: round state and tick orchestration
//! - [`rng`]: seedable LCG behind the injectable coin-flip trait
//! - [`snapshot`]: render-facing state copies
//!
//! # Example
//!
//! ```
//! use tui_boulder_core::{GameState, LevelStore};
//! use tui_boulder_types::{Command, Direction};
//!
//! let mut game = GameState::new(LevelStore::builtin(), 12345);
//! game.start().unwrap();
//!
//! game.apply_command(Command::Move(Direction::East));
//! game.tick();
//!
//! assert!(!game.game_over());
//! ```

pub mod actors;
pub mod board;
pub mod explosion;
pub mod game_state;
pub mod hero;
pub mod level;
pub mod physics;
pub mod rng;
pub mod snapshot;

pub use tui_boulder_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, CellState};
pub use game_state::GameState;
pub use hero::{HeroError, MoveOutcome};
pub use level::{Level, LevelError, LevelStore, MalformedLevel};
pub use rng::{FixedRng, SimpleRng, SlideRng};
pub use snapshot::GameSnapshot;
