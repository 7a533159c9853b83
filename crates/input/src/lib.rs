//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Command`] values for the
//! engine. There is no auto-repeat machinery: one key press is one
//! one-cell move, which is the game's native pace.

pub mod map;

pub use tui_boulder_types as types;

pub use map::{handle_key_event, should_quit};
