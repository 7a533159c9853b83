//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. The game view draws
//! into a plain framebuffer; the renderer diffs consecutive frames and
//! flushes only the changed runs to the terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Make the view itself pure so it can be asserted on in tests
//! - Control aspect ratio precisely (2 chars wide per grid cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_boulder_core as core;
pub use tui_boulder_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
