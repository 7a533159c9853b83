//! TUI Boulder (workspace facade crate).
//!
//! This package keeps a stable `tui_boulder::{core,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_boulder_core as core;
pub use tui_boulder_input as input;
pub use tui_boulder_term as term;
pub use tui_boulder_types as types;
