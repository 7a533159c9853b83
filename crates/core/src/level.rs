//! Level module - the level text format, validation and the store
//!
//! A level file is a list of 40-character rows of digit tile codes plus
//! two directive lines:
//!
//! ```text
//! # comment lines and blank lines are skipped
//! .d=12        diamonds required to open the door
//! .t=150       countdown seconds for the round
//! 6666666666...
//! 6555035540...
//! ```
//!
//! The parser validates everything the engine depends on: exactly 40
//! columns per row, exactly 22 rows, and a fully impassable outer ring.
//! Violations surface at load time as [`LevelError::Malformed`]; the
//! engine itself never bounds-checks mid-tick.
//!
//! [`LevelStore`] resolves level numbers to level text, either from the
//! embedded built-in set or from `<dir>/<n>.lvl` on disk, and applies
//! the bounded fallback policy: a missing level other than the first
//! falls back to the first, once. A missing or malformed first level is
//! the caller's problem.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::board::Board;
use crate::types::{Tile, GRID_HEIGHT, GRID_WIDTH};

/// Built-in levels, compiled into the binary so the game runs without
/// any data files on disk.
const BUILTIN_LEVELS: &[&str] = &[
    include_str!("../../../levels/1.lvl"),
    include_str!("../../../levels/2.lvl"),
    include_str!("../../../levels/3.lvl"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level {0} not found")]
    NotFound(usize),
    #[error("malformed level data: {0}")]
    Malformed(#[from] MalformedLevel),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedLevel {
    #[error("grid row {row} has {len} columns, expected {expected}")]
    RowLength {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("unknown tile code {code:?} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, code: char },
    #[error("level does not have the full 22 grid rows (found {0})")]
    RowCount(usize),
    #[error("border is open at row {row}, column {col}")]
    OpenBorder { row: usize, col: usize },
    #[error("bad directive line {0:?}")]
    Directive(String),
}

/// A parsed level: the initial grid plus the round parameters.
#[derive(Debug, Clone)]
pub struct Level {
    pub tiles: [[Tile; GRID_WIDTH]; GRID_HEIGHT],
    pub diamonds_required: u32,
    pub time_total: i32,
}

impl Level {
    /// Parse level text. See the module docs for the format.
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let mut tiles = [[Tile::Tunnel; GRID_WIDTH]; GRID_HEIGHT];
        let mut diamonds_required = 0u32;
        let mut time_total = 0i32;
        let mut row = 0usize;

        for line in text.lines() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(directive) = line.strip_prefix('.') {
                match directive.split_once('=') {
                    Some(("d", v)) => {
                        diamonds_required = v
                            .trim()
                            .parse()
                            .map_err(|_| MalformedLevel::Directive(line.to_string()))?;
                    }
                    Some(("t", v)) => {
                        time_total = v
                            .trim()
                            .parse()
                            .map_err(|_| MalformedLevel::Directive(line.to_string()))?;
                    }
                    _ => return Err(MalformedLevel::Directive(line.to_string()).into()),
                }
                continue;
            }

            if row >= GRID_HEIGHT {
                return Err(MalformedLevel::RowCount(row + 1).into());
            }

            let len = line.chars().count();
            if len != GRID_WIDTH {
                return Err(MalformedLevel::RowLength {
                    row,
                    len,
                    expected: GRID_WIDTH,
                }
                .into());
            }

            for (col, code) in line.chars().enumerate() {
                tiles[row][col] = Tile::from_digit(code)
                    .ok_or(MalformedLevel::UnknownTile { row, col, code })?;
            }
            row += 1;
        }

        if row != GRID_HEIGHT {
            return Err(MalformedLevel::RowCount(row).into());
        }

        check_border(&tiles)?;

        Ok(Self {
            tiles,
            diamonds_required,
            time_total,
        })
    }

    /// Materialize a fresh board from the parsed grid.
    ///
    /// Transient flags start cleared and every heading starts North.
    pub fn build_board(&self) -> Board {
        let mut board = Board::new();
        for (row, line) in self.tiles.iter().enumerate() {
            for (col, &tile) in line.iter().enumerate() {
                board.set(row, col, tile);
            }
        }
        board
    }
}

/// The outer ring must be Wall or Metal so neighbor reads one cell out
/// from any interior cell stay on the grid.
fn check_border(tiles: &[[Tile; GRID_WIDTH]; GRID_HEIGHT]) -> Result<(), MalformedLevel> {
    for row in 0..GRID_HEIGHT {
        for col in 0..GRID_WIDTH {
            let on_ring = row == 0 || row == GRID_HEIGHT - 1 || col == 0 || col == GRID_WIDTH - 1;
            if on_ring && !matches!(tiles[row][col], Tile::Wall | Tile::Metal) {
                return Err(MalformedLevel::OpenBorder { row, col });
            }
        }
    }
    Ok(())
}

/// Resolves level numbers (0-based) to parsed levels.
#[derive(Debug, Clone)]
pub struct LevelStore {
    dir: Option<PathBuf>,
}

impl LevelStore {
    /// Store backed by the embedded built-in levels.
    pub fn builtin() -> Self {
        Self { dir: None }
    }

    /// Store backed by `<dir>/<n>.lvl` files (1-based file names, as the
    /// original data set used).
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Load and parse one level.
    pub fn load(&self, level: usize) -> Result<Level, LevelError> {
        match &self.dir {
            Some(dir) => {
                let path = dir.join(format!("{}.lvl", level + 1));
                let text = fs::read_to_string(&path).map_err(|_| LevelError::NotFound(level))?;
                Level::parse(&text)
            }
            None => {
                let text = BUILTIN_LEVELS
                    .get(level)
                    .ok_or(LevelError::NotFound(level))?;
                Level::parse(text)
            }
        }
    }

    /// Load `level`, falling back to the first level at most once if the
    /// requested one is missing.
    ///
    /// Returns the level number actually loaded alongside the data.
    /// Malformed data never falls back; it is a data bug, not a missing
    /// file. If the first level itself is missing the error propagates and
    /// the round is left untouched.
    pub fn load_with_fallback(&self, level: usize) -> Result<(usize, Level), LevelError> {
        match self.load(level) {
            Ok(data) => Ok((level, data)),
            Err(LevelError::NotFound(_)) if level != 0 => {
                log::warn!("level {} not found, falling back to level 0", level);
                self.load(0).map(|data| (0, data))
            }
            Err(e) => Err(e),
        }
    }
}
