//! Core types shared across the crate
//! This module contains pure data types with no game logic

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest supported value for either grid dimension.
///
/// Match run buffers are stack-allocated against this bound, so it doubles
/// as the capacity cap for `matching::MatchSet`.
pub const MAX_GRID_DIM: usize = 32;

/// Default grid dimensions (the original scene ships an 8x8 grid)
pub const DEFAULT_COLS: u8 = 8;
pub const DEFAULT_ROWS: u8 = 8;

/// Default number of in-play colors
pub const DEFAULT_NUM_COLORS: u8 = DropColor::COUNT;

/// Colors a normal cell can take
///
/// The full palette is fixed; `GridConfig::num_colors` selects how many of
/// these (taken in declaration order) are actually spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Cyan,
}

impl DropColor {
    /// Number of palette entries
    pub const COUNT: u8 = 6;

    /// Palette index of this color, in `0..COUNT`
    pub fn index(self) -> u8 {
        match self {
            DropColor::Red => 0,
            DropColor::Green => 1,
            DropColor::Blue => 2,
            DropColor::Yellow => 3,
            DropColor::Purple => 4,
            DropColor::Cyan => 5,
        }
    }

    /// Inverse of [`index`](Self::index)
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(DropColor::Red),
            1 => Some(DropColor::Green),
            2 => Some(DropColor::Blue),
            3 => Some(DropColor::Yellow),
            4 => Some(DropColor::Purple),
            5 => Some(DropColor::Cyan),
            _ => None,
        }
    }

    /// Lowercase name, for logs and host display
    pub fn as_str(&self) -> &'static str {
        match self {
            DropColor::Red => "red",
            DropColor::Green => "green",
            DropColor::Blue => "blue",
            DropColor::Yellow => "yellow",
            DropColor::Purple => "purple",
            DropColor::Cyan => "cyan",
        }
    }
}

/// What occupies a grid slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Normal(DropColor),
}

/// A single grid slot: its occupant plus transient clear state
///
/// Movability, color and clearability are all derived from the kind tag;
/// only `Normal` cells have any of them. `clearing` is set the instant a
/// cell is released to empty and guards against the same cell being queued
/// for clearing twice within one sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub clearing: bool,
}

impl Cell {
    /// An empty slot (not movable, not matchable)
    pub const fn empty() -> Self {
        Self {
            kind: CellKind::Empty,
            clearing: false,
        }
    }

    /// A freshly spawned colored cell
    pub const fn normal(color: DropColor) -> Self {
        Self {
            kind: CellKind::Normal(color),
            clearing: false,
        }
    }

    /// Only normal cells move under gravity or by player swap
    pub fn is_movable(&self) -> bool {
        matches!(self.kind, CellKind::Normal(_))
    }

    /// Only normal cells participate in matches
    pub fn is_colored(&self) -> bool {
        matches!(self.kind, CellKind::Normal(_))
    }

    /// Only normal cells can be cleared
    pub fn is_clearable(&self) -> bool {
        matches!(self.kind, CellKind::Normal(_))
    }

    /// Color of the occupant, if any
    pub fn color(&self) -> Option<DropColor> {
        match self.kind {
            CellKind::Normal(color) => Some(color),
            CellKind::Empty => None,
        }
    }

    /// Snapshot/display code: 0 for empty, palette index + 1 otherwise
    pub fn color_code(&self) -> u8 {
        match self.kind {
            CellKind::Empty => 0,
            CellKind::Normal(color) => color.index() + 1,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

/// Grid coordinates: x in `[0, cols)`, y in `[0, rows)`
///
/// Row 0 is the spawn edge; gravity moves cells toward `y + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// One notification the simulation produced during a step
///
/// Returned synchronously from `request_swap`/`tick`; the host consumes
/// these to drive animation at its own pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridEvent {
    /// A cell travelled from one slot to another (fall, swap, or revert)
    CellMoved { from: Pos, to: Pos, color: DropColor },
    /// A matched cell was released to empty
    CellCleared { at: Pos, color: DropColor },
    /// A new cell entered at the spawn edge
    CellSpawned { at: Pos, color: DropColor },
}

/// Where the resolution loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a swap request
    Idle,
    /// Matched cells are pending release
    Clearing,
    /// Gravity passes are running until nothing moves
    Settling,
    /// Full-board match sweep is due
    Sweeping,
}

/// Board construction parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub cols: u8,
    pub rows: u8,
    /// How many palette entries spawns draw from, `2..=DropColor::COUNT`
    pub num_colors: u8,
    /// RNG seed for spawn colors
    pub seed: u32,
}

impl GridConfig {
    pub fn new(cols: u8, rows: u8, num_colors: u8, seed: u32) -> Self {
        Self {
            cols,
            rows,
            num_colors,
            seed,
        }
    }

    /// Check the parameters against the supported ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if self.cols as usize > MAX_GRID_DIM || self.rows as usize > MAX_GRID_DIM {
            return Err(ConfigError::DimensionTooLarge {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if self.num_colors < 2 || self.num_colors > DropColor::COUNT {
            return Err(ConfigError::BadPaletteSize {
                num_colors: self.num_colors,
            });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            num_colors: DEFAULT_NUM_COLORS,
            seed: 1,
        }
    }
}

/// Rejected grid configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero")]
    ZeroDimension,
    #[error("grid dimensions {cols}x{rows} exceed the supported maximum of {max}x{max}", max = MAX_GRID_DIM)]
    DimensionTooLarge { cols: u8, rows: u8 },
    #[error("palette size {num_colors} out of range 2..={}", DropColor::COUNT)]
    BadPaletteSize { num_colors: u8 },
}
