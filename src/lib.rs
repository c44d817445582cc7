//! dropgrid - match-3 grid simulation core
//!
//! A pure, synchronously steppable state machine for a tile-matching
//! puzzle: adjacent-cell swaps, detection of 3+ same-color runs (including
//! L/T shapes), clearing, gravity-driven refill through per-column
//! spawners, and cascading resolution until the board is quiescent.
//!
//! The crate is a library with no rendering, input, timing, or I/O: a host
//! presentation layer calls [`GridState::request_swap`] and
//! [`GridState::tick`], and animates the [`GridEvent`] lists they return
//! at whatever pace it chooses.
//!
//! ```
//! use dropgrid::{GridConfig, GridState, Pos};
//!
//! let mut grid = GridState::new(GridConfig::default()).unwrap();
//! let fill_events = grid.start_fill();
//! assert!(grid.is_quiescent() && !fill_events.is_empty());
//!
//! grid.request_swap(Pos::new(0, 7), Pos::new(1, 7));
//! grid.run_until_idle();
//! assert!(grid.is_quiescent());
//! ```

pub mod core;
pub mod types;

pub use crate::core::{find_match, Board, GridSnapshot, GridState, MatchSet, SimpleRng};
pub use crate::types::{
    Cell, CellKind, ConfigError, DropColor, GridConfig, GridEvent, Phase, Pos,
};
