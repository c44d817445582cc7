//! Core module - pure simulation logic
//!
//! This module contains all the grid rules, state management, and the
//! resolution loop. It performs no I/O; hosts drive it tick by tick and
//! consume the event lists it returns.

pub mod board;
pub mod game_state;
pub mod gravity;
pub mod matching;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game_state::GridState;
pub use matching::{find_match, MatchSet};
pub use rng::SimpleRng;
pub use snapshot::GridSnapshot;
