//! Read-only snapshots of the grid for host/render consumption
//!
//! The simulation owns the board exclusively; hosts on other threads get
//! value snapshots (or the event stream) instead of references.

use serde::{Deserialize, Serialize};

use crate::core::GridState;
use crate::types::Phase;

/// Value snapshot of one grid's externally observable state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub cols: u8,
    pub rows: u8,
    /// Row-major color codes: 0 = empty, palette index + 1 otherwise
    pub cells: Vec<u8>,
    /// Per-column spawn gates
    pub spawners: Vec<bool>,
    pub phase: Phase,
    /// RNG state; replaying from here reproduces future spawns
    pub rng_state: u32,
}

impl GridSnapshot {
    pub fn empty() -> Self {
        Self {
            cols: 0,
            rows: 0,
            cells: Vec::new(),
            spawners: Vec::new(),
            phase: Phase::Idle,
            rng_state: 0,
        }
    }

    /// Color code at (x, y), or None outside the snapshot bounds
    pub fn code_at(&self, x: u8, y: u8) -> Option<u8> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        self.cells
            .get(y as usize * self.cols as usize + x as usize)
            .copied()
    }
}

impl GridState {
    /// Fill a caller-owned snapshot, reusing its buffers
    pub fn snapshot_into(&self, out: &mut GridSnapshot) {
        out.cols = self.config().cols;
        out.rows = self.config().rows;
        self.board().write_color_codes(&mut out.cells);
        out.spawners.clear();
        out.spawners
            .extend((0..self.config().cols).map(|col| self.spawner_armed(col)));
        out.phase = self.phase();
        out.rng_state = self.rng_state();
    }

    /// Allocate a fresh snapshot of the current state
    pub fn snapshot(&self) -> GridSnapshot {
        let mut snap = GridSnapshot::empty();
        self.snapshot_into(&mut snap);
        snap
    }
}
