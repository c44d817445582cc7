//! Grid state module - the swap/clear/settle resolution loop
//!
//! Ties together board, match detection, gravity and the RNG behind a
//! phase machine the host drives one tick at a time. Every mutating entry
//! point returns the list of events it produced so the host can replay
//! them visually at its own pace; the core never waits on a clock.

use log::{debug, trace};

use crate::core::{gravity, matching, Board, SimpleRng};
use crate::types::{Cell, ConfigError, GridConfig, GridEvent, Phase, Pos};

/// Complete simulation state for one grid
#[derive(Debug, Clone)]
pub struct GridState {
    config: GridConfig,
    board: Board,
    /// Per-column spawn gates; a disarmed column stays empty at the top
    spawners: Vec<bool>,
    rng: SimpleRng,
    phase: Phase,
    /// Positions matched by the last accepted swap, awaiting release
    pending_clear: Vec<Pos>,
    /// Clear-settle rounds since the current resolution began
    cascade_depth: u32,
}

impl GridState {
    /// Create a grid in the `Idle` phase with an all-empty board and every
    /// spawner armed. Call [`start_fill`](Self::start_fill) before
    /// accepting player swaps.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            board: Board::new(config.cols, config.rows),
            spawners: vec![true; config.cols as usize],
            rng: SimpleRng::new(config.seed),
            phase: Phase::Idle,
            pending_clear: Vec::new(),
            cascade_depth: 0,
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// RNG state, exported so a host can reproduce the spawn sequence
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Toggle whether a column may spawn new cells at the top row.
    /// `col` out of range is a caller bug and panics.
    pub fn set_spawner_armed(&mut self, col: u8, armed: bool) {
        assert!(
            col < self.config.cols,
            "spawner column {} out of bounds for {} columns",
            col,
            self.config.cols
        );
        self.spawners[col as usize] = armed;
    }

    pub fn spawner_armed(&self, col: u8) -> bool {
        assert!(
            col < self.config.cols,
            "spawner column {} out of bounds for {} columns",
            col,
            self.config.cols
        );
        self.spawners[col as usize]
    }

    /// Run the initial resolution pass: settle and refill the empty board,
    /// then clear any matches the random fill produced, repeating until
    /// quiescent. Returns everything that happened. With all spawners
    /// armed the resulting board has no empty cells and no matches.
    pub fn start_fill(&mut self) -> Vec<GridEvent> {
        self.phase = Phase::Settling;
        self.cascade_depth = 0;
        self.run_until_idle()
    }

    /// Sole external mutation entry point: ask to swap the cells at `a`
    /// and `b`.
    ///
    /// Silently rejected (empty event list, board untouched) while a
    /// resolution is in progress, or when the positions are out of bounds,
    /// not adjacent, or not both movable. A swap that produces no match is
    /// applied speculatively and reverted; the returned events carry the
    /// forth-and-back moves so the host can animate the refusal. A
    /// matching swap commits and enters the `Clearing` phase; drive it
    /// with [`tick`](Self::tick) or [`run_until_idle`](Self::run_until_idle).
    pub fn request_swap(&mut self, a: Pos, b: Pos) -> Vec<GridEvent> {
        let mut events = Vec::new();

        if self.phase != Phase::Idle {
            debug!("swap {:?}<->{:?} rejected: resolution in progress", a, b);
            return events;
        }
        // Positions come from the untrusted host input boundary, so bad
        // ones are an invalid swap rather than a contract violation.
        if !self.board.in_bounds(a.x as i32, a.y as i32)
            || !self.board.in_bounds(b.x as i32, b.y as i32)
        {
            debug!("swap {:?}<->{:?} rejected: out of bounds", a, b);
            return events;
        }
        if !Board::is_adjacent(a, b) {
            debug!("swap {:?}<->{:?} rejected: not adjacent", a, b);
            return events;
        }

        let cell_a = *self.board.get(a.x, a.y);
        let cell_b = *self.board.get(b.x, b.y);
        let (Some(color_a), Some(color_b)) = (cell_a.color(), cell_b.color()) else {
            debug!("swap {:?}<->{:?} rejected: not both movable", a, b);
            return events;
        };

        // Speculatively exchange the slots, then test each cell at the
        // position it would occupy.
        self.board.swap(a, b);
        let match_a = matching::find_match(&self.board, color_a, b);
        let match_b = matching::find_match(&self.board, color_b, a);

        if match_a.is_none() && match_b.is_none() {
            self.board.swap(a, b);
            debug!("swap {:?}<->{:?} reverted: no match", a, b);
            // Forth and back, mirroring what the player sees
            events.push(GridEvent::CellMoved {
                from: a,
                to: b,
                color: color_a,
            });
            events.push(GridEvent::CellMoved {
                from: b,
                to: a,
                color: color_b,
            });
            events.push(GridEvent::CellMoved {
                from: b,
                to: a,
                color: color_a,
            });
            events.push(GridEvent::CellMoved {
                from: a,
                to: b,
                color: color_b,
            });
            return events;
        }

        debug!("swap {:?}<->{:?} committed", a, b);
        events.push(GridEvent::CellMoved {
            from: a,
            to: b,
            color: color_a,
        });
        events.push(GridEvent::CellMoved {
            from: b,
            to: a,
            color: color_b,
        });

        self.pending_clear.clear();
        if let Some(matched) = match_a {
            self.pending_clear.extend(matched);
        }
        if let Some(matched) = match_b {
            self.pending_clear.extend(matched);
        }
        self.cascade_depth = 0;
        self.phase = Phase::Clearing;
        events
    }

    /// Advance the resolution loop by one step and report what happened.
    /// A tick in `Idle` is a no-op.
    pub fn tick(&mut self) -> Vec<GridEvent> {
        let mut events = Vec::new();
        match self.phase {
            Phase::Idle => {}
            Phase::Clearing => {
                let pending = std::mem::take(&mut self.pending_clear);
                for at in pending {
                    self.clear_cell(at, &mut events);
                }
                self.phase = Phase::Settling;
            }
            Phase::Settling => {
                let moved = gravity::step(
                    &mut self.board,
                    &self.spawners,
                    self.config.num_colors,
                    &mut self.rng,
                    &mut events,
                );
                if !moved {
                    self.phase = Phase::Sweeping;
                }
            }
            Phase::Sweeping => {
                if self.sweep(&mut events) {
                    self.cascade_depth += 1;
                    trace!("cascade round {}", self.cascade_depth);
                    self.phase = Phase::Settling;
                } else {
                    self.phase = Phase::Idle;
                }
            }
        }
        events
    }

    /// Tick until the loop returns to `Idle`, concatenating all events.
    /// Terminates because every clear round strictly removes cells and the
    /// grid and palette are finite.
    pub fn run_until_idle(&mut self) -> Vec<GridEvent> {
        let mut events = Vec::new();
        while self.phase != Phase::Idle {
            events.extend(self.tick());
        }
        events
    }

    /// True when the board needs no further resolution: the loop is idle,
    /// no match exists anywhere, and every cell is filled unless its
    /// column's spawner is disarmed.
    pub fn is_quiescent(&self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        for y in 0..self.config.rows {
            for x in 0..self.config.cols {
                let cell = self.board.get(x, y);
                match cell.color() {
                    Some(color) => {
                        if matching::find_match(&self.board, color, Pos::new(x, y)).is_some() {
                            return false;
                        }
                    }
                    None => {
                        if self.spawners[x as usize] {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    /// Full-board sweep: clear every match found at any cell's own
    /// position. Returns true iff anything was cleared. Cells already
    /// cleared earlier in the same sweep are empty by the time later
    /// matches are probed, so nothing is detected or released twice.
    fn sweep(&mut self, events: &mut Vec<GridEvent>) -> bool {
        let mut cleared_any = false;
        for y in 0..self.config.rows {
            for x in 0..self.config.cols {
                let cell = *self.board.get(x, y);
                if !cell.is_clearable() {
                    continue;
                }
                let Some(color) = cell.color() else {
                    continue;
                };
                if let Some(matched) = matching::find_match(&self.board, color, Pos::new(x, y)) {
                    for at in matched {
                        if self.clear_cell(at, events) {
                            cleared_any = true;
                        }
                    }
                }
            }
        }
        cleared_any
    }

    /// Release one cell to empty. Idempotent: a cell already being cleared
    /// (or already empty) is skipped.
    fn clear_cell(&mut self, at: Pos, events: &mut Vec<GridEvent>) -> bool {
        let cell = self.board.get_mut(at.x, at.y);
        if !cell.is_clearable() || cell.clearing {
            return false;
        }
        let Some(color) = cell.color() else {
            return false;
        };
        cell.clearing = true;
        *cell = Cell::empty();
        events.push(GridEvent::CellCleared { at, color });
        true
    }
}
