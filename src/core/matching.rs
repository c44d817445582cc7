//! Match detection - straight runs plus perpendicular branches
//!
//! A match is the contiguous same-color run through a cell along one axis
//! (3+ cells), optionally merged with the first qualifying run hanging off
//! one of its members on the perpendicular axis, which is how L and T
//! shapes are caught.
//!
//! Detection is done per cell rather than by flood fill because only the
//! two cells of a swap ever need re-checking: the caller applies the swap
//! to the slot array speculatively, tests each cell at the position it
//! would occupy, and reverts if neither matches.

use arrayvec::ArrayVec;

use crate::core::Board;
use crate::types::{DropColor, Pos, MAX_GRID_DIM};

/// A primary run spans at most one dimension, a branch at most the other.
pub const MATCH_CAP: usize = 2 * MAX_GRID_DIM;

/// Positions forming one match. Unordered, duplicate-free, length >= 3,
/// all the same color. Consumed immediately by the clear step.
pub type MatchSet = ArrayVec<Pos, MATCH_CAP>;

/// One straight run buffer, bounded by the longer grid dimension
type RunBuf = ArrayVec<Pos, MAX_GRID_DIM>;

/// Find the match the cell of the given color participates in at `at`.
///
/// `color` is the color of the cell under test and `at` the position it
/// (would) occupy; for swap checks the slot array must already hold the
/// speculative arrangement. Returns `None` when the cell is in no run of
/// three or more - a normal outcome, not an error.
///
/// The horizontal-first result wins when both orientations would match.
pub fn find_match(board: &Board, color: DropColor, at: Pos) -> Option<MatchSet> {
    if let Some(matching) = directional_match(board, color, at, Axis::Horizontal) {
        return Some(matching);
    }
    directional_match(board, color, at, Axis::Vertical)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn flip(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Walk outward from `from` along `axis` in both directions, collecting the
/// contiguous run of `color` cells (excluding `from` itself). Pushes in
/// negative-direction-then-positive-direction order; bounds and
/// empty/foreign cells terminate a direction.
fn collect_run(board: &Board, color: DropColor, from: Pos, axis: Axis, out: &mut RunBuf) {
    for dir in [-1i32, 1] {
        for offset in 1.. {
            let (x, y) = match axis {
                Axis::Horizontal => (from.x as i32 + dir * offset, from.y as i32),
                Axis::Vertical => (from.x as i32, from.y as i32 + dir * offset),
            };
            if !board.in_bounds(x, y) {
                break;
            }
            let cell = board.get(x as u8, y as u8);
            if cell.is_colored() && cell.color() == Some(color) {
                out.push(Pos::new(x as u8, y as u8));
            } else {
                break;
            }
        }
    }
}

/// One orientation of the check: primary run along `primary`, then at most
/// one perpendicular branch.
fn directional_match(board: &Board, color: DropColor, at: Pos, primary: Axis) -> Option<MatchSet> {
    // Origin first, then the negative side, then the positive side. The
    // order decides which member gets first crack at a branch below.
    let mut run = RunBuf::new();
    run.push(at);
    collect_run(board, color, at, primary, &mut run);

    if run.len() < 3 {
        return None;
    }

    let mut matching = MatchSet::new();
    matching.extend(run.iter().copied());

    // The first run member whose perpendicular run (excluding the shared
    // cell) has 2+ cells contributes it, and the search stops there.
    // Further qualifying branches are dropped on purpose: the original
    // breaks on the first success, and that behavior is preserved (see
    // DESIGN.md O1). Branch scans pivot on the matched row/column, so the
    // branch cells are disjoint from the run and the set stays
    // duplicate-free.
    let mut branch = RunBuf::new();
    for member in &run {
        branch.clear();
        collect_run(board, color, *member, primary.flip(), &mut branch);
        if branch.len() >= 2 {
            matching.extend(branch.iter().copied());
            break;
        }
    }

    Some(matching)
}
