//! Gravity stepping - one pass of downward compaction plus spawn-row refill
//!
//! Each pass moves a qualifying cell exactly one row toward the settled
//! edge rather than dropping it all the way, so a host can animate falls a
//! step at a time. The resolution loop invokes it repeatedly until a pass
//! reports no movement.

use crate::core::{Board, SimpleRng};
use crate::types::{Cell, CellKind, GridEvent, Pos};

/// Perform one gravity pass over the whole board.
///
/// Phase 1 scans rows from second-from-bottom up to the spawn edge: a
/// movable cell with an empty slot directly below it moves into that slot,
/// leaving empty behind. Phase 2 refills the spawn row: every column whose
/// row-0 cell is empty and whose spawner is armed receives a fresh cell of
/// a random in-play color.
///
/// Events for every move and spawn are appended to `events`. Returns true
/// iff anything moved or spawned; a column left empty because its spawner
/// is disarmed is valid settled state and contributes nothing.
pub fn step(
    board: &mut Board,
    spawners: &[bool],
    num_colors: u8,
    rng: &mut SimpleRng,
    events: &mut Vec<GridEvent>,
) -> bool {
    debug_assert_eq!(spawners.len(), board.cols() as usize);

    let mut moved = false;

    // Bottom-up so a cell moves at most one row per pass
    for y in (0..board.rows() - 1).rev() {
        for x in 0..board.cols() {
            let cell = *board.get(x, y);
            if !cell.is_movable() {
                continue;
            }
            if board.get(x, y + 1).kind == CellKind::Empty {
                board.set(x, y + 1, cell);
                board.set(x, y, Cell::empty());
                if let Some(color) = cell.color() {
                    events.push(GridEvent::CellMoved {
                        from: Pos::new(x, y),
                        to: Pos::new(x, y + 1),
                        color,
                    });
                }
                moved = true;
            }
        }
    }

    // Spawn row refill, gated per column by the armed flag
    for x in 0..board.cols() {
        if board.get(x, 0).kind != CellKind::Empty {
            continue;
        }
        if !spawners[x as usize] {
            continue;
        }
        let color = rng.next_color(num_colors);
        board.set(x, 0, Cell::normal(color));
        events.push(GridEvent::CellSpawned {
            at: Pos::new(x, 0),
            color,
        });
        moved = true;
    }

    moved
}
