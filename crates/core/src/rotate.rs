//! Rotation module - the 90-degree board remap.
//!
//! Rotating swaps the board's dimensions and permutes every cell, empty
//! ones included. No compaction happens here: the gravity invariant is
//! expected to be broken in the output, and callers must run
//! `gravity::resolve` immediately afterwards.

use gravity_four_types::Direction;

use crate::board::Board;

/// Return a new board rotated 90 degrees in `direction`.
///
/// With `new_rows = old_cols` and `new_cols = old_rows`:
/// - Ccw: `new[r][c] = old[c][old_cols - 1 - r]`
/// - Cw:  `new[r][c] = old[old_rows - 1 - c][r]`
///
/// This is a bijection on cells; values are untouched.
pub fn rotated(board: &Board, direction: Direction) -> Board {
    let old_rows = board.rows();
    let old_cols = board.cols();
    let (new_rows, new_cols) = (old_cols, old_rows);

    let mut out = Board::new(new_rows, new_cols);
    for r in 0..new_rows {
        for c in 0..new_cols {
            let cell = match direction {
                Direction::Ccw => board.get(c, old_cols - 1 - r),
                Direction::Cw => board.get(old_rows - 1 - c, r),
            };
            // Source coordinates are in range by construction.
            if let Some(cell) = cell {
                out.set(r, c, cell);
            }
        }
    }
    out
}
