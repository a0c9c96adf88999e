//! Gravity module - post-rotation resettlement.
//!
//! After a rotation the gravity invariant (no empty cell below an occupied
//! one within a column) is usually broken. `resolve` restores it without
//! creating, discarding, or reordering pieces.

use arrayvec::ArrayVec;
use gravity_four_types::{MAX_DIM, Player};

use crate::board::Board;

/// Compact every column's pieces toward the bottom, preserving their
/// top-to-bottom order. Idempotent: resolving a settled board is a no-op.
///
/// This is the only operation allowed to change a piece's position within
/// its column, and it never changes the relative order of pieces there.
pub fn resolve(board: &mut Board) {
    let rows = board.rows();
    for col in 0..board.cols() {
        // Ordered occupied cells, scanning top to bottom. Dimensions are
        // bounded by MAX_DIM so the buffer never spills.
        let mut stack: ArrayVec<Player, { MAX_DIM as usize }> = ArrayVec::new();
        for row in 0..rows {
            if let Some(Some(player)) = board.get(row, col) {
                stack.push(player);
            }
        }

        // Bottom-align: rows [rows - k, rows) get the pieces, rows above
        // become empty.
        let k = stack.len() as u8;
        for row in 0..rows - k {
            board.set(row, col, None);
        }
        for (i, player) in stack.into_iter().enumerate() {
            board.set(rows - k + i as u8, col, Some(player));
        }
    }
}

/// True when every column satisfies the gravity invariant.
pub fn is_settled(board: &Board) -> bool {
    (0..board.cols()).all(|col| {
        (1..board.rows()).all(|row| {
            // An occupied cell may not have an empty cell below it.
            !(board.is_occupied(row - 1, col) && !board.is_occupied(row, col))
        })
    })
}
