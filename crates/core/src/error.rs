//! Recoverable move errors.
//!
//! None of these are fatal: the board is never mutated on the error path,
//! and the worst case is restarting the session from an empty board.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Drop target has no empty cell. The caller re-prompts the same player.
    #[error("column {column} is full")]
    ColumnFull { column: u8 },

    /// Drop target does not exist on the current board.
    #[error("column {column} is out of bounds (board has {cols} columns)")]
    ColumnOutOfBounds { column: u8, cols: u8 },

    /// A move arrived while the session was not waiting for one.
    /// Dropped, never queued; the mover just tries again.
    #[error("move rejected: session is not waiting for a move")]
    RejectedWhileLocked,

    /// An oracle or remote collaborator sent a code outside the valid
    /// drop/rotate range. A collaborator-integration fault, not a board fault.
    #[error("malformed move code {code}")]
    MalformedMoveCode { code: u8 },
}
