//! Game-logic core: board state, rotation, gravity resettlement, win
//! detection, and the turn-sequencing session.
//!
//! Everything here is pure and clock-free; rendering, input translation,
//! and network transport live with external collaborators behind the
//! adapter crate's boundaries.

pub mod board;
pub mod error;
pub mod gravity;
pub mod rotate;
pub mod session;
pub mod win;

pub use board::Board;
pub use error::MoveError;
pub use gravity::{is_settled, resolve};
pub use rotate::rotated;
pub use session::{AppliedMove, Phase, Session};
pub use win::{check, has_win, Verdict, WinLine};
