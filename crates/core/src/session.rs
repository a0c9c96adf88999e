//! Session module - turn sequencing and lifecycle.
//!
//! A session exclusively owns one board and serializes moves from any
//! source through a single state machine:
//!
//! `Waiting -> Locked (move applied/animated) -> Resolving (win scan)
//!  -> Waiting(other player) | Ended`
//!
//! The lock is a pure fact about the session, independent of any clock:
//! renderers animate between `begin` and `finish`, headless callers use
//! `submit` for immediate settlement.

use tracing::{debug, warn};

use gravity_four_types::{Direction, MoveCode, Outcome, Player, DEFAULT_COLS, DEFAULT_ROWS};

use crate::board::Board;
use crate::error::MoveError;
use crate::gravity;
use crate::rotate;
use crate::win::{self, WinLine};

/// Where the turn state machine currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting exactly one move from the current player.
    Waiting,
    /// A move is being applied or animated; everything else is dropped.
    Locked,
    /// The win detector is running. Externally equivalent to `Locked`.
    Resolving,
    /// Terminal; `outcome()` is no longer `InProgress`.
    Ended,
}

/// What a successfully begun move did to the board, for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedMove {
    /// A piece landed at (row, col).
    Placed { player: Player, row: u8, col: u8 },
    /// The board turned 90 degrees and resettled.
    Rotated { direction: Direction },
}

/// One game: board, turn state, and the ordered move log.
///
/// The log is the unit of synchronization with a remote opponent; see
/// [`Session::sync_log`].
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    start_rows: u8,
    start_cols: u8,
    current: Player,
    phase: Phase,
    outcome: Outcome,
    win_line: Option<WinLine>,
    log: Vec<MoveCode>,
}

impl Session {
    /// New session on an empty `rows x cols` board, player A to move.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or exceeds
    /// [`gravity_four_types::MAX_DIM`], see [`Board::new`].
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            board: Board::new(rows, cols),
            start_rows: rows,
            start_cols: cols,
            current: Player::A,
            phase: Phase::Waiting,
            outcome: Outcome::InProgress,
            win_line: None,
            log: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a move is mid-flight (`Locked` or `Resolving`).
    pub fn is_locked(&self) -> bool {
        matches!(self.phase, Phase::Locked | Phase::Resolving)
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Endpoints of the winning line once the session has ended with a win.
    pub fn win_line(&self) -> Option<WinLine> {
        self.win_line
    }

    /// Every move applied so far, in order.
    pub fn move_log(&self) -> &[MoveCode] {
        &self.log
    }

    /// Begin a move: validate, mutate the board, and take the move lock.
    ///
    /// Only accepted in `Waiting`; anything else gets
    /// `RejectedWhileLocked` with no state change and no queuing. A full
    /// column is a no-op that stays in `Waiting` so the same player can
    /// pick again. On success the board already has its final shape (a
    /// rotation is resolved immediately) and the session stays locked
    /// until [`finish`](Self::finish).
    pub fn begin(&mut self, mv: MoveCode) -> Result<AppliedMove, MoveError> {
        if self.phase != Phase::Waiting {
            debug!(?mv, phase = ?self.phase, "move dropped while locked");
            return Err(MoveError::RejectedWhileLocked);
        }

        let applied = match mv {
            MoveCode::Drop(col) => {
                let (row, col) = self.board.drop_piece(self.current, col).map_err(|err| {
                    warn!(%err, player = self.current.as_str(), "drop refused");
                    err
                })?;
                AppliedMove::Placed {
                    player: self.current,
                    row,
                    col,
                }
            }
            MoveCode::Rotate(direction) => {
                self.board = rotate::rotated(&self.board, direction);
                gravity::resolve(&mut self.board);
                AppliedMove::Rotated { direction }
            }
        };

        self.log.push(mv);
        self.phase = Phase::Locked;
        debug!(?applied, player = self.current.as_str(), "move applied");
        Ok(applied)
    }

    /// Finish the move in flight: run the win detector once, then either
    /// hand the turn to the other player or end the session.
    ///
    /// Calling this outside `Locked` is a no-op returning the current
    /// outcome.
    pub fn finish(&mut self) -> Outcome {
        if self.phase != Phase::Locked {
            return self.outcome;
        }
        self.phase = Phase::Resolving;

        let verdict = win::check(&self.board);
        self.outcome = verdict.outcome;
        self.win_line = verdict.line;

        if self.outcome.is_over() {
            self.phase = Phase::Ended;
            debug!(outcome = ?self.outcome, moves = self.log.len(), "session ended");
        } else {
            self.current = self.current.opponent();
            self.phase = Phase::Waiting;
        }
        self.outcome
    }

    /// Apply a move with immediate settlement (`begin` + `finish`).
    pub fn submit(&mut self, mv: MoveCode) -> Result<Outcome, MoveError> {
        self.begin(mv)?;
        Ok(self.finish())
    }

    /// Reset to an empty board of the starting dimensions, player A to
    /// move, empty log.
    ///
    /// Ignored mid-move: restart is only honored while waiting for a move
    /// or after the session has ended.
    pub fn restart(&mut self) -> bool {
        if self.is_locked() {
            return false;
        }
        *self = Self::new(self.start_rows, self.start_cols);
        true
    }

    /// Synchronize against an authoritative move log.
    ///
    /// The remote log is the source of truth and delivery may repeat:
    /// an already-applied prefix is a no-op, and only moves past the
    /// locally-known log length are applied, strictly in log order with
    /// immediate settlement. Returns how many moves were applied.
    ///
    /// Stops at the first move that cannot be applied (e.g. a move past
    /// a finished game) and surfaces that error.
    pub fn sync_log(&mut self, remote: &[MoveCode]) -> Result<usize, MoveError> {
        let known = self.log.len();
        if remote.len() <= known {
            return Ok(0);
        }

        let mut applied = 0;
        for &mv in &remote[known..] {
            self.submit(mv)?;
            applied += 1;
        }
        debug!(applied, total = self.log.len(), "synchronized remote log");
        Ok(applied)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
