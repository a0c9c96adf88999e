//! Remote opponent synchronization.
//!
//! The sync collaborator is polling-based: after submitting its own move
//! the client repeatedly fetches the authoritative move list
//! (replace-on-read, ordered) and hands the whole list to [`RemoteFeed`].
//! Only the newly appended suffix is decoded and applied, in order, so
//! redelivery of an already-seen list is a no-op. The transport itself
//! (HTTP polling loop, backoff) lives outside the core.

use tracing::debug;

use gravity_four_core::{MoveError, Session};

use crate::protocol::decode;

/// Applies authoritative wire-code move lists to a session.
#[derive(Debug, Default)]
pub struct RemoteFeed;

impl RemoteFeed {
    /// Apply the new suffix of `wire_log` to `session`.
    ///
    /// `wire_log` is the full authoritative list. Codes are decoded
    /// against the live column count at the point each move applies, so
    /// a drop code that was legal before an earlier rotation in the same
    /// batch is still validated correctly. Returns how many moves were
    /// applied; a malformed code or an unappliable move stops the batch
    /// and leaves the board on the last good state.
    pub fn apply(&mut self, session: &mut Session, wire_log: &[u8]) -> Result<usize, MoveError> {
        let known = session.move_log().len();
        if wire_log.len() <= known {
            return Ok(0);
        }

        let mut applied = 0;
        for &code in &wire_log[known..] {
            let mv = decode(code, session.board().cols())?;
            session.submit(mv)?;
            applied += 1;
        }
        debug!(applied, total = session.move_log().len(), "applied remote moves");
        Ok(applied)
    }
}
