//! Move sources - the one narrow interface every mover goes through.
//!
//! Local input, the AI oracle, and the remote opponent all reduce to
//! "given the session, produce the next move". Transports (HTTP, input
//! devices) implement this trait outside the core; the controller only
//! ever sees `MoveCode`s.

use anyhow::Result;

use gravity_four_core::Session;
use gravity_four_types::MoveCode;

/// Supplies moves for one player.
pub trait MoveSource {
    /// Produce the next move for the current player.
    ///
    /// Called only while the session is waiting for a move. Errors are
    /// collaborator faults (transport, input); the session is untouched
    /// and the caller may retry or restart.
    fn next_move(&mut self, session: &Session) -> Result<MoveCode>;

    /// Display name for this mover.
    fn name(&self) -> &str;
}

/// Replays a fixed move sequence; used by tests and headless replay.
pub struct ScriptedSource {
    name: String,
    moves: Vec<MoveCode>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(name: impl Into<String>, moves: Vec<MoveCode>) -> Self {
        Self {
            name: name.into(),
            moves,
            next: 0,
        }
    }

    /// How many scripted moves remain.
    pub fn remaining(&self) -> usize {
        self.moves.len().saturating_sub(self.next)
    }
}

impl MoveSource for ScriptedSource {
    fn next_move(&mut self, _session: &Session) -> Result<MoveCode> {
        let mv = self
            .moves
            .get(self.next)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("script for {} is exhausted", self.name))?;
        self.next += 1;
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
