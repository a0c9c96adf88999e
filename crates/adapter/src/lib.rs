//! Collaborator boundary: wire move codes, oracle message types, the
//! `MoveSource` interface, and remote-log application.
//!
//! Everything network- or device-shaped stays outside; this crate only
//! defines the shapes those collaborators speak.

pub mod protocol;
pub mod remote;
pub mod source;

pub use protocol::{decode, encode, history_string, OracleRequest, OracleResponse};
pub use remote::RemoteFeed;
pub use source::{MoveSource, ScriptedSource};
