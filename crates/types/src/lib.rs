//! Core types shared across the workspace.
//! This crate contains pure data types with no external dependencies.

/// Classic board dimensions at session start.
pub const DEFAULT_ROWS: u8 = 6;
pub const DEFAULT_COLS: u8 = 7;

/// Largest dimension a board can have on either axis.
///
/// Rotation swaps rows and cols, so the bound is the max of the two
/// starting dimensions.
pub const MAX_DIM: u8 = 7;

/// Number of consecutive same-player cells that win.
pub const WIN_LENGTH: u8 = 4;

/// Reserved wire codes for the two rotation moves.
///
/// Drops occupy `0..cols`; these two sit above every legal drop code.
/// The legacy scheme disagreed with itself about which code meant which
/// direction; this mapping is the fixed one used everywhere.
pub const CODE_ROTATE_CCW: u8 = 7;
pub const CODE_ROTATE_CW: u8 = 8;

/// The two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// The other player.
    pub fn opponent(&self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::A => "a",
            Player::B => "b",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "a" => Some(Player::A),
            "b" => Some(Player::B),
            _ => None,
        }
    }
}

/// Rotation directions for the board-turn move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Counter-clockwise (the legacy "left" turn).
    Ccw,
    /// Clockwise (the legacy "right" turn).
    Cw,
}

impl Direction {
    /// The rotation that undoes this one.
    pub fn inverse(&self) -> Self {
        match self {
            Direction::Ccw => Direction::Cw,
            Direction::Cw => Direction::Ccw,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ccw => "ccw",
            Direction::Cw => "cw",
        }
    }
}

/// Cell on the board (None = empty, Some = occupied by that player).
pub type Cell = Option<Player>;

/// A move as seen by the turn controller.
///
/// The overloaded integer scheme lives only at the adapter boundary;
/// everywhere else a move is this tagged value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveCode {
    /// Drop a piece into the given column.
    Drop(u8),
    /// Rotate the whole board 90 degrees.
    Rotate(Direction),
}

/// Result of a finished (or still running) session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Player),
    /// Board full with no line, or a rotation completed lines for both
    /// players at once.
    Tie,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
