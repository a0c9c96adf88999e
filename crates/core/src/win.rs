//! Win detection - 4-in-a-row scan and draw detection.
//!
//! Both players are evaluated independently before deciding the outcome,
//! because a single rotation can complete lines for both colors at once.
//! The draw scan runs over the board's live dimensions; the axis lengths
//! change at runtime and a fixed column count would misjudge fullness.

use gravity_four_types::{Outcome, Player, WIN_LENGTH};

use crate::board::Board;

/// Endpoints of a winning line, for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    pub start: (u8, u8),
    pub end: (u8, u8),
}

/// Outcome of a full-board evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub outcome: Outcome,
    /// First winning line in scan order, when exactly one player has won.
    pub line: Option<WinLine>,
}

/// Line directions as (row, col) steps: right, down, down-right, up-right.
const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Evaluate the board.
///
/// - Both players have a line: `Tie` (takes precedence over either win).
/// - Exactly one: `Win` for that player, with the first line found scanning
///   cells in row-major order, directions in `DIRECTIONS` order.
/// - Neither: `Tie` on a full board, otherwise `InProgress`.
pub fn check(board: &Board) -> Verdict {
    let a_line = first_line(board, Player::A);
    let b_line = first_line(board, Player::B);

    match (a_line, b_line) {
        (Some(_), Some(_)) => Verdict {
            outcome: Outcome::Tie,
            line: None,
        },
        (Some(line), None) => Verdict {
            outcome: Outcome::Win(Player::A),
            line: Some(line),
        },
        (None, Some(line)) => Verdict {
            outcome: Outcome::Win(Player::B),
            line: Some(line),
        },
        (None, None) => Verdict {
            outcome: if board.is_full() {
                Outcome::Tie
            } else {
                Outcome::InProgress
            },
            line: None,
        },
    }
}

/// True when `player` has at least one line of four.
pub fn has_win(board: &Board, player: Player) -> bool {
    first_line(board, player).is_some()
}

/// First winning line for `player` in scan order, if any.
fn first_line(board: &Board, player: Player) -> Option<WinLine> {
    let span = (WIN_LENGTH - 1) as i8;
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            for &(dr, dc) in &DIRECTIONS {
                let end_row = row as i8 + dr * span;
                let end_col = col as i8 + dc * span;
                if end_row < 0
                    || end_row >= board.rows() as i8
                    || end_col < 0
                    || end_col >= board.cols() as i8
                {
                    continue;
                }
                let all = (0..WIN_LENGTH as i8).all(|i| {
                    let r = (row as i8 + dr * i) as u8;
                    let c = (col as i8 + dc * i) as u8;
                    board.get(r, c) == Some(Some(player))
                });
                if all {
                    return Some(WinLine {
                        start: (row, col),
                        end: (end_row as u8, end_col as u8),
                    });
                }
            }
        }
    }
    None
}
