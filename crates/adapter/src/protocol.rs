//! Protocol module - the integer move-code wire scheme and the oracle
//! JSON message types.
//!
//! A wire move is one small integer: `0..cols` means a drop in that
//! column, and two reserved codes above every legal drop mean the two
//! rotations. The legacy implementations disagreed about which reserved
//! code meant which direction; the mapping here (7 = Ccw, 8 = Cw) is the
//! single fixed one, and the tagged [`MoveCode`] is the only move
//! representation past this boundary.

use serde::{Deserialize, Serialize};
use tracing::warn;

use gravity_four_core::MoveError;
use gravity_four_types::{Direction, MoveCode, CODE_ROTATE_CCW, CODE_ROTATE_CW};

/// Encode a move into its wire code.
pub fn encode(mv: MoveCode) -> u8 {
    match mv {
        MoveCode::Drop(col) => col,
        MoveCode::Rotate(Direction::Ccw) => CODE_ROTATE_CCW,
        MoveCode::Rotate(Direction::Cw) => CODE_ROTATE_CW,
    }
}

/// Decode a wire code against the board's live column count.
///
/// Codes outside the drop range that are not a reserved rotation are a
/// collaborator-integration fault: rejected without touching any board.
pub fn decode(code: u8, cols: u8) -> Result<MoveCode, MoveError> {
    if code < cols {
        return Ok(MoveCode::Drop(code));
    }
    match code {
        CODE_ROTATE_CCW => Ok(MoveCode::Rotate(Direction::Ccw)),
        CODE_ROTATE_CW => Ok(MoveCode::Rotate(Direction::Cw)),
        _ => {
            warn!(code, cols, "rejecting malformed wire move code");
            Err(MoveError::MalformedMoveCode { code })
        }
    }
}

/// Render a move log as the oracle's history string ("0 3 7 ...").
pub fn history_string(log: &[MoveCode]) -> String {
    let codes: Vec<String> = log.iter().map(|&mv| encode(mv).to_string()).collect();
    codes.join(" ")
}

/// Request sent to the AI oracle.
///
/// Field names match the legacy JSON: `mode` is the difficulty and `game`
/// is the space-separated move history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleRequest {
    pub mode: u8,
    pub game: String,
}

impl OracleRequest {
    /// Build a request from a difficulty and the session's move log.
    pub fn new(difficulty: u8, log: &[MoveCode]) -> Self {
        Self {
            mode: difficulty,
            game: history_string(log),
        }
    }
}

/// Response from the AI oracle: one wire move code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleResponse {
    pub ai: u8,
}

impl OracleResponse {
    /// Decode the oracle's move against the live column count.
    pub fn move_code(&self, cols: u8) -> Result<MoveCode, MoveError> {
        decode(self.ai, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_fixed_mapping() {
        assert_eq!(encode(MoveCode::Drop(0)), 0);
        assert_eq!(encode(MoveCode::Drop(6)), 6);
        assert_eq!(encode(MoveCode::Rotate(Direction::Ccw)), 7);
        assert_eq!(encode(MoveCode::Rotate(Direction::Cw)), 8);
    }

    #[test]
    fn test_decode_roundtrip() {
        for mv in [
            MoveCode::Drop(0),
            MoveCode::Drop(5),
            MoveCode::Rotate(Direction::Ccw),
            MoveCode::Rotate(Direction::Cw),
        ] {
            assert_eq!(decode(encode(mv), 7), Ok(mv));
        }
    }

    #[test]
    fn test_decode_respects_live_column_count() {
        // After a rotation the board has 6 columns: code 6 is neither a
        // drop nor a reserved rotation.
        assert_eq!(decode(6, 7), Ok(MoveCode::Drop(6)));
        assert_eq!(decode(6, 6), Err(MoveError::MalformedMoveCode { code: 6 }));
    }

    #[test]
    fn test_decode_malformed() {
        assert_eq!(decode(9, 7), Err(MoveError::MalformedMoveCode { code: 9 }));
        assert_eq!(
            decode(255, 7),
            Err(MoveError::MalformedMoveCode { code: 255 })
        );
    }

    #[test]
    fn test_history_string() {
        let log = vec![
            MoveCode::Drop(0),
            MoveCode::Drop(3),
            MoveCode::Rotate(Direction::Ccw),
            MoveCode::Rotate(Direction::Cw),
        ];
        assert_eq!(history_string(&log), "0 3 7 8");
        assert_eq!(history_string(&[]), "");
    }

    #[test]
    fn test_oracle_request_json_shape() {
        let request = OracleRequest::new(2, &[MoveCode::Drop(3), MoveCode::Rotate(Direction::Cw)]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "mode": 2, "game": "3 8" }));
    }

    #[test]
    fn test_oracle_response_decodes() {
        let response: OracleResponse = serde_json::from_str(r#"{"ai": 7}"#).unwrap();
        assert_eq!(response.move_code(7), Ok(MoveCode::Rotate(Direction::Ccw)));

        let bad: OracleResponse = serde_json::from_str(r#"{"ai": 42}"#).unwrap();
        assert_eq!(
            bad.move_code(7),
            Err(MoveError::MalformedMoveCode { code: 42 })
        );
    }
}
