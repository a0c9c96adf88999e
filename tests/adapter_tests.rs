//! Adapter boundary tests: wire codes, oracle messages, and a move-source
//! driven game, all through the facade.

use gravity_four::adapter::{
    decode, encode, history_string, MoveSource, OracleRequest, OracleResponse, RemoteFeed,
    ScriptedSource,
};
use gravity_four::core::{MoveError, Session};
use gravity_four::types::{Direction, MoveCode, Outcome, Player};

#[test]
fn test_wire_mapping_is_fixed_and_self_consistent() {
    // 0..cols are drops, 7 is always Ccw, 8 is always Cw.
    assert_eq!(encode(MoveCode::Rotate(Direction::Ccw)), 7);
    assert_eq!(encode(MoveCode::Rotate(Direction::Cw)), 8);
    for col in 0..7 {
        assert_eq!(decode(col, 7), Ok(MoveCode::Drop(col)));
    }
    assert_eq!(decode(7, 7), Ok(MoveCode::Rotate(Direction::Ccw)));
    assert_eq!(decode(8, 7), Ok(MoveCode::Rotate(Direction::Cw)));
}

#[test]
fn test_oracle_request_wire_format() {
    let mut session = Session::default();
    session.submit(MoveCode::Drop(0)).unwrap();
    session.submit(MoveCode::Drop(3)).unwrap();
    session.submit(MoveCode::Rotate(Direction::Ccw)).unwrap();

    let request = OracleRequest::new(3, session.move_log());
    let json = serde_json::to_string(&request).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["mode"], 3);
    assert_eq!(parsed["game"], "0 3 7");
}

#[test]
fn test_oracle_response_applies_to_session() {
    let mut session = Session::default();
    session.submit(MoveCode::Drop(3)).unwrap();

    // Oracle answers with a rotate-right.
    let response: OracleResponse = serde_json::from_str(r#"{"ai": 8}"#).unwrap();
    let mv = response.move_code(session.board().cols()).unwrap();
    assert_eq!(session.submit(mv), Ok(Outcome::InProgress));
    assert_eq!(session.board().cols(), 6);
    assert_eq!(history_string(session.move_log()), "3 8");
}

#[test]
fn test_malformed_oracle_move_leaves_session_untouched() {
    let mut session = Session::default();
    session.submit(MoveCode::Drop(1)).unwrap();
    let board = session.board().clone();

    let response = OracleResponse { ai: 200 };
    assert_eq!(
        response.move_code(session.board().cols()),
        Err(MoveError::MalformedMoveCode { code: 200 })
    );
    // Decode failure happens before any board contact.
    assert_eq!(session.board(), &board);
    assert_eq!(session.move_log().len(), 1);
}

#[test]
fn test_remote_feed_polling_rounds() {
    // Simulate poll results growing over time, with repeats in between.
    let mut feed = RemoteFeed::default();
    let mut session = Session::default();

    let polls: [&[u8]; 5] = [&[0], &[0], &[0, 6, 1], &[0, 6, 1], &[0, 6, 1, 6, 2, 6, 3]];
    let mut total = 0;
    for poll in polls {
        total += feed.apply(&mut session, poll).unwrap();
    }
    assert_eq!(total, 7);
    assert_eq!(session.outcome(), Outcome::Win(Player::A));
}

#[test]
fn test_scripted_sources_with_wire_logs() {
    // The same history expressed as wire codes and as a scripted source
    // must produce identical boards.
    let wire = [3u8, 3, 7, 0];
    let moves: Vec<MoveCode> = wire.iter().map(|&c| decode(c, 7).unwrap()).collect();

    let mut scripted = ScriptedSource::new("replay", moves);
    let mut by_source = Session::default();
    while scripted.remaining() > 0 {
        let mv = scripted.next_move(&by_source).unwrap();
        by_source.submit(mv).unwrap();
    }

    let mut by_feed = Session::default();
    RemoteFeed::default().apply(&mut by_feed, &wire).unwrap();

    assert_eq!(by_source.board(), by_feed.board());
    assert_eq!(by_source.move_log(), by_feed.move_log());
}
