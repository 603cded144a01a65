//! Real-time channel events.
//!
//! Every WebSocket text frame holds one envelope:
//!
//! ```json
//! {"event": "question_update", "data": {"game_id": "ABC123", "current_question": "Kdo?"}}
//! ```
//!
//! `game_id` is optional on server events; the server only delivers an event
//! without it to sockets that joined the room.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::id::{ParticipantId, RoomId};

/// One revealed `(question, answer)` pair, encoded as a two-element array.
///
/// The answer is `null` when nobody answered that question for this slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedAnswer(pub String, pub Option<String>);

impl RevealedAnswer {
    pub fn question(&self) -> &str {
        &self.0
    }

    pub fn answer(&self) -> Option<&str> {
        self.1.as_deref()
    }
}

/// Events pushed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Number of participants in the room changed.
    PlayerUpdate {
        #[serde(default)]
        game_id: Option<RoomId>,
        player_count: u32,
        #[serde(default)]
        admin: Option<ParticipantId>,
    },
    /// The admin started the game.
    GameStarted {
        #[serde(default)]
        game_id: Option<RoomId>,
    },
    /// Everybody answered; the next question is active.
    QuestionUpdate {
        #[serde(default)]
        game_id: Option<RoomId>,
        current_question: String,
    },
    /// Last question answered; shuffled answers for every participant.
    GameOver {
        #[serde(default)]
        game_id: Option<RoomId>,
        shuffled_responses: HashMap<ParticipantId, Vec<RevealedAnswer>>,
    },
    /// Server is waiting for other participants to answer.
    Waiting {
        #[serde(default)]
        game_id: Option<RoomId>,
    },
}

impl ServerEvent {
    /// Event name as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PlayerUpdate { .. } => "player_update",
            Self::GameStarted { .. } => "game_started",
            Self::QuestionUpdate { .. } => "question_update",
            Self::GameOver { .. } => "game_over",
            Self::Waiting { .. } => "waiting",
        }
    }

    /// Room the event is addressed to, when the server named one.
    pub fn room_id(&self) -> Option<&RoomId> {
        match self {
            Self::PlayerUpdate { game_id, .. }
            | Self::GameStarted { game_id }
            | Self::QuestionUpdate { game_id, .. }
            | Self::GameOver { game_id, .. }
            | Self::Waiting { game_id } => game_id.as_ref(),
        }
    }

    pub fn decode(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Events emitted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Subscribe this socket to the room's notifications.
    Join {
        game_id: RoomId,
        device_id: ParticipantId,
    },
    /// Best-effort departure notice.
    Leave {
        game_id: RoomId,
        device_id: ParticipantId,
    },
}

impl ClientEvent {
    pub fn decode(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_question_update_without_room() {
        // テスト項目: game_id を含まない question_update も受理される
        // given (前提条件):
        let text = r#"{"event": "question_update", "data": {"current_question": "Kdo?"}}"#;

        // when (操作):
        let event = ServerEvent::decode(text).unwrap();

        // then (期待する結果):
        assert_eq!(
            event,
            ServerEvent::QuestionUpdate {
                game_id: None,
                current_question: "Kdo?".to_string(),
            }
        );
        assert_eq!(event.room_id(), None);
    }

    #[test]
    fn test_decode_waiting_with_empty_payload() {
        // テスト項目: 空オブジェクトの waiting イベントがデコードできる
        // given (前提条件):
        let text = r#"{"event": "waiting", "data": {}}"#;

        // when (操作):
        let event = ServerEvent::decode(text).unwrap();

        // then (期待する結果):
        assert_eq!(event, ServerEvent::Waiting { game_id: None });
        assert_eq!(event.name(), "waiting");
    }

    #[test]
    fn test_decode_game_over_with_null_answer() {
        // テスト項目: game_over の回答ペアが配列形式で読み取れ、null の回答は None になる
        // given (前提条件):
        let text = r#"{
            "event": "game_over",
            "data": {
                "game_id": "ABC123",
                "shuffled_responses": {
                    "p1": [["Jaký?", "zelený"], ["Kdo?", null]],
                    "p2": [["Jaký?", "malý"]]
                }
            }
        }"#;

        // when (操作):
        let event = ServerEvent::decode(text).unwrap();

        // then (期待する結果):
        let ServerEvent::GameOver {
            game_id,
            shuffled_responses,
        } = event
        else {
            panic!("expected game_over");
        };
        assert_eq!(game_id, Some(RoomId::new("ABC123")));
        let mine = &shuffled_responses[&ParticipantId::new("p1")];
        assert_eq!(mine[0].question(), "Jaký?");
        assert_eq!(mine[0].answer(), Some("zelený"));
        assert_eq!(mine[1].answer(), None);
    }

    #[test]
    fn test_decode_unknown_event_fails() {
        // テスト項目: 未知のイベント名はエラーになる
        // given (前提条件):
        let text = r#"{"event": "chat", "data": {"content": "hi"}}"#;

        // when (操作):
        let result = ServerEvent::decode(text);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_join_event_envelope() {
        // テスト項目: join イベントが event/data のエンベロープで送られる
        // given (前提条件):
        let event = ClientEvent::Join {
            game_id: RoomId::new("ABC123"),
            device_id: ParticipantId::new("p1"),
        };

        // when (操作):
        let json: serde_json::Value = serde_json::from_str(&event.encode().unwrap()).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({
                "event": "join",
                "data": {"game_id": "ABC123", "device_id": "p1"}
            })
        );
    }
}
