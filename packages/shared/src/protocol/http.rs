//! HTTP API bodies.
//!
//! Field names follow the server's JSON contract (`game_id`, `device_id`, ...).
//! Response fields the client depends on are optional so that a malformed
//! response can be detected instead of failing deserialization outright.

use serde::{Deserialize, Serialize};

use crate::id::{ParticipantId, RoomId};

/// Endpoint paths, relative to the server base URL.
pub mod endpoint {
    pub const CREATE_GAME: &str = "/create_game";
    pub const JOIN_GAME: &str = "/join_game";
    pub const SUBMIT_RESPONSE: &str = "/submit_response";
    pub const START_GAME: &str = "/start_game";
    pub const LEAVE_GAME: &str = "/leave_game";
}

/// Body of `POST /create_game`. Without `game_id` the server picks one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGameRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<RoomId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGameResponse {
    #[serde(default)]
    pub game_id: Option<RoomId>,
}

/// Body of `POST /join_game`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinGameRequest {
    pub game_id: RoomId,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinGameResponse {
    #[serde(default)]
    pub device_id: Option<ParticipantId>,
    #[serde(default)]
    pub current_question: Option<String>,
    #[serde(default)]
    pub player_count: Option<u32>,
}

/// Body of `POST /submit_response`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponseRequest {
    pub game_id: RoomId,
    pub device_id: ParticipantId,
    pub response: String,
}

/// Body of `POST /start_game` and `POST /leave_game`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRequest {
    pub game_id: RoomId,
    pub device_id: ParticipantId,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
