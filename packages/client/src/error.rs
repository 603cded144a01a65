//! Error types for the Paperfold client.

use thiserror::Error;

/// Errors raised at the request boundary of a UI action.
///
/// None of these are surfaced to the player; the controller logs them and
/// leaves the view as it was.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or decoding failure while talking to the HTTP API
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Response did not contain a field the transition needs
    #[error("Response is missing '{0}'")]
    MissingField(&'static str),

    /// Action needs a joined room
    #[error("Not joined to any room")]
    NoSession,

    /// Action is reserved for the room admin
    #[error("Only the room admin can do this")]
    NotAdmin,

    /// Answer form is not on screen: the game has not started or is over
    #[error("No question is open for answers")]
    NoOpenQuestion,

    /// Real-time channel failure
    #[error(transparent)]
    Channel(#[from] ChannelError),
}

/// Real-time channel errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChannelError {
    /// Writer task is gone; the socket has been closed
    #[error("Real-time channel is closed")]
    Closed,

    /// Event could not be serialized
    #[error("Failed to encode event: {0}")]
    Encode(String),

    /// Could not open the WebSocket connection
    #[error("Connection error: {0}")]
    Connect(String),
}
