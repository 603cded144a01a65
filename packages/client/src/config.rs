//! Client configuration.

/// Questions the server asks, in order.
///
/// The page ships one result container per question; the game-over reveal
/// looks containers up by question text.
pub const DEFAULT_QUESTIONS: [&str; 7] = [
    "Jaký?",
    "Kdo?",
    "S kým?",
    "Kdy?",
    "Kde?",
    "Co dělali?",
    "Proč?",
];

/// Resolved runtime configuration of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the HTTP API, without trailing slash
    pub server_url: String,
    /// URL of the real-time WebSocket endpoint
    pub ws_url: String,
    /// Questions that get a result container on the page
    pub questions: Vec<String>,
}

impl ClientConfig {
    /// Build a configuration, deriving the WebSocket URL from the server URL
    /// when none is given (`http://host` -> `ws://host/ws`).
    pub fn new(server_url: &str, ws_url: Option<String>, questions: Vec<String>) -> Self {
        let server_url = server_url.trim_end_matches('/').to_string();
        let ws_url = ws_url.unwrap_or_else(|| derive_ws_url(&server_url));
        let questions = if questions.is_empty() {
            DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect()
        } else {
            questions
        };

        Self {
            server_url,
            ws_url,
            questions,
        }
    }
}

/// Swap the HTTP scheme for the matching WebSocket one and append `/ws`.
pub fn derive_ws_url(server_url: &str) -> String {
    let base = server_url.trim_end_matches('/');
    let rest = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else {
        format!("ws://{}", base)
    };
    format!("{}/ws", rest)
}
