//! Pure helpers for the controller.

use std::collections::HashMap;

use paperfold_shared::{ParticipantId, protocol::realtime::RevealedAnswer};

/// Answers revealed to `participant`; other participants' answers are never returned.
pub fn answers_for<'a>(
    shuffled_responses: &'a HashMap<ParticipantId, Vec<RevealedAnswer>>,
    participant: &ParticipantId,
) -> &'a [RevealedAnswer] {
    shuffled_responses
        .get(participant)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Text shown for a participant count. A missing count renders empty.
pub fn format_participant_count(count: Option<u32>) -> String {
    count.map(|c| c.to_string()).unwrap_or_default()
}
