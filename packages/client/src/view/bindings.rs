//! Slot -> element id table.
//!
//! The controller never names elements directly; it addresses logical slots
//! and the table resolves them to the document's element ids.

use std::collections::HashMap;

/// Logical places of the page the controller writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    CreateForm,
    JoinForm,
    GameSection,
    AdminControls,
    LobbyText,
    AnswerForm,
    GameOverSection,
    RoomIdDisplay,
    ParticipantCount,
    CurrentQuestion,
    WaitingIndicator,
}

impl Slot {
    pub const ALL: [Slot; 11] = [
        Slot::CreateForm,
        Slot::JoinForm,
        Slot::GameSection,
        Slot::AdminControls,
        Slot::LobbyText,
        Slot::AnswerForm,
        Slot::GameOverSection,
        Slot::RoomIdDisplay,
        Slot::ParticipantCount,
        Slot::CurrentQuestion,
        Slot::WaitingIndicator,
    ];

    /// Element id of the slot in the standard page.
    pub fn standard_element_id(self) -> &'static str {
        match self {
            Slot::CreateForm => "create-game-section",
            Slot::JoinForm => "join-game-section",
            Slot::GameSection => "game-section",
            Slot::AdminControls => "admin-section",
            Slot::LobbyText => "lobby-text",
            Slot::AnswerForm => "answer-section",
            Slot::GameOverSection => "game-over-section",
            Slot::RoomIdDisplay => "gameID",
            Slot::ParticipantCount => "playersNum",
            Slot::CurrentQuestion => "current-question-text",
            Slot::WaitingIndicator => "waiting-text",
        }
    }
}

/// Binding table, built once and injected into the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewBindings {
    table: HashMap<Slot, String>,
}

impl ViewBindings {
    /// Table matching the standard page's element ids.
    pub fn standard() -> Self {
        let table = Slot::ALL
            .iter()
            .map(|slot| (*slot, slot.standard_element_id().to_string()))
            .collect();
        Self { table }
    }

    /// Rebind one slot to a different element id.
    pub fn with(mut self, slot: Slot, element_id: impl Into<String>) -> Self {
        self.table.insert(slot, element_id.into());
        self
    }

    pub fn element_id(&self, slot: Slot) -> &str {
        self.table
            .get(&slot)
            .map(String::as_str)
            .unwrap_or_else(|| slot.standard_element_id())
    }
}

impl Default for ViewBindings {
    fn default() -> Self {
        Self::standard()
    }
}
