//! Game client controller.
//!
//! Owns the session, the real-time subscription and the view. Every UI
//! action and every server notification goes through one `GameClient`, so
//! none of this state is shared or locked.
//!
//! Failures are returned to the caller, which only logs them: the view is
//! left exactly as it was before the failed action.

use std::sync::Arc;

use tokio::task::JoinHandle;

use paperfold_shared::{
    RoomId,
    protocol::{
        http::{CreateGameRequest, JoinGameRequest, ParticipantRequest, SubmitResponseRequest},
        realtime::{ClientEvent, ServerEvent},
    },
};

use crate::{
    api::GameApi,
    channel::RealtimeChannel,
    domain::{answers_for, format_participant_count},
    error::ClientError,
    session::{Session, Subscription},
    view::{Slot, Surface, View},
};

pub struct GameClient<S: Surface> {
    api: Arc<dyn GameApi>,
    channel: Arc<dyn RealtimeChannel>,
    view: View<S>,
    session: Option<Session>,
    subscription: Option<Subscription>,
}

impl<S: Surface> GameClient<S> {
    pub fn new(api: Arc<dyn GameApi>, channel: Arc<dyn RealtimeChannel>, view: View<S>) -> Self {
        Self {
            api,
            channel,
            view,
            session: None,
            subscription: None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn subscription(&self) -> Option<&Subscription> {
        self.subscription.as_ref()
    }

    pub fn view(&self) -> &View<S> {
        &self.view
    }

    /// Create a room and join it as admin.
    ///
    /// A blank `requested` id lets the server pick one.
    pub async fn create_room(&mut self, requested: &str) -> Result<(), ClientError> {
        let request = CreateGameRequest {
            game_id: RoomId::parse(requested),
        };
        let response = self.api.create_game(request).await?;
        let room_id = response.game_id.ok_or(ClientError::MissingField("game_id"))?;
        tracing::info!("Room '{}' created", room_id);

        self.view.hide(Slot::CreateForm);
        self.view.show(Slot::JoinForm);

        self.join_room(room_id, true).await
    }

    /// Join `room_id` and subscribe to its notifications.
    ///
    /// Any previous session is replaced, never merged: once the server has
    /// accepted the new join, the old room gets the same departure notices
    /// as on exit, before the new subscription is opened.
    pub async fn join_room(&mut self, room_id: RoomId, is_admin: bool) -> Result<(), ClientError> {
        let request = JoinGameRequest {
            game_id: room_id.clone(),
            is_admin,
        };
        let response = self.api.join_game(request).await?;
        let participant_id = response
            .device_id
            .ok_or(ClientError::MissingField("device_id"))?;
        tracing::info!(
            "Joined room '{}' as '{}'{}",
            room_id,
            participant_id,
            if is_admin { " (admin)" } else { "" }
        );

        if let Some(previous) = self.session.as_ref().map(|s| s.room_id.clone()) {
            tracing::info!("Leaving room '{}' to join '{}'", previous, room_id);
            // The HTTP notice runs detached like on exit
            let _ = self.depart();
        }

        self.view.hide(Slot::CreateForm);
        self.view.hide(Slot::JoinForm);
        self.view.show(Slot::GameSection);
        if is_admin {
            self.view.show(Slot::AdminControls);
            self.view.hide(Slot::LobbyText);
        } else {
            self.view.hide(Slot::AdminControls);
            self.view.show(Slot::LobbyText);
        }
        self.view.hide(Slot::AnswerForm);
        self.view.hide(Slot::WaitingIndicator);
        self.view.hide(Slot::GameOverSection);
        self.view.set_text(
            Slot::CurrentQuestion,
            response.current_question.as_deref().unwrap_or_default(),
        );
        self.view.set_text(Slot::RoomIdDisplay, room_id.as_str());
        self.view.set_text(
            Slot::ParticipantCount,
            &format_participant_count(response.player_count),
        );

        self.session = Some(Session::new(room_id, participant_id, is_admin));
        self.subscribe()
    }

    /// Submit an answer to the active question.
    ///
    /// Only possible while the answer form is on screen. The waiting
    /// indicator is shown right away; only a question update hides it again.
    /// The request runs detached and its response is ignored.
    pub fn submit_answer(&mut self, text: &str) -> Result<JoinHandle<()>, ClientError> {
        let session = self.session.as_ref().ok_or(ClientError::NoSession)?;
        if !self.view.is_shown(Slot::AnswerForm) {
            return Err(ClientError::NoOpenQuestion);
        }
        let request = SubmitResponseRequest {
            game_id: session.room_id.clone(),
            device_id: session.participant_id.clone(),
            response: text.to_string(),
        };

        self.view.show(Slot::WaitingIndicator);

        let api = Arc::clone(&self.api);
        Ok(tokio::spawn(async move {
            match api.submit_response(request).await {
                Ok(()) => tracing::debug!("Answer submitted"),
                Err(e) => tracing::error!("Failed to submit answer: {}", e),
            }
        }))
    }

    /// Ask the server to start the game (admin only).
    ///
    /// The admin controls are hidden once the server answers, whatever the
    /// answer. The game itself starts with the `game_started` notification.
    pub async fn start_room(&mut self) -> Result<(), ClientError> {
        let session = self.session.as_ref().ok_or(ClientError::NoSession)?;
        if !session.is_admin {
            return Err(ClientError::NotAdmin);
        }
        let request = ParticipantRequest {
            game_id: session.room_id.clone(),
            device_id: session.participant_id.clone(),
        };

        let result = self.api.start_game(request).await;
        if matches!(result, Ok(()) | Err(ClientError::Rejected { .. })) {
            self.view.hide(Slot::AdminControls);
        }
        result
    }

    /// Leave the room on exit.
    ///
    /// Sends one departure notice over the real-time channel and one over
    /// HTTP from a detached task; nothing is awaited. Returns the HTTP task,
    /// or `None` when there was no session.
    pub fn leave_room(&mut self) -> Option<JoinHandle<()>> {
        self.depart()
    }

    /// Apply a server notification to the view.
    ///
    /// Returns `false` when the event was ignored because no room is
    /// subscribed or it names another room.
    pub fn handle_event(&mut self, event: ServerEvent) -> bool {
        let (Some(session), Some(subscription)) = (&self.session, &self.subscription) else {
            tracing::debug!("Ignoring '{}' event: not subscribed to any room", event.name());
            return false;
        };
        if !subscription.accepts(event.room_id()) {
            tracing::debug!(
                "Ignoring '{}' event for another room (subscribed to '{}')",
                event.name(),
                subscription.room_id()
            );
            return false;
        }
        let participant_id = session.participant_id.clone();

        match event {
            ServerEvent::PlayerUpdate { player_count, .. } => {
                self.view
                    .set_text(Slot::ParticipantCount, &player_count.to_string());
            }
            ServerEvent::GameStarted { .. } => {
                tracing::info!("Game started");
                self.view.hide(Slot::AdminControls);
                self.view.hide(Slot::LobbyText);
                self.view.show(Slot::AnswerForm);
            }
            ServerEvent::QuestionUpdate {
                current_question, ..
            } => {
                self.view.set_text(Slot::CurrentQuestion, &current_question);
                self.view.hide(Slot::WaitingIndicator);
            }
            ServerEvent::GameOver {
                shuffled_responses, ..
            } => {
                for revealed in answers_for(&shuffled_responses, &participant_id) {
                    let answer = revealed.answer().unwrap_or_default();
                    if !self.view.reveal_answer(revealed.question(), answer) {
                        tracing::debug!(
                            "No result container for question '{}'",
                            revealed.question()
                        );
                    }
                }
                tracing::info!("Game over");
                self.view.hide(Slot::GameSection);
                self.view.show(Slot::GameOverSection);
            }
            ServerEvent::Waiting { .. } => {
                self.view.show(Slot::WaitingIndicator);
            }
        }
        true
    }

    /// End the current session: real-time notice now, HTTP notice detached.
    fn depart(&mut self) -> Option<JoinHandle<()>> {
        let session = self.session.take()?;
        self.subscription = None;

        if let Err(e) = self.channel.emit(ClientEvent::Leave {
            game_id: session.room_id.clone(),
            device_id: session.participant_id.clone(),
        }) {
            tracing::warn!("Failed to send real-time leave notice: {}", e);
        }

        let request = ParticipantRequest {
            game_id: session.room_id,
            device_id: session.participant_id,
        };
        let api = Arc::clone(&self.api);
        Some(tokio::spawn(async move {
            if let Err(e) = api.leave_game(request).await {
                tracing::warn!("Failed to send leave request: {}", e);
            }
        }))
    }

    fn subscribe(&mut self) -> Result<(), ClientError> {
        let session = self.session.as_ref().ok_or(ClientError::NoSession)?;
        self.subscription = Some(Subscription::open(self.channel.as_ref(), session)?);
        Ok(())
    }
}
