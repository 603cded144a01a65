//! Client session state and real-time subscription scope.

use paperfold_shared::{ParticipantId, RoomId, protocol::realtime::ClientEvent};

use crate::{channel::RealtimeChannel, error::ChannelError};

/// Identity of this client inside one room.
///
/// Created on join, dropped on leave. A participant id is never reused with
/// another room: joining again replaces the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub room_id: RoomId,
    pub participant_id: ParticipantId,
    pub is_admin: bool,
}

impl Session {
    pub fn new(room_id: RoomId, participant_id: ParticipantId, is_admin: bool) -> Self {
        Self {
            room_id,
            participant_id,
            is_admin,
        }
    }
}

/// Room whose notifications the client currently accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    room_id: RoomId,
}

impl Subscription {
    /// Announce the session on the real-time channel and start accepting its room's events.
    pub fn open(channel: &dyn RealtimeChannel, session: &Session) -> Result<Self, ChannelError> {
        channel.emit(ClientEvent::Join {
            game_id: session.room_id.clone(),
            device_id: session.participant_id.clone(),
        })?;
        tracing::debug!("Subscribed to room '{}'", session.room_id);

        Ok(Self {
            room_id: session.room_id.clone(),
        })
    }

    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    /// Events naming another room are rejected; events naming no room were
    /// routed to us by the server and are accepted.
    pub fn accepts(&self, event_room: Option<&RoomId>) -> bool {
        event_room.is_none_or(|room| room == &self.room_id)
    }
}
