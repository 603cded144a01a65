//! Types shared between the Paperfold client and anything speaking its wire protocol.
//!
//! - `id`: room and participant identifiers
//! - `protocol`: HTTP request/response bodies and real-time channel events
//! - `logger`: tracing subscriber setup for binaries

pub mod id;
pub mod logger;
pub mod protocol;

pub use id::{ParticipantId, RoomId};
