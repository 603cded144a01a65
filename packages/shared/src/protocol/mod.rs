//! Wire protocol spoken with the game server.
//!
//! DTOs are organized by transport:
//! - `http`: request/response bodies of the REST endpoints
//! - `realtime`: events exchanged over the WebSocket channel

pub mod http;
pub mod realtime;
