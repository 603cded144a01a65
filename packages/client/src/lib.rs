//! Paperfold game client.
//!
//! Talks to the game server over HTTP (room membership and answers) and a
//! WebSocket (room notifications), and reflects both into a page rendered
//! on the terminal.

pub mod api;
pub mod channel;
pub mod command;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod session;
pub mod view;

mod runner;
mod ui;

pub use runner::run_client;
