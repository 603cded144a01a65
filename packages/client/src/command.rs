//! Terminal commands.
//!
//! Lines starting with `/` are commands; any other non-empty line is an answer.

use paperfold_shared::RoomId;

pub const HELP: &str = "\
Commands:
  /create [room]  create a room (server picks an id when omitted) and join it as admin
  /join <room>    join an existing room
  /start          start the game (admin only)
  /help           show this help
  /quit           leave the room and exit
Once the game has started, any other line is submitted as your answer.";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create(String),
    Join(RoomId),
    Start,
    Answer(String),
    Help,
    Quit,
    /// Unknown command or missing argument, with a message for the player
    Invalid(String),
}

impl Command {
    /// Parse a line; blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let Some(rest) = line.strip_prefix('/') else {
            return Some(Command::Answer(line.to_string()));
        };

        let (name, argument) = match rest.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (rest, ""),
        };

        let command = match name {
            "create" => Command::Create(argument.to_string()),
            "join" => match RoomId::parse(argument) {
                Some(room_id) => Command::Join(room_id),
                None => Command::Invalid("usage: /join <room>".to_string()),
            },
            "start" => Command::Start,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Invalid(format!("unknown command '/{}', try /help", other)),
        };
        Some(command)
    }

    /// Short name used in log messages.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Create(_) => "create",
            Command::Join(_) => "join",
            Command::Start => "start",
            Command::Answer(_) => "answer",
            Command::Help => "help",
            Command::Quit => "quit",
            Command::Invalid(_) => "invalid",
        }
    }
}
