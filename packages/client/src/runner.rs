//! Interactive client loop.

use std::{sync::Arc, time::Duration};

use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;

use crate::{
    api::HttpGameApi,
    channel::WebSocketChannel,
    command::{Command, HELP},
    config::ClientConfig,
    controller::GameClient,
    error::ClientError,
    ui::{PROMPT, print_message, print_page},
    view::{Page, View, ViewBindings},
};

/// How long the departure notice may take before the process exits.
const DEPARTURE_GRACE: Duration = Duration::from_millis(500);

/// Run the client until the player quits.
///
/// Input lines and real-time events are handled one at a time on this task;
/// the page is reprinted whenever it changes.
pub async fn run_client(config: ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (channel, mut events) = WebSocketChannel::connect(&config.ws_url).await?;
    let api = HttpGameApi::new(config.server_url.as_str());
    let view = View::new(Page::standard(&config.questions), ViewBindings::standard());
    let mut client = GameClient::new(Arc::new(api), Arc::new(channel), view);

    let mut input_rx = spawn_line_editor();
    let mut events_open = true;
    let mut rendered_revision = client.view().surface().revision();

    println!("\nConnected to {}. Type /help for commands.", config.server_url);
    print_page(client.view().surface());

    loop {
        tokio::select! {
            line = input_rx.recv() => {
                // Editor thread gone: Ctrl+C, Ctrl+D or a readline failure
                let Some(line) = line else { break };
                let Some(command) = Command::parse(&line) else { continue };
                match command {
                    Command::Quit => break,
                    Command::Help => print_message(HELP),
                    Command::Invalid(message) => print_message(&message),
                    command => dispatch(&mut client, command).await,
                }
            }
            event = events.recv(), if events_open => {
                match event {
                    Some(event) => {
                        client.handle_event(event);
                    }
                    None => {
                        events_open = false;
                        print_message("Lost connection to the game server.");
                    }
                }
            }
        }

        let revision = client.view().surface().revision();
        if revision != rendered_revision {
            rendered_revision = revision;
            print_page(client.view().surface());
        }
    }

    if let Some(departure) = client.leave_room() {
        tracing::info!("Leaving room");
        let _ = tokio::time::timeout(DEPARTURE_GRACE, departure).await;
    }
    println!();

    Ok(())
}

/// Run one player action, logging its failure.
async fn dispatch(client: &mut GameClient<Page>, command: Command) {
    let name = command.name();
    let result = match command {
        Command::Create(requested) => client.create_room(&requested).await,
        Command::Join(room_id) => client.join_room(room_id, false).await,
        Command::Start => client.start_room().await,
        Command::Answer(text) => client.submit_answer(&text).map(|_| ()),
        Command::Help | Command::Quit | Command::Invalid(_) => Ok(()),
    };

    match result {
        Ok(()) => {}
        Err(e @ ClientError::NoOpenQuestion) => {
            tracing::warn!("Action '{}' refused: {}", name, e);
            print_message("There is no open question to answer right now.");
        }
        Err(e) => tracing::error!("Action '{}' failed: {}", name, e),
    }
}

/// Read lines on a blocking thread (rustyline is synchronous) and forward them.
fn spawn_line_editor() -> mpsc::UnboundedReceiver<String> {
    let (input_tx, input_rx) = mpsc::unbounded_channel::<String>();

    std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                tracing::error!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    input_rx
}
