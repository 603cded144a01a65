//! Paperfold terminal client.
//!
//! Connects to a Paperfold game server, lets the player create or join a
//! room, answer the questions, and shows the folded story at the end.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin paperfold
//! cargo run --bin paperfold -- --server http://192.168.1.10:5000
//! ```

use clap::Parser;

use paperfold_client::config::ClientConfig;
use paperfold_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "paperfold")]
#[command(about = "Terminal client for the Paperfold party game", long_about = None)]
struct Args {
    /// Base URL of the game server's HTTP API
    #[arg(short = 's', long, default_value = "http://127.0.0.1:5000")]
    server: String,

    /// WebSocket URL of the real-time channel (derived from --server when omitted)
    #[arg(short = 'w', long)]
    ws_url: Option<String>,

    /// Questions shown in the results, comma separated (defaults to the standard set)
    #[arg(short = 'q', long, value_delimiter = ',')]
    questions: Vec<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();
    let config = ClientConfig::new(&args.server, args.ws_url, args.questions);

    if let Err(e) = paperfold_client::run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
