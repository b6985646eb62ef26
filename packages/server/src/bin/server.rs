//! Sketchy game server.
//!
//! Hosts one shared drawing-and-guessing session over WebSocket.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin sketchy-server
//! cargo run --bin sketchy-server -- --host 0.0.0.0 --port 3000 --words-file words.txt
//! ```

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use sketchy_server::{
    domain::{
        GameSession, NameProvider, PaintPolicy, RotationPolicy, RoomIdFactory, SessionConfig,
        Timestamp, WordProvider,
    },
    infrastructure::{
        message_pusher::WebSocketMessagePusher,
        provider::{NameListProvider, ProviderError, WordListProvider},
    },
    ui::Server,
    usecase::{SessionRouter, SessionServices},
};
use sketchy_shared::{
    logger::setup_logger,
    time::{Clock, SystemClock},
};

#[derive(Parser, Debug)]
#[command(name = "sketchy-server")]
#[command(about = "Drawing-and-guessing party game server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// File with one player name per line (defaults to the built-in animal names)
    #[arg(long)]
    names_file: Option<PathBuf>,

    /// File with one secret word per line (defaults to the built-in word list)
    #[arg(long)]
    words_file: Option<PathBuf>,

    /// Number of chat lines kept for the HTTP API; 0 keeps everything
    #[arg(long, default_value = "200")]
    chat_history_limit: usize,

    /// Only the drawer may paint while a round is running
    #[arg(long)]
    drawer_only_paint: bool,

    /// Start a new drawing cycle once everyone has drawn
    #[arg(long)]
    restart_rotation: bool,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "debug")]
    log_level: String,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            chat_history_limit: (self.chat_history_limit > 0).then_some(self.chat_history_limit),
            paint_policy: if self.drawer_only_paint {
                PaintPolicy::DrawerOnly
            } else {
                PaintPolicy::Anyone
            },
            rotation_policy: if self.restart_rotation {
                RotationPolicy::RestartCycle
            } else {
                RotationPolicy::ExhaustOnce
            },
        }
    }
}

fn load_names(path: Option<&PathBuf>) -> Result<NameListProvider, ProviderError> {
    match path {
        Some(path) => NameListProvider::from_file(path),
        None => Ok(NameListProvider::embedded()),
    }
}

fn load_words(path: Option<&PathBuf>) -> Result<WordListProvider, ProviderError> {
    match path {
        Some(path) => WordListProvider::from_file(path),
        None => Ok(WordListProvider::embedded()),
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Initialize dependencies in order:
    // 1. Name and word providers
    // 2. MessagePusher
    // 3. GameSession and its router
    // 4. Server

    // 1. Providers
    let names = match load_names(args.names_file.as_ref()) {
        Ok(names) => names,
        Err(e) => {
            tracing::error!("Failed to load names: {}", e);
            std::process::exit(1);
        }
    };
    let words = match load_words(args.words_file.as_ref()) {
        Ok(words) => words,
        Err(e) => {
            tracing::error!("Failed to load words: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Loaded {} names and {} words", names.len(), words.len());

    // 2. MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::default());

    // 3. GameSession, owned by the router task from here on
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let session = GameSession::new(
        RoomIdFactory::generate(),
        Timestamp::new(clock.now_millis()),
        args.session_config(),
    );
    tracing::info!("Room {} created!", session.id());

    let names: Arc<dyn NameProvider> = Arc::new(names);
    let words: Arc<dyn WordProvider> = Arc::new(words);
    let services = SessionServices {
        message_pusher,
        names,
        words,
        clock,
    };
    let (handle, _router) = SessionRouter::spawn(session, services);

    // 4. Create and run the server
    let server = Server::new(handle);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
