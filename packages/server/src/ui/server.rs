//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::usecase::SessionHandle;

use super::{
    handler::{
        debug_room_state, get_chat_history, get_room_detail, get_rooms, health_check,
        websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Game server
///
/// Serves the WebSocket endpoint and the read-only HTTP API of one session.
///
/// # Example
///
/// ```ignore
/// let (session, _router) = SessionRouter::spawn(game_session, services);
/// Server::new(session).run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    session: SessionHandle,
}

impl Server {
    pub fn new(session: SessionHandle) -> Self {
        Self { session }
    }

    /// Axum router with every endpoint wired to the session.
    pub fn router(&self) -> Router {
        let app_state = Arc::new(AppState {
            session: self.session.clone(),
        });

        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/debug/room", get(debug_room_state))
            .route("/api/health", get(health_check))
            .route("/api/rooms", get(get_rooms))
            .route("/api/rooms/{room_id}", get(get_room_detail))
            .route("/api/rooms/{room_id}/chat", get(get_chat_history))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Run the game server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Game server listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws?token=<your-token>", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
