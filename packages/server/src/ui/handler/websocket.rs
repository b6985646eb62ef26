//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::{
    domain::{ConnectionToken, StrokeRecord},
    infrastructure::dto::websocket::ClientMessage,
    ui::state::AppState,
    usecase::SessionHandle,
};

/// Query parameters for WebSocket connection
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    /// Identity of the player. Several tabs may share one token.
    pub token: Option<String>,
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    let raw_token = query
        .token
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let token = match ConnectionToken::try_from(raw_token.clone()) {
        Ok(token) => token,
        Err(e) => {
            tracing::warn!("Invalid token '{}': {}", raw_token, e);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    let session = state.session.clone();
    Ok(ws.on_upgrade(move |socket| handle_socket(socket, session, token)))
}

/// Spawns a task that forwards frames queued for this connection to its socket.
///
/// # Arguments
///
/// * `rx` - Channel receiver fed by the message pusher
/// * `sender` - WebSocket sink of this connection
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, session: SessionHandle, token: ConnectionToken) {
    let (tx, rx) = mpsc::unbounded_channel();
    if let Err(e) = session.connect(token.clone(), tx) {
        tracing::error!("Cannot connect '{}': {}", token, e);
        return;
    }
    tracing::info!("Connection '{}' opened", token);

    let (sender, mut receiver) = socket.split();

    // Inbound frames are forwarded from this single task, so the session sees
    // them in the order they arrived.
    let recv_session = session.clone();
    let recv_token = token.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            let forwarded = match msg {
                Message::Text(text) => match ClientMessage::from_frame(&text) {
                    ClientMessage::Chat(payload) => {
                        tracing::debug!("Chat from '{}': {}", recv_token, payload.text);
                        recv_session.chat(recv_token.clone(), payload.text)
                    }
                    ClientMessage::Paint(stroke) => {
                        recv_session.paint(recv_token.clone(), StrokeRecord::new(stroke))
                    }
                },
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    Ok(())
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", recv_token);
                    break;
                }
                _ => Ok(()),
            };

            if let Err(e) = forwarded {
                tracing::warn!("Dropping frame from '{}': {}", recv_token, e);
                break;
            }
        }
    });

    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    match session.disconnect(token.clone()) {
        Ok(()) => tracing::info!("Connection '{}' closed", token),
        Err(e) => tracing::warn!("Failed to disconnect '{}': {}", token, e),
    }
}
