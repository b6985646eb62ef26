//! Session router: the single writer of a [`GameSession`].
//!
//! Every connection task talks to the session through a cloneable
//! [`SessionHandle`]. Commands are queued on one unbounded inbox and applied
//! strictly one at a time, so each operation observes the effects of all
//! earlier ones and its fan-out is handed to the transport before the next
//! command is read.

use std::sync::Arc;

use sketchy_shared::time::Clock;
use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
};

use crate::domain::{
    ConnectionToken, GameSession, MessagePusher, NameProvider, PusherChannel, RoomId,
    SessionSnapshot, StrokeRecord, WordProvider,
};

use super::{
    connect_player::ConnectPlayerUseCase, disconnect_player::DisconnectPlayerUseCase,
    error::SessionClosed, paint_stroke::PaintStrokeUseCase, send_chat::SendChatUseCase,
};

/// Collaborators the router wires into its use cases.
#[derive(Clone)]
pub struct SessionServices {
    pub message_pusher: Arc<dyn MessagePusher>,
    pub names: Arc<dyn NameProvider>,
    pub words: Arc<dyn WordProvider>,
    pub clock: Arc<dyn Clock>,
}

#[derive(Debug)]
pub enum SessionCommand {
    Connect {
        token: ConnectionToken,
        sender: PusherChannel,
    },
    Disconnect {
        token: ConnectionToken,
    },
    Chat {
        token: ConnectionToken,
        text: String,
    },
    Paint {
        token: ConnectionToken,
        stroke: StrokeRecord,
    },
    Snapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
    ChatHistory {
        reply: oneshot::Sender<Vec<String>>,
    },
}

/// Cloneable sender side of the router inbox.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    room_id: RoomId,
    inbox: mpsc::UnboundedSender<SessionCommand>,
}

impl SessionHandle {
    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn connect(&self, token: ConnectionToken, sender: PusherChannel) -> Result<(), SessionClosed> {
        self.send(SessionCommand::Connect { token, sender })
    }

    pub fn disconnect(&self, token: ConnectionToken) -> Result<(), SessionClosed> {
        self.send(SessionCommand::Disconnect { token })
    }

    pub fn chat(&self, token: ConnectionToken, text: String) -> Result<(), SessionClosed> {
        self.send(SessionCommand::Chat { token, text })
    }

    pub fn paint(&self, token: ConnectionToken, stroke: StrokeRecord) -> Result<(), SessionClosed> {
        self.send(SessionCommand::Paint { token, stroke })
    }

    /// Read-only view of the session, taken after every command queued so far.
    pub async fn snapshot(&self) -> Result<SessionSnapshot, SessionClosed> {
        let (reply, rx) = oneshot::channel();
        self.send(SessionCommand::Snapshot { reply })?;
        rx.await.map_err(|_| SessionClosed)
    }

    pub async fn chat_history(&self) -> Result<Vec<String>, SessionClosed> {
        let (reply, rx) = oneshot::channel();
        self.send(SessionCommand::ChatHistory { reply })?;
        rx.await.map_err(|_| SessionClosed)
    }

    fn send(&self, command: SessionCommand) -> Result<(), SessionClosed> {
        self.inbox.send(command).map_err(|_| SessionClosed)
    }
}

pub struct SessionRouter {
    session: GameSession,
    inbox: mpsc::UnboundedReceiver<SessionCommand>,
    connect_player: ConnectPlayerUseCase,
    disconnect_player: DisconnectPlayerUseCase,
    send_chat: SendChatUseCase,
    paint_stroke: PaintStrokeUseCase,
}

impl SessionRouter {
    /// Build a router and the handle that feeds it.
    pub fn new(session: GameSession, services: SessionServices) -> (Self, SessionHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = SessionHandle {
            room_id: session.id(),
            inbox: tx,
        };
        let SessionServices {
            message_pusher,
            names,
            words,
            clock,
        } = services;

        let router = Self {
            session,
            inbox: rx,
            connect_player: ConnectPlayerUseCase::new(message_pusher.clone(), names, clock),
            disconnect_player: DisconnectPlayerUseCase::new(message_pusher.clone()),
            send_chat: SendChatUseCase::new(message_pusher.clone(), words),
            paint_stroke: PaintStrokeUseCase::new(message_pusher),
        };
        (router, handle)
    }

    /// Build the router and run it on its own task.
    ///
    /// The task ends once every [`SessionHandle`] has been dropped.
    pub fn spawn(session: GameSession, services: SessionServices) -> (SessionHandle, JoinHandle<()>) {
        let (router, handle) = Self::new(session, services);
        (handle, tokio::spawn(router.run()))
    }

    pub async fn run(mut self) {
        tracing::info!("Session router for room {} started", self.session.id());
        while let Some(command) = self.inbox.recv().await {
            self.dispatch(command).await;
        }
        tracing::info!("Session router for room {} stopped", self.session.id());
    }

    async fn dispatch(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Connect { token, sender } => {
                self.connect_player
                    .execute(&mut self.session, token, sender)
                    .await;
            }
            SessionCommand::Disconnect { token } => {
                self.disconnect_player
                    .execute(&mut self.session, &token)
                    .await;
            }
            SessionCommand::Chat { token, text } => {
                self.send_chat
                    .execute(&mut self.session, &token, &text)
                    .await;
            }
            SessionCommand::Paint { token, stroke } => {
                self.paint_stroke
                    .execute(&mut self.session, &token, stroke)
                    .await;
            }
            SessionCommand::Snapshot { reply } => {
                // The requester may have gone away already.
                let _ = reply.send(self.session.snapshot());
            }
            SessionCommand::ChatHistory { reply } => {
                let _ = reply.send(self.session.chat_history());
            }
        }
    }
}
