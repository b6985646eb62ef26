//! Game session: the aggregate root of one room.
//!
//! Owns the roster, the round, the canvas log and the chat history, and
//! turns each inbound event into an ordered list of [`Delivery`] values.
//! The session never performs I/O itself; a single writer (the session
//! router) applies one event at a time and pushes the deliveries out.

use serde::Serialize;

use super::{
    canvas::{CanvasChange, CanvasLog},
    chat::{ChatHistory, DEFAULT_CHAT_HISTORY_LIMIT},
    event::{Delivery, ServerEvent},
    provider::{NameProvider, WordProvider},
    round::{RotationPolicy, RoundController, START_COMMAND},
    roster::PlayerRoster,
    value_object::{ConnectionToken, PlayerName, RoomId, StrokeRecord, Timestamp},
};

/// Who may add strokes to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintPolicy {
    /// Any connected player, drawer or not.
    #[default]
    Anyone,
    /// Only the drawer while a round runs; anyone while idle.
    DrawerOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// `None` keeps the whole chat history.
    pub chat_history_limit: Option<usize>,
    pub paint_policy: PaintPolicy,
    pub rotation_policy: RotationPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            chat_history_limit: Some(DEFAULT_CHAT_HISTORY_LIMIT),
            paint_policy: PaintPolicy::default(),
            rotation_policy: RotationPolicy::default(),
        }
    }
}

/// Read-only view of a player, without its connection token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub name: PlayerName,
    pub is_drawer: bool,
    pub was_drawer: bool,
    pub joined_at: Timestamp,
}

/// Read-only view of a session. The secret word is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub room_id: RoomId,
    pub created_at: Timestamp,
    pub players: Vec<PlayerSnapshot>,
    pub is_running: bool,
    pub drawer: Option<PlayerName>,
    pub canvas_len: usize,
    pub chat_len: usize,
}

/// Result of [`GameSession::connect`].
#[derive(Debug, Clone, PartialEq)]
pub struct JoinOutcome {
    /// Roster changes for the players, empty when the token was already present.
    pub deliveries: Vec<Delivery>,
    /// Canvas history for the newly opened connection only. Other
    /// connections sharing the token already have it.
    pub replay: Vec<ServerEvent>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    id: RoomId,
    created_at: Timestamp,
    config: SessionConfig,
    roster: PlayerRoster,
    round: RoundController,
    canvas: CanvasLog,
    chat: ChatHistory,
}

impl GameSession {
    pub fn new(id: RoomId, created_at: Timestamp, config: SessionConfig) -> Self {
        Self {
            id,
            created_at,
            config,
            roster: PlayerRoster::new(),
            round: RoundController::new(config.rotation_policy),
            canvas: CanvasLog::new(),
            chat: ChatHistory::new(config.chat_history_limit),
        }
    }

    /// A connection for `token` opened.
    ///
    /// A new player triggers a `playerlist` broadcast. In every case the
    /// canvas history is returned for the opening connection to replay.
    pub fn connect(
        &mut self,
        token: ConnectionToken,
        names: &dyn NameProvider,
        joined_at: Timestamp,
    ) -> JoinOutcome {
        let outcome = self.roster.connect(token.clone(), names, joined_at);
        let mut deliveries = Vec::new();

        if outcome.roster_changed() {
            tracing::info!(
                "Player '{}' joined room {} as {}",
                token,
                self.id,
                outcome.player().name
            );
            deliveries.push(self.player_list());
        } else {
            tracing::debug!("Player '{}' is already in room {}", token, self.id);
        }

        JoinOutcome {
            deliveries,
            replay: self.canvas.replay(),
        }
    }

    /// A connection for `token` closed.
    pub fn disconnect(&mut self, token: &ConnectionToken) -> Vec<Delivery> {
        let Some(leaver) = self.roster.disconnect(token) else {
            tracing::debug!("Ignoring disconnect of unknown player '{}'", token);
            return Vec::new();
        };
        tracing::info!("Player '{}' ({}) left room {}", token, leaver.name, self.id);

        let mut deliveries = vec![self.player_list()];
        if let Some(abandoned) = self.round.abandon(&leaver) {
            tracing::info!("Drawer {} left; round abandoned", abandoned.drawer);
            deliveries.push(self.announce(abandoned.announcement()));
        }
        deliveries
    }

    /// A chat line from `token`.
    ///
    /// The line is recorded and broadcast first. Then, independently, the
    /// text is checked as the start command and as a guess.
    pub fn receive_chat(
        &mut self,
        token: &ConnectionToken,
        text: &str,
        words: &dyn WordProvider,
    ) -> Vec<Delivery> {
        let Some(speaker) = self.roster.find(token) else {
            tracing::debug!("Ignoring chat from unknown player '{}'", token);
            return Vec::new();
        };

        let line = format!("{}: {}", speaker.name, text);
        self.chat.push(line.clone());
        let mut deliveries = vec![self.announce(line)];

        if text == START_COMMAND {
            match self.round.start(&mut self.roster, words) {
                Ok(started) => {
                    tracing::info!(
                        "Round started in room {}; drawer is {}",
                        self.id,
                        started.drawer.name
                    );
                    deliveries.push(self.announce(started.announcement()));
                    deliveries.push(Delivery::to_one(
                        started.drawer.token.clone(),
                        ServerEvent::Chat(started.word_reveal()),
                    ));
                }
                Err(e) => {
                    tracing::debug!("Ignoring start request from '{}': {}", token, e);
                }
            }
        }

        if let Some(won) = self.round.check_guess(&mut self.roster, token, text) {
            tracing::info!("{} guessed the word in room {}", won.guesser, self.id);
            deliveries.push(self.announce(won.announcement()));
        }

        deliveries
    }

    /// A stroke from `token`, logged then broadcast. A clear marker empties
    /// the log instead of being stored, and is still broadcast.
    pub fn receive_paint(&mut self, token: &ConnectionToken, stroke: StrokeRecord) -> Vec<Delivery> {
        let Some(painter) = self.roster.find(token) else {
            tracing::debug!("Ignoring paint from unknown player '{}'", token);
            return Vec::new();
        };
        if self.config.paint_policy == PaintPolicy::DrawerOnly
            && self.round.is_running()
            && !painter.is_drawer
        {
            tracing::debug!("Ignoring paint from non-drawer '{}'", token);
            return Vec::new();
        }

        if self.canvas.append(stroke.clone()) == CanvasChange::Cleared {
            tracing::debug!("Canvas of room {} cleared by '{}'", self.id, token);
        }
        vec![Delivery::to_all(self.roster.tokens(), ServerEvent::Paint(stroke))]
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            room_id: self.id,
            created_at: self.created_at,
            players: self
                .roster
                .players()
                .iter()
                .map(|p| PlayerSnapshot {
                    name: p.name.clone(),
                    is_drawer: p.is_drawer,
                    was_drawer: p.was_drawer,
                    joined_at: p.joined_at,
                })
                .collect(),
            is_running: self.round.is_running(),
            drawer: self.roster.current_drawer().map(|p| p.name.clone()),
            canvas_len: self.canvas.len(),
            chat_len: self.chat.len(),
        }
    }

    pub fn chat_history(&self) -> Vec<String> {
        self.chat.entries().map(str::to_string).collect()
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn roster(&self) -> &PlayerRoster {
        &self.roster
    }

    pub fn round(&self) -> &RoundController {
        &self.round
    }

    pub fn canvas(&self) -> &CanvasLog {
        &self.canvas
    }

    fn player_list(&self) -> Delivery {
        Delivery::to_all(self.roster.tokens(), ServerEvent::PlayerList(self.roster.names()))
    }

    fn announce(&self, message: String) -> Delivery {
        Delivery::to_all(self.roster.tokens(), ServerEvent::Chat(message))
    }
}
