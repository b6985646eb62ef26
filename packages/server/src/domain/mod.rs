//! Domain layer: the game session state machine.
//!
//! Pure state and rules, free of I/O. Collaborators (transport, name and
//! word sources) are reached through the traits defined here and
//! implemented by the infrastructure layer.

pub mod canvas;
pub mod chat;
pub mod entity;
pub mod error;
pub mod event;
pub mod provider;
pub mod pusher;
pub mod round;
pub mod roster;
pub mod session;
pub mod value_object;

pub use canvas::{CanvasChange, CanvasLog};
pub use chat::{ChatHistory, DEFAULT_CHAT_HISTORY_LIMIT};
pub use entity::Player;
pub use error::{MessagePushError, RoundError, ValueObjectError};
pub use event::{Delivery, ServerEvent};
pub use provider::{NameProvider, WordProvider};
pub use pusher::{MessagePusher, PusherChannel};
pub use round::{
    RotationPolicy, RoundAbandoned, RoundController, RoundStarted, RoundState, RoundWon,
    START_COMMAND,
};
pub use roster::{ConnectOutcome, PlayerRoster};
pub use session::{
    GameSession, JoinOutcome, PaintPolicy, PlayerSnapshot, SessionConfig, SessionSnapshot,
};
pub use value_object::{
    CLEAR_KEY, ConnectionToken, PlayerName, RoomId, RoomIdFactory, StrokeRecord, Timestamp, Word,
};
