//! Outbound events produced by the game session.
//!
//! Every session operation returns an ordered list of [`Delivery`] values.
//! The use case layer hands them to the [`MessagePusher`](super::MessagePusher)
//! in that order.

use super::value_object::{ConnectionToken, PlayerName, StrokeRecord};

/// Something to tell the clients, one variant per outbound channel.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// `playerlist`: display names in join order.
    PlayerList(Vec<PlayerName>),
    /// `chat`: a formatted `"<name>: <text>"` line or an announcement.
    Chat(String),
    /// `paint`: a stroke payload, verbatim.
    Paint(StrokeRecord),
}

/// An event together with the tokens it must reach.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub recipients: Vec<ConnectionToken>,
    pub event: ServerEvent,
}

impl Delivery {
    pub fn to_all(recipients: Vec<ConnectionToken>, event: ServerEvent) -> Self {
        Self { recipients, event }
    }

    pub fn to_one(recipient: ConnectionToken, event: ServerEvent) -> Self {
        Self {
            recipients: vec![recipient],
            event,
        }
    }
}
