//! Infrastructure layer: concrete collaborators for the domain traits.

pub mod dto;
pub mod message_pusher;
pub mod provider;
