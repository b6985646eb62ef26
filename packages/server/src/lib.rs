//! Sketchy: a drawing-and-guessing party game server.
//!
//! One shared session: players connect over WebSocket, chat, take turns
//! drawing a secret word, and guess it in the chat.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
