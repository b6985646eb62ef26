//! Shared utilities for the Sketchy game server.

pub mod logger;
pub mod time;
