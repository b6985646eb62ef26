//! Server state shared by every handler.

use crate::usecase::SessionHandle;

/// Shared application state
pub struct AppState {
    /// Inbox of the single game session this server hosts
    pub session: SessionHandle,
}
