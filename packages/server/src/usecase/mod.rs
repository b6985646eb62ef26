//! UseCase 層
//!
//! ドメインのセッション操作を呼び出し、その結果をトランスポートへ配信する。
//! セッションへの書き込みはすべて [`SessionRouter`] を経由する。

mod connect_player;
mod delivery;
mod disconnect_player;
mod error;
mod paint_stroke;
mod router;
mod send_chat;

#[cfg(test)]
mod test_support;

pub use connect_player::ConnectPlayerUseCase;
pub use disconnect_player::DisconnectPlayerUseCase;
pub use error::SessionClosed;
pub use paint_stroke::PaintStrokeUseCase;
pub use router::{SessionCommand, SessionHandle, SessionRouter, SessionServices};
pub use send_chat::SendChatUseCase;
