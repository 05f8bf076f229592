//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `navigation`: Route reconciliation and menu/tab transitions (the core)
//! - `wallet`: Wallet connect/disconnect handlers
//! - `keys`: Key event handlers

pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod update;
pub(crate) mod wallet;

#[cfg(test)]
mod tests;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

// Re-export for internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Command the route provider to navigate to a path.
    /// The loop feeds the resulting path back as `Message::RouteChanged`
    /// (or `Message::NavigateFailed` if the provider rejects it).
    Navigate { path: String },

    /// Infallible fallback navigation (history reset). Emitted by the
    /// self-heal path after a failed `Navigate`.
    HardNavigate { path: String },

    /// Traverse router history
    NavigateBack,
    NavigateForward,

    /// Spawn a wallet connect task. At most one in flight; the reducer
    /// latches duplicates out before emitting this.
    ConnectWallet,

    /// Fire-and-forget provider disconnect (also clears the persisted flag)
    DisconnectWallet,

    /// Persist the display-only `wallet_connected` flag
    PersistWalletFlag { connected: bool },
}

/// Result of processing a message
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
