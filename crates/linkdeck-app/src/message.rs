//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Route provider reported a (possibly new) current path.
    /// Fired on mount and after every navigation, including back/forward.
    RouteChanged { path: String },

    /// A primary section tab was activated (click or key)
    PrimaryTabClicked { tab_id: String },

    /// The studio trigger was activated, flipping the menu open/closed
    StudioMenuToggled,

    /// The studio menu was dismissed without choosing a tool
    /// (Esc or outside interaction)
    StudioMenuDismissed,

    /// Move the studio menu cursor
    StudioMenuUp,
    StudioMenuDown,

    /// A studio tool entry was committed
    StudioEntryClicked { route: String },

    /// Router back/forward requested (history traversal)
    HistoryBack,
    HistoryForward,

    /// The route provider rejected a navigation command
    NavigateFailed { path: String, reason: String },

    // ─────────────────────────────────────────────────────────
    // Viewport Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll the active section page
    ContentScrollUp,
    ContentScrollDown,
    ContentPageUp,
    ContentPageDown,

    /// Debounced scroll observer settled on a new header state
    ScrollStateSettled { is_scrolled: bool },

    // ─────────────────────────────────────────────────────────
    // Wallet Messages
    // ─────────────────────────────────────────────────────────
    /// User asked to connect the wallet
    WalletConnectRequested,

    /// Adapter confirmed a connection
    WalletConnected { address: String, balance: String },

    /// Adapter rejected the connect call
    WalletConnectFailed { reason: String },

    /// User asked to disconnect the wallet
    WalletDisconnectRequested,
}
