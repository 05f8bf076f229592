//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, navigation, wallet, UpdateAction, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::RouteChanged { path } => navigation::handle_route_changed(state, &path),

        Message::PrimaryTabClicked { tab_id } => {
            navigation::handle_primary_tab_clicked(state, &tab_id)
        }

        Message::StudioMenuToggled => navigation::handle_menu_toggled(state),
        Message::StudioMenuDismissed => navigation::handle_menu_dismissed(state),
        Message::StudioMenuUp => navigation::handle_menu_up(state),
        Message::StudioMenuDown => navigation::handle_menu_down(state),

        Message::StudioEntryClicked { route } => {
            navigation::handle_studio_entry_clicked(state, &route)
        }

        Message::HistoryBack => UpdateResult::action(UpdateAction::NavigateBack),
        Message::HistoryForward => UpdateResult::action(UpdateAction::NavigateForward),

        Message::NavigateFailed { path, reason } => {
            navigation::handle_navigate_failed(state, &path, &reason)
        }

        // ─────────────────────────────────────────────────────────
        // Viewport Messages
        // ─────────────────────────────────────────────────────────
        Message::ContentScrollUp => {
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
            UpdateResult::none()
        }
        Message::ContentScrollDown => {
            state.scroll_offset = state.scroll_offset.saturating_add(1);
            UpdateResult::none()
        }
        Message::ContentPageUp => {
            state.scroll_offset = state.scroll_offset.saturating_sub(10);
            UpdateResult::none()
        }
        Message::ContentPageDown => {
            state.scroll_offset = state.scroll_offset.saturating_add(10);
            UpdateResult::none()
        }

        Message::ScrollStateSettled { is_scrolled } => {
            state.is_scrolled = is_scrolled;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Wallet Messages
        // ─────────────────────────────────────────────────────────
        Message::WalletConnectRequested => wallet::handle_connect_requested(state),
        Message::WalletConnected { address, balance } => {
            wallet::handle_connected(state, address, balance)
        }
        Message::WalletConnectFailed { reason } => wallet::handle_connect_failed(state, &reason),
        Message::WalletDisconnectRequested => wallet::handle_disconnect_requested(state),
    }
}
