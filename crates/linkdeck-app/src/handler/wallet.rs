//! Wallet message handlers
//!
//! The reducer only tracks what the adapter reports. `connecting` latches
//! out duplicate connect requests; a rejection leaves `connected` exactly
//! as it was and surfaces the adapter's message in the status feed.

use linkdeck_core::prelude::*;
use linkdeck_core::types::StatusSource;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_connect_requested(state: &mut AppState) -> UpdateResult {
    if state.wallet.connecting {
        debug!("wallet connect already in flight, ignoring duplicate request");
        return UpdateResult::none();
    }
    if state.wallet.connected {
        debug!("wallet already connected, ignoring connect request");
        return UpdateResult::none();
    }

    state.wallet.connecting = true;
    state.status_info(StatusSource::Wallet, "Connecting wallet…");
    UpdateResult::action(UpdateAction::ConnectWallet)
}

pub(crate) fn handle_connected(
    state: &mut AppState,
    address: String,
    balance: String,
) -> UpdateResult {
    state.wallet.connecting = false;
    state.wallet.connected = true;
    state.wallet.address = address;
    state.wallet.balance = balance;
    state.status_info(
        StatusSource::Wallet,
        format!("Wallet connected: {}", state.wallet.short_address()),
    );

    if state.settings.wallet.remember_connection {
        UpdateResult::action(UpdateAction::PersistWalletFlag { connected: true })
    } else {
        UpdateResult::none()
    }
}

pub(crate) fn handle_connect_failed(state: &mut AppState, reason: &str) -> UpdateResult {
    // `connected` stays unchanged — the adapter owns the failure
    state.wallet.connecting = false;
    state.status_error(StatusSource::Wallet, reason.to_string());
    UpdateResult::none()
}

pub(crate) fn handle_disconnect_requested(state: &mut AppState) -> UpdateResult {
    if !state.wallet.connected {
        return UpdateResult::none();
    }

    state.wallet.connected = false;
    state.wallet.address.clear();
    state.wallet.balance.clear();
    state.wallet.remembered = false;
    state.status_info(StatusSource::Wallet, "Wallet disconnected");

    UpdateResult::action(UpdateAction::DisconnectWallet)
}
