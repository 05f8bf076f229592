//! Key event handlers
//!
//! Maps abstract input keys to messages based on the current state.
//! While the studio menu is open it captures the navigation keys; the
//! primary tab row is reachable via number keys and Tab cycling.

use linkdeck_core::registry::{PRIMARY_ENTRIES, SECONDARY_ENTRIES};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert a key press into a message, or `None` for unbound keys.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C always quits, regardless of mode
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.nav.menu_open {
        return handle_menu_key(state, key);
    }

    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        InputKey::Char(c @ '1'..='5') => {
            let idx = (c as usize) - ('1' as usize);
            PRIMARY_ENTRIES.get(idx).map(|entry| Message::PrimaryTabClicked {
                tab_id: entry.id.to_string(),
            })
        }

        InputKey::Tab => Some(Message::PrimaryTabClicked {
            tab_id: cycle_primary(state, 1).to_string(),
        }),
        InputKey::BackTab => Some(Message::PrimaryTabClicked {
            tab_id: cycle_primary(state, -1).to_string(),
        }),

        InputKey::Char('a') => Some(Message::StudioMenuToggled),

        InputKey::Char('w') => Some(Message::WalletConnectRequested),
        InputKey::Char('W') => Some(Message::WalletDisconnectRequested),

        InputKey::Char('[') | InputKey::Left => Some(Message::HistoryBack),
        InputKey::Char(']') | InputKey::Right => Some(Message::HistoryForward),

        InputKey::Up | InputKey::Char('k') => Some(Message::ContentScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ContentScrollDown),
        InputKey::PageUp => Some(Message::ContentPageUp),
        InputKey::PageDown => Some(Message::ContentPageDown),

        _ => None,
    }
}

/// Keys captured by the open studio menu
fn handle_menu_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::StudioMenuDismissed),
        InputKey::Char('a') => Some(Message::StudioMenuToggled),

        InputKey::Up | InputKey::Char('k') => Some(Message::StudioMenuUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::StudioMenuDown),

        InputKey::Enter => SECONDARY_ENTRIES
            .get(state.nav.menu_cursor)
            .map(|entry| Message::StudioEntryClicked {
                route: entry.route.to_string(),
            }),

        _ => None,
    }
}

/// Next/previous primary tab id relative to the active one. A secondary or
/// pending-studio tab cycles back to the first primary entry.
fn cycle_primary(state: &AppState, step: isize) -> &'static str {
    let len = PRIMARY_ENTRIES.len() as isize;
    match PRIMARY_ENTRIES
        .iter()
        .position(|e| e.id == state.nav.active_tab)
    {
        Some(idx) => {
            let next = (idx as isize + step).rem_euclid(len) as usize;
            PRIMARY_ENTRIES[next].id
        }
        None => PRIMARY_ENTRIES[0].id,
    }
}
