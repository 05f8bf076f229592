//! Navigation reconciliation and interaction transitions
//!
//! The reported route is the ground truth: every `RouteChanged` re-derives
//! `active_tab`/`context` from the registry lookup rather than trusting
//! previous interactive state, which is what makes direct links and
//! back/forward traversal land in a consistent state. Interaction handlers
//! never leave the nav bar half-updated — any failure collapses to the
//! default primary section.

use linkdeck_core::prelude::*;
use linkdeck_core::registry::{self, NavEntry, PRIMARY_ENTRIES, SECONDARY_ENTRIES, STUDIO_TAB_ID};
use linkdeck_core::types::{NavContext, StatusSource};

use crate::state::{AppState, NavState};

use super::{UpdateAction, UpdateResult};

/// Outcome of a route lookup against the registry.
#[derive(Debug, Clone, Copy)]
enum Resolution {
    Primary(&'static NavEntry),
    Secondary(&'static NavEntry),
    /// Unmatched route (including `/`): not an error, resolves to the
    /// default primary entry
    Fallback(&'static NavEntry),
}

fn try_resolve(path: &str) -> Result<Resolution> {
    if path.chars().any(|c| c.is_control()) {
        return Err(Error::navigation(format!(
            "unresolvable path {path:?}"
        )));
    }

    if let Some(entry) = PRIMARY_ENTRIES.iter().find(|e| e.route == path) {
        return Ok(Resolution::Primary(entry));
    }
    if let Some(entry) = SECONDARY_ENTRIES.iter().find(|e| e.route == path) {
        return Ok(Resolution::Secondary(entry));
    }
    Ok(Resolution::Fallback(registry::default_entry()))
}

fn apply_resolution(state: &mut AppState, resolution: Resolution) {
    match resolution {
        Resolution::Primary(entry) | Resolution::Fallback(entry) => {
            state.nav.active_tab = entry.id;
            state.nav.context = NavContext::Primary;
            state.nav.menu_open = false;
        }
        Resolution::Secondary(entry) => {
            state.nav.active_tab = STUDIO_TAB_ID;
            state.nav.context = NavContext::Secondary;
            // A resolved secondary destination closes the transient menu
            state.nav.menu_open = false;
            if let Some(idx) = SECONDARY_ENTRIES.iter().position(|e| e.id == entry.id) {
                state.nav.menu_cursor = idx;
            }
        }
    }
    state.scroll_offset = 0;
}

/// Route change reconciliation (fires on mount and on every path change).
///
/// Always wins over stale interaction state. A reconciliation failure is
/// caught here, logged, and recovered to the default primary section —
/// navigation is never left in a broken state.
pub(crate) fn handle_route_changed(state: &mut AppState, path: &str) -> UpdateResult {
    state.current_route = path.to_string();

    match try_resolve(path) {
        Ok(resolution) => apply_resolution(state, resolution),
        Err(e) => {
            error!("route reconciliation failed for {path:?}: {e}");
            state.status_error(StatusSource::Nav, "navigation recovered to default section");
            apply_resolution(state, Resolution::Fallback(registry::default_entry()));
        }
    }

    UpdateResult::none()
}

/// Primary tab activation. Unknown ids are a no-op, not an error.
pub(crate) fn handle_primary_tab_clicked(state: &mut AppState, tab_id: &str) -> UpdateResult {
    let Some(entry) = registry::find_by_id(tab_id, NavContext::Primary) else {
        debug!("ignoring click on unknown primary tab {tab_id:?}");
        return UpdateResult::none();
    };

    state.nav.active_tab = entry.id;
    state.nav.context = NavContext::Primary;
    state.nav.menu_open = false;

    UpdateResult::action(UpdateAction::Navigate {
        path: entry.route.to_string(),
    })
}

/// The route provider rejected a navigation command: self-heal to the safe
/// default, then hard-navigate to the target rather than leaving the UI
/// stuck on a tab with no matching content.
pub(crate) fn handle_navigate_failed(
    state: &mut AppState,
    path: &str,
    reason: &str,
) -> UpdateResult {
    error!("navigation to {path:?} failed: {reason}");
    state.status_error(
        StatusSource::Router,
        format!("navigation to {path} failed: {reason}"),
    );

    state.nav = NavState::default();

    UpdateResult::action(UpdateAction::HardNavigate {
        path: path.to_string(),
    })
}

/// Studio trigger toggle.
///
/// Opening is the pending sub-state: the trigger highlights via the
/// sentinel tab id, but the context only becomes `Secondary` once an
/// actual tool is chosen.
pub(crate) fn handle_menu_toggled(state: &mut AppState) -> UpdateResult {
    if state.nav.menu_open {
        close_without_commit(state);
    } else {
        state.nav.menu_open = true;
        if state.nav.context != NavContext::Secondary {
            state.nav.active_tab = STUDIO_TAB_ID;
        }
    }
    UpdateResult::none()
}

/// Menu dismissal (Esc or outside interaction). Idempotent.
pub(crate) fn handle_menu_dismissed(state: &mut AppState) -> UpdateResult {
    if state.nav.menu_open {
        close_without_commit(state);
    }
    UpdateResult::none()
}

/// The user backed out without picking a tool: restore the highlight to
/// whichever primary tab matches the current route.
fn close_without_commit(state: &mut AppState) {
    state.nav.menu_open = false;

    if state.nav.context != NavContext::Secondary {
        state.nav.active_tab = PRIMARY_ENTRIES
            .iter()
            .find(|e| e.route == state.current_route)
            .unwrap_or_else(registry::default_entry)
            .id;
    }
}

/// Studio tool commit — the only transition that sets the secondary context.
pub(crate) fn handle_studio_entry_clicked(state: &mut AppState, route: &str) -> UpdateResult {
    let Some(idx) = SECONDARY_ENTRIES.iter().position(|e| e.route == route) else {
        debug!("ignoring click on unknown studio route {route:?}");
        return UpdateResult::none();
    };

    state.nav.context = NavContext::Secondary;
    state.nav.active_tab = STUDIO_TAB_ID;
    state.nav.menu_open = false;
    state.nav.menu_cursor = idx;

    UpdateResult::action(UpdateAction::Navigate {
        path: route.to_string(),
    })
}

/// Keyboard cursor movement inside the open menu (wrapping).
pub(crate) fn handle_menu_up(state: &mut AppState) -> UpdateResult {
    if state.nav.menu_open {
        let len = SECONDARY_ENTRIES.len();
        state.nav.menu_cursor = (state.nav.menu_cursor + len - 1) % len;
    }
    UpdateResult::none()
}

pub(crate) fn handle_menu_down(state: &mut AppState) -> UpdateResult {
    if state.nav.menu_open {
        state.nav.menu_cursor = (state.nav.menu_cursor + 1) % SECONDARY_ENTRIES.len();
    }
    UpdateResult::none()
}
