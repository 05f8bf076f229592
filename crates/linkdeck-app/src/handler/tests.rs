//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use linkdeck_core::registry::{PRIMARY_ENTRIES, SECONDARY_ENTRIES, STUDIO_TAB_ID};
use linkdeck_core::types::NavContext;

fn route_changed(state: &mut AppState, path: &str) -> UpdateResult {
    update(state, Message::RouteChanged { path: path.into() })
}

/// Post-reconciliation invariant: exactly one registry entry matches the
/// active state, or the default primary entry is active.
fn assert_resolved(state: &AppState) {
    assert!(!state.nav.menu_open);
    match state.nav.context {
        NavContext::Primary => {
            assert!(
                PRIMARY_ENTRIES.iter().any(|e| e.id == state.nav.active_tab),
                "active_tab {:?} is not a primary id",
                state.nav.active_tab
            );
        }
        NavContext::Secondary => {
            assert_eq!(state.nav.active_tab, STUDIO_TAB_ID);
            assert!(SECONDARY_ENTRIES
                .iter()
                .any(|e| e.route == state.current_route));
        }
    }
}

// ─────────────────────────────────────────────────────────
// Route-change reconciliation
// ─────────────────────────────────────────────────────────

#[test]
fn test_scenario_a_root_path_resolves_default_primary() {
    let mut state = AppState::new();
    route_changed(&mut state, "/");

    assert_eq!(state.nav.active_tab, "build");
    assert_eq!(state.nav.context, NavContext::Primary);
    assert_resolved(&state);
}

#[test]
fn test_primary_route_resolves_primary() {
    let mut state = AppState::new();
    route_changed(&mut state, "/crypto-payment-setup");

    assert_eq!(state.nav.active_tab, "payments");
    assert_eq!(state.nav.context, NavContext::Primary);
    assert!(!state.nav.menu_open);
}

#[test]
fn test_secondary_route_resolves_secondary() {
    let mut state = AppState::new();
    route_changed(&mut state, "/ai-image-upscaler");

    assert_eq!(state.nav.active_tab, STUDIO_TAB_ID);
    assert_eq!(state.nav.context, NavContext::Secondary);
    assert!(!state.nav.menu_open);
    assert_resolved(&state);
}

#[test]
fn test_unknown_route_falls_back_to_default_primary() {
    let mut state = AppState::new();
    route_changed(&mut state, "/does-not-exist");

    assert_eq!(state.nav.active_tab, "build");
    assert_eq!(state.nav.context, NavContext::Primary);
}

#[test]
fn test_route_change_is_idempotent() {
    let mut state = AppState::new();
    route_changed(&mut state, "/lead-generation-hub");
    let first = state.nav.clone();

    route_changed(&mut state, "/lead-generation-hub");
    assert_eq!(state.nav, first);
}

#[test]
fn test_pathological_path_recovers_to_default() {
    let mut state = AppState::new();
    route_changed(&mut state, "/bad\u{0}path");

    assert_eq!(state.nav.active_tab, "build");
    assert_eq!(state.nav.context, NavContext::Primary);
    assert!(!state.nav.menu_open);
}

#[test]
fn test_route_change_sequence_always_ends_resolved() {
    let mut state = AppState::new();
    let paths = [
        "/",
        "/ai-text-to-image-generator",
        "/link-content-management",
        "/nope",
        "/ai-chat-assistant",
        "/analytics-performance-dashboard",
    ];
    for path in paths {
        route_changed(&mut state, path);
        assert_resolved(&state);
    }
}

#[test]
fn test_route_change_resets_scroll_offset() {
    let mut state = AppState::new();
    state.scroll_offset = 42;
    route_changed(&mut state, "/link-content-management");
    assert_eq!(state.scroll_offset, 0);
}

// ─────────────────────────────────────────────────────────
// Studio menu (pending sub-state)
// ─────────────────────────────────────────────────────────

#[test]
fn test_scenario_b_menu_open_is_pending_not_committed() {
    let mut state = AppState::new();
    route_changed(&mut state, "/");

    update(&mut state, Message::StudioMenuToggled);

    assert!(state.nav.menu_open);
    assert_eq!(state.nav.active_tab, STUDIO_TAB_ID);
    // Context only commits once an actual tool is chosen
    assert_eq!(state.nav.context, NavContext::Primary);
}

#[test]
fn test_scenario_c_studio_entry_commits_secondary() {
    let mut state = AppState::new();
    route_changed(&mut state, "/");
    update(&mut state, Message::StudioMenuToggled);

    let result = update(
        &mut state,
        Message::StudioEntryClicked {
            route: "/ai-text-to-image-generator".into(),
        },
    );

    assert_eq!(
        result.action,
        Some(UpdateAction::Navigate {
            path: "/ai-text-to-image-generator".into()
        })
    );
    assert_eq!(state.nav.context, NavContext::Secondary);
    assert!(!state.nav.menu_open);
}

#[test]
fn test_scenario_d_route_change_wins_over_open_menu() {
    let mut state = AppState::new();
    route_changed(&mut state, "/");
    update(&mut state, Message::StudioMenuToggled);
    assert!(state.nav.menu_open);

    // Browser back arrives while the menu is open
    route_changed(&mut state, "/link-content-management");

    assert_eq!(state.nav.active_tab, "manage");
    assert_eq!(state.nav.context, NavContext::Primary);
    assert!(!state.nav.menu_open);
}

#[test]
fn test_scenario_e_dismiss_restores_tab_for_current_route() {
    let mut state = AppState::new();
    route_changed(&mut state, "/lead-generation-hub");
    update(&mut state, Message::StudioMenuToggled);
    assert_eq!(state.nav.active_tab, STUDIO_TAB_ID);

    update(&mut state, Message::StudioMenuDismissed);

    assert!(!state.nav.menu_open);
    assert_eq!(state.nav.active_tab, "leads");
    assert_eq!(state.nav.context, NavContext::Primary);
}

#[test]
fn test_dismiss_falls_back_to_default_when_route_unmatched() {
    let mut state = AppState::new();
    route_changed(&mut state, "/");
    update(&mut state, Message::StudioMenuToggled);

    update(&mut state, Message::StudioMenuDismissed);
    assert_eq!(state.nav.active_tab, "build");
}

#[test]
fn test_toggle_twice_restores_previous_tab() {
    let mut state = AppState::new();
    route_changed(&mut state, "/crypto-payment-setup");

    update(&mut state, Message::StudioMenuToggled);
    update(&mut state, Message::StudioMenuToggled);

    assert!(!state.nav.menu_open);
    assert_eq!(state.nav.active_tab, "payments");
}

#[test]
fn test_menu_open_from_secondary_keeps_studio_tab_on_close() {
    let mut state = AppState::new();
    route_changed(&mut state, "/ai-chat-assistant");
    assert_eq!(state.nav.context, NavContext::Secondary);

    update(&mut state, Message::StudioMenuToggled);
    update(&mut state, Message::StudioMenuDismissed);

    // Already in the secondary context: the studio trigger stays highlighted
    assert_eq!(state.nav.active_tab, STUDIO_TAB_ID);
    assert_eq!(state.nav.context, NavContext::Secondary);
}

#[test]
fn test_dismiss_when_closed_is_noop() {
    let mut state = AppState::new();
    route_changed(&mut state, "/crypto-payment-setup");
    let before = state.nav.clone();

    update(&mut state, Message::StudioMenuDismissed);
    assert_eq!(state.nav, before);
}

#[test]
fn test_menu_cursor_wraps() {
    let mut state = AppState::new();
    route_changed(&mut state, "/");
    update(&mut state, Message::StudioMenuToggled);

    update(&mut state, Message::StudioMenuUp);
    assert_eq!(state.nav.menu_cursor, SECONDARY_ENTRIES.len() - 1);

    update(&mut state, Message::StudioMenuDown);
    assert_eq!(state.nav.menu_cursor, 0);
}

#[test]
fn test_unknown_studio_route_is_noop() {
    let mut state = AppState::new();
    route_changed(&mut state, "/");
    update(&mut state, Message::StudioMenuToggled);

    let result = update(
        &mut state,
        Message::StudioEntryClicked {
            route: "/not-a-tool".into(),
        },
    );

    assert_eq!(result, UpdateResult::none());
    assert!(state.nav.menu_open);
    assert_eq!(state.nav.context, NavContext::Primary);
}

// ─────────────────────────────────────────────────────────
// Primary tab clicks
// ─────────────────────────────────────────────────────────

#[test]
fn test_primary_tab_click_navigates() {
    let mut state = AppState::new();
    route_changed(&mut state, "/");

    let result = update(
        &mut state,
        Message::PrimaryTabClicked {
            tab_id: "analytics".into(),
        },
    );

    assert_eq!(state.nav.active_tab, "analytics");
    assert_eq!(state.nav.context, NavContext::Primary);
    assert_eq!(
        result.action,
        Some(UpdateAction::Navigate {
            path: "/analytics-performance-dashboard".into()
        })
    );
}

#[test]
fn test_invalid_tab_id_is_noop() {
    let mut state = AppState::new();
    route_changed(&mut state, "/crypto-payment-setup");
    let before = state.nav.clone();

    let result = update(
        &mut state,
        Message::PrimaryTabClicked {
            tab_id: "bogus".into(),
        },
    );

    assert_eq!(result, UpdateResult::none());
    assert_eq!(state.nav, before);
}

#[test]
fn test_secondary_id_is_not_a_valid_primary_tab() {
    let mut state = AppState::new();
    route_changed(&mut state, "/");

    let result = update(
        &mut state,
        Message::PrimaryTabClicked {
            tab_id: "text-to-image".into(),
        },
    );
    assert_eq!(result, UpdateResult::none());
}

#[test]
fn test_primary_click_closes_open_menu() {
    let mut state = AppState::new();
    route_changed(&mut state, "/");
    update(&mut state, Message::StudioMenuToggled);

    update(
        &mut state,
        Message::PrimaryTabClicked {
            tab_id: "manage".into(),
        },
    );
    assert!(!state.nav.menu_open);
    assert_eq!(state.nav.active_tab, "manage");
}

#[test]
fn test_navigate_failed_self_heals_and_hard_navigates() {
    let mut state = AppState::new();
    route_changed(&mut state, "/lead-generation-hub");

    let result = update(
        &mut state,
        Message::NavigateFailed {
            path: "/crypto-payment-setup".into(),
            reason: "router poisoned".into(),
        },
    );

    assert_eq!(state.nav.active_tab, "build");
    assert_eq!(state.nav.context, NavContext::Primary);
    assert!(!state.nav.menu_open);
    assert_eq!(
        result.action,
        Some(UpdateAction::HardNavigate {
            path: "/crypto-payment-setup".into()
        })
    );
}

#[test]
fn test_self_heal_issues_exactly_one_hard_navigate() {
    use crate::router::{MockRouteProvider, RouteProvider};
    use mockall::predicate::eq;

    let mut provider = MockRouteProvider::new();
    provider
        .expect_navigate()
        .with(eq("/crypto-payment-setup"))
        .times(1)
        .returning(|path| Err(linkdeck_core::error::Error::route_rejected(path, "refused")));
    provider
        .expect_hard_navigate()
        .with(eq("/crypto-payment-setup"))
        .times(1)
        .return_const(());
    provider
        .expect_current_path()
        .return_const("/crypto-payment-setup".to_owned());

    let mut state = AppState::new();
    let mut next = Some(Message::PrimaryTabClicked {
        tab_id: "payments".to_string(),
    });
    while let Some(message) = next.take() {
        let result = update(&mut state, message);
        if let Some(follow_up) = result.message {
            next = Some(follow_up);
            continue;
        }
        next = result.action.and_then(|action| match action {
            UpdateAction::Navigate { path } => match provider.navigate(&path) {
                Ok(()) => Some(Message::RouteChanged {
                    path: provider.current_path().to_string(),
                }),
                Err(e) => Some(Message::NavigateFailed {
                    path,
                    reason: e.to_string(),
                }),
            },
            UpdateAction::HardNavigate { path } => {
                provider.hard_navigate(&path);
                Some(Message::RouteChanged {
                    path: provider.current_path().to_string(),
                })
            }
            _ => None,
        });
    }

    // Reconciliation against the hard-navigated path wins in the end
    assert_eq!(state.nav.active_tab, "payments");
    assert_eq!(state.nav.context, NavContext::Primary);
}

// ─────────────────────────────────────────────────────────
// Wallet
// ─────────────────────────────────────────────────────────

#[test]
fn test_wallet_connect_request_latches() {
    let mut state = AppState::new();

    let first = update(&mut state, Message::WalletConnectRequested);
    assert_eq!(first.action, Some(UpdateAction::ConnectWallet));
    assert!(state.wallet.connecting);

    // Second click while in flight is ignored, never run in parallel
    let second = update(&mut state, Message::WalletConnectRequested);
    assert_eq!(second, UpdateResult::none());
}

#[test]
fn test_wallet_connected_persists_flag() {
    let mut state = AppState::new();
    update(&mut state, Message::WalletConnectRequested);

    let result = update(
        &mut state,
        Message::WalletConnected {
            address: "0x1234567890abcdef".into(),
            balance: "2.5 ETH".into(),
        },
    );

    assert!(state.wallet.connected);
    assert!(!state.wallet.connecting);
    assert_eq!(state.wallet.balance, "2.5 ETH");
    assert_eq!(
        result.action,
        Some(UpdateAction::PersistWalletFlag { connected: true })
    );
}

#[test]
fn test_wallet_connect_failure_leaves_disconnected() {
    let mut state = AppState::new();
    update(&mut state, Message::WalletConnectRequested);

    update(
        &mut state,
        Message::WalletConnectFailed {
            reason: "No wallet provider available".into(),
        },
    );

    assert!(!state.wallet.connected);
    assert!(!state.wallet.connecting);
    // User-visible message, not a silent failure
    assert!(state
        .last_status()
        .unwrap()
        .message
        .contains("No wallet provider"));

    // A new request is allowed after the failure cleared the latch
    let retry = update(&mut state, Message::WalletConnectRequested);
    assert_eq!(retry.action, Some(UpdateAction::ConnectWallet));
}

#[test]
fn test_wallet_disconnect() {
    let mut state = AppState::new();
    update(&mut state, Message::WalletConnectRequested);
    update(
        &mut state,
        Message::WalletConnected {
            address: "0x1234567890abcdef".into(),
            balance: "2.5 ETH".into(),
        },
    );

    let result = update(&mut state, Message::WalletDisconnectRequested);
    assert!(!state.wallet.connected);
    assert!(state.wallet.address.is_empty());
    assert_eq!(result.action, Some(UpdateAction::DisconnectWallet));

    // Disconnecting again is a no-op
    let again = update(&mut state, Message::WalletDisconnectRequested);
    assert_eq!(again, UpdateResult::none());
}

// ─────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_number_keys_select_primary_tabs() {
    let state = AppState::new();
    let msg = handle_key(&state, InputKey::Char('3'));
    assert_eq!(
        msg,
        Some(Message::PrimaryTabClicked {
            tab_id: "payments".into()
        })
    );
}

#[test]
fn test_tab_cycles_primary() {
    let mut state = AppState::new();
    route_changed(&mut state, "/analytics-performance-dashboard");

    let msg = handle_key(&state, InputKey::Tab);
    assert_eq!(
        msg,
        Some(Message::PrimaryTabClicked {
            tab_id: "build".into()
        })
    );

    let msg = handle_key(&state, InputKey::BackTab);
    assert_eq!(
        msg,
        Some(Message::PrimaryTabClicked {
            tab_id: "leads".into()
        })
    );
}

#[test]
fn test_a_key_toggles_studio_menu() {
    let state = AppState::new();
    assert_eq!(
        handle_key(&state, InputKey::Char('a')),
        Some(Message::StudioMenuToggled)
    );
}

#[test]
fn test_menu_captures_navigation_keys() {
    let mut state = AppState::new();
    route_changed(&mut state, "/");
    update(&mut state, Message::StudioMenuToggled);
    state.nav.menu_cursor = 2;

    assert_eq!(
        handle_key(&state, InputKey::Down),
        Some(Message::StudioMenuDown)
    );
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::StudioMenuDismissed));
    assert_eq!(
        handle_key(&state, InputKey::Enter),
        Some(Message::StudioEntryClicked {
            route: "/ai-image-to-video-creator".into()
        })
    );
}

#[test]
fn test_q_quits_only_outside_menu() {
    let mut state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));

    update(&mut state, Message::StudioMenuToggled);
    assert_eq!(handle_key(&state, InputKey::Char('q')), None);
}

#[test]
fn test_ctrl_c_quits_even_with_menu_open() {
    let mut state = AppState::new();
    update(&mut state, Message::StudioMenuToggled);
    assert_eq!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    );
}

#[test]
fn test_quit_message_sets_flag() {
    let mut state = AppState::new();
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Viewport
// ─────────────────────────────────────────────────────────

#[test]
fn test_scroll_messages_adjust_offset() {
    let mut state = AppState::new();
    update(&mut state, Message::ContentScrollDown);
    update(&mut state, Message::ContentScrollDown);
    assert_eq!(state.scroll_offset, 2);

    update(&mut state, Message::ContentScrollUp);
    assert_eq!(state.scroll_offset, 1);

    update(&mut state, Message::ContentScrollUp);
    update(&mut state, Message::ContentScrollUp);
    assert_eq!(state.scroll_offset, 0); // saturates

    update(&mut state, Message::ContentPageDown);
    assert_eq!(state.scroll_offset, 10);
    update(&mut state, Message::ContentPageUp);
    assert_eq!(state.scroll_offset, 0);
}

#[test]
fn test_scroll_state_settled_updates_flag() {
    let mut state = AppState::new();
    update(&mut state, Message::ScrollStateSettled { is_scrolled: true });
    assert!(state.is_scrolled);
    update(&mut state, Message::ScrollStateSettled { is_scrolled: false });
    assert!(!state.is_scrolled);
}
