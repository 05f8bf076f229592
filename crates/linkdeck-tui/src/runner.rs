//! Main TUI runner - entry point and event loop
//!
//! Owns the side-effect seams around the pure reducer: the history router,
//! the wallet adapter, the outside-click guard, and the debounced scroll
//! observer. Every reducer action is performed here and its outcome fed
//! back in as a message, so the reducer itself never touches IO.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use linkdeck_app::config::{self, Prefs};
use linkdeck_app::handler::{update, UpdateAction};
use linkdeck_app::message::Message;
use linkdeck_app::outside::{OutsideOutcome, Region};
use linkdeck_app::state::AppState;
use linkdeck_app::wallet::WalletCapability;
use linkdeck_app::{signals, EnvWallet, HistoryRouter, OutsideClickGuard, RouteProvider, ScrollObserver};
use linkdeck_core::prelude::*;

use crate::event::PollEvent;
use crate::widgets::{nav_bar, studio_menu};
use crate::{event, layout, render, terminal};

/// Side-effect handles consumed by the event loop.
struct Effects {
    router: HistoryRouter,
    wallet: Arc<EnvWallet>,
    guard: OutsideClickGuard,
    observer: ScrollObserver,
    prefs_path: PathBuf,
    msg_tx: mpsc::Sender<Message>,
}

/// Run the TUI application.
///
/// `start_route` overrides the configured start route; both fall back to
/// `/`, which the reducer resolves to the default section. `config_base`
/// overrides where `.linkdeck/config.toml` is looked up.
pub async fn run(start_route: Option<String>, config_base: Option<PathBuf>) -> Result<()> {
    terminal::install_panic_hook();

    let config_base = resolve_config_base(config_base);
    let settings = config::load_settings(&config_base);

    let mut term = ratatui::init();
    terminal::enable_mouse_capture()?;

    let mut state = AppState::with_settings(settings.clone());
    state.status_info(
        linkdeck_core::types::StatusSource::App,
        "LinkDeck starting...",
    );

    let prefs_path = Prefs::default_path();
    let prefs = Prefs::load(&prefs_path);
    state.wallet.remembered = prefs.wallet_connected;
    if prefs.wallet_connected {
        info!("wallet was connected last run, showing reconnect hint");
    }

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let initial_route = start_route
        .or(settings.behavior.start_route)
        .unwrap_or_else(|| "/".to_string());

    let mut effects = Effects {
        router: HistoryRouter::new(initial_route),
        wallet: Arc::new(EnvWallet::new()),
        guard: OutsideClickGuard::new(),
        observer: ScrollObserver::new(
            settings.ui.scroll_threshold_rows,
            Duration::from_millis(settings.ui.scroll_debounce_ms),
        ),
        prefs_path,
        msg_tx,
    };

    // Mount: reconcile against the router's starting path
    let mount = Message::RouteChanged {
        path: effects.router.current_path().to_string(),
    };
    process_message(&mut state, &mut effects, mount);

    let result = run_loop(&mut term, &mut state, &mut effects, msg_rx);

    terminal::disable_mouse_capture();
    ratatui::restore();
    result
}

/// Config lookup base: the `--config` override, else home, else cwd.
fn resolve_config_base(override_dir: Option<PathBuf>) -> PathBuf {
    override_dir
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    effects: &mut Effects,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Drain external messages (signal handler, wallet tasks)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, effects, msg);
        }

        // Settle the debounced header scroll flag
        if let Some(is_scrolled) = effects
            .observer
            .observe(state.scroll_offset, Instant::now())
        {
            process_message(state, effects, Message::ScrollStateSettled { is_scrolled });
        }

        terminal.draw(|frame| render::view(frame, state))?;

        match event::poll()? {
            Some(PollEvent::Message(message)) => process_message(state, effects, message),
            Some(PollEvent::Click { column, row }) => {
                let size = terminal.size()?;
                let frame_area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
                if let Some(message) = resolve_click(state, effects, frame_area, column, row) {
                    process_message(state, effects, message);
                }
            }
            None => {}
        }
    }

    Ok(())
}

/// Map a pointer-down to a message based on the current layout.
///
/// While the menu is open the outside-click guard owns every click that
/// lands neither on a menu row nor on the trigger.
fn resolve_click(
    state: &AppState,
    effects: &mut Effects,
    frame_area: ratatui::layout::Rect,
    column: u16,
    row: u16,
) -> Option<Message> {
    let areas = layout::create(frame_area);

    if state.nav.menu_open {
        let anchor = nav_bar::trigger_rect(state, areas.nav);
        let menu = studio_menu::menu_rect(frame_area, anchor);

        if let Some(message) = studio_menu::hit_test(menu, column, row) {
            return Some(message);
        }
        if anchor.contains(ratatui::layout::Position::new(column, row)) {
            return Some(Message::StudioMenuToggled);
        }

        let region = Region::new(menu.x, menu.y, menu.width, menu.height);
        return match effects.guard.observe(Some((column, row)), region) {
            OutsideOutcome::Close => Some(Message::StudioMenuDismissed),
            OutsideOutcome::Ignored => None,
        };
    }

    nav_bar::hit_test(state, areas.nav, column, row)
}

/// Run a message through the reducer, performing any resulting actions and
/// feeding their outcomes back until the queue drains.
fn process_message(state: &mut AppState, effects: &mut Effects, message: Message) {
    let mut queue = VecDeque::from([message]);

    while let Some(message) = queue.pop_front() {
        let result = update(state, message);

        if let Some(follow_up) = result.message {
            queue.push_back(follow_up);
        }
        if let Some(action) = result.action {
            if let Some(outcome) = perform_action(effects, action) {
                queue.push_back(outcome);
            }
        }
    }

    // Keep the guard in lockstep with the overlay
    if state.nav.menu_open {
        effects.guard.arm();
    } else {
        effects.guard.disarm();
    }
}

/// Perform a reducer action, returning the message that reports its outcome.
fn perform_action(effects: &mut Effects, action: UpdateAction) -> Option<Message> {
    match action {
        UpdateAction::Navigate { path } => match effects.router.navigate(&path) {
            Ok(()) => Some(Message::RouteChanged {
                path: effects.router.current_path().to_string(),
            }),
            Err(e) => Some(Message::NavigateFailed {
                path,
                reason: e.to_string(),
            }),
        },

        UpdateAction::HardNavigate { path } => {
            effects.router.hard_navigate(&path);
            Some(Message::RouteChanged {
                path: effects.router.current_path().to_string(),
            })
        }

        UpdateAction::NavigateBack => effects.router.back().then(|| Message::RouteChanged {
            path: effects.router.current_path().to_string(),
        }),

        UpdateAction::NavigateForward => effects.router.forward().then(|| Message::RouteChanged {
            path: effects.router.current_path().to_string(),
        }),

        UpdateAction::ConnectWallet => {
            let wallet = Arc::clone(&effects.wallet);
            let tx = effects.msg_tx.clone();
            tokio::spawn(async move {
                let outcome = match wallet.connect().await {
                    Ok(account) => Message::WalletConnected {
                        address: account.address,
                        balance: account.balance,
                    },
                    Err(e) => Message::WalletConnectFailed {
                        reason: e.to_string(),
                    },
                };
                if tx.send(outcome).await.is_err() {
                    warn!("event loop gone, dropping wallet connect outcome");
                }
            });
            None
        }

        UpdateAction::DisconnectWallet => {
            effects.wallet.disconnect();
            let prefs = Prefs {
                wallet_connected: false,
            };
            if let Err(e) = prefs.save(&effects.prefs_path) {
                warn!("failed to persist wallet flag: {e}");
            }
            None
        }

        UpdateAction::PersistWalletFlag { connected } => {
            let prefs = Prefs {
                wallet_connected: connected,
            };
            if let Err(e) = prefs.save(&effects.prefs_path) {
                warn!("failed to persist wallet flag: {e}");
            }
            None
        }
    }
}
