//! Shutdown signal wiring
//!
//! Termination signals are forwarded to the event loop as [`Message::Quit`]
//! rather than aborting the process, so the runner can disable mouse
//! capture and restore the terminal on its normal exit path.

use tokio::sync::mpsc;

use linkdeck_core::prelude::*;

use crate::message::Message;

/// Spawn the background task that turns a termination signal into a quit
/// message. The task ends silently once the receiver is dropped.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let Some(name) = termination_signal().await else {
            return;
        };
        info!("{name} received, requesting shutdown");
        if tx.send(Message::Quit).await.is_err() {
            debug!("event loop already gone, ignoring {name}");
        }
    });
}

/// Resolve once a termination signal arrives, naming which one.
///
/// Returns `None` when the listeners cannot be installed; the app stays
/// usable and quits through the normal key bindings instead.
#[cfg(unix)]
async fn termination_signal() -> Option<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = match signal(SignalKind::interrupt()) {
        Ok(stream) => stream,
        Err(e) => {
            error!("cannot install SIGINT listener: {e}");
            return None;
        }
    };
    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(e) => {
            error!("cannot install SIGTERM listener: {e}");
            return None;
        }
    };

    tokio::select! {
        _ = interrupt.recv() => Some("SIGINT"),
        _ = terminate.recv() => Some("SIGTERM"),
    }
}

#[cfg(windows)]
async fn termination_signal() -> Option<&'static str> {
    match tokio::signal::ctrl_c().await {
        Ok(()) => Some("Ctrl+C"),
        Err(e) => {
            error!("cannot install Ctrl+C listener: {e}");
            None
        }
    }
}
