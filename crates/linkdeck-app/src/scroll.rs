//! Viewport scroll observer
//!
//! Derives the header's "scrolled past threshold" flag from the content
//! scroll offset. Raw offsets arrive on every scroll event; the observer
//! coalesces them so a burst of scrolling collapses to at most one state
//! flip per debounce window. Only the settled value matters — intermediate
//! values may be dropped without correctness impact.

use std::time::{Duration, Instant};

/// Default threshold in rows before the header switches to its scrolled state.
pub const DEFAULT_THRESHOLD_ROWS: u16 = 10;

/// Default debounce window for coalescing scroll bursts.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(80);

/// Debounced observer for the `is_scrolled` header signal.
#[derive(Debug)]
pub struct ScrollObserver {
    threshold: u16,
    debounce: Duration,
    settled: bool,
    /// Candidate value and when it was first seen, awaiting the debounce window
    pending: Option<(bool, Instant)>,
}

impl Default for ScrollObserver {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_ROWS, DEFAULT_DEBOUNCE)
    }
}

impl ScrollObserver {
    pub fn new(threshold: u16, debounce: Duration) -> Self {
        Self {
            threshold,
            debounce,
            settled: false,
            pending: None,
        }
    }

    /// The last settled value. Defaults to `false` when no scroll signal has
    /// ever been observed.
    pub fn is_scrolled(&self) -> bool {
        self.settled
    }

    /// Feed the current scroll offset. Returns `Some(flag)` only when the
    /// settled value flips; intermediate observations within the debounce
    /// window return `None`.
    pub fn observe(&mut self, offset: u16, now: Instant) -> Option<bool> {
        let raw = offset > self.threshold;

        if raw == self.settled {
            // Back at the settled value before the window elapsed: the burst
            // collapses to no flip at all.
            self.pending = None;
            return None;
        }

        match self.pending {
            Some((candidate, since)) if candidate == raw => {
                if now.duration_since(since) >= self.debounce {
                    self.settled = raw;
                    self.pending = None;
                    Some(raw)
                } else {
                    None
                }
            }
            _ => {
                self.pending = Some((raw, now));
                None
            }
        }
    }
}
