//! Outside-interaction detection for the studio menu overlay
//!
//! The guard is armed only while the overlay is open, so no pointer
//! observation can fire a close after the overlay has been dismissed — the
//! terminal analogue of detaching a global click listener on close. A
//! pointer event whose position cannot be resolved is treated as outside:
//! erring toward closing the overlay rather than leaving it stuck open.

/// A rectangular screen region, independent of the terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

/// What the guard decided about a pointer observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutsideOutcome {
    /// Guard disarmed, or the interaction landed inside the region
    Ignored,
    /// Interaction was outside (or unresolvable): close the overlay
    Close,
}

/// Detects pointer interactions outside a designated region while armed.
#[derive(Debug, Default)]
pub struct OutsideClickGuard {
    armed: bool,
}

impl OutsideClickGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the guard when the overlay opens.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Disarm the guard the moment the overlay closes or unmounts.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Observe a pointer-down. `point` is `None` when the event position
    /// could not be resolved. A `Close` outcome disarms synchronously, so a
    /// second observation after close never fires again.
    pub fn observe(&mut self, point: Option<(u16, u16)>, region: Region) -> OutsideOutcome {
        if !self.armed {
            return OutsideOutcome::Ignored;
        }

        let outside = match point {
            Some((x, y)) => !region.contains(x, y),
            // Unresolvable target: treat as outside
            None => true,
        };

        if outside {
            self.disarm();
            OutsideOutcome::Close
        } else {
            OutsideOutcome::Ignored
        }
    }
}
