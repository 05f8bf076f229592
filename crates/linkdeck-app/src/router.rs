//! Route provider abstraction and the in-memory history router
//!
//! The controller reads `current_path` reactively and issues `navigate`
//! commands; nothing else couples it to the routing layer. `HistoryRouter`
//! is the shipped implementation: a linear history with back/forward
//! traversal, which is what lets a "browser back" arrive as a plain
//! route-change event that the reducer reconciles against.

use linkdeck_core::prelude::*;

/// Narrow contract between the navigation controller and the routing layer.
#[cfg_attr(test, mockall::automock)]
pub trait RouteProvider {
    /// The current path. Ground truth for reconciliation.
    fn current_path(&self) -> &str;

    /// Navigate to `path`, pushing it onto the history.
    fn navigate(&mut self, path: &str) -> Result<()>;

    /// Fallback navigation that cannot fail: resets history to `path`.
    /// Used by the reducer's self-heal path after a failed `navigate`.
    fn hard_navigate(&mut self, path: &str);

    /// Move back in history. Returns `true` if the path changed.
    fn back(&mut self) -> bool;

    /// Move forward in history. Returns `true` if the path changed.
    fn forward(&mut self) -> bool;
}

/// In-memory path history with back/forward support.
#[derive(Debug)]
pub struct HistoryRouter {
    history: Vec<String>,
    cursor: usize,
}

impl HistoryRouter {
    /// Create a router positioned at `initial` (typically `/`).
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: vec![initial.into()],
            cursor: 0,
        }
    }

    fn validate(path: &str) -> Result<()> {
        if path.is_empty() {
            return Err(Error::route_rejected(path, "empty path"));
        }
        if !path.starts_with('/') {
            return Err(Error::route_rejected(path, "path must be absolute"));
        }
        if path.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(Error::route_rejected(path, "path contains invalid characters"));
        }
        Ok(())
    }
}

impl Default for HistoryRouter {
    fn default() -> Self {
        Self::new("/")
    }
}

impl RouteProvider for HistoryRouter {
    fn current_path(&self) -> &str {
        &self.history[self.cursor]
    }

    fn navigate(&mut self, path: &str) -> Result<()> {
        Self::validate(path)?;

        if self.current_path() == path {
            // Re-navigating to the current path is a no-op, not an error
            return Ok(());
        }

        // Pushing a new entry discards any forward history
        self.history.truncate(self.cursor + 1);
        self.history.push(path.to_string());
        self.cursor = self.history.len() - 1;
        debug!("navigated to {path}");
        Ok(())
    }

    fn hard_navigate(&mut self, path: &str) {
        warn!("hard navigation to {path}, history reset");
        self.history = vec![path.to_string()];
        self.cursor = 0;
    }

    fn back(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    fn forward(&mut self) -> bool {
        if self.cursor + 1 < self.history.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_initial_path() {
        let router = HistoryRouter::new("/");
        assert_eq!(router.current_path(), "/");
    }

    #[test]
    fn test_navigate_pushes_history() {
        let mut router = HistoryRouter::new("/");
        router.navigate("/crypto-payment-setup").unwrap();
        assert_eq!(router.current_path(), "/crypto-payment-setup");
    }

    #[test]
    fn test_navigate_rejects_relative_path() {
        let mut router = HistoryRouter::new("/");
        let err = router.navigate("crypto-payment-setup").unwrap_err();
        assert!(matches!(err, Error::RouteRejected { .. }));
        assert_eq!(router.current_path(), "/");
    }

    #[test]
    fn test_navigate_rejects_empty_path() {
        let mut router = HistoryRouter::new("/");
        assert!(router.navigate("").is_err());
    }

    #[test]
    fn test_navigate_same_path_is_noop() {
        let mut router = HistoryRouter::new("/a");
        router.navigate("/a").unwrap();
        assert!(!router.back());
    }

    #[test]
    fn test_back_and_forward() {
        let mut router = HistoryRouter::new("/");
        router.navigate("/a").unwrap();
        router.navigate("/b").unwrap();

        assert!(router.back());
        assert_eq!(router.current_path(), "/a");
        assert!(router.back());
        assert_eq!(router.current_path(), "/");
        assert!(!router.back());

        assert!(router.forward());
        assert_eq!(router.current_path(), "/a");
        assert!(router.forward());
        assert_eq!(router.current_path(), "/b");
        assert!(!router.forward());
    }

    #[test]
    fn test_navigate_discards_forward_history() {
        let mut router = HistoryRouter::new("/");
        router.navigate("/a").unwrap();
        router.navigate("/b").unwrap();
        router.back();
        router.navigate("/c").unwrap();

        assert_eq!(router.current_path(), "/c");
        assert!(!router.forward());
    }

    #[test]
    fn test_hard_navigate_resets_history() {
        let mut router = HistoryRouter::new("/");
        router.navigate("/a").unwrap();
        router.navigate("/b").unwrap();

        router.hard_navigate("/profile-builder-dashboard");
        assert_eq!(router.current_path(), "/profile-builder-dashboard");
        assert!(!router.back());
        assert!(!router.forward());
    }
}
