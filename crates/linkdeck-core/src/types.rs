//! Shared domain types

use chrono::{DateTime, Local};

/// Which navigation context is active.
///
/// `Primary` is the persistent Web3 section tab row; `Secondary` is the
/// AI Studio tool menu reached through a transient overlay. Exactly one
/// context owns the current route at steady state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavContext {
    #[default]
    Primary,
    Secondary,
}

impl NavContext {
    /// Short label for the status bar context badge.
    pub fn label(&self) -> &'static str {
        match self {
            NavContext::Primary => "WEB3",
            NavContext::Secondary => "AI STUDIO",
        }
    }
}

/// Severity of a status feed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Origin of a status feed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSource {
    App,
    Nav,
    Router,
    Wallet,
}

impl StatusSource {
    pub fn label(&self) -> &'static str {
        match self {
            StatusSource::App => "app",
            StatusSource::Nav => "nav",
            StatusSource::Router => "router",
            StatusSource::Wallet => "wallet",
        }
    }
}

/// A single line in the status feed
#[derive(Debug, Clone)]
pub struct StatusEntry {
    pub level: StatusLevel,
    pub source: StatusSource,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl StatusEntry {
    pub fn new(level: StatusLevel, source: StatusSource, message: impl Into<String>) -> Self {
        Self {
            level,
            source,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    pub fn info(source: StatusSource, message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, source, message)
    }

    pub fn warning(source: StatusSource, message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, source, message)
    }

    pub fn error(source: StatusSource, message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Error, source, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_context_default_is_primary() {
        assert_eq!(NavContext::default(), NavContext::Primary);
    }

    #[test]
    fn test_nav_context_labels() {
        assert_eq!(NavContext::Primary.label(), "WEB3");
        assert_eq!(NavContext::Secondary.label(), "AI STUDIO");
    }

    #[test]
    fn test_status_entry_constructors() {
        let entry = StatusEntry::info(StatusSource::Wallet, "connected");
        assert_eq!(entry.level, StatusLevel::Info);
        assert_eq!(entry.source, StatusSource::Wallet);
        assert_eq!(entry.message, "connected");

        let entry = StatusEntry::error(StatusSource::Router, "rejected");
        assert_eq!(entry.level, StatusLevel::Error);
    }
}
