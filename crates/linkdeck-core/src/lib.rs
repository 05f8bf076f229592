//! # linkdeck-core - Core Domain Types
//!
//! Foundation crate for LinkDeck. Provides the navigation registry, error
//! handling, logging setup, and shared domain types.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Navigation Registry (`registry`)
//! - [`NavEntry`] - A single navigation destination (id, label, route, icon, accent)
//! - [`PRIMARY_ENTRIES`] - The five persistent Web3 section tabs
//! - [`SECONDARY_ENTRIES`] - The eight AI Studio tool destinations
//! - [`find_by_route()`] / [`find_by_id()`] - Pure lookups, `None` on miss
//! - [`STUDIO_TAB_ID`] - Sentinel tab id for the studio trigger (not a registry id)
//!
//! ### Domain Types (`types`)
//! - [`NavContext`] - Which navigation context is active (Primary, Secondary)
//! - [`StatusEntry`] - A single status feed line with level, source, and timestamp
//! - [`StatusLevel`] / [`StatusSource`] - Severity and origin of a status line
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use linkdeck_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod registry;
pub mod types;

/// Prelude for common imports used throughout all LinkDeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use registry::{
    default_entry, find_by_id, find_by_route, Accent, NavEntry, PRIMARY_ENTRIES,
    SECONDARY_ENTRIES, STUDIO_TAB_ID,
};
pub use types::{NavContext, StatusEntry, StatusLevel, StatusSource};
