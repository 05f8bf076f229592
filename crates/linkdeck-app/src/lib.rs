//! linkdeck-app - Application state and orchestration for LinkDeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! navigation controller: the state model, the message set, the pure
//! `update()` reducer, plus the route provider, scroll observer,
//! outside-interaction guard, and wallet adapter that feed it.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod outside;
pub mod router;
pub mod scroll;
pub mod signals;
pub mod state;
pub mod wallet;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use outside::{OutsideClickGuard, OutsideOutcome, Region};
pub use router::{HistoryRouter, RouteProvider};
pub use scroll::ScrollObserver;
pub use state::{AppState, NavState, WalletState};
pub use wallet::{EnvWallet, WalletAccount, WalletCapability};
