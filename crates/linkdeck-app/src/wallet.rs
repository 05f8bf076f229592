//! Wallet capability and the environment-backed adapter
//!
//! The controller consumes the wallet through a narrow capability trait and
//! only renders what it reports. Connect calls are fire-and-forget from the
//! controller's perspective: on rejection the adapter surfaces its own
//! user-visible message and the connected flag stays unchanged.

use std::env;

use linkdeck_core::prelude::*;

/// A resolved wallet account, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletAccount {
    pub address: String,
    pub balance: String,
}

/// Narrow capability contract for wallet providers.
///
/// `connect` is async; everything else is a synchronous read or
/// fire-and-forget. The event loop spawns at most one connect task at a
/// time (the reducer latches out duplicates).
#[trait_variant::make(WalletCapability: Send)]
pub trait LocalWalletCapability {
    /// Whether a provider is present at all (the `window.ethereum` check).
    fn is_available(&self) -> bool;

    /// Resolve the provider's account. Rejects with
    /// [`Error::WalletUnavailable`] when no provider is present — never a
    /// silent failure.
    async fn connect(&self) -> Result<WalletAccount>;

    /// Drop the session on the provider side. Infallible by contract.
    fn disconnect(&self);
}

/// Environment variable naming the provider account address.
pub const WALLET_ADDRESS_VAR: &str = "LINKDECK_WALLET_ADDRESS";

/// Environment variable naming the provider balance (optional).
pub const WALLET_BALANCE_VAR: &str = "LINKDECK_WALLET_BALANCE";

const DEFAULT_BALANCE: &str = "0.000 ETH";

/// Wallet adapter backed by the process environment — the terminal analogue
/// of a browser extension injecting a provider object.
#[derive(Debug, Clone, Default)]
pub struct EnvWallet;

impl EnvWallet {
    pub fn new() -> Self {
        Self
    }

    fn read_address(&self) -> Option<String> {
        env::var(WALLET_ADDRESS_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
    }
}

impl WalletCapability for EnvWallet {
    fn is_available(&self) -> bool {
        self.read_address().is_some()
    }

    async fn connect(&self) -> Result<WalletAccount> {
        let Some(address) = self.read_address() else {
            warn!("wallet connect rejected: no provider in environment");
            return Err(Error::WalletUnavailable);
        };

        if !address.starts_with("0x") || address.len() < 6 || !address.is_ascii() {
            return Err(Error::wallet(format!("malformed provider address {address:?}")));
        }

        let balance = env::var(WALLET_BALANCE_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BALANCE.to_string());

        info!("wallet connected: {address}");
        Ok(WalletAccount { address, balance })
    }

    fn disconnect(&self) {
        info!("wallet disconnected");
    }
}
