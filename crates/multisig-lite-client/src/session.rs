//! Wallet connection state.
//!
//! Connect and disconnect events drive the published state; interested
//! parties subscribe through a watch channel and re-render on change.

use solana_sdk::pubkey::Pubkey;
use tokio::sync::watch;
use tracing::info;

use crate::pda::{PdaCache, VaultAddresses};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WalletState {
    #[default]
    Disconnected,
    Connected {
        owner: Pubkey,
        addresses: VaultAddresses,
    },
}

impl WalletState {
    pub fn addresses(&self) -> Option<VaultAddresses> {
        match self {
            Self::Connected { addresses, .. } => Some(*addresses),
            Self::Disconnected => None,
        }
    }
}

pub struct Session {
    cache: PdaCache,
    tx: watch::Sender<WalletState>,
}

impl Session {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(WalletState::Disconnected);
        Self {
            cache: PdaCache::new(),
            tx,
        }
    }

    /// Handles a wallet `connect` event: derives (or recalls) the PDAs
    /// for the wallet and publishes the connected state.
    pub fn connect(&mut self, owner: Pubkey) -> VaultAddresses {
        let addresses = self.cache.addresses(&owner);
        self.tx.send_replace(WalletState::Connected { owner, addresses });
        info!(%owner, state = %addresses.state, "wallet connected");
        addresses
    }

    /// Handles a wallet `disconnect` event.
    pub fn disconnect(&mut self) {
        self.tx.send_replace(WalletState::Disconnected);
        info!("wallet disconnected");
    }

    pub fn state(&self) -> WalletState {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<WalletState> {
        self.tx.subscribe()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
