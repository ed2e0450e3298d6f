//! Program-derived address derivation and memoization.

use std::collections::HashMap;

use solana_sdk::pubkey::Pubkey;

use multisig_lite::{FUND_SEED, STATE_SEED};

/// The multisig addresses derived for one wallet.
///
/// The state PDA hangs off the wallet key, the fund PDA off the state
/// PDA, so one wallet maps to exactly one multisig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultAddresses {
    pub state: Pubkey,
    pub state_bump: u8,
    pub fund: Pubkey,
    pub fund_bump: u8,
}

impl VaultAddresses {
    pub fn find(owner: &Pubkey) -> Self {
        let (state, state_bump) =
            Pubkey::find_program_address(&[STATE_SEED, owner.as_ref()], &multisig_lite::ID);
        let (fund, fund_bump) =
            Pubkey::find_program_address(&[FUND_SEED, state.as_ref()], &multisig_lite::ID);
        Self {
            state,
            state_bump,
            fund,
            fund_bump,
        }
    }
}

/// Memoizes [`VaultAddresses::find`] per wallet.
///
/// Derivation is deterministic and pure, so entries never invalidate.
#[derive(Debug, Default)]
pub struct PdaCache {
    derived: HashMap<Pubkey, VaultAddresses>,
}

impl PdaCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn addresses(&mut self, owner: &Pubkey) -> VaultAddresses {
        *self
            .derived
            .entry(*owner)
            .or_insert_with(|| VaultAddresses::find(owner))
    }
}
