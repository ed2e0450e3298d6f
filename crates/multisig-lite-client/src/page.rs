//! Account snapshot for rendering a vault page.
//!
//! [`load`] pulls the state account and every queued transfer in one
//! pass and never fails: anything that goes wrong degrades to an empty
//! snapshot so a page can always render.

use anchor_lang::AccountDeserialize;
use multisig_lite::state::{State, Transfer};
use solana_client::rpc_client::RpcClient;
use solana_sdk::account::Account;
use solana_sdk::pubkey::Pubkey;
use tracing::warn;

use crate::error::ClientError;

/// Read side of an RPC endpoint, kept narrow so tests can stub it.
pub trait AccountFetcher {
    fn fetch(&self, address: &Pubkey) -> Result<Option<Account>, ClientError>;
}

impl AccountFetcher for RpcClient {
    fn fetch(&self, address: &Pubkey) -> Result<Option<Account>, ClientError> {
        Ok(self
            .get_account_with_commitment(address, self.commitment())?
            .value)
    }
}

/// Everything a vault page shows. `state` is `None` until the funder
/// has created the multisig.
#[derive(Debug, Default)]
pub struct PageData {
    pub state: Option<State>,
    pub transfers: Vec<(Pubkey, Transfer)>,
}

impl PageData {
    /// Lamports still spendable once queued transfers settle.
    pub fn balance(&self) -> u64 {
        self.state.as_ref().map(|state| state.balance).unwrap_or(0)
    }
}

pub fn load<F: AccountFetcher>(fetcher: &F, state_address: &Pubkey) -> PageData {
    match try_load(fetcher, state_address) {
        Ok(page) => page,
        Err(err) => {
            warn!(%state_address, %err, "page load failed");
            PageData::default()
        }
    }
}

fn try_load<F: AccountFetcher>(
    fetcher: &F,
    state_address: &Pubkey,
) -> Result<PageData, ClientError> {
    let Some(account) = fetcher.fetch(state_address)? else {
        return Ok(PageData::default());
    };
    let state = State::try_deserialize(&mut account.data.as_slice())
        .map_err(|err| ClientError::Deserialize(*state_address, err))?;

    let mut transfers = Vec::with_capacity(state.queue.len());
    for address in &state.queue {
        // A transfer drained by a concurrent approval simply drops out.
        let Some(account) = fetcher.fetch(address)? else {
            continue;
        };
        let transfer = Transfer::try_deserialize(&mut account.data.as_slice())
            .map_err(|err| ClientError::Deserialize(*address, err))?;
        transfers.push((*address, transfer));
    }

    Ok(PageData {
        state: Some(state),
        transfers,
    })
}
