//! A native SOL multisig program.
//!
//! A funder creates one multisig per key, made of a `State` PDA at
//! `[b"state", funder]` and a zero-data fund PDA at `[b"fund", state]`
//! holding the SOL. Any listed signer may queue transfers; once `m`
//! signers approve, the whole queue executes atomically.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("2bhFGQZawKVEBpfhFAwAXDnd7mUCDJj6E5eYSJWfgzQ1");

#[program]
pub mod multisig_lite {
    use super::*;

    /// Creates a multisig account.
    ///
    /// It's restricted to one multisig account per funder Pubkey, as
    /// the funder key seeds the state PDA derivation.
    pub fn create(
        ctx: Context<Create>,
        m: u8,
        signers: Vec<Pubkey>,
        q: u8,
        _state_bump: u8,
        fund_bump: u8,
    ) -> Result<()> {
        instructions::create::handler(ctx, m, signers, q, _state_bump, fund_bump)
    }

    /// Funds lamports to the multisig fund account.
    ///
    /// The funding is only allowed by the multisig account funder.
    pub fn fund(
        ctx: Context<Fund>,
        lamports: u64,
        _state_bump: u8,
        fund_bump: u8,
    ) -> Result<()> {
        instructions::fund::handler(ctx, lamports, _state_bump, fund_bump)
    }

    /// Creates a queued transfer of lamports to the recipient.
    ///
    /// The transfer account creation fee is given back to the creator
    /// of the transfer from the multisig fund.
    pub fn create_transfer(
        ctx: Context<CreateTransfer>,
        recipient: Pubkey,
        lamports: u64,
        fund_bump: u8,
    ) -> Result<()> {
        instructions::create_transfer::handler(ctx, recipient, lamports, fund_bump)
    }

    /// Approves the pending transfers and executes them in case the
    /// `m` approvals are met.
    ///
    /// Remaining accounts carry a `[transfer, recipient]` pair for each
    /// queued transfer, in queue order.
    pub fn approve(ctx: Context<Approve>, fund_bump: u8) -> Result<()> {
        instructions::approve::handler(ctx, fund_bump)
    }

    /// Closes the multisig account.
    ///
    /// It cleans up all the remaining accounts and returns those rents
    /// back to the funder, the original creator of the multisig.
    pub fn close(ctx: Context<Close>, _state_bump: u8, fund_bump: u8) -> Result<()> {
        instructions::close::handler(ctx, _state_bump, fund_bump)
    }
}
