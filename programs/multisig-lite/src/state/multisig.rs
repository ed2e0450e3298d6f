use anchor_lang::prelude::*;

use crate::constants::FUND_SEED;
use crate::error::MultisigError;

/// A multisig `State` PDA account data.
///
/// One state account exists per funder key, at the PDA derived from
/// `[b"state", funder]`. The fund PDA at `[b"fund", state]` is a
/// zero-data, program-owned account holding the native SOL.
#[account]
#[derive(Debug)]
pub struct State {
    /// A threshold.
    pub m: u8,
    /// An array of signers Pubkey.
    pub signers: Vec<Pubkey>,
    /// A current signed state.
    pub signed: Vec<bool>,
    /// A fund PDA account, holding the native SOL.
    pub fund: Pubkey,
    /// A balance of the fund in lamports.
    ///
    /// This is the spendable portion only. Lamports reserved by queued
    /// transfers and the fund's own rent minimum are excluded.
    pub balance: u64,
    /// A limit of the pending transactions.
    pub q: u8,
    /// An array of the pending transactions.
    pub queue: Vec<Pubkey>,
}

impl State {
    /// Account size for `signers.len()` signers and a queue capacity of `q`.
    pub fn space(signers: &[Pubkey], q: u8) -> usize {
        8 + 1
            + (4 + 32 * signers.len())
            + (4 + signers.len())
            + 32
            + 8
            + 1
            + (4 + 32 * q as usize)
    }

    /// Normalizes the number of signers. Zero falls back to one.
    pub fn valid_n(n: u8) -> u8 {
        n.max(1)
    }

    /// Normalizes the queue capacity. Zero falls back to one.
    pub fn valid_q(q: u8) -> u8 {
        q.max(1)
    }

    pub fn signer_index(&self, key: &Pubkey) -> Option<usize> {
        self.signers.iter().position(|signer| signer == key)
    }

    /// An account with approvals in flight is locked: changing the queue
    /// would invalidate the signatures collected so far.
    pub fn is_locked(&self) -> bool {
        self.signed.iter().any(|signed| *signed)
    }

    pub fn is_full(&self) -> bool {
        self.queue.len() >= self.q as usize
    }

    pub fn approvals(&self) -> u8 {
        self.signed.iter().filter(|signed| **signed).count() as u8
    }

    /// Checks a candidate fund account against the PDA derivation.
    ///
    /// The fund holds no data and is owned by this program, so every
    /// instruction validates it by hand instead of through an `Account`
    /// type wrapper.
    pub fn verify_fund_candidate(
        fund: &AccountInfo,
        state_key: &Pubkey,
        fund_bump: u8,
    ) -> Result<()> {
        if !fund.is_writable {
            return err!(MultisigError::FundAccountNotWritable);
        }
        if !fund.data_is_empty() {
            return err!(MultisigError::FundAccountIsNotEmpty);
        }
        let expected =
            Pubkey::create_program_address(&[FUND_SEED, state_key.as_ref(), &[fund_bump]], &crate::ID)
                .map_err(|_| error!(MultisigError::InvalidFundBumpSeed))?;
        require_keys_eq!(*fund.key, expected, MultisigError::InvalidFundAddress);
        Ok(())
    }

    /// Like [`Self::verify_fund_candidate`], additionally matching the
    /// address recorded at creation time.
    pub fn verify_fund(&self, fund: &AccountInfo, state_key: &Pubkey, fund_bump: u8) -> Result<()> {
        Self::verify_fund_candidate(fund, state_key, fund_bump)?;
        require_keys_eq!(*fund.key, self.fund, MultisigError::InvalidFundAddress);
        Ok(())
    }
}
