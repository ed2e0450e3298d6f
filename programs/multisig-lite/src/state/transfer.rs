use anchor_lang::prelude::*;

/// A queued `Transfer` account data.
///
/// The account lives from `create_transfer` until the queue is flushed
/// by `approve` or the multisig is closed, at which point its rent is
/// drained back.
#[account]
#[derive(Debug, InitSpace)]
pub struct Transfer {
    /// A creator of the transfer, one of the multisig signers.
    pub creator: Pubkey,
    /// A recipient of the transfer.
    pub recipient: Pubkey,
    /// A lamports to transfer.
    pub lamports: u64,
}
