use anchor_lang::prelude::*;

// Variant order is ABI: Anchor numbers these 6000..=6012 and clients
// match on the codes.
#[error_code]
pub enum MultisigError {
    #[msg("Multisig account is empty. Please create transactions")]
    AccountEmpty,
    #[msg("Multisig transaction queue is full. Please approve those.")]
    AccountFull,
    #[msg("Multisig account is locked. Please approve the transactions")]
    AccountLocked,
    #[msg("Missing transfer recipient AccountInfo")]
    MissingRecipientAccountInfo,
    #[msg("Fund account is not writable")]
    FundAccountNotWritable,
    #[msg("Fund account data is not empty")]
    FundAccountIsNotEmpty,
    #[msg("Invalid fund account")]
    InvalidFundAddress,
    #[msg("Invalid fund bump seed")]
    InvalidFundBumpSeed,
    #[msg("No signers provided")]
    NoSigners,
    #[msg("Too many signers provided")]
    TooManySigners,
    #[msg("Threshold too high")]
    ThresholdTooHigh,
    #[msg("Invalid signer")]
    InvalidSigner,
    #[msg("There is not enough fund balance")]
    NotEnoughFundBalance,
}
