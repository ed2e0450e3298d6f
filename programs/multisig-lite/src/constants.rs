use anchor_lang::prelude::*;

#[constant]
pub const STATE_SEED: &[u8] = b"state";

#[constant]
pub const FUND_SEED: &[u8] = b"fund";

/// Upper bound of the signers list, dictated by the `u8` threshold.
pub const MAX_SIGNERS: usize = u8::MAX as usize;
