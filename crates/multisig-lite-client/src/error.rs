use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("rpc request failed: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),
    #[error("account {0} failed to deserialize: {1}")]
    Deserialize(Pubkey, anchor_lang::error::Error),
}
