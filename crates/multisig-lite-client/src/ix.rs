//! Instruction builders for the program's five operations.
//!
//! Each builder returns a ready-to-sign [`Instruction`]; transaction
//! assembly, signing, and submission stay with the caller's wallet and
//! RPC machinery.

use anchor_lang::{InstructionData, ToAccountMetas};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

use crate::pda::VaultAddresses;

pub fn create(
    funder: &Pubkey,
    addresses: &VaultAddresses,
    m: u8,
    signers: Vec<Pubkey>,
    q: u8,
) -> Instruction {
    Instruction {
        program_id: multisig_lite::ID,
        accounts: multisig_lite::accounts::Create {
            funder: *funder,
            state: addresses.state,
            fund: addresses.fund,
            system_program: system_program::id(),
        }
        .to_account_metas(None),
        data: multisig_lite::instruction::Create {
            m,
            signers,
            q,
            _state_bump: addresses.state_bump,
            fund_bump: addresses.fund_bump,
        }
        .data(),
    }
}

pub fn fund(funder: &Pubkey, addresses: &VaultAddresses, lamports: u64) -> Instruction {
    Instruction {
        program_id: multisig_lite::ID,
        accounts: multisig_lite::accounts::Fund {
            funder: *funder,
            state: addresses.state,
            fund: addresses.fund,
            system_program: system_program::id(),
        }
        .to_account_metas(None),
        data: multisig_lite::instruction::Fund {
            lamports,
            _state_bump: addresses.state_bump,
            fund_bump: addresses.fund_bump,
        }
        .data(),
    }
}

/// The `transfer` account is a fresh keypair that must co-sign the
/// transaction; it only matters until the transfer lands in the queue.
pub fn create_transfer(
    creator: &Pubkey,
    addresses: &VaultAddresses,
    transfer: &Pubkey,
    recipient: Pubkey,
    lamports: u64,
) -> Instruction {
    Instruction {
        program_id: multisig_lite::ID,
        accounts: multisig_lite::accounts::CreateTransfer {
            creator: *creator,
            state: addresses.state,
            fund: addresses.fund,
            transfer: *transfer,
            system_program: system_program::id(),
        }
        .to_account_metas(None),
        data: multisig_lite::instruction::CreateTransfer {
            recipient,
            lamports,
            fund_bump: addresses.fund_bump,
        }
        .data(),
    }
}

/// `queue` carries `(transfer, recipient)` address pairs in queue
/// order, fetched from the state account beforehand.
pub fn approve(
    signer: &Pubkey,
    addresses: &VaultAddresses,
    queue: &[(Pubkey, Pubkey)],
) -> Instruction {
    let mut accounts = multisig_lite::accounts::Approve {
        signer: *signer,
        state: addresses.state,
        fund: addresses.fund,
    }
    .to_account_metas(None);
    for (transfer, recipient) in queue {
        accounts.push(AccountMeta::new(*transfer, false));
        accounts.push(AccountMeta::new(*recipient, false));
    }
    Instruction {
        program_id: multisig_lite::ID,
        accounts,
        data: multisig_lite::instruction::Approve {
            fund_bump: addresses.fund_bump,
        }
        .data(),
    }
}

/// `queue` carries the still-pending transfer account addresses so
/// their rents come back to the funder.
pub fn close(funder: &Pubkey, addresses: &VaultAddresses, queue: &[Pubkey]) -> Instruction {
    let mut accounts = multisig_lite::accounts::Close {
        funder: *funder,
        state: addresses.state,
        fund: addresses.fund,
    }
    .to_account_metas(None);
    for transfer in queue {
        accounts.push(AccountMeta::new(*transfer, false));
    }
    Instruction {
        program_id: multisig_lite::ID,
        accounts,
        data: multisig_lite::instruction::Close {
            _state_bump: addresses.state_bump,
            fund_bump: addresses.fund_bump,
        }
        .data(),
    }
}
