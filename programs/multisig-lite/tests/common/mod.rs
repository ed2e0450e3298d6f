//! Shared banks-client harness for the instruction tests.

use anchor_lang::{AccountDeserialize, InstructionData, Space, ToAccountMetas};
use solana_program_test::{processor, BanksClient, BanksClientError, ProgramTest};
use solana_sdk::account::Account;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::rent::Rent;
use solana_sdk::signer::keypair::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::system_program;
use solana_sdk::transaction::{Transaction, TransactionError};

use multisig_lite::{State, Transfer};

pub const DEFAULT_M: u8 = 3;
pub const DEFAULT_Q: u8 = 10;
pub const DEFAULT_FUNDING: u64 = 100_000 * LAMPORTS_PER_SOL;

/// One started program-test run with a created-or-not multisig.
pub struct TestVault {
    pub banks: BanksClient,
    pub funder: Keypair,
    /// Keypairs behind every listed signer. `keys[0]` is a copy of the
    /// funder key so the funder is always a signer.
    pub signer_keys: Vec<Keypair>,
    pub state_pda: Pubkey,
    pub state_bump: u8,
    pub fund_pda: Pubkey,
    pub fund_bump: u8,
    pub rent: Rent,
}

/// Adapts anchor's `entry` (which ties the account-slice lifetimes
/// together) to the independent-lifetime fn pointer `processor!` expects.
fn entry_shim(
    program_id: &Pubkey,
    accounts: &[solana_sdk::account_info::AccountInfo],
    data: &[u8],
) -> solana_sdk::entrypoint::ProgramResult {
    let accounts = unsafe {
        std::mem::transmute::<
            &[solana_sdk::account_info::AccountInfo],
            &[solana_sdk::account_info::AccountInfo],
        >(accounts)
    };
    multisig_lite::entry(program_id, accounts, data)
}

impl TestVault {
    pub async fn start() -> Self {
        let (mut banks, funder, _) = ProgramTest::new(
            "multisig_lite",
            multisig_lite::ID,
            processor!(entry_shim),
        )
        .start()
        .await;

        let mut signer_keys = vec![funder.insecure_clone()];
        signer_keys.extend((0..4).map(|_| Keypair::new()));

        let (state_pda, state_bump) = Pubkey::find_program_address(
            &[multisig_lite::STATE_SEED, funder.pubkey().as_ref()],
            &multisig_lite::ID,
        );
        let (fund_pda, fund_bump) = Pubkey::find_program_address(
            &[multisig_lite::FUND_SEED, state_pda.as_ref()],
            &multisig_lite::ID,
        );

        let rent = banks.get_rent().await.expect("rent sysvar");

        Self {
            banks,
            funder,
            signer_keys,
            state_pda,
            state_bump,
            fund_pda,
            fund_bump,
            rent,
        }
    }

    pub fn signers(&self) -> Vec<Pubkey> {
        self.signer_keys.iter().map(|key| key.pubkey()).collect()
    }

    pub fn transfer_rent(&self) -> u64 {
        self.rent.minimum_balance(8 + Transfer::INIT_SPACE)
    }

    fn ix(&self, accounts: impl ToAccountMetas, data: impl InstructionData) -> Instruction {
        Instruction {
            program_id: multisig_lite::ID,
            accounts: accounts.to_account_metas(None),
            data: data.data(),
        }
    }

    pub async fn send(
        &mut self,
        ixs: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<(), BanksClientError> {
        let blockhash = self.banks.get_latest_blockhash().await?;
        let mut tx = Transaction::new_with_payer(ixs, Some(&self.funder.pubkey()));
        tx.sign(signers, blockhash);
        // Identical transactions share a signature, and the plain
        // `process_transaction` reports the status of the first one; the
        // metadata variant returns the result of this exact execution.
        let meta = self.banks.process_transaction_with_metadata(tx).await?;
        meta.result.map_err(BanksClientError::TransactionError)
    }

    pub async fn send_unsigned(&mut self, ixs: &[Instruction]) -> Result<(), BanksClientError> {
        let tx = Transaction::new_with_payer(ixs, Some(&self.funder.pubkey()));
        self.banks.process_transaction(tx).await
    }

    pub fn create_ix(&self, m: u8, signers: Vec<Pubkey>, q: u8) -> Instruction {
        self.ix(
            multisig_lite::accounts::Create {
                funder: self.funder.pubkey(),
                state: self.state_pda,
                fund: self.fund_pda,
                system_program: system_program::id(),
            },
            multisig_lite::instruction::Create {
                m,
                signers,
                q,
                _state_bump: self.state_bump,
                fund_bump: self.fund_bump,
            },
        )
    }

    pub async fn create(&mut self) {
        let ix = self.create_ix(DEFAULT_M, self.signers(), DEFAULT_Q);
        let funder = self.funder.insecure_clone();
        self.send(&[ix], &[&funder]).await.expect("create");
    }

    pub fn fund_ix(&self, lamports: u64) -> Instruction {
        self.fund_ix_with_bump(lamports, self.fund_bump)
    }

    pub fn fund_ix_with_bump(&self, lamports: u64, fund_bump: u8) -> Instruction {
        self.ix(
            multisig_lite::accounts::Fund {
                funder: self.funder.pubkey(),
                state: self.state_pda,
                fund: self.fund_pda,
                system_program: system_program::id(),
            },
            multisig_lite::instruction::Fund {
                lamports,
                _state_bump: self.state_bump,
                fund_bump,
            },
        )
    }

    pub async fn fund(&mut self, lamports: u64) {
        let ix = self.fund_ix(lamports);
        let funder = self.funder.insecure_clone();
        self.send(&[ix], &[&funder]).await.expect("fund");
    }

    pub fn create_transfer_ix(
        &self,
        creator: &Pubkey,
        transfer: &Pubkey,
        recipient: Pubkey,
        lamports: u64,
    ) -> Instruction {
        self.ix(
            multisig_lite::accounts::CreateTransfer {
                creator: *creator,
                state: self.state_pda,
                fund: self.fund_pda,
                transfer: *transfer,
                system_program: system_program::id(),
            },
            multisig_lite::instruction::CreateTransfer {
                recipient,
                lamports,
                fund_bump: self.fund_bump,
            },
        )
    }

    pub async fn create_transfer(
        &mut self,
        transfer: &Keypair,
        recipient: Pubkey,
        lamports: u64,
    ) -> Result<(), BanksClientError> {
        let ix = self.create_transfer_ix(
            &self.funder.pubkey(),
            &transfer.pubkey(),
            recipient,
            lamports,
        );
        let funder = self.funder.insecure_clone();
        self.send(&[ix], &[&funder, transfer]).await
    }

    /// Builds the approve instruction with the `[transfer, recipient]`
    /// remaining-account pairs read back from the current queue.
    pub async fn approve_ix(&mut self, signer: &Pubkey) -> Instruction {
        let state = self.get_state().await.expect("state account");
        let mut ix = self.ix(
            multisig_lite::accounts::Approve {
                signer: *signer,
                state: self.state_pda,
                fund: self.fund_pda,
            },
            multisig_lite::instruction::Approve {
                fund_bump: self.fund_bump,
            },
        );
        for queued in state.queue {
            let transfer = self.get_transfer(&queued).await.expect("queued transfer");
            ix.accounts.push(AccountMeta::new(queued, false));
            ix.accounts.push(AccountMeta::new(transfer.recipient, false));
        }
        ix
    }

    pub async fn approve(&mut self, signer: &Keypair) -> Result<(), BanksClientError> {
        let ix = self.approve_ix(&signer.pubkey()).await;
        let funder = self.funder.insecure_clone();
        self.send(&[ix], &[&funder, signer]).await
    }

    pub fn close_ix(&self, queue: &[Pubkey]) -> Instruction {
        let mut ix = self.ix(
            multisig_lite::accounts::Close {
                funder: self.funder.pubkey(),
                state: self.state_pda,
                fund: self.fund_pda,
            },
            multisig_lite::instruction::Close {
                _state_bump: self.state_bump,
                fund_bump: self.fund_bump,
            },
        );
        for queued in queue {
            ix.accounts.push(AccountMeta::new(*queued, false));
        }
        ix
    }

    pub async fn close(&mut self) -> Result<(), BanksClientError> {
        let queue = match self.get_state().await {
            Some(state) => state.queue,
            None => vec![],
        };
        let ix = self.close_ix(&queue);
        let funder = self.funder.insecure_clone();
        self.send(&[ix], &[&funder]).await
    }

    pub async fn get_account(&mut self, address: &Pubkey) -> Option<Account> {
        self.banks.get_account(*address).await.expect("banks account")
    }

    pub async fn get_state(&mut self) -> Option<State> {
        let state_pda = self.state_pda;
        self.get_account(&state_pda).await.map(|account| {
            State::try_deserialize(&mut account.data.as_slice()).expect("state data")
        })
    }

    pub async fn get_transfer(&mut self, address: &Pubkey) -> Option<Transfer> {
        self.get_account(address).await.map(|account| {
            Transfer::try_deserialize(&mut account.data.as_slice()).expect("transfer data")
        })
    }

    pub async fn lamports(&mut self, address: &Pubkey) -> u64 {
        self.get_account(address)
            .await
            .map(|account| account.lamports)
            .unwrap_or_default()
    }
}

/// Unwraps a banks error down to the program's custom error code.
pub fn custom_error_code(err: BanksClientError) -> Option<u32> {
    match err.unwrap() {
        TransactionError::InstructionError(
            _,
            solana_sdk::instruction::InstructionError::Custom(code),
        ) => Some(code),
        _ => None,
    }
}
