use anchor_lang::prelude::*;

use crate::error::MultisigError;
use crate::state::{State, Transfer};

#[derive(Accounts)]
pub struct CreateTransfer<'info> {
    /// An initiator of the fund transfer.
    ///
    /// It should be one of the signers of the multisig account.
    #[account(mut)]
    pub creator: Signer<'info>,

    /// A multisig state PDA account.
    #[account(mut)]
    pub state: Account<'info, State>,

    /// CHECK: A zero-data fund PDA account, validated in the handler.
    #[account(mut)]
    pub fund: UncheckedAccount<'info>,

    /// A transfer account to keep the queued transfer info.
    #[account(init, payer = creator, space = 8 + Transfer::INIT_SPACE)]
    pub transfer: Account<'info, Transfer>,

    /// The system program to create a transfer account.
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateTransfer>,
    recipient: Pubkey,
    lamports: u64,
    fund_bump: u8,
) -> Result<()> {
    let state_key = ctx.accounts.state.key();
    let creator_key = ctx.accounts.creator.key();
    let transfer_key = ctx.accounts.transfer.key();
    let fund_info = ctx.accounts.fund.to_account_info();

    let state = &ctx.accounts.state;
    require!(
        state.signer_index(&creator_key).is_some(),
        MultisigError::InvalidSigner
    );
    require!(!state.is_locked(), MultisigError::AccountLocked);
    require!(!state.is_full(), MultisigError::AccountFull);
    state.verify_fund(&fund_info, &state_key, fund_bump)?;

    // The creator fronts the transfer account rent; the fund pays it
    // back and reserves the transfer amount, so the balance must cover
    // both.
    let rent = Rent::get()?.minimum_balance(8 + Transfer::INIT_SPACE);
    let total = lamports
        .checked_add(rent)
        .ok_or(MultisigError::NotEnoughFundBalance)?;
    require_gte!(state.balance, total, MultisigError::NotEnoughFundBalance);

    **fund_info.try_borrow_mut_lamports()? -= rent;
    **ctx.accounts.creator.to_account_info().try_borrow_mut_lamports()? += rent;

    let transfer = &mut ctx.accounts.transfer;
    transfer.creator = creator_key;
    transfer.recipient = recipient;
    transfer.lamports = lamports;

    let state = &mut ctx.accounts.state;
    state.balance -= total;
    state.queue.push(transfer_key);

    msg!(
        "transfer of {} lamports queued ({} of {})",
        lamports,
        state.queue.len(),
        state.q
    );

    Ok(())
}
