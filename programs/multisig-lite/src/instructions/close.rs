use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::MultisigError;
use crate::state::State;

#[derive(Accounts)]
pub struct Close<'info> {
    /// An original funder of the multisig account.
    #[account(mut)]
    pub funder: Signer<'info>,

    /// A multisig state PDA account, closed back to the funder.
    #[account(
        mut,
        seeds = [STATE_SEED, funder.key().as_ref()],
        bump,
        close = funder,
    )]
    pub state: Account<'info, State>,

    /// CHECK: A zero-data fund PDA account, drained in the handler.
    #[account(mut)]
    pub fund: UncheckedAccount<'info>,
}

/// Tears the multisig down, returning every rent and the whole fund to
/// the funder. Still-queued transfers are cancelled; their accounts are
/// passed as remaining accounts in queue order.
pub fn handler(ctx: Context<Close>, _state_bump: u8, fund_bump: u8) -> Result<()> {
    let state_key = ctx.accounts.state.key();
    let fund_info = ctx.accounts.fund.to_account_info();
    let funder_info = ctx.accounts.funder.to_account_info();

    ctx.accounts
        .state
        .verify_fund(&fund_info, &state_key, fund_bump)?;

    let mut remaining = ctx.remaining_accounts.iter();
    for queued in &ctx.accounts.state.queue {
        let transfer_info = remaining
            .next()
            .ok_or(MultisigError::MissingRecipientAccountInfo)?;
        require_keys_eq!(
            *transfer_info.key,
            *queued,
            MultisigError::MissingRecipientAccountInfo
        );
        require_keys_eq!(
            *transfer_info.owner,
            crate::ID,
            MultisigError::MissingRecipientAccountInfo
        );

        let reclaimed = transfer_info.lamports();
        **transfer_info.try_borrow_mut_lamports()? = 0;
        **funder_info.try_borrow_mut_lamports()? += reclaimed;
        transfer_info.try_borrow_mut_data()?.fill(0);
    }

    let drained = fund_info.lamports();
    **fund_info.try_borrow_mut_lamports()? = 0;
    **funder_info.try_borrow_mut_lamports()? += drained;

    msg!("multisig closed, {} lamports returned to the funder", drained);

    Ok(())
}
