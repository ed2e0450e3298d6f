use anchor_lang::prelude::*;

use crate::error::MultisigError;
use crate::state::{State, Transfer};

#[derive(Accounts)]
pub struct Approve<'info> {
    /// An approver of the current state of the multisig account.
    #[account(mut)]
    pub signer: Signer<'info>,

    /// A multisig state PDA account.
    #[account(mut)]
    pub state: Account<'info, State>,

    /// CHECK: A zero-data fund PDA account, validated in the handler.
    #[account(mut)]
    pub fund: UncheckedAccount<'info>,
}

/// Flushes the queue once the threshold is met.
///
/// Remaining accounts carry a `[transfer, recipient]` pair per queue
/// entry, in queue order. Payouts come out of the fund; each drained
/// transfer account returns its rent to the fund balance.
pub fn handler(ctx: Context<Approve>, fund_bump: u8) -> Result<()> {
    let state_key = ctx.accounts.state.key();
    let signer_key = ctx.accounts.signer.key();
    let fund_info = ctx.accounts.fund.to_account_info();

    let index = ctx
        .accounts
        .state
        .signer_index(&signer_key)
        .ok_or(MultisigError::InvalidSigner)?;
    require!(
        !ctx.accounts.state.queue.is_empty(),
        MultisigError::AccountEmpty
    );
    ctx.accounts
        .state
        .verify_fund(&fund_info, &state_key, fund_bump)?;

    let state = &mut ctx.accounts.state;
    state.signed[index] = true;

    let approvals = state.approvals();
    if approvals < state.m {
        msg!("approval {} of {} recorded", approvals, state.m);
        return Ok(());
    }

    let queue = state.queue.clone();
    let mut remaining = ctx.remaining_accounts.iter();
    let mut recovered = 0;
    for queued in &queue {
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
        let transfer = {
            let data = transfer_info.try_borrow_data()?;
            Transfer::try_deserialize(&mut &data[..])?
        };
        let recipient_info = remaining
            .next()
            .ok_or(MultisigError::MissingRecipientAccountInfo)?;
        require_keys_eq!(
            *recipient_info.key,
            transfer.recipient,
            MultisigError::MissingRecipientAccountInfo
        );

        // Pay out the reserved lamports.
        **fund_info.try_borrow_mut_lamports()? -= transfer.lamports;
        **recipient_info.try_borrow_mut_lamports()? += transfer.lamports;

        // Drain the transfer account so the runtime reaps it.
        let reclaimed = transfer_info.lamports();
        **transfer_info.try_borrow_mut_lamports()? = 0;
        **fund_info.try_borrow_mut_lamports()? += reclaimed;
        transfer_info.try_borrow_mut_data()?.fill(0);
        recovered += reclaimed;
    }

    state.balance += recovered;
    state.queue.clear();
    state.signed.iter_mut().for_each(|signed| *signed = false);

    msg!("{} transfers executed", queue.len());

    Ok(())
}
