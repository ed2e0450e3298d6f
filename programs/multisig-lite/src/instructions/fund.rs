use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::*;
use crate::state::State;

#[derive(Accounts)]
pub struct Fund<'info> {
    /// A funder of the account.
    ///
    /// The funding is only allowed by the multisig account creator:
    /// the state PDA seeds bind the signer to the creator key.
    #[account(mut)]
    pub funder: Signer<'info>,

    /// A multisig state PDA account.
    #[account(mut, seeds = [STATE_SEED, funder.key().as_ref()], bump)]
    pub state: Account<'info, State>,

    /// CHECK: A zero-data fund PDA account, validated in the handler.
    #[account(mut)]
    pub fund: UncheckedAccount<'info>,

    /// The system program to make the transfer of the fund.
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Fund>, lamports: u64, _state_bump: u8, fund_bump: u8) -> Result<()> {
    let state_key = ctx.accounts.state.key();
    let fund_info = ctx.accounts.fund.to_account_info();
    ctx.accounts
        .state
        .verify_fund(&fund_info, &state_key, fund_bump)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.funder.to_account_info(),
                to: fund_info,
            },
        ),
        lamports,
    )?;

    let state = &mut ctx.accounts.state;
    state.balance += lamports;

    msg!("funded {} lamports, balance now {}", lamports, state.balance);

    Ok(())
}
