use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::*;
use crate::error::MultisigError;
use crate::state::State;

#[derive(Accounts)]
#[instruction(m: u8, signers: Vec<Pubkey>, q: u8)]
pub struct Create<'info> {
    /// A funder of the multisig account.
    #[account(mut)]
    pub funder: Signer<'info>,

    /// A multisig state PDA account.
    #[account(
        init,
        payer = funder,
        space = State::space(&signers, State::valid_q(q)),
        seeds = [STATE_SEED, funder.key().as_ref()],
        bump,
    )]
    pub state: Account<'info, State>,

    /// CHECK: A zero-data fund PDA account, validated and created in the
    /// handler. It carries no data, so no `Account` wrapper applies.
    #[account(mut)]
    pub fund: UncheckedAccount<'info>,

    /// The system program to create the multisig PDA accounts.
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Create>,
    m: u8,
    signers: Vec<Pubkey>,
    q: u8,
    _state_bump: u8,
    fund_bump: u8,
) -> Result<()> {
    require!(!signers.is_empty(), MultisigError::NoSigners);
    require!(signers.len() <= MAX_SIGNERS, MultisigError::TooManySigners);
    let m = State::valid_n(m);
    require!(m as usize <= signers.len(), MultisigError::ThresholdTooHigh);

    let state_key = ctx.accounts.state.key();
    let fund_info = ctx.accounts.fund.to_account_info();
    State::verify_fund_candidate(&fund_info, &state_key, fund_bump)?;

    // Bring the fund PDA to life as a rent-exempt, zero-data account
    // owned by this program. The account may already hold lamports if
    // someone transferred to the address ahead of creation, in which
    // case it only needs topping up and assigning.
    let rent_min = Rent::get()?.minimum_balance(0);
    let seeds: &[&[u8]] = &[FUND_SEED, state_key.as_ref(), &[fund_bump]];
    if fund_info.lamports() == 0 {
        system_program::create_account(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                system_program::CreateAccount {
                    from: ctx.accounts.funder.to_account_info(),
                    to: fund_info.clone(),
                },
                &[seeds],
            ),
            rent_min,
            0,
            &crate::ID,
        )?;
    } else {
        let lamports = fund_info.lamports();
        if lamports < rent_min {
            system_program::transfer(
                CpiContext::new(
                    ctx.accounts.system_program.to_account_info(),
                    system_program::Transfer {
                        from: ctx.accounts.funder.to_account_info(),
                        to: fund_info.clone(),
                    },
                ),
                rent_min - lamports,
            )?;
        }
        system_program::assign(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                system_program::Assign {
                    account_to_assign: fund_info.clone(),
                },
                &[seeds],
            ),
            &crate::ID,
        )?;
    }

    let state = &mut ctx.accounts.state;
    state.m = m;
    state.signed = vec![false; signers.len()];
    state.signers = signers;
    state.fund = fund_info.key();
    state.balance = 0;
    state.q = State::valid_q(q);
    state.queue = vec![];

    msg!(
        "multisig created: {}/{} threshold, queue capacity {}",
        state.m,
        state.signers.len(),
        state.q
    );

    Ok(())
}
