use crate::constraints::{is_authority_for_locker_depositor, is_locker_for_locker_depositor};
use crate::{Locker, LockerDepositor};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

pub fn deposit<'info>(ctx: Context<'_, '_, '_, 'info, Deposit<'info>>, amount: u64) -> Result<()> {
    let clock = &Clock::get()?;

    let mut locker = ctx.accounts.locker.load_mut()?;
    let mut locker_depositor = ctx.accounts.locker_depositor.load_mut()?;

    let shares = locker_depositor.deposit(amount, &mut locker, clock.unix_timestamp)?;
    msg!("deposited {} for {} shares", amount, shares);

    drop(locker);
    drop(locker_depositor);

    let cpi_program = ctx.accounts.token_program.to_account_info().clone();
    let cpi_accounts = Transfer {
        from: ctx.accounts.user_token_account.to_account_info().clone(),
        to: ctx.accounts.locker_token_account.to_account_info().clone(),
        authority: ctx.accounts.authority.to_account_info().clone(),
    };
    let cpi_context = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_context, amount)?;

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub locker: AccountLoader<'info, Locker>,
    #[account(
        mut,
        seeds = [b"locker_depositor", locker.key().as_ref(), authority.key().as_ref()],
        bump,
        constraint = is_locker_for_locker_depositor(&locker_depositor, &locker)?,
        constraint = is_authority_for_locker_depositor(&locker_depositor, &authority)?,
    )]
    pub locker_depositor: AccountLoader<'info, LockerDepositor>,
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"locker_token_account".as_ref(), locker.key().as_ref()],
        bump,
    )]
    pub locker_token_account: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        token::authority = authority,
        token::mint = locker_token_account.mint
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
}
