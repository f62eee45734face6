use crate::constraints::{is_authority_for_locker_depositor, is_locker_for_locker_depositor};
use crate::token_cpi::{transfer_with_signer_seeds, TokenTransferCPI};
use crate::{declare_locker_seeds, Locker, LockerDepositor};
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

pub fn withdraw<'info>(ctx: Context<'_, '_, '_, 'info, Withdraw<'info>>, shares: u128) -> Result<()> {
    let clock = &Clock::get()?;

    let mut locker = ctx.accounts.locker.load_mut()?;
    let mut locker_depositor = ctx.accounts.locker_depositor.load_mut()?;

    let amount = locker_depositor.withdraw(shares, &mut locker, clock.unix_timestamp)?;
    msg!("withdrew {} for {} shares", amount, shares);

    drop(locker);
    drop(locker_depositor);

    ctx.token_transfer(amount)?;

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
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

impl<'info> TokenTransferCPI for Context<'_, '_, '_, 'info, Withdraw<'info>> {
    fn token_transfer(&self, amount: u64) -> Result<()> {
        declare_locker_seeds!(self.accounts.locker, seeds);

        transfer_with_signer_seeds(
            amount,
            self.accounts.locker_token_account.to_account_info().clone(),
            self.accounts.user_token_account.to_account_info().clone(),
            self.accounts.locker.to_account_info().clone(),
            self.accounts.token_program.to_account_info().clone(),
            seeds,
        )
    }
}
