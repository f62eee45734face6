use crate::constraints::{is_authority_for_locker_depositor, is_locker_for_locker_depositor};
use crate::{Locker, LockerDepositor};
use anchor_lang::prelude::*;

pub fn transfer_shares<'info>(
    ctx: Context<'_, '_, '_, 'info, TransferShares<'info>>,
    shares: u128,
) -> Result<()> {
    let clock = &Clock::get()?;

    let locker = ctx.accounts.locker.load()?;
    let mut from = ctx.accounts.locker_depositor.load_mut()?;
    let mut to = ctx.accounts.to_locker_depositor.load_mut()?;

    from.transfer_shares(&mut to, shares, &locker, clock.unix_timestamp)?;

    Ok(())
}

#[derive(Accounts)]
pub struct TransferShares<'info> {
    pub locker: AccountLoader<'info, Locker>,
    #[account(
        mut,
        seeds = [b"locker_depositor", locker.key().as_ref(), authority.key().as_ref()],
        bump,
        constraint = is_locker_for_locker_depositor(&locker_depositor, &locker)?,
        constraint = is_authority_for_locker_depositor(&locker_depositor, &authority)?,
    )]
    pub locker_depositor: AccountLoader<'info, LockerDepositor>,
    #[account(
        mut,
        constraint = is_locker_for_locker_depositor(&to_locker_depositor, &locker)?,
    )]
    pub to_locker_depositor: AccountLoader<'info, LockerDepositor>,
    pub authority: Signer<'info>,
}
