use crate::constraints::{is_authority_for_locker_depositor, is_locker_for_locker_depositor};
use crate::{Locker, LockerDepositor};
use anchor_lang::prelude::*;

pub fn cancel_cooldown<'info>(ctx: Context<'_, '_, '_, 'info, CancelCooldown<'info>>) -> Result<()> {
    let clock = &Clock::get()?;

    let locker = ctx.accounts.locker.load()?;
    let mut locker_depositor = ctx.accounts.locker_depositor.load_mut()?;

    locker_depositor.cancel_cooldown(&locker, clock.unix_timestamp)?;

    Ok(())
}

#[derive(Accounts)]
pub struct CancelCooldown<'info> {
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
}
