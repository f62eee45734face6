use crate::constraints::{is_authority_for_locker_depositor, is_locker_for_locker_depositor};
use crate::{Locker, LockerDepositor};
use anchor_lang::prelude::*;

pub fn start_cooldown<'info>(
    ctx: Context<'_, '_, '_, 'info, StartCooldown<'info>>,
    shares: u128,
) -> Result<()> {
    let clock = &Clock::get()?;

    let locker = ctx.accounts.locker.load()?;
    let mut locker_depositor = ctx.accounts.locker_depositor.load_mut()?;

    locker_depositor.start_cooldown(shares, &locker, clock.unix_timestamp)?;

    Ok(())
}

#[derive(Accounts)]
pub struct StartCooldown<'info> {
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
