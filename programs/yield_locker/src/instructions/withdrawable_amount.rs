use crate::instructions::ViewLockerDepositor;
use anchor_lang::prelude::*;

pub fn withdrawable_amount<'info>(
    ctx: Context<'_, '_, '_, 'info, ViewLockerDepositor<'info>>,
) -> Result<u64> {
    let clock = &Clock::get()?;

    let locker = ctx.accounts.locker.load()?;
    let locker_depositor = ctx.accounts.locker_depositor.load()?;

    locker_depositor.withdrawable_amount(&*locker, locker.cooldown_enabled(), clock.unix_timestamp)
}
