use crate::constraints::is_locker_for_locker_depositor;
use crate::state::CooldownStatus;
use crate::{Locker, LockerDepositor};
use anchor_lang::prelude::*;

pub fn get_cooldown_status<'info>(
    ctx: Context<'_, '_, '_, 'info, ViewLockerDepositor<'info>>,
) -> Result<CooldownStatus> {
    let locker_depositor = ctx.accounts.locker_depositor.load()?;
    Ok(locker_depositor.cooldown_status())
}

#[derive(Accounts)]
pub struct ViewLockerDepositor<'info> {
    pub locker: AccountLoader<'info, Locker>,
    #[account(
        constraint = is_locker_for_locker_depositor(&locker_depositor, &locker)?,
    )]
    pub locker_depositor: AccountLoader<'info, LockerDepositor>,
}
