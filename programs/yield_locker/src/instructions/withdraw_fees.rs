use crate::constraints::{
    is_locker_for_locker_depositor, is_management_or_fee_recipient_for_locker,
};
use crate::{Locker, LockerDepositor};
use anchor_lang::prelude::*;

pub fn withdraw_fees<'info>(ctx: Context<'_, '_, '_, 'info, WithdrawFees<'info>>) -> Result<()> {
    let clock = &Clock::get()?;

    let mut locker = ctx.accounts.locker.load_mut()?;
    let mut receiver = ctx.accounts.receiver.load_mut()?;

    let shares = locker.withdraw_fees(&mut receiver, clock.unix_timestamp)?;
    msg!("released {} pending fee shares", shares);

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawFees<'info> {
    #[account(
        mut,
        constraint = is_management_or_fee_recipient_for_locker(&locker, &authority)?,
    )]
    pub locker: AccountLoader<'info, Locker>,
    #[account(
        mut,
        constraint = is_locker_for_locker_depositor(&receiver, &locker)?,
    )]
    pub receiver: AccountLoader<'info, LockerDepositor>,
    pub authority: Signer<'info>,
}
