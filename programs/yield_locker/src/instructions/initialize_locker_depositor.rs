use crate::{Locker, LockerDepositor, Size};
use anchor_lang::prelude::*;

pub fn initialize_locker_depositor(ctx: Context<InitializeLockerDepositor>) -> Result<()> {
    let clock = &Clock::get()?;

    let mut locker_depositor = ctx.accounts.locker_depositor.load_init()?;
    *locker_depositor = LockerDepositor::new(
        ctx.accounts.locker.key(),
        ctx.accounts.locker_depositor.key(),
        *ctx.accounts.authority.key,
        clock.unix_timestamp,
    );
    locker_depositor.bump = ctx.bumps.locker_depositor;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLockerDepositor<'info> {
    pub locker: AccountLoader<'info, Locker>,
    #[account(
        init,
        seeds = [b"locker_depositor", locker.key().as_ref(), authority.key().as_ref()],
        space = LockerDepositor::SIZE,
        bump,
        payer = payer
    )]
    pub locker_depositor: AccountLoader<'info, LockerDepositor>,
    /// CHECK: the depositor does not need to sign to have an account opened for it
    pub authority: AccountInfo<'info>,
    #[account(mut)]
    pub payer: Signer<'info>,
    pub rent: Sysvar<'info, Rent>,
    pub system_program: Program<'info, System>,
}
