use crate::constraints::is_management_for_locker;
use crate::{Locker, Size, Strategy};
use anchor_lang::prelude::*;

pub fn initialize_strategy<'info>(
    ctx: Context<'_, '_, '_, 'info, InitializeStrategy<'info>>,
) -> Result<()> {
    let clock = &Clock::get()?;

    let mut strategy = ctx.accounts.strategy.load_init()?;
    strategy.locker = ctx.accounts.locker.key();
    strategy.pubkey = ctx.accounts.strategy.key();
    strategy.authority = *ctx.accounts.strategy_authority.key;
    strategy.last_report_ts = clock.unix_timestamp;
    strategy.bump = ctx.bumps.strategy;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeStrategy<'info> {
    #[account(
        constraint = is_management_for_locker(&locker, &management)?,
    )]
    pub locker: AccountLoader<'info, Locker>,
    #[account(
        init,
        seeds = [b"strategy", locker.key().as_ref(), strategy_authority.key().as_ref()],
        space = Strategy::SIZE,
        bump,
        payer = payer
    )]
    pub strategy: AccountLoader<'info, Strategy>,
    /// CHECK: operator that borrows from and repays to the locker
    pub strategy_authority: AccountInfo<'info>,
    pub management: Signer<'info>,
    #[account(mut)]
    pub payer: Signer<'info>,
    pub rent: Sysvar<'info, Rent>,
    pub system_program: Program<'info, System>,
}
