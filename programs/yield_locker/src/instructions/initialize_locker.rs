use crate::state::{FeeConfig, Locker, Size};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Debug, Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq)]
pub struct LockerParams {
    pub name: [u8; 32],
    pub performance_fee_recipient: Pubkey,
    pub cooldown_duration: i64,
    pub withdrawal_window: i64,
    pub management_fee_bps: u16,
    pub performance_fee_bps: u16,
    pub locker_bonus_bps: u16,
    pub profit_limit_bps: u16,
    pub loss_limit_bps: u16,
    pub health_check_enabled: bool,
}

pub fn initialize_locker<'info>(
    ctx: Context<'_, '_, '_, 'info, InitializeLocker<'info>>,
    params: LockerParams,
) -> Result<()> {
    let clock = &Clock::get()?;

    let mut locker = ctx.accounts.locker.load_init()?;
    locker.name = params.name;
    locker.pubkey = *ctx.accounts.locker.to_account_info().key;
    locker.management = *ctx.accounts.management.key;
    locker.performance_fee_recipient = params.performance_fee_recipient;
    locker.token_account = *ctx.accounts.token_account.to_account_info().key;
    locker.mint = ctx.accounts.mint.key();
    locker.bump = ctx.bumps.locker;

    locker.set_cooldown_duration(params.cooldown_duration)?;
    locker.set_withdrawal_window(params.withdrawal_window)?;
    locker.set_fees(
        FeeConfig {
            management_fee_bps: params.management_fee_bps,
            performance_fee_bps: params.performance_fee_bps,
            locker_bonus_bps: params.locker_bonus_bps,
        },
        clock.unix_timestamp,
    )?;

    locker
        .health_check
        .set_limits(params.profit_limit_bps, params.loss_limit_bps)?;
    locker.health_check.enabled = params.health_check_enabled;

    Ok(())
}

#[derive(Accounts)]
#[instruction(params: LockerParams)]
pub struct InitializeLocker<'info> {
    #[account(
        init,
        seeds = [b"locker", params.name.as_ref()],
        space = Locker::SIZE,
        bump,
        payer = payer
    )]
    pub locker: AccountLoader<'info, Locker>,
    #[account(
        init,
        seeds = [b"locker_token_account".as_ref(), locker.key().as_ref()],
        bump,
        payer = payer,
        token::mint = mint,
        token::authority = locker
    )]
    pub token_account: Box<Account<'info, TokenAccount>>,
    pub mint: Box<Account<'info, Mint>>,
    pub management: Signer<'info>,
    #[account(mut)]
    pub payer: Signer<'info>,
    pub rent: Sysvar<'info, Rent>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}
