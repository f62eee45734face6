use crate::constraints::is_management_for_locker;
use crate::state::FeeConfig;
use crate::Locker;
use anchor_lang::prelude::*;

#[derive(Debug, Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq, Default)]
pub struct SetFeesParams {
    pub management_fee_bps: Option<u16>,
    pub performance_fee_bps: Option<u16>,
    pub locker_bonus_bps: Option<u16>,
}

pub fn set_fees<'info>(
    ctx: Context<'_, '_, '_, 'info, SetFees<'info>>,
    params: SetFeesParams,
) -> Result<()> {
    let clock = &Clock::get()?;
    let mut locker = ctx.accounts.locker.load_mut()?;

    let current = locker.fee_config;
    let fee_config = FeeConfig {
        management_fee_bps: params
            .management_fee_bps
            .unwrap_or(current.management_fee_bps),
        performance_fee_bps: params
            .performance_fee_bps
            .unwrap_or(current.performance_fee_bps),
        locker_bonus_bps: params
            .locker_bonus_bps
            .unwrap_or(current.locker_bonus_bps),
    };

    locker.set_fees(fee_config, clock.unix_timestamp)?;

    Ok(())
}

#[derive(Accounts)]
pub struct SetFees<'info> {
    #[account(
        mut,
        constraint = is_management_for_locker(&locker, &management)?,
    )]
    pub locker: AccountLoader<'info, Locker>,
    pub management: Signer<'info>,
}
