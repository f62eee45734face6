use crate::constants::MAX_BPS;
use crate::constraints::is_management_for_locker;
use crate::error::ErrorCode;
use crate::{validate, Locker, ProtocolFeeConfig, Size};
use anchor_lang::prelude::*;

#[derive(Debug, Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq)]
pub struct ProtocolFeeParams {
    pub protocol: Pubkey,
    pub protocol_fee_bps: u16,
}

pub fn initialize_protocol_fee_config<'info>(
    ctx: Context<'_, '_, '_, 'info, InitializeProtocolFeeConfig<'info>>,
    params: ProtocolFeeParams,
) -> Result<()> {
    validate!(
        params.protocol_fee_bps <= MAX_BPS,
        ErrorCode::ConfigurationInvalid,
        "protocol fee {} above {}",
        params.protocol_fee_bps,
        MAX_BPS
    )?;
    validate!(
        params.protocol != Pubkey::default(),
        ErrorCode::InvalidInput,
        "protocol must not be the default pubkey"
    )?;

    let mut locker = ctx.accounts.locker.load_mut()?;
    locker.protocol_fee_enabled = true;

    let mut config = ctx.accounts.protocol_fee_config.load_init()?;
    config.protocol = params.protocol;
    config.locker = ctx.accounts.locker.key();
    config.protocol_fee_bps = params.protocol_fee_bps;
    config.bump = ctx.bumps.protocol_fee_config;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeProtocolFeeConfig<'info> {
    #[account(
        mut,
        constraint = is_management_for_locker(&locker, &management)?,
    )]
    pub locker: AccountLoader<'info, Locker>,
    #[account(
        init,
        seeds = [b"protocol_fee_config", locker.key().as_ref()],
        space = ProtocolFeeConfig::SIZE,
        bump,
        payer = payer
    )]
    pub protocol_fee_config: AccountLoader<'info, ProtocolFeeConfig>,
    pub management: Signer<'info>,
    #[account(mut)]
    pub payer: Signer<'info>,
    pub rent: Sysvar<'info, Rent>,
    pub system_program: Program<'info, System>,
}
