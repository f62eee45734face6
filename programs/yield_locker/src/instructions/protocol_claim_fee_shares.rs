use crate::constraints::{is_locker_for_locker_depositor, is_protocol_for_fee_config};
use crate::{Locker, LockerDepositor, ProtocolFeeConfig};
use anchor_lang::prelude::*;

pub fn protocol_claim_fee_shares<'info>(
    ctx: Context<'_, '_, '_, 'info, ProtocolClaimFeeShares<'info>>,
) -> Result<()> {
    let clock = &Clock::get()?;

    let mut config = ctx.accounts.protocol_fee_config.load_mut()?;
    let mut receiver = ctx.accounts.receiver.load_mut()?;

    let shares = config.claim(&mut receiver, clock.unix_timestamp)?;
    msg!("protocol claimed {} fee shares", shares);

    Ok(())
}

#[derive(Accounts)]
pub struct ProtocolClaimFeeShares<'info> {
    pub locker: AccountLoader<'info, Locker>,
    #[account(
        mut,
        seeds = [b"protocol_fee_config", locker.key().as_ref()],
        bump,
        constraint = is_protocol_for_fee_config(&protocol_fee_config, &locker, &protocol)?,
    )]
    pub protocol_fee_config: AccountLoader<'info, ProtocolFeeConfig>,
    #[account(
        mut,
        constraint = is_locker_for_locker_depositor(&receiver, &locker)?,
    )]
    pub receiver: AccountLoader<'info, LockerDepositor>,
    pub protocol: Signer<'info>,
}
