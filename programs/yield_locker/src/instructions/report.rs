use crate::constraints::{
    is_fee_recipient_depositor_for_locker, is_locker_for_strategy, is_management_for_locker,
};
use crate::state::{ProtocolFeeConfigProvider, ReportResult};
use crate::{Locker, LockerDepositor, Strategy};
use anchor_lang::prelude::*;

pub fn report<'c: 'info, 'info>(
    ctx: Context<'_, '_, 'c, 'info, Report<'info>>,
    gain: u64,
    loss: u64,
) -> Result<ReportResult> {
    let clock = &Clock::get()?;

    let mut locker = ctx.accounts.locker.load_mut()?;
    let mut strategy = ctx.accounts.strategy.load_mut()?;
    let mut fee_recipient = ctx.accounts.fee_recipient_depositor.load_mut()?;

    let mut config = ctx.protocol_fee_config();
    locker.validate_protocol_fee_config(&config)?;
    let mut config = config.as_mut().map(|config| config.load_mut()).transpose()?;

    let result = locker.report(
        &mut strategy,
        &mut fee_recipient,
        &mut config,
        gain,
        loss,
        clock.unix_timestamp,
    )?;

    msg!("report fees: {}, refunds: {}", result.fees, result.refunds);

    Ok(result)
}

#[derive(Accounts)]
pub struct Report<'info> {
    #[account(
        mut,
        constraint = is_management_for_locker(&locker, &management)?,
    )]
    pub locker: AccountLoader<'info, Locker>,
    #[account(
        mut,
        constraint = is_locker_for_strategy(&strategy, &locker)?,
    )]
    pub strategy: AccountLoader<'info, Strategy>,
    #[account(
        mut,
        constraint = is_fee_recipient_depositor_for_locker(&fee_recipient_depositor, &locker)?,
    )]
    pub fee_recipient_depositor: AccountLoader<'info, LockerDepositor>,
    pub management: Signer<'info>,
}
