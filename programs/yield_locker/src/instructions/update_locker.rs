use crate::constraints::is_management_for_locker;
use crate::Locker;
use anchor_lang::prelude::*;

#[derive(Debug, Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq, Default)]
pub struct UpdateLockerParams {
    pub cooldown_duration: Option<i64>,
    pub withdrawal_window: Option<i64>,
    pub performance_fee_recipient: Option<Pubkey>,
    pub profit_limit_bps: Option<u16>,
    pub loss_limit_bps: Option<u16>,
    pub health_check_enabled: Option<bool>,
    /// skip the health check on the next report
    pub skip_health_check: bool,
    /// irreversible
    pub shutdown: bool,
}

pub fn update_locker<'info>(
    ctx: Context<'_, '_, '_, 'info, UpdateLocker<'info>>,
    params: UpdateLockerParams,
) -> Result<()> {
    let mut locker = ctx.accounts.locker.load_mut()?;

    if let Some(cooldown_duration) = params.cooldown_duration {
        msg!(
            "cooldown_duration: {} -> {}",
            locker.cooldown_duration,
            cooldown_duration
        );
        locker.set_cooldown_duration(cooldown_duration)?;
    }

    if let Some(withdrawal_window) = params.withdrawal_window {
        msg!(
            "withdrawal_window: {} -> {}",
            locker.withdrawal_window,
            withdrawal_window
        );
        locker.set_withdrawal_window(withdrawal_window)?;
    }

    if let Some(performance_fee_recipient) = params.performance_fee_recipient {
        msg!(
            "performance_fee_recipient: {:?} -> {:?}",
            locker.performance_fee_recipient,
            performance_fee_recipient
        );
        locker.performance_fee_recipient = performance_fee_recipient;
    }

    if params.profit_limit_bps.is_some() || params.loss_limit_bps.is_some() {
        let profit_limit_bps = params
            .profit_limit_bps
            .unwrap_or(locker.health_check.profit_limit_bps);
        let loss_limit_bps = params
            .loss_limit_bps
            .unwrap_or(locker.health_check.loss_limit_bps);
        locker
            .health_check
            .set_limits(profit_limit_bps, loss_limit_bps)?;
    }

    if let Some(enabled) = params.health_check_enabled {
        locker.health_check.enabled = enabled;
    }

    if params.skip_health_check {
        locker.health_check.disarm();
    }

    if params.shutdown {
        msg!("locker shut down");
        locker.is_shutdown = true;
    }

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateLocker<'info> {
    #[account(
        mut,
        constraint = is_management_for_locker(&locker, &management)?,
    )]
    pub locker: AccountLoader<'info, Locker>,
    pub management: Signer<'info>,
}
