use crate::constants::MAX_BPS;
use crate::error::ErrorCode;
use crate::math::apply_bps;
use crate::validate;
use anchor_lang::prelude::*;
use bytemuck::Zeroable;
use drift_macros::assert_no_slop;
use static_assertions::const_assert_eq;

#[assert_no_slop]
#[derive(
    Default, AnchorSerialize, AnchorDeserialize, Copy, Clone, Eq, PartialEq, Debug, Zeroable,
)]
pub struct HealthCheck {
    /// max gain of a single report as a fraction of principal
    pub profit_limit_bps: u16,
    /// max loss of a single report as a fraction of principal
    pub loss_limit_bps: u16,
    pub enabled: bool,
    /// an unarmed check lets the next report through and arms itself
    pub armed: bool,
}

impl HealthCheck {
    pub fn set_limits(&mut self, profit_limit_bps: u16, loss_limit_bps: u16) -> Result<()> {
        validate!(
            loss_limit_bps <= MAX_BPS,
            ErrorCode::ConfigurationInvalid,
            "loss limit {} above {}",
            loss_limit_bps,
            MAX_BPS
        )?;

        self.profit_limit_bps = profit_limit_bps;
        self.loss_limit_bps = loss_limit_bps;
        Ok(())
    }

    /// Lets the next report through unchecked.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    pub fn check(&mut self, gain: u64, loss: u64, principal: u64) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        if !self.armed {
            self.armed = true;
            return Ok(());
        }

        if gain > 0 {
            let max_gain = apply_bps(principal, self.profit_limit_bps)?;
            validate!(
                gain <= max_gain,
                ErrorCode::HealthCheckFailed,
                "gain {} exceeds profit limit {}",
                gain,
                max_gain
            )?;
        } else if loss > 0 {
            let max_loss = apply_bps(principal, self.loss_limit_bps)?;
            validate!(
                loss <= max_loss,
                ErrorCode::HealthCheckFailed,
                "loss {} exceeds loss limit {}",
                loss,
                max_loss
            )?;
        }

        Ok(())
    }
}
