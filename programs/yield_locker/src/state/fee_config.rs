use crate::constants::{MAX_BPS, MAX_MANAGEMENT_FEE_BPS};
use crate::error::ErrorCode;
use crate::math::{apply_bps, calculate_management_fee};
use crate::validate;
use anchor_lang::prelude::*;
use bytemuck::Zeroable;
use drift::math::casting::Cast;
use drift::math::safe_math::SafeMath;
use drift_macros::assert_no_slop;
use static_assertions::const_assert_eq;

#[assert_no_slop]
#[derive(
    Default, AnchorSerialize, AnchorDeserialize, Copy, Clone, Eq, PartialEq, Debug, Zeroable,
)]
pub struct FeeConfig {
    /// annualized fee on strategy principal, charged only on reports with a gain
    pub management_fee_bps: u16,
    /// share of reported gain
    pub performance_fee_bps: u16,
    /// share of reported gain left with the locker for its own reward mechanism
    pub locker_bonus_bps: u16,
}

/// Fee components of a single report, in asset units.
#[derive(Default, Copy, Clone, Eq, PartialEq, Debug)]
pub struct ReportFees {
    pub management_fee: u64,
    pub performance_fee: u64,
    pub locker_bonus: u64,
    pub total_fees: u64,
}

impl ReportFees {
    /// part of the fee owed to the fee recipient (everything but the locker bonus)
    pub fn recipient_fees(&self) -> Result<u64> {
        Ok(self.management_fee.safe_add(self.performance_fee)?)
    }
}

impl FeeConfig {
    pub fn validate(&self) -> Result<()> {
        validate!(
            self.management_fee_bps <= MAX_MANAGEMENT_FEE_BPS,
            ErrorCode::ConfigurationInvalid,
            "management fee {} above cap {}",
            self.management_fee_bps,
            MAX_MANAGEMENT_FEE_BPS
        )?;

        let gain_fee_bps = self
            .performance_fee_bps
            .cast::<u32>()?
            .safe_add(self.locker_bonus_bps.cast()?)?;
        validate!(
            gain_fee_bps <= MAX_BPS.cast::<u32>()?,
            ErrorCode::ConfigurationInvalid,
            "performance fee {} + locker bonus {} above {}",
            self.performance_fee_bps,
            self.locker_bonus_bps,
            MAX_BPS
        )?;

        Ok(())
    }

    pub fn assess(&self, gain: u64, elapsed: i64, principal: u64) -> Result<ReportFees> {
        if gain == 0 {
            return Ok(ReportFees::default());
        }

        let mut management_fee =
            calculate_management_fee(principal, elapsed, self.management_fee_bps)?;
        let performance_fee = apply_bps(gain, self.performance_fee_bps)?;
        let locker_bonus = apply_bps(gain, self.locker_bonus_bps)?;

        let mut total_fees = management_fee
            .safe_add(performance_fee)?
            .safe_add(locker_bonus)?;

        // fees never exceed the gain; management absorbs the clamp
        if total_fees > gain {
            total_fees = gain;
            management_fee = gain.safe_sub(performance_fee.safe_add(locker_bonus)?)?;
        }

        if total_fees == 0 {
            return Ok(ReportFees::default());
        }

        Ok(ReportFees {
            management_fee,
            performance_fee,
            locker_bonus,
            total_fees,
        })
    }
}
