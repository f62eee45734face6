use crate::error::ErrorCode;
use crate::validate;
use anchor_lang::prelude::*;
use bytemuck::Zeroable;
use drift::math::safe_math::SafeMath;
use drift_macros::assert_no_slop;
use static_assertions::const_assert_eq;

#[assert_no_slop]
#[derive(
    Default, AnchorSerialize, AnchorDeserialize, Copy, Clone, Eq, PartialEq, Debug, Zeroable,
)]
pub struct CooldownRecord {
    /// shares declared for withdrawal, frozen against transfers until redeemed or cancelled
    pub locked_shares: u128,
    /// ts at which redemption of locked_shares opens
    pub cooldown_end: i64,
    /// ts after which the declaration lapses
    pub window_end: i64,
}

impl CooldownRecord {
    pub fn is_active(&self) -> bool {
        self.locked_shares != 0
    }

    pub fn start(
        &mut self,
        shares: u128,
        balance: u128,
        cooldown_duration: i64,
        withdrawal_window: i64,
        now: i64,
    ) -> Result<()> {
        validate!(
            shares > 0,
            ErrorCode::InvalidInput,
            "cooldown shares must be greater than 0"
        )?;

        validate!(
            shares <= balance,
            ErrorCode::InsufficientBalance,
            "cooldown shares exceeds balance {} > {}",
            shares,
            balance
        )?;

        // a new declaration always restarts the clock, progress on an earlier one is discarded
        self.cooldown_end = now.safe_add(cooldown_duration)?;
        self.window_end = self.cooldown_end.safe_add(withdrawal_window)?;
        self.locked_shares = shares;

        Ok(())
    }

    pub fn cancel(&mut self) -> Result<()> {
        validate!(
            self.is_active(),
            ErrorCode::NoActiveCooldown,
            "no cooldown to cancel"
        )?;

        self.reset();

        Ok(())
    }

    pub fn reset(&mut self) {
        self.locked_shares = 0;
        self.cooldown_end = 0;
        self.window_end = 0;
    }

    /// `now` is inside [cooldown_end, window_end]. A lapsed record stays in place.
    pub fn in_withdrawal_window(&self, now: i64) -> bool {
        self.is_active() && now >= self.cooldown_end && now <= self.window_end
    }

    pub fn on_withdraw(&mut self, shares_redeemed: u128) -> Result<()> {
        if !self.is_active() {
            return Ok(());
        }

        if shares_redeemed >= self.locked_shares {
            self.reset();
        } else {
            self.locked_shares = self.locked_shares.safe_sub(shares_redeemed)?;
        }

        Ok(())
    }

    pub fn transferable_shares(&self, balance: u128) -> u128 {
        balance.saturating_sub(self.locked_shares)
    }
}

#[derive(Default, AnchorSerialize, AnchorDeserialize, Copy, Clone, Eq, PartialEq, Debug)]
pub struct CooldownStatus {
    pub cooldown_end: i64,
    pub window_end: i64,
    pub shares: u128,
}

impl From<&CooldownRecord> for CooldownStatus {
    fn from(record: &CooldownRecord) -> Self {
        CooldownStatus {
            cooldown_end: record.cooldown_end,
            window_end: record.window_end,
            shares: record.locked_shares,
        }
    }
}
