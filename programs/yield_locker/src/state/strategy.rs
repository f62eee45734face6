use crate::error::ErrorCode;
use crate::state::Size;
use crate::validate;
use anchor_lang::prelude::*;
use drift::math::safe_math::SafeMath;
use drift_macros::assert_no_slop;
use static_assertions::const_assert_eq;

#[assert_no_slop]
#[account(zero_copy(unsafe))]
#[derive(Default, Eq, PartialEq, Debug)]
#[repr(C)]
pub struct Strategy {
    /// The locker lending to this strategy
    pub locker: Pubkey,
    /// The strategy account's pubkey. It is a pda of locker and authority
    pub pubkey: Pubkey,
    /// Receives borrowed assets and repays them
    pub authority: Pubkey,
    /// assets currently lent to the strategy, adjusted by reported gains and losses
    pub current_debt: u64,
    /// lifetime reported gain
    pub total_gain: u64,
    /// lifetime reported loss
    pub total_loss: u64,
    /// lifetime fees assessed on this strategy's reports
    pub total_fees: u64,
    pub last_report_ts: i64,
    pub bump: u8,
    pub padding1: [u8; 7],
    pub padding: [u64; 4],
}

impl Size for Strategy {
    const SIZE: usize = 176 + 8;
}

const_assert_eq!(Strategy::SIZE, std::mem::size_of::<Strategy>() + 8);

impl Strategy {
    /// Books a report's outcome against the strategy. Returns the debt before the report.
    pub fn apply_report(&mut self, gain: u64, loss: u64, fees: u64, now: i64) -> Result<u64> {
        validate!(
            loss <= self.current_debt,
            ErrorCode::InvalidInput,
            "loss {} exceeds strategy debt {}",
            loss,
            self.current_debt
        )?;

        let current_debt_before = self.current_debt;
        self.current_debt = self.current_debt.safe_add(gain)?.safe_sub(loss)?;
        self.total_gain = self.total_gain.safe_add(gain)?;
        self.total_loss = self.total_loss.safe_add(loss)?;
        self.total_fees = self.total_fees.safe_add(fees)?;
        self.last_report_ts = now;

        Ok(current_debt_before)
    }
}
