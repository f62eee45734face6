use crate::error::ErrorCode;
use crate::events::{LockerDepositorAction, LockerDepositorRecord, ShareTransferRecord};
use crate::state::{
    validate_transfer, CooldownRecord, CooldownStatus, Locker, ShareConverter, Size,
};
use crate::validate;
use anchor_lang::prelude::*;
use drift::math::casting::Cast;
use drift::math::safe_math::SafeMath;
use drift_macros::assert_no_slop;
use static_assertions::const_assert_eq;

#[assert_no_slop]
#[account(zero_copy(unsafe))]
#[derive(Default, Eq, PartialEq, Debug)]
#[repr(C)]
pub struct LockerDepositor {
    /// The locker deposited into
    pub locker: Pubkey,
    /// The locker depositor account's pubkey. It is a pda of locker and authority
    pub pubkey: Pubkey,
    /// The authority is the address w permission to deposit/withdraw
    pub authority: Pubkey,
    /// share of the locker owned by this depositor
    pub shares: u128,
    pub cooldown: CooldownRecord,
    /// lifetime net deposits
    pub net_deposits: i64,
    /// lifetime total deposits
    pub total_deposits: u64,
    /// lifetime total withdraws
    pub total_withdraws: u64,
    pub last_valid_ts: i64,
    pub bump: u8,
    pub padding1: [u8; 7],
    pub padding: [u64; 5],
}

impl Size for LockerDepositor {
    const SIZE: usize = 224 + 8;
}

const_assert_eq!(
    LockerDepositor::SIZE,
    std::mem::size_of::<LockerDepositor>() + 8
);

impl LockerDepositor {
    pub fn new(locker: Pubkey, pubkey: Pubkey, authority: Pubkey, now: i64) -> Self {
        LockerDepositor {
            locker,
            pubkey,
            authority,
            last_valid_ts: now,
            ..LockerDepositor::default()
        }
    }

    pub fn increase_shares(&mut self, delta: u128) -> Result<()> {
        self.shares = self.shares.safe_add(delta)?;
        Ok(())
    }

    pub fn decrease_shares(&mut self, delta: u128) -> Result<()> {
        validate!(
            delta <= self.shares,
            ErrorCode::InsufficientBalance,
            "decrease of {} exceeds balance {}",
            delta,
            self.shares
        )?;
        self.shares = self.shares.safe_sub(delta)?;
        Ok(())
    }

    pub fn deposit(&mut self, amount: u64, locker: &mut Locker, now: i64) -> Result<u128> {
        validate!(
            !locker.is_shutdown(),
            ErrorCode::LockerShutdown,
            "locker is shut down"
        )?;
        validate!(
            amount > 0,
            ErrorCode::InvalidInput,
            "deposit amount must be greater than 0"
        )?;

        let shares = locker.convert_to_shares(amount)?;
        validate!(
            shares > 0,
            ErrorCode::InvalidInput,
            "deposit of {} mints no shares",
            amount
        )?;

        let depositor_shares_before = self.shares;
        let total_shares_before = locker.total_shares;

        validate_transfer(&Pubkey::default(), &self.authority, shares, 0, None)?;
        self.increase_shares(shares)?;
        self.total_deposits = self.total_deposits.safe_add(amount)?;
        self.net_deposits = self.net_deposits.safe_add(amount.cast()?)?;
        self.last_valid_ts = now;

        locker.total_shares = locker.total_shares.safe_add(shares)?;
        locker.total_idle = locker.total_idle.safe_add(amount)?;
        locker.total_deposits = locker.total_deposits.safe_add(amount)?;

        emit!(LockerDepositorRecord {
            ts: now,
            locker: locker.pubkey,
            depositor_authority: self.authority,
            action: LockerDepositorAction::Deposit,
            amount,
            shares,
            depositor_shares_before,
            depositor_shares_after: self.shares,
            total_shares_before,
            total_shares_after: locker.total_shares,
            cooldown_end: self.cooldown.cooldown_end,
            window_end: self.cooldown.window_end,
            locked_shares: self.cooldown.locked_shares,
        });

        Ok(shares)
    }

    pub fn start_cooldown(&mut self, shares: u128, locker: &Locker, now: i64) -> Result<()> {
        self.cooldown.start(
            shares,
            self.shares,
            locker.cooldown_duration,
            locker.withdrawal_window,
            now,
        )?;
        self.last_valid_ts = now;

        self.emit_cooldown_record(LockerDepositorAction::StartCooldown, shares, locker, now);

        Ok(())
    }

    pub fn cancel_cooldown(&mut self, locker: &Locker, now: i64) -> Result<()> {
        let shares = self.cooldown.locked_shares;
        self.cooldown.cancel()?;
        self.last_valid_ts = now;

        self.emit_cooldown_record(LockerDepositorAction::CancelCooldown, shares, locker, now);

        Ok(())
    }

    fn emit_cooldown_record(
        &self,
        action: LockerDepositorAction,
        shares: u128,
        locker: &Locker,
        now: i64,
    ) {
        emit!(LockerDepositorRecord {
            ts: now,
            locker: locker.pubkey,
            depositor_authority: self.authority,
            action,
            amount: 0,
            shares,
            depositor_shares_before: self.shares,
            depositor_shares_after: self.shares,
            total_shares_before: locker.total_shares,
            total_shares_after: locker.total_shares,
            cooldown_end: self.cooldown.cooldown_end,
            window_end: self.cooldown.window_end,
            locked_shares: self.cooldown.locked_shares,
        });
    }

    pub fn cooldown_status(&self) -> CooldownStatus {
        CooldownStatus::from(&self.cooldown)
    }

    /// Most shares redeemable at `now`. Without a cooldown (or once shut down) the whole balance.
    pub fn max_redeemable_shares<L: ShareConverter>(
        &self,
        locker: &L,
        cooldown_enabled: bool,
        now: i64,
    ) -> u128 {
        if !cooldown_enabled || locker.is_shutdown() {
            return self.shares;
        }

        if self.cooldown.in_withdrawal_window(now) {
            self.cooldown.locked_shares.min(self.shares)
        } else {
            0
        }
    }

    /// Assets redeemable at `now`. `u64::MAX` when no cooldown gates withdrawals.
    pub fn withdrawable_amount<L: ShareConverter>(
        &self,
        locker: &L,
        cooldown_enabled: bool,
        now: i64,
    ) -> Result<u64> {
        if !cooldown_enabled || locker.is_shutdown() {
            return Ok(u64::MAX);
        }

        match self.max_redeemable_shares(locker, cooldown_enabled, now) {
            0 => Ok(0),
            shares => locker.convert_to_assets(shares),
        }
    }

    pub fn withdraw(&mut self, shares: u128, locker: &mut Locker, now: i64) -> Result<u64> {
        validate!(
            shares > 0,
            ErrorCode::InvalidInput,
            "withdraw shares must be greater than 0"
        )?;
        validate!(
            shares <= self.shares,
            ErrorCode::InsufficientBalance,
            "withdraw shares {} exceeds balance {}",
            shares,
            self.shares
        )?;

        let cooldown_enabled = locker.cooldown_enabled();
        let max_shares = self.max_redeemable_shares(&*locker, cooldown_enabled, now);
        validate!(
            shares <= max_shares,
            ErrorCode::WithdrawalNotEligible,
            "withdraw shares {} exceeds redeemable shares {} (cooldown_end={} window_end={} now={})",
            shares,
            max_shares,
            self.cooldown.cooldown_end,
            self.cooldown.window_end,
            now
        )?;

        let amount = locker.convert_to_assets(shares)?;
        let withdrawable = self.withdrawable_amount(&*locker, cooldown_enabled, now)?;
        validate!(
            amount <= withdrawable,
            ErrorCode::WithdrawalNotEligible,
            "withdraw amount {} exceeds withdrawable {}",
            amount,
            withdrawable
        )?;
        validate!(
            amount <= locker.total_idle,
            ErrorCode::InsufficientLiquidity,
            "withdraw amount {} exceeds idle assets {}",
            amount,
            locker.total_idle
        )?;

        let depositor_shares_before = self.shares;
        let total_shares_before = locker.total_shares;

        validate_transfer(
            &self.authority,
            &Pubkey::default(),
            shares,
            self.shares,
            Some(&self.cooldown),
        )?;
        self.decrease_shares(shares)?;
        self.cooldown.on_withdraw(shares)?;
        self.total_withdraws = self.total_withdraws.safe_add(amount)?;
        self.net_deposits = self.net_deposits.safe_sub(amount.cast()?)?;
        self.last_valid_ts = now;

        locker.total_shares = locker.total_shares.safe_sub(shares)?;
        locker.total_idle = locker.total_idle.safe_sub(amount)?;
        locker.total_withdraws = locker.total_withdraws.safe_add(amount)?;

        emit!(LockerDepositorRecord {
            ts: now,
            locker: locker.pubkey,
            depositor_authority: self.authority,
            action: LockerDepositorAction::Withdraw,
            amount,
            shares,
            depositor_shares_before,
            depositor_shares_after: self.shares,
            total_shares_before,
            total_shares_after: locker.total_shares,
            cooldown_end: self.cooldown.cooldown_end,
            window_end: self.cooldown.window_end,
            locked_shares: self.cooldown.locked_shares,
        });

        Ok(amount)
    }

    pub fn transfer_shares(
        &mut self,
        to: &mut LockerDepositor,
        shares: u128,
        locker: &Locker,
        now: i64,
    ) -> Result<()> {
        validate!(
            shares > 0,
            ErrorCode::InvalidInput,
            "transfer shares must be greater than 0"
        )?;
        validate!(
            self.pubkey != to.pubkey,
            ErrorCode::InvalidInput,
            "cannot transfer shares to self"
        )?;
        validate!(
            self.locker == to.locker,
            ErrorCode::InvalidInput,
            "depositors belong to different lockers"
        )?;
        validate!(
            shares <= self.shares,
            ErrorCode::InsufficientBalance,
            "transfer shares {} exceeds balance {}",
            shares,
            self.shares
        )?;

        validate_transfer(
            &self.authority,
            &to.authority,
            shares,
            self.shares,
            Some(&self.cooldown),
        )?;

        let from_depositor_shares_before = self.shares;
        let to_depositor_shares_before = to.shares;

        self.decrease_shares(shares)?;
        to.increase_shares(shares)?;
        self.last_valid_ts = now;
        to.last_valid_ts = now;

        emit!(ShareTransferRecord {
            ts: now,
            locker: locker.pubkey,
            from_depositor: self.pubkey,
            to_depositor: to.pubkey,
            shares,
            from_depositor_shares_before,
            from_depositor_shares_after: self.shares,
            to_depositor_shares_before,
            to_depositor_shares_after: to.shares,
        });

        Ok(())
    }
}
