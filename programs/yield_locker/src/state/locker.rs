use crate::constants::ONE_DAY;
use crate::error::ErrorCode;
use crate::events::{FeeConfigRecord, FeeSharesAction, FeeSharesRecord};
use crate::state::{
    FeeConfig, HealthCheck, LockerDepositor, ProtocolFeeConfig, ShareConverter, Size, Strategy,
};
use crate::validate;
use anchor_lang::prelude::*;
use drift::math::insurance::{
    if_shares_to_vault_amount as locker_shares_to_assets,
    vault_amount_to_if_shares as assets_to_locker_shares,
};
use drift::math::safe_math::SafeMath;
use drift_macros::assert_no_slop;
use static_assertions::const_assert_eq;

#[assert_no_slop]
#[account(zero_copy(unsafe))]
#[derive(Default, Eq, PartialEq, Debug)]
#[repr(C)]
pub struct Locker {
    /// The name of the locker. Locker pubkey is derived from this name.
    pub name: [u8; 32],
    /// The locker's pubkey. It is a pda of name and also used as the authority for the token account
    pub pubkey: Pubkey,
    /// The management role: sets fees, cooldown params, health check and reports strategies
    pub management: Pubkey,
    /// Receives management and performance fee shares
    pub performance_fee_recipient: Pubkey,
    /// The locker's token account holding idle assets
    pub token_account: Pubkey,
    /// The mint of the underlying asset
    pub mint: Pubkey,
    /// total locker shares outstanding (depositors + fee engine + unclaimed protocol shares)
    pub total_shares: u128,
    /// recipient fee shares minted on reports and not yet paid out, equal to pending_fee_shares
    pub fee_engine_shares: u128,
    /// fee shares owed to the performance fee recipient, released by withdraw_fees
    pub pending_fee_shares: u128,
    /// assets held in token_account
    pub total_idle: u64,
    /// assets lent to strategies, including reported gains and losses
    pub total_debt: u64,
    /// lifetime total deposits
    pub total_deposits: u64,
    /// lifetime total withdraws
    pub total_withdraws: u64,
    /// lifetime fees assessed on reports, in asset units
    pub total_fees: u64,
    /// seconds between start_cooldown and the opening of the withdrawal window. 0 disables the cooldown
    pub cooldown_duration: i64,
    /// seconds the withdrawal window stays open after the cooldown ends
    pub withdrawal_window: i64,
    pub fee_config: FeeConfig,
    pub health_check: HealthCheck,
    /// once shut down, withdrawals are no longer gated by cooldowns and deposits are refused
    pub is_shutdown: bool,
    /// a ProtocolFeeConfig must be passed as the last remaining account to report
    pub protocol_fee_enabled: bool,
    /// The bump for the locker pda
    pub bump: u8,
    pub padding1: [u8; 1],
    pub padding: [u64; 7],
}

impl Size for Locker {
    const SIZE: usize = 368 + 8;
}

const_assert_eq!(Locker::SIZE, std::mem::size_of::<Locker>() + 8);

impl Locker {
    pub fn get_locker_signer_seeds<'a>(name: &'a [u8], bump: &'a u8) -> [&'a [u8]; 3] {
        [b"locker".as_ref(), name, bytemuck::bytes_of(bump)]
    }

    pub fn total_assets(&self) -> Result<u64> {
        Ok(self.total_idle.safe_add(self.total_debt)?)
    }

    pub fn cooldown_enabled(&self) -> bool {
        self.cooldown_duration > 0
    }

    pub fn set_cooldown_duration(&mut self, cooldown_duration: i64) -> Result<()> {
        validate!(
            cooldown_duration >= 0,
            ErrorCode::ConfigurationInvalid,
            "cooldown duration must not be negative"
        )?;

        self.cooldown_duration = cooldown_duration;
        Ok(())
    }

    pub fn set_withdrawal_window(&mut self, withdrawal_window: i64) -> Result<()> {
        validate!(
            withdrawal_window > ONE_DAY,
            ErrorCode::ConfigurationInvalid,
            "withdrawal window must be longer than one day"
        )?;

        self.withdrawal_window = withdrawal_window;
        Ok(())
    }

    pub fn set_fees(&mut self, fee_config: FeeConfig, now: i64) -> Result<()> {
        fee_config.validate()?;

        let old = self.fee_config;
        self.fee_config = fee_config;

        emit!(FeeConfigRecord {
            ts: now,
            locker: self.pubkey,
            old_management_fee_bps: old.management_fee_bps,
            old_performance_fee_bps: old.performance_fee_bps,
            old_locker_bonus_bps: old.locker_bonus_bps,
            new_management_fee_bps: fee_config.management_fee_bps,
            new_performance_fee_bps: fee_config.performance_fee_bps,
            new_locker_bonus_bps: fee_config.locker_bonus_bps,
        });

        Ok(())
    }

    pub fn validate_protocol_fee_config(
        &self,
        protocol_fee_config: &Option<AccountLoader<ProtocolFeeConfig>>,
    ) -> Result<()> {
        match protocol_fee_config {
            Some(config) => {
                validate!(
                    self.protocol_fee_enabled,
                    ErrorCode::ProtocolFeeConfigMissing,
                    "locker has no protocol fee config but one was passed"
                )?;
                let (expected, _) = Pubkey::find_program_address(
                    &[b"protocol_fee_config", self.pubkey.as_ref()],
                    &crate::id(),
                );
                validate!(
                    config.key() == expected,
                    ErrorCode::ProtocolFeeConfigMissing,
                    "protocol fee config is not the locker's"
                )?;
            }
            None => {
                validate!(
                    !self.protocol_fee_enabled,
                    ErrorCode::ProtocolFeeConfigMissing,
                    "protocol fee config must be the last remaining account"
                )?;
            }
        }

        Ok(())
    }

    pub fn lend_to_strategy(&mut self, strategy: &mut Strategy, amount: u64) -> Result<()> {
        validate!(!self.is_shutdown, ErrorCode::LockerShutdown)?;
        validate!(
            amount > 0,
            ErrorCode::InvalidInput,
            "borrow amount must be greater than 0"
        )?;
        validate!(
            amount <= self.total_idle,
            ErrorCode::InsufficientLiquidity,
            "borrow amount {} exceeds idle assets {}",
            amount,
            self.total_idle
        )?;

        self.total_idle = self.total_idle.safe_sub(amount)?;
        self.total_debt = self.total_debt.safe_add(amount)?;
        strategy.current_debt = strategy.current_debt.safe_add(amount)?;

        Ok(())
    }

    pub fn repay_from_strategy(&mut self, strategy: &mut Strategy, amount: u64) -> Result<()> {
        validate!(
            amount > 0,
            ErrorCode::InvalidInput,
            "repay amount must be greater than 0"
        )?;
        validate!(
            amount <= strategy.current_debt,
            ErrorCode::InvalidInput,
            "repay amount {} exceeds strategy debt {}",
            amount,
            strategy.current_debt
        )?;

        strategy.current_debt = strategy.current_debt.safe_sub(amount)?;
        self.total_debt = self.total_debt.safe_sub(amount)?;
        self.total_idle = self.total_idle.safe_add(amount)?;

        Ok(())
    }

    /// Releases all pending fee shares held by the fee engine to `receiver`.
    pub fn withdraw_fees(&mut self, receiver: &mut LockerDepositor, now: i64) -> Result<u128> {
        let pending = self.pending_fee_shares;

        validate!(
            pending > 0,
            ErrorCode::InvalidInput,
            "no pending fee shares"
        )?;
        validate!(
            pending <= self.fee_engine_shares,
            ErrorCode::InsufficientBalance,
            "pending fee shares {} exceed fee engine balance {}",
            pending,
            self.fee_engine_shares
        )?;

        self.fee_engine_shares = self.fee_engine_shares.safe_sub(pending)?;
        self.pending_fee_shares = 0;
        receiver.increase_shares(pending)?;

        emit!(FeeSharesRecord {
            ts: now,
            locker: self.pubkey,
            action: FeeSharesAction::Withdrawn,
            recipient: receiver.authority,
            fee_shares: pending,
            protocol_fee_shares: 0,
            fee_engine_shares_after: self.fee_engine_shares,
            pending_fee_shares_after: self.pending_fee_shares,
        });

        Ok(pending)
    }
}

impl ShareConverter for Locker {
    fn convert_to_assets(&self, shares: u128) -> Result<u64> {
        Ok(locker_shares_to_assets(
            shares,
            self.total_shares,
            self.total_assets()?,
        )?)
    }

    fn convert_to_shares(&self, assets: u64) -> Result<u128> {
        Ok(assets_to_locker_shares(
            assets,
            self.total_shares,
            self.total_assets()?,
        )?)
    }

    fn is_shutdown(&self) -> bool {
        self.is_shutdown
    }
}
