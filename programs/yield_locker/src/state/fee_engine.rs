use std::cell::RefMut;

use crate::constants::MAX_BPS_U128;
use crate::error::ErrorCode;
use crate::events::{FeeSharesAction, FeeSharesRecord, ReportRecord};
use crate::math::get_proportion;
use crate::state::{
    Locker, LockerDepositor, ProtocolFeeConfig, ReportFees, ShareConverter, Strategy,
};
use crate::validate;
use anchor_lang::prelude::*;
use drift::math::casting::Cast;
use drift::math::safe_math::SafeMath;

/// Returned by `report`. `refunds` is always zero.
#[derive(Default, AnchorSerialize, AnchorDeserialize, Copy, Clone, Eq, PartialEq, Debug)]
pub struct ReportResult {
    pub fees: u64,
    pub refunds: u64,
}

/// Fee shares of one report, split by owner.
#[derive(Default, Copy, Clone, Eq, PartialEq, Debug)]
pub struct ReportFeeShares {
    /// the whole fee in shares, at the pre-report exchange rate
    pub converted: u128,
    /// protocol cut, minted to the protocol fee config
    pub protocol: u128,
    /// owed to the fee recipient, minted to the fee engine
    pub recipient: u128,
    /// locker bonus. Never minted, its assets stay with the depositors
    pub bonus: u128,
}

impl ReportFeeShares {
    pub fn minted(&self) -> Result<u128> {
        Ok(self.protocol.safe_add(self.recipient)?)
    }
}

impl Locker {
    pub fn calculate_fee_shares(
        &self,
        fees: &ReportFees,
        protocol_fee_bps: u16,
    ) -> Result<ReportFeeShares> {
        if fees.total_fees == 0 {
            return Ok(ReportFeeShares::default());
        }

        let converted = self.convert_to_shares(fees.total_fees)?;
        let protocol = get_proportion(converted, protocol_fee_bps.cast()?, MAX_BPS_U128)?;
        let after_protocol = converted.safe_sub(protocol)?;
        let recipient = get_proportion(
            after_protocol,
            fees.recipient_fees()?.cast()?,
            fees.total_fees.cast()?,
        )?;
        let bonus = after_protocol.safe_sub(recipient)?;

        Ok(ReportFeeShares {
            converted,
            protocol,
            recipient,
            bonus,
        })
    }

    /// Settles one strategy report: health check, fee assessment, share minting and
    /// payment of the recipient's fee shares out of the fee engine.
    ///
    /// Only the protocol cut and the recipient's shares are minted, so the fee engine
    /// always holds exactly the pending fee shares once a report completes.
    pub fn report(
        &mut self,
        strategy: &mut Strategy,
        recipient: &mut LockerDepositor,
        protocol_fee_config: &mut Option<RefMut<ProtocolFeeConfig>>,
        gain: u64,
        loss: u64,
        now: i64,
    ) -> Result<ReportResult> {
        validate!(
            gain == 0 || loss == 0,
            ErrorCode::InvalidInput,
            "report with both gain {} and loss {}",
            gain,
            loss
        )?;

        let elapsed = now.safe_sub(strategy.last_report_ts)?;
        validate!(
            elapsed > 0,
            ErrorCode::DuplicateReport,
            "strategy already reported at {}",
            strategy.last_report_ts
        )?;

        let principal = strategy.current_debt;
        self.health_check.check(gain, loss, principal)?;

        let fees = self.fee_config.assess(gain, elapsed, principal)?;

        let protocol_fee_bps = protocol_fee_config
            .as_ref()
            .map(|config| config.protocol_fee_bps)
            .unwrap_or(0);
        let fee_shares = self.calculate_fee_shares(&fees, protocol_fee_bps)?;

        if fee_shares.recipient > 0 {
            self.pay_fee_shares(recipient, fee_shares.recipient, now)?;
        }

        let current_debt_before = strategy.apply_report(gain, loss, fees.total_fees, now)?;
        self.total_debt = self.total_debt.safe_add(gain)?.safe_sub(loss)?;
        self.total_fees = self.total_fees.safe_add(fees.total_fees)?;

        self.total_shares = self.total_shares.safe_add(fee_shares.minted()?)?;
        self.fee_engine_shares = self.fee_engine_shares.safe_add(fee_shares.recipient)?;

        if fee_shares.protocol > 0 {
            if let Some(config) = protocol_fee_config.as_mut() {
                config.accrue(fee_shares.protocol)?;
            }
        }

        emit!(ReportRecord {
            ts: now,
            locker: self.pubkey,
            strategy: strategy.pubkey,
            gain,
            loss,
            elapsed,
            current_debt_before,
            current_debt_after: strategy.current_debt,
            management_fee: fees.management_fee,
            performance_fee: fees.performance_fee,
            locker_bonus: fees.locker_bonus,
            total_fees: fees.total_fees,
            total_shares_after: self.total_shares,
        });

        Ok(ReportResult {
            fees: fees.total_fees,
            refunds: 0,
        })
    }

    /// Pays `fee_shares` from the fee engine's existing balance, or records them as pending
    /// when the engine cannot cover them yet.
    fn pay_fee_shares(
        &mut self,
        recipient: &mut LockerDepositor,
        fee_shares: u128,
        now: i64,
    ) -> Result<()> {
        let action = if self.fee_engine_shares >= fee_shares {
            self.fee_engine_shares = self.fee_engine_shares.safe_sub(fee_shares)?;
            recipient.increase_shares(fee_shares)?;
            FeeSharesAction::Paid
        } else {
            self.pending_fee_shares = self.pending_fee_shares.safe_add(fee_shares)?;
            FeeSharesAction::Accrued
        };

        emit!(FeeSharesRecord {
            ts: now,
            locker: self.pubkey,
            action,
            recipient: recipient.authority,
            fee_shares,
            protocol_fee_shares: 0,
            fee_engine_shares_after: self.fee_engine_shares,
            pending_fee_shares_after: self.pending_fee_shares,
        });

        Ok(())
    }
}
