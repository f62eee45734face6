#[cfg(test)]
mod cooldown_ledger {
    use crate::constants::ONE_DAY;
    use crate::error::ErrorCode;
    use crate::{Locker, LockerDepositor};
    use anchor_lang::prelude::Pubkey;

    const COOLDOWN: i64 = 7 * ONE_DAY;
    const WINDOW: i64 = 2 * ONE_DAY;

    fn setup(amount: u64) -> (Locker, LockerDepositor) {
        let mut locker = Locker {
            pubkey: Pubkey::new_unique(),
            cooldown_duration: COOLDOWN,
            withdrawal_window: WINDOW,
            ..Locker::default()
        };
        let mut vd = LockerDepositor::new(
            locker.pubkey,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            0,
        );
        vd.deposit(amount, &mut locker, 0).unwrap();
        (locker, vd)
    }

    #[test]
    fn test_start_cooldown_sets_window() {
        let (locker, mut vd) = setup(1_000);
        assert_eq!(vd.shares, 1_000);

        vd.start_cooldown(400, &locker, 100).unwrap();

        let status = vd.cooldown_status();
        assert_eq!(status.cooldown_end, 100 + COOLDOWN);
        assert_eq!(status.window_end, 100 + COOLDOWN + WINDOW);
        assert_eq!(status.shares, 400);
    }

    #[test]
    fn test_restart_overwrites_previous_cooldown() {
        let (locker, mut vd) = setup(1_000);

        vd.start_cooldown(400, &locker, 100).unwrap();
        vd.start_cooldown(300, &locker, 5_000).unwrap();

        let status = vd.cooldown_status();
        assert_eq!(status.cooldown_end, 5_000 + COOLDOWN);
        assert_eq!(status.window_end, 5_000 + COOLDOWN + WINDOW);
        assert_eq!(status.shares, 300);
    }

    #[test]
    fn test_start_cooldown_rejects_bad_amounts() {
        let (locker, mut vd) = setup(1_000);

        assert_eq!(
            vd.start_cooldown(0, &locker, 100),
            Err(ErrorCode::InvalidInput.into())
        );
        assert_eq!(
            vd.start_cooldown(1_001, &locker, 100),
            Err(ErrorCode::InsufficientBalance.into())
        );
        assert!(!vd.cooldown.is_active());
    }

    #[test]
    fn test_withdrawable_amount_follows_window() {
        let (locker, mut vd) = setup(1_000);
        let enabled = locker.cooldown_enabled();

        // no record
        assert_eq!(vd.withdrawable_amount(&locker, enabled, 100).unwrap(), 0);

        vd.start_cooldown(400, &locker, 100).unwrap();
        let cooldown_end = 100 + COOLDOWN;
        let window_end = cooldown_end + WINDOW;

        assert_eq!(
            vd.withdrawable_amount(&locker, enabled, cooldown_end - 1)
                .unwrap(),
            0
        );
        assert_eq!(
            vd.withdrawable_amount(&locker, enabled, cooldown_end).unwrap(),
            400
        );
        assert_eq!(
            vd.withdrawable_amount(&locker, enabled, window_end).unwrap(),
            400
        );
        assert_eq!(
            vd.withdrawable_amount(&locker, enabled, window_end + 1)
                .unwrap(),
            0
        );

        // lapsed, not cleared
        assert!(vd.cooldown.is_active());
        assert_eq!(vd.cooldown_status().shares, 400);
    }

    #[test]
    fn test_unlimited_without_cooldown_or_after_shutdown() {
        let (mut locker, vd) = setup(1_000);

        locker.is_shutdown = true;
        assert_eq!(
            vd.withdrawable_amount(&locker, locker.cooldown_enabled(), 0)
                .unwrap(),
            u64::MAX
        );

        locker.is_shutdown = false;
        locker.set_cooldown_duration(0).unwrap();
        assert!(!locker.cooldown_enabled());
        assert_eq!(
            vd.withdrawable_amount(&locker, locker.cooldown_enabled(), 0)
                .unwrap(),
            u64::MAX
        );
    }

    #[test]
    fn test_withdraw_clears_cooldown() {
        let (mut locker, mut vd) = setup(1_000);
        vd.start_cooldown(400, &locker, 100).unwrap();

        let amount = vd.withdraw(400, &mut locker, 100 + COOLDOWN).unwrap();

        assert_eq!(amount, 400);
        assert_eq!(vd.shares, 600);
        assert!(!vd.cooldown.is_active());
        assert_eq!(locker.total_shares, 600);
        assert_eq!(locker.total_idle, 600);
        assert_eq!(locker.total_withdraws, 400);
        assert_eq!(vd.net_deposits, 600);
    }

    #[test]
    fn test_partial_withdraw_decrements_locked_shares() {
        let (mut locker, mut vd) = setup(1_000);
        vd.start_cooldown(400, &locker, 100).unwrap();

        vd.withdraw(150, &mut locker, 100 + COOLDOWN).unwrap();

        let status = vd.cooldown_status();
        assert_eq!(status.shares, 250);
        assert_eq!(status.cooldown_end, 100 + COOLDOWN);
        assert_eq!(vd.shares, 850);
    }

    #[test]
    fn test_withdraw_outside_window_fails() {
        let (mut locker, mut vd) = setup(1_000);

        // never declared
        assert_eq!(
            vd.withdraw(1, &mut locker, 100),
            Err(ErrorCode::WithdrawalNotEligible.into())
        );

        vd.start_cooldown(400, &locker, 100).unwrap();

        assert_eq!(
            vd.withdraw(400, &mut locker, 100 + COOLDOWN - 1),
            Err(ErrorCode::WithdrawalNotEligible.into())
        );
        assert_eq!(
            vd.withdraw(400, &mut locker, 100 + COOLDOWN + WINDOW + 1),
            Err(ErrorCode::WithdrawalNotEligible.into())
        );
        // more than declared
        assert_eq!(
            vd.withdraw(401, &mut locker, 100 + COOLDOWN),
            Err(ErrorCode::WithdrawalNotEligible.into())
        );

        assert_eq!(vd.shares, 1_000);
        assert_eq!(locker.total_idle, 1_000);
    }

    #[test]
    fn test_withdraw_needs_idle_liquidity() {
        let (mut locker, mut vd) = setup(1_000);
        locker.set_cooldown_duration(0).unwrap();

        locker.total_idle = 100;
        locker.total_debt = 900;

        assert_eq!(
            vd.withdraw(101, &mut locker, 0),
            Err(ErrorCode::InsufficientLiquidity.into())
        );
        assert_eq!(vd.withdraw(100, &mut locker, 0).unwrap(), 100);
    }

    #[test]
    fn test_cancel_cooldown() {
        let (locker, mut vd) = setup(1_000);

        assert_eq!(
            vd.cancel_cooldown(&locker, 0),
            Err(ErrorCode::NoActiveCooldown.into())
        );

        vd.start_cooldown(400, &locker, 100).unwrap();
        vd.cancel_cooldown(&locker, 200).unwrap();

        let status = vd.cooldown_status();
        assert_eq!(status.shares, 0);
        assert_eq!(status.cooldown_end, 0);
        assert_eq!(status.window_end, 0);
        assert_eq!(
            vd.withdrawable_amount(&locker, true, 100 + COOLDOWN)
                .unwrap(),
            0
        );

        assert_eq!(
            vd.cancel_cooldown(&locker, 300),
            Err(ErrorCode::NoActiveCooldown.into())
        );
    }

    #[test]
    fn test_deposit_rejected_after_shutdown() {
        let (mut locker, mut vd) = setup(1_000);
        locker.is_shutdown = true;

        assert_eq!(
            vd.deposit(10, &mut locker, 0),
            Err(ErrorCode::LockerShutdown.into())
        );
        assert_eq!(vd.shares, 1_000);
    }

    #[test]
    fn test_withdrawal_window_must_exceed_one_day() {
        let mut locker = Locker::default();

        assert_eq!(
            locker.set_withdrawal_window(ONE_DAY),
            Err(ErrorCode::ConfigurationInvalid.into())
        );
        locker.set_withdrawal_window(ONE_DAY + 1).unwrap();
        assert_eq!(locker.withdrawal_window, ONE_DAY + 1);

        assert_eq!(
            locker.set_cooldown_duration(-1),
            Err(ErrorCode::ConfigurationInvalid.into())
        );
    }
}

#[cfg(test)]
mod transfer_guard {
    use crate::constants::ONE_DAY;
    use crate::error::ErrorCode;
    use crate::state::{validate_transfer, CooldownRecord};
    use crate::{Locker, LockerDepositor};
    use anchor_lang::prelude::Pubkey;

    fn locked(shares: u128) -> CooldownRecord {
        CooldownRecord {
            locked_shares: shares,
            cooldown_end: 10,
            window_end: 20,
        }
    }

    #[test]
    fn test_transfer_limited_to_unlocked_shares() {
        let from = Pubkey::new_unique();
        let to = Pubkey::new_unique();
        let record = locked(40);

        validate_transfer(&from, &to, 60, 100, Some(&record)).unwrap();
        assert_eq!(
            validate_transfer(&from, &to, 61, 100, Some(&record)),
            Err(ErrorCode::InsufficientBalance.into())
        );
    }

    #[test]
    fn test_transfer_without_record_uses_balance() {
        let from = Pubkey::new_unique();
        let to = Pubkey::new_unique();

        validate_transfer(&from, &to, 100, 100, None).unwrap();
        validate_transfer(&from, &to, 100, 100, Some(&CooldownRecord::default())).unwrap();
        assert_eq!(
            validate_transfer(&from, &to, 101, 100, None),
            Err(ErrorCode::InsufficientBalance.into())
        );
    }

    #[test]
    fn test_mint_and_burn_always_pass() {
        let holder = Pubkey::new_unique();
        let record = locked(100);

        validate_transfer(&Pubkey::default(), &holder, u128::MAX, 0, None).unwrap();
        validate_transfer(&holder, &Pubkey::default(), 100, 100, Some(&record)).unwrap();
    }

    #[test]
    fn test_transfer_shares_between_depositors() {
        let mut locker = Locker {
            pubkey: Pubkey::new_unique(),
            cooldown_duration: ONE_DAY,
            withdrawal_window: 2 * ONE_DAY,
            ..Locker::default()
        };
        let mut a = LockerDepositor::new(
            locker.pubkey,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            0,
        );
        let mut b = LockerDepositor::new(
            locker.pubkey,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            0,
        );

        a.deposit(100, &mut locker, 0).unwrap();
        a.start_cooldown(40, &locker, 0).unwrap();

        assert_eq!(
            a.transfer_shares(&mut b, 61, &locker, 1),
            Err(ErrorCode::InsufficientBalance.into())
        );
        assert_eq!(a.shares, 100);
        assert_eq!(b.shares, 0);

        a.transfer_shares(&mut b, 60, &locker, 1).unwrap();
        assert_eq!(a.shares, 40);
        assert_eq!(b.shares, 60);
        assert_eq!(a.cooldown.locked_shares, 40);
        assert_eq!(locker.total_shares, 100);

        // still locked after the window lapses
        assert_eq!(
            a.transfer_shares(&mut b, 1, &locker, 10 * ONE_DAY),
            Err(ErrorCode::InsufficientBalance.into())
        );

        a.cancel_cooldown(&locker, 10 * ONE_DAY).unwrap();
        a.transfer_shares(&mut b, 40, &locker, 10 * ONE_DAY).unwrap();
        assert_eq!(a.shares, 0);
        assert_eq!(b.shares, 100);
    }

    #[test]
    fn test_transfer_to_self_rejected() {
        let locker = Locker::default();
        let mut a = LockerDepositor::new(
            locker.pubkey,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            0,
        );
        a.shares = 10;
        let mut copy = a;

        assert_eq!(
            a.transfer_shares(&mut copy, 5, &locker, 0),
            Err(ErrorCode::InvalidInput.into())
        );
    }
}

#[cfg(test)]
mod fee_accrual {
    use std::cell::RefCell;

    use crate::constants::{ONE_DAY, SECONDS_PER_YEAR};
    use crate::error::ErrorCode;
    use crate::state::{FeeConfig, ReportFees, ReportResult, ShareConverter};
    use crate::{Locker, LockerDepositor, ProtocolFeeConfig, Strategy};
    use anchor_lang::prelude::Pubkey;

    const PRINCIPAL: u64 = 1_000_000;

    fn setup(fee_config: FeeConfig) -> (Locker, Strategy, LockerDepositor) {
        let recipient_authority = Pubkey::new_unique();
        let mut locker = Locker {
            pubkey: Pubkey::new_unique(),
            performance_fee_recipient: recipient_authority,
            fee_config,
            ..Locker::default()
        };
        let mut strategy = Strategy {
            locker: locker.pubkey,
            pubkey: Pubkey::new_unique(),
            ..Strategy::default()
        };

        let mut depositor = LockerDepositor::new(
            locker.pubkey,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            0,
        );
        depositor.deposit(PRINCIPAL, &mut locker, 0).unwrap();
        locker.lend_to_strategy(&mut strategy, PRINCIPAL).unwrap();

        let recipient = LockerDepositor::new(
            locker.pubkey,
            Pubkey::new_unique(),
            recipient_authority,
            0,
        );

        (locker, strategy, recipient)
    }

    fn perf_and_bonus() -> FeeConfig {
        FeeConfig {
            management_fee_bps: 0,
            performance_fee_bps: 1_000,
            locker_bonus_bps: 500,
        }
    }

    #[test]
    fn test_fees_without_management_fee() {
        let (mut locker, mut strategy, mut recipient) = setup(perf_and_bonus());
        let gain = 100_000;

        let result = locker
            .report(&mut strategy, &mut recipient, &mut None, gain, 0, ONE_DAY)
            .unwrap();

        // G * (P + L) / 10_000
        assert_eq!(
            result,
            ReportResult {
                fees: gain * 1_500 / 10_000,
                refunds: 0,
            }
        );
        assert_eq!(result.fees, 15_000);

        // engine held nothing, so the recipient's cut is pending. The bonus is not minted
        assert_eq!(locker.total_shares, 1_010_000);
        assert_eq!(locker.fee_engine_shares, 10_000);
        assert_eq!(locker.pending_fee_shares, 10_000);
        assert_eq!(recipient.shares, 0);

        assert_eq!(strategy.current_debt, 1_100_000);
        assert_eq!(strategy.last_report_ts, ONE_DAY);
        assert_eq!(strategy.total_gain, gain);
        assert_eq!(strategy.total_fees, 15_000);
        assert_eq!(locker.total_debt, 1_100_000);
        assert_eq!(locker.total_fees, 15_000);
    }

    #[test]
    fn test_locker_bonus_accrues_to_depositors() {
        let fee_config = FeeConfig {
            management_fee_bps: 0,
            performance_fee_bps: 0,
            locker_bonus_bps: 1_000,
        };
        let (mut locker, mut strategy, mut recipient) = setup(fee_config);

        let result = locker
            .report(&mut strategy, &mut recipient, &mut None, 100_000, 0, ONE_DAY)
            .unwrap();
        assert_eq!(result.fees, 10_000);

        // nothing owed to the recipient and nothing minted for the bonus
        assert_eq!(locker.total_shares, PRINCIPAL as u128);
        assert_eq!(locker.fee_engine_shares, 0);
        assert_eq!(locker.pending_fee_shares, 0);
        assert_eq!(recipient.shares, 0);

        assert_eq!(locker.total_assets().unwrap(), 1_100_000);
        assert_eq!(
            locker.convert_to_assets(PRINCIPAL as u128).unwrap(),
            locker.total_assets().unwrap()
        );
    }

    #[test]
    fn test_every_fee_share_has_an_owner() {
        let (mut locker, mut strategy, mut recipient) = setup(perf_and_bonus());

        let mut now = 0;
        for gain in [100_000, 40_000, 7_000] {
            now += ONE_DAY;
            locker
                .report(&mut strategy, &mut recipient, &mut None, gain, 0, now)
                .unwrap();

            assert_eq!(locker.fee_engine_shares, locker.pending_fee_shares);
            assert_eq!(
                locker.total_shares,
                PRINCIPAL as u128 + recipient.shares + locker.fee_engine_shares
            );
        }

        locker.withdraw_fees(&mut recipient, now).unwrap();
        assert_eq!(locker.fee_engine_shares, 0);
        assert_eq!(locker.total_shares, PRINCIPAL as u128 + recipient.shares);
    }

    #[test]
    fn test_duplicate_report_rejected() {
        let (mut locker, mut strategy, mut recipient) = setup(perf_and_bonus());

        locker
            .report(&mut strategy, &mut recipient, &mut None, 100_000, 0, ONE_DAY)
            .unwrap();
        let total_shares = locker.total_shares;

        assert_eq!(
            locker.report(&mut strategy, &mut recipient, &mut None, 100_000, 0, ONE_DAY),
            Err(ErrorCode::DuplicateReport.into())
        );
        assert_eq!(locker.total_shares, total_shares);
        assert_eq!(strategy.current_debt, 1_100_000);
    }

    #[test]
    fn test_gain_and_loss_together_rejected() {
        let (mut locker, mut strategy, mut recipient) = setup(perf_and_bonus());

        assert_eq!(
            locker.report(&mut strategy, &mut recipient, &mut None, 10, 10, ONE_DAY),
            Err(ErrorCode::InvalidInput.into())
        );
    }

    #[test]
    fn test_zero_gain_leaves_pending_untouched() {
        let (mut locker, mut strategy, mut recipient) = setup(perf_and_bonus());

        locker
            .report(&mut strategy, &mut recipient, &mut None, 100_000, 0, ONE_DAY)
            .unwrap();
        assert_eq!(locker.pending_fee_shares, 10_000);
        let total_shares = locker.total_shares;

        let result = locker
            .report(&mut strategy, &mut recipient, &mut None, 0, 0, 2 * ONE_DAY)
            .unwrap();
        assert_eq!(result, ReportResult::default());
        assert_eq!(locker.pending_fee_shares, 10_000);

        let result = locker
            .report(&mut strategy, &mut recipient, &mut None, 0, 50_000, 3 * ONE_DAY)
            .unwrap();
        assert_eq!(result, ReportResult::default());
        assert_eq!(locker.pending_fee_shares, 10_000);
        assert_eq!(locker.total_shares, total_shares);
        assert_eq!(strategy.current_debt, 1_050_000);
        assert_eq!(strategy.total_loss, 50_000);
        assert_eq!(locker.total_debt, 1_050_000);
    }

    #[test]
    fn test_loss_above_debt_rejected() {
        let (mut locker, mut strategy, mut recipient) = setup(perf_and_bonus());

        assert_eq!(
            locker.report(
                &mut strategy,
                &mut recipient,
                &mut None,
                0,
                PRINCIPAL + 1,
                ONE_DAY
            ),
            Err(ErrorCode::InvalidInput.into())
        );
    }

    #[test]
    fn test_fee_shares_paid_from_engine_balance() {
        let (mut locker, mut strategy, mut recipient) = setup(perf_and_bonus());

        locker
            .report(&mut strategy, &mut recipient, &mut None, 100_000, 0, ONE_DAY)
            .unwrap();
        assert_eq!(locker.pending_fee_shares, 10_000);
        assert_eq!(locker.fee_engine_shares, 10_000);

        // 1_500 assets at 1_010_000 shares / 1_100_000 assets
        let result = locker
            .report(&mut strategy, &mut recipient, &mut None, 10_000, 0, 2 * ONE_DAY)
            .unwrap();
        assert_eq!(result.fees, 1_500);

        // converted 1_377 shares, recipient cut 1_377 * 1_000 / 1_500 = 918
        assert_eq!(recipient.shares, 918);
        assert_eq!(locker.pending_fee_shares, 10_000);
        assert_eq!(locker.fee_engine_shares, 10_000);
        assert_eq!(locker.total_shares, 1_010_000 + 918);

        assert_eq!(locker.withdraw_fees(&mut recipient, 2 * ONE_DAY).unwrap(), 10_000);
        assert_eq!(recipient.shares, 10_918);
        assert_eq!(locker.pending_fee_shares, 0);
        assert_eq!(locker.fee_engine_shares, 0);
    }

    #[test]
    fn test_withdraw_fees_requires_pending() {
        let (mut locker, _, mut recipient) = setup(perf_and_bonus());

        assert_eq!(
            locker.withdraw_fees(&mut recipient, 0),
            Err(ErrorCode::InvalidInput.into())
        );
    }

    #[test]
    fn test_management_fee_accrues_over_elapsed_time() {
        let fee_config = FeeConfig {
            management_fee_bps: 100,
            performance_fee_bps: 0,
            locker_bonus_bps: 0,
        };
        let (mut locker, mut strategy, mut recipient) = setup(fee_config);

        let result = locker
            .report(
                &mut strategy,
                &mut recipient,
                &mut None,
                50_000,
                0,
                SECONDS_PER_YEAR as i64,
            )
            .unwrap();

        // 1% of 1_000_000 over a year
        assert_eq!(result.fees, 10_000);
        assert_eq!(locker.pending_fee_shares, 10_000);
        assert_eq!(locker.fee_engine_shares, 10_000);
    }

    #[test]
    fn test_fees_clamped_to_gain() {
        let fee_config = FeeConfig {
            management_fee_bps: 200,
            performance_fee_bps: 1_000,
            locker_bonus_bps: 500,
        };

        let fees = fee_config
            .assess(1_000_000, SECONDS_PER_YEAR as i64, 1_000_000_000)
            .unwrap();

        assert_eq!(fees.performance_fee, 100_000);
        assert_eq!(fees.locker_bonus, 50_000);
        assert_eq!(fees.management_fee, 850_000);
        assert_eq!(fees.total_fees, 1_000_000);
    }

    #[test]
    fn test_zero_gain_assesses_nothing() {
        let fee_config = FeeConfig {
            management_fee_bps: 200,
            performance_fee_bps: 1_000,
            locker_bonus_bps: 500,
        };

        assert_eq!(
            fee_config
                .assess(0, SECONDS_PER_YEAR as i64, 1_000_000_000)
                .unwrap(),
            ReportFees::default()
        );
    }

    #[test]
    fn test_fee_shares_multiply_before_divide() {
        let locker = Locker {
            total_shares: 1_000,
            total_idle: 1_000,
            ..Locker::default()
        };
        let fees = ReportFees {
            management_fee: 0,
            performance_fee: 2,
            locker_bonus: 1,
            total_fees: 3,
        };

        let shares = locker.calculate_fee_shares(&fees, 0).unwrap();

        assert_eq!(shares.converted, 3);
        // 3 * 2 / 3, not 3 * (2 / 3)
        assert_eq!(shares.recipient, 2);
        assert_eq!(shares.bonus, 1);
        assert_eq!(shares.minted().unwrap(), 2);
    }

    #[test]
    fn test_protocol_cut_taken_before_engine() {
        let (mut locker, mut strategy, mut recipient) = setup(perf_and_bonus());
        locker.protocol_fee_enabled = true;

        let config = RefCell::new(ProtocolFeeConfig {
            protocol: Pubkey::new_unique(),
            locker: locker.pubkey,
            protocol_fee_bps: 2_000,
            ..ProtocolFeeConfig::default()
        });

        {
            let mut config_ref = Some(config.borrow_mut());
            let result = locker
                .report(
                    &mut strategy,
                    &mut recipient,
                    &mut config_ref,
                    100_000,
                    0,
                    ONE_DAY,
                )
                .unwrap();
            assert_eq!(result.fees, 15_000);
        }

        // 3_000 protocol + 8_000 recipient, the 4_000 bonus shares are not minted
        assert_eq!(locker.total_shares, 1_011_000);
        assert_eq!(locker.fee_engine_shares, 8_000);
        assert_eq!(locker.pending_fee_shares, 8_000);
        assert_eq!(config.borrow().protocol_fee_shares, 3_000);
        assert_eq!(config.borrow().total_protocol_fee_shares, 3_000);

        let mut protocol_depositor = LockerDepositor::new(
            locker.pubkey,
            Pubkey::new_unique(),
            config.borrow().protocol,
            0,
        );
        let claimed = config
            .borrow_mut()
            .claim(&mut protocol_depositor, ONE_DAY)
            .unwrap();
        assert_eq!(claimed, 3_000);
        assert_eq!(protocol_depositor.shares, 3_000);
        assert_eq!(config.borrow().protocol_fee_shares, 0);
        assert_eq!(config.borrow().total_protocol_fee_shares, 3_000);
    }

    #[test]
    fn test_protocol_fee_config_presence_must_match_locker() {
        let mut locker = Locker::default();
        locker.validate_protocol_fee_config(&None).unwrap();

        locker.protocol_fee_enabled = true;
        assert_eq!(
            locker.validate_protocol_fee_config(&None),
            Err(ErrorCode::ProtocolFeeConfigMissing.into())
        );
    }

    #[test]
    fn test_set_fees_validates_caps() {
        let mut locker = Locker::default();

        assert_eq!(
            locker.set_fees(
                FeeConfig {
                    management_fee_bps: 201,
                    performance_fee_bps: 0,
                    locker_bonus_bps: 0,
                },
                0
            ),
            Err(ErrorCode::ConfigurationInvalid.into())
        );
        assert_eq!(
            locker.set_fees(
                FeeConfig {
                    management_fee_bps: 0,
                    performance_fee_bps: 9_000,
                    locker_bonus_bps: 1_001,
                },
                0
            ),
            Err(ErrorCode::ConfigurationInvalid.into())
        );
        // the sum is taken in u32, so it cannot wrap back under the cap
        assert_eq!(
            locker.set_fees(
                FeeConfig {
                    management_fee_bps: 0,
                    performance_fee_bps: u16::MAX,
                    locker_bonus_bps: u16::MAX,
                },
                0
            ),
            Err(ErrorCode::ConfigurationInvalid.into())
        );

        locker
            .set_fees(
                FeeConfig {
                    management_fee_bps: 200,
                    performance_fee_bps: 9_000,
                    locker_bonus_bps: 1_000,
                },
                0,
            )
            .unwrap();
        locker.set_fees(perf_and_bonus(), 0).unwrap();
        assert_eq!(locker.fee_config, perf_and_bonus());
    }

    #[test]
    fn test_strategy_borrow_and_repay() {
        let mut locker = Locker {
            total_idle: 1_000,
            ..Locker::default()
        };
        let mut strategy = Strategy::default();

        locker.lend_to_strategy(&mut strategy, 500).unwrap();
        assert_eq!(locker.total_idle, 500);
        assert_eq!(locker.total_debt, 500);
        assert_eq!(strategy.current_debt, 500);

        assert_eq!(
            locker.lend_to_strategy(&mut strategy, 501),
            Err(ErrorCode::InsufficientLiquidity.into())
        );
        assert_eq!(
            locker.repay_from_strategy(&mut strategy, 501),
            Err(ErrorCode::InvalidInput.into())
        );

        locker.repay_from_strategy(&mut strategy, 200).unwrap();
        assert_eq!(locker.total_idle, 700);
        assert_eq!(locker.total_debt, 300);
        assert_eq!(strategy.current_debt, 300);

        locker.is_shutdown = true;
        assert_eq!(
            locker.lend_to_strategy(&mut strategy, 1),
            Err(ErrorCode::LockerShutdown.into())
        );
    }
}

#[cfg(test)]
mod health_check {
    use crate::constants::ONE_DAY;
    use crate::error::ErrorCode;
    use crate::state::HealthCheck;
    use crate::{Locker, LockerDepositor, Strategy};
    use anchor_lang::prelude::Pubkey;

    fn enabled() -> HealthCheck {
        HealthCheck {
            profit_limit_bps: 1_000,
            loss_limit_bps: 500,
            enabled: true,
            armed: true,
        }
    }

    #[test]
    fn test_disabled_never_checks() {
        let mut check = HealthCheck {
            enabled: false,
            ..enabled()
        };
        check.armed = false;

        check.check(u64::MAX, 0, 1).unwrap();
        check.check(0, 1_000, 1).unwrap();
        assert!(!check.armed);
    }

    #[test]
    fn test_unarmed_check_passes_once() {
        let mut check = enabled();
        check.disarm();

        check.check(500, 0, 1_000).unwrap();
        assert!(check.armed);

        assert_eq!(
            check.check(500, 0, 1_000),
            Err(ErrorCode::HealthCheckFailed.into())
        );
    }

    #[test]
    fn test_armed_limits() {
        let mut check = enabled();

        check.check(100, 0, 1_000).unwrap();
        assert_eq!(
            check.check(101, 0, 1_000),
            Err(ErrorCode::HealthCheckFailed.into())
        );

        check.check(0, 50, 1_000).unwrap();
        assert_eq!(
            check.check(0, 51, 1_000),
            Err(ErrorCode::HealthCheckFailed.into())
        );

        check.check(0, 0, 1_000).unwrap();
    }

    #[test]
    fn test_loss_limit_capped() {
        let mut check = enabled();

        assert_eq!(
            check.set_limits(20_000, 10_001),
            Err(ErrorCode::ConfigurationInvalid.into())
        );
        check.set_limits(20_000, 10_000).unwrap();
        assert_eq!(check.profit_limit_bps, 20_000);
        assert_eq!(check.loss_limit_bps, 10_000);
    }

    #[test]
    fn test_failed_health_check_aborts_report() {
        let mut locker = Locker {
            pubkey: Pubkey::new_unique(),
            total_shares: 1_000,
            total_debt: 1_000,
            health_check: enabled(),
            ..Locker::default()
        };
        let mut strategy = Strategy {
            current_debt: 1_000,
            ..Strategy::default()
        };
        let mut recipient = LockerDepositor::default();

        assert_eq!(
            locker.report(&mut strategy, &mut recipient, &mut None, 101, 0, ONE_DAY),
            Err(ErrorCode::HealthCheckFailed.into())
        );
        assert_eq!(strategy.last_report_ts, 0);
        assert_eq!(strategy.current_debt, 1_000);

        locker.health_check.disarm();
        locker
            .report(&mut strategy, &mut recipient, &mut None, 101, 0, ONE_DAY)
            .unwrap();
        assert_eq!(strategy.current_debt, 1_101);
        assert!(locker.health_check.armed);
    }
}

#[cfg(test)]
mod split_table {
    use crate::error::ErrorCode;
    use crate::{assert_eq_within, SplitTable};
    use anchor_lang::prelude::Pubkey;

    fn receivers_of(table: &SplitTable) -> Vec<(Pubkey, u16)> {
        table
            .receivers()
            .iter()
            .map(|entry| (entry.receiver, entry.split_bps))
            .collect()
    }

    #[test]
    fn test_distribute_keeps_reserve() {
        let mut table = SplitTable::default();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        table.update_split(a, 6_000).unwrap();
        table.update_split(b, 4_000).unwrap();
        assert_eq!(table.total_split_bps, 10_000);

        let payouts = table.calculate_payouts(1_001).unwrap();
        assert_eq!(payouts, vec![600, 400]);

        let paid: u64 = payouts.iter().sum();
        table.record_distribution(paid, 7).unwrap();
        assert_eq!(table.total_distributed, 1_000);
        assert_eq!(table.last_distribution_ts, 7);
    }

    #[test]
    fn test_payouts_floor_per_receiver() {
        let mut table = SplitTable::default();
        for _ in 0..3 {
            table.update_split(Pubkey::new_unique(), 3_333).unwrap();
        }

        let payouts = table.calculate_payouts(1_000).unwrap();
        assert_eq!(payouts, vec![332, 332, 332]);

        let paid: u64 = payouts.iter().sum();
        assert_eq_within!(paid, 999, 3);
        assert!(paid <= 999);
    }

    #[test]
    fn test_under_allocation_stays_in_treasury() {
        let mut table = SplitTable::default();
        table.update_split(Pubkey::new_unique(), 5_000).unwrap();

        assert_eq!(table.calculate_payouts(101).unwrap(), vec![50]);
        assert_eq!(table.calculate_payouts(1).unwrap(), vec![0]);
    }

    #[test]
    fn test_over_allocation_rejected_without_change() {
        let mut table = SplitTable::default();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let c = Pubkey::new_unique();

        table.update_split(a, 6_000).unwrap();
        table.update_split(b, 4_000).unwrap();
        let before = receivers_of(&table);

        assert_eq!(
            table.update_split(c, 1),
            Err(ErrorCode::ConfigurationInvalid.into())
        );
        assert_eq!(
            table.update_split(a, 6_001),
            Err(ErrorCode::ConfigurationInvalid.into())
        );
        assert_eq!(
            table.update_split(c, u16::MAX),
            Err(ErrorCode::ConfigurationInvalid.into())
        );
        assert_eq!(receivers_of(&table), before);
        assert_eq!(table.receiver_count, 2);
        assert_eq!(table.total_split_bps, 10_000);

        // lowering one split frees room for another
        assert_eq!(table.update_split(a, 5_000).unwrap(), 6_000);
        table.update_split(c, 1_000).unwrap();
        assert_eq!(table.total_split_bps, 10_000);
        assert_eq!(table.split_bps_of(&c), 1_000);
    }

    #[test]
    fn test_zero_split_keeps_receiver() {
        let mut table = SplitTable::default();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        table.update_split(a, 2_000).unwrap();
        table.update_split(b, 3_000).unwrap();
        table.update_split(a, 0).unwrap();

        assert_eq!(receivers_of(&table), vec![(a, 0), (b, 3_000)]);
        assert_eq!(table.total_split_bps, 3_000);
        assert_eq!(table.calculate_payouts(1_001).unwrap(), vec![0, 300]);
    }

    #[test]
    fn test_remove_receiver_preserves_order() {
        let mut table = SplitTable::default();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let c = Pubkey::new_unique();

        table.update_split(a, 1_000).unwrap();
        table.update_split(b, 2_000).unwrap();
        table.update_split(c, 3_000).unwrap();

        assert_eq!(table.remove_receiver(&b).unwrap(), 2_000);
        assert_eq!(receivers_of(&table), vec![(a, 1_000), (c, 3_000)]);
        assert_eq!(table.total_split_bps, 4_000);
        assert_eq!(table.receiver_count, 2);
        assert_eq!(table.receivers[2].receiver, Pubkey::default());

        assert_eq!(
            table.remove_receiver(&b),
            Err(ErrorCode::ReceiverNotFound.into())
        );
    }

    #[test]
    fn test_capacity_and_null_receiver() {
        let mut table = SplitTable::default();

        assert_eq!(
            table.update_split(Pubkey::default(), 100),
            Err(ErrorCode::InvalidInput.into())
        );

        for _ in 0..16 {
            table.update_split(Pubkey::new_unique(), 1).unwrap();
        }
        assert_eq!(
            table.update_split(Pubkey::new_unique(), 1),
            Err(ErrorCode::TooManyReceivers.into())
        );
        assert_eq!(table.receiver_count, 16);
        assert_eq!(table.total_split_bps, 16);
    }

    #[test]
    fn test_distribute_requires_allocation_and_balance() {
        let mut table = SplitTable::default();

        assert_eq!(
            table.calculate_payouts(1_000),
            Err(ErrorCode::ConfigurationInvalid.into())
        );

        let a = Pubkey::new_unique();
        table.update_split(a, 0).unwrap();
        assert_eq!(
            table.calculate_payouts(1_000),
            Err(ErrorCode::ConfigurationInvalid.into())
        );

        table.update_split(a, 10_000).unwrap();
        assert_eq!(
            table.calculate_payouts(0),
            Err(ErrorCode::NothingToDistribute.into())
        );
    }
}
