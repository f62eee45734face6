use anchor_lang::prelude::*;

#[event]
#[derive(Default)]
pub struct LockerDepositorRecord {
    pub ts: i64,
    pub locker: Pubkey,
    pub depositor_authority: Pubkey,
    pub action: LockerDepositorAction,
    pub amount: u64,
    pub shares: u128,

    pub depositor_shares_before: u128,
    pub depositor_shares_after: u128,
    pub total_shares_before: u128,
    pub total_shares_after: u128,
    pub cooldown_end: i64,
    pub window_end: i64,
    pub locked_shares: u128,
}

#[derive(Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq, Debug)]
pub enum LockerDepositorAction {
    Deposit,
    StartCooldown,
    CancelCooldown,
    Withdraw,
}

impl Default for LockerDepositorAction {
    fn default() -> Self {
        LockerDepositorAction::Deposit
    }
}

#[event]
#[derive(Default)]
pub struct ShareTransferRecord {
    pub ts: i64,
    pub locker: Pubkey,
    pub from_depositor: Pubkey,
    pub to_depositor: Pubkey,
    pub shares: u128,
    pub from_depositor_shares_before: u128,
    pub from_depositor_shares_after: u128,
    pub to_depositor_shares_before: u128,
    pub to_depositor_shares_after: u128,
}

#[event]
#[derive(Default)]
pub struct ReportRecord {
    pub ts: i64,
    pub locker: Pubkey,
    pub strategy: Pubkey,
    pub gain: u64,
    pub loss: u64,
    pub elapsed: i64,
    pub current_debt_before: u64,
    pub current_debt_after: u64,
    pub management_fee: u64,
    pub performance_fee: u64,
    pub locker_bonus: u64,
    pub total_fees: u64,
    pub total_shares_after: u128,
}

#[event]
#[derive(Default)]
pub struct FeeSharesRecord {
    pub ts: i64,
    pub locker: Pubkey,
    pub action: FeeSharesAction,
    pub recipient: Pubkey,
    pub fee_shares: u128,
    pub protocol_fee_shares: u128,
    pub fee_engine_shares_after: u128,
    pub pending_fee_shares_after: u128,
}

#[derive(Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq, Debug)]
pub enum FeeSharesAction {
    /// fee shares moved to the recipient during a report
    Paid,
    /// engine could not cover the fee shares, added to pending
    Accrued,
    /// pending fee shares released by withdraw_fees
    Withdrawn,
    /// protocol claimed its accrued shares
    ProtocolClaimed,
}

impl Default for FeeSharesAction {
    fn default() -> Self {
        FeeSharesAction::Paid
    }
}

#[event]
#[derive(Default)]
pub struct FeeConfigRecord {
    pub ts: i64,
    pub locker: Pubkey,
    pub old_management_fee_bps: u16,
    pub old_performance_fee_bps: u16,
    pub old_locker_bonus_bps: u16,
    pub new_management_fee_bps: u16,
    pub new_performance_fee_bps: u16,
    pub new_locker_bonus_bps: u16,
}

#[event]
#[derive(Default)]
pub struct SplitUpdateRecord {
    pub ts: i64,
    pub split_table: Pubkey,
    pub mint: Pubkey,
    pub receiver: Pubkey,
    pub old_split_bps: u16,
    pub new_split_bps: u16,
    pub total_split_bps: u16,
    pub removed: bool,
}

#[event]
#[derive(Default)]
pub struct DistributionRecord {
    pub ts: i64,
    pub split_table: Pubkey,
    pub mint: Pubkey,
    pub balance_before: u64,
    pub total_paid: u64,
    pub receivers: u8,
}
