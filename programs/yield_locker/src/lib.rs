use anchor_lang::prelude::*;
use instructions::*;
use state::*;

mod constants;
mod error;
mod instructions;
pub mod macros;
mod math;
mod state;
mod tests;
mod token_cpi;

declare_id!("CeC69auaekQnqttjxQi5emNWb6BoE24Zte18xNUnWnXm");

#[program]
pub mod yield_locker {
    use super::*;

    pub fn initialize_locker<'info>(
        ctx: Context<'_, '_, '_, 'info, InitializeLocker<'info>>,
        params: LockerParams,
    ) -> Result<()> {
        instructions::initialize_locker(ctx, params)
    }

    pub fn update_locker<'info>(
        ctx: Context<'_, '_, '_, 'info, UpdateLocker<'info>>,
        params: UpdateLockerParams,
    ) -> Result<()> {
        instructions::update_locker(ctx, params)
    }

    pub fn set_fees<'info>(
        ctx: Context<'_, '_, '_, 'info, SetFees<'info>>,
        params: SetFeesParams,
    ) -> Result<()> {
        instructions::set_fees(ctx, params)
    }

    pub fn initialize_protocol_fee_config<'info>(
        ctx: Context<'_, '_, '_, 'info, InitializeProtocolFeeConfig<'info>>,
        params: ProtocolFeeParams,
    ) -> Result<()> {
        instructions::initialize_protocol_fee_config(ctx, params)
    }

    pub fn protocol_claim_fee_shares<'info>(
        ctx: Context<'_, '_, '_, 'info, ProtocolClaimFeeShares<'info>>,
    ) -> Result<()> {
        instructions::protocol_claim_fee_shares(ctx)
    }

    pub fn initialize_locker_depositor(ctx: Context<InitializeLockerDepositor>) -> Result<()> {
        instructions::initialize_locker_depositor(ctx)
    }

    pub fn deposit<'info>(
        ctx: Context<'_, '_, '_, 'info, Deposit<'info>>,
        amount: u64,
    ) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    pub fn start_cooldown<'info>(
        ctx: Context<'_, '_, '_, 'info, StartCooldown<'info>>,
        shares: u128,
    ) -> Result<()> {
        instructions::start_cooldown(ctx, shares)
    }

    pub fn cancel_cooldown<'info>(
        ctx: Context<'_, '_, '_, 'info, CancelCooldown<'info>>,
    ) -> Result<()> {
        instructions::cancel_cooldown(ctx)
    }

    pub fn withdraw<'info>(
        ctx: Context<'_, '_, '_, 'info, Withdraw<'info>>,
        shares: u128,
    ) -> Result<()> {
        instructions::withdraw(ctx, shares)
    }

    pub fn transfer_shares<'info>(
        ctx: Context<'_, '_, '_, 'info, TransferShares<'info>>,
        shares: u128,
    ) -> Result<()> {
        instructions::transfer_shares(ctx, shares)
    }

    pub fn get_cooldown_status<'info>(
        ctx: Context<'_, '_, '_, 'info, ViewLockerDepositor<'info>>,
    ) -> Result<CooldownStatus> {
        instructions::get_cooldown_status(ctx)
    }

    pub fn withdrawable_amount<'info>(
        ctx: Context<'_, '_, '_, 'info, ViewLockerDepositor<'info>>,
    ) -> Result<u64> {
        instructions::withdrawable_amount(ctx)
    }

    pub fn initialize_strategy<'info>(
        ctx: Context<'_, '_, '_, 'info, InitializeStrategy<'info>>,
    ) -> Result<()> {
        instructions::initialize_strategy(ctx)
    }

    pub fn strategy_borrow<'info>(
        ctx: Context<'_, '_, '_, 'info, StrategyBorrow<'info>>,
        amount: u64,
    ) -> Result<()> {
        instructions::strategy_borrow(ctx, amount)
    }

    pub fn strategy_repay<'info>(
        ctx: Context<'_, '_, '_, 'info, StrategyRepay<'info>>,
        amount: u64,
    ) -> Result<()> {
        instructions::strategy_repay(ctx, amount)
    }

    pub fn report<'c: 'info, 'info>(
        ctx: Context<'_, '_, 'c, 'info, Report<'info>>,
        gain: u64,
        loss: u64,
    ) -> Result<ReportResult> {
        instructions::report(ctx, gain, loss)
    }

    pub fn withdraw_fees<'info>(ctx: Context<'_, '_, '_, 'info, WithdrawFees<'info>>) -> Result<()> {
        instructions::withdraw_fees(ctx)
    }

    pub fn initialize_distributor<'info>(
        ctx: Context<'_, '_, '_, 'info, InitializeDistributor<'info>>,
        name: [u8; 32],
    ) -> Result<()> {
        instructions::initialize_distributor(ctx, name)
    }

    pub fn initialize_split_table<'info>(
        ctx: Context<'_, '_, '_, 'info, InitializeSplitTable<'info>>,
    ) -> Result<()> {
        instructions::initialize_split_table(ctx)
    }

    pub fn update_split<'info>(
        ctx: Context<'_, '_, '_, 'info, UpdateSplit<'info>>,
        receiver: Pubkey,
        split_bps: u16,
    ) -> Result<()> {
        instructions::update_split(ctx, receiver, split_bps)
    }

    pub fn remove_receiver<'info>(
        ctx: Context<'_, '_, '_, 'info, UpdateSplit<'info>>,
        receiver: Pubkey,
    ) -> Result<()> {
        instructions::remove_receiver(ctx, receiver)
    }

    pub fn distribute<'c: 'info, 'info>(
        ctx: Context<'_, '_, 'c, 'info, Distribute<'info>>,
    ) -> Result<()> {
        instructions::distribute(ctx)
    }

    pub fn distribute_many<'c: 'info, 'info>(
        ctx: Context<'_, '_, 'c, 'info, DistributeMany<'info>>,
    ) -> Result<()> {
        instructions::distribute_many(ctx)
    }
}
