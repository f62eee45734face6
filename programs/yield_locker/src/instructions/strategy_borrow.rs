use crate::constraints::{is_locker_for_strategy, is_management_for_locker};
use crate::token_cpi::{transfer_with_signer_seeds, TokenTransferCPI};
use crate::{declare_locker_seeds, Locker, Strategy};
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

pub fn strategy_borrow<'info>(
    ctx: Context<'_, '_, '_, 'info, StrategyBorrow<'info>>,
    amount: u64,
) -> Result<()> {
    let mut locker = ctx.accounts.locker.load_mut()?;
    let mut strategy = ctx.accounts.strategy.load_mut()?;

    locker.lend_to_strategy(&mut strategy, amount)?;
    msg!(
        "strategy {} borrowed {}, current debt {}",
        strategy.pubkey,
        amount,
        strategy.current_debt
    );

    drop(locker);
    drop(strategy);

    ctx.token_transfer(amount)?;

    Ok(())
}

#[derive(Accounts)]
pub struct StrategyBorrow<'info> {
    #[account(
        mut,
        constraint = is_management_for_locker(&locker, &management)?,
    )]
    pub locker: AccountLoader<'info, Locker>,
    #[account(
        mut,
        constraint = is_locker_for_strategy(&strategy, &locker)?,
    )]
    pub strategy: AccountLoader<'info, Strategy>,
    pub management: Signer<'info>,
    #[account(
        mut,
        seeds = [b"locker_token_account".as_ref(), locker.key().as_ref()],
        bump,
    )]
    pub locker_token_account: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = strategy_token_account.owner.eq(&strategy.load()?.authority),
        token::mint = locker_token_account.mint
    )]
    pub strategy_token_account: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
}

impl<'info> TokenTransferCPI for Context<'_, '_, '_, 'info, StrategyBorrow<'info>> {
    fn token_transfer(&self, amount: u64) -> Result<()> {
        declare_locker_seeds!(self.accounts.locker, seeds);

        transfer_with_signer_seeds(
            amount,
            self.accounts.locker_token_account.to_account_info().clone(),
            self.accounts.strategy_token_account.to_account_info().clone(),
            self.accounts.locker.to_account_info().clone(),
            self.accounts.token_program.to_account_info().clone(),
            seeds,
        )
    }
}
