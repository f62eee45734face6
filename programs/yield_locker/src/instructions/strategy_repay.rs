use crate::constraints::{is_authority_for_strategy, is_locker_for_strategy};
use crate::{Locker, Strategy};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

pub fn strategy_repay<'info>(
    ctx: Context<'_, '_, '_, 'info, StrategyRepay<'info>>,
    amount: u64,
) -> Result<()> {
    let mut locker = ctx.accounts.locker.load_mut()?;
    let mut strategy = ctx.accounts.strategy.load_mut()?;

    locker.repay_from_strategy(&mut strategy, amount)?;
    msg!(
        "strategy {} repaid {}, current debt {}",
        strategy.pubkey,
        amount,
        strategy.current_debt
    );

    drop(locker);
    drop(strategy);

    let cpi_program = ctx.accounts.token_program.to_account_info().clone();
    let cpi_accounts = Transfer {
        from: ctx.accounts.strategy_token_account.to_account_info().clone(),
        to: ctx.accounts.locker_token_account.to_account_info().clone(),
        authority: ctx.accounts.strategy_authority.to_account_info().clone(),
    };
    let cpi_context = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_context, amount)?;

    Ok(())
}

#[derive(Accounts)]
pub struct StrategyRepay<'info> {
    #[account(mut)]
    pub locker: AccountLoader<'info, Locker>,
    #[account(
        mut,
        constraint = is_locker_for_strategy(&strategy, &locker)?,
        constraint = is_authority_for_strategy(&strategy, &strategy_authority)?,
    )]
    pub strategy: AccountLoader<'info, Strategy>,
    pub strategy_authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"locker_token_account".as_ref(), locker.key().as_ref()],
        bump,
    )]
    pub locker_token_account: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        token::authority = strategy_authority,
        token::mint = locker_token_account.mint
    )]
    pub strategy_token_account: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
}
