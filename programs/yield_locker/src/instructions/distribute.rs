use crate::constraints::is_distributor_for_split_table;
use crate::error::ErrorCode;
use crate::events::DistributionRecord;
use crate::token_cpi::transfer_with_signer_seeds;
use crate::{declare_distributor_seeds, validate, Distributor, SplitTable};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount};
use drift::math::safe_math::SafeMath;

pub fn distribute<'c: 'info, 'info>(
    ctx: Context<'_, '_, 'c, 'info, Distribute<'info>>,
) -> Result<()> {
    let clock = &Clock::get()?;

    declare_distributor_seeds!(ctx.accounts.distributor, seeds);

    distribute_split_table(
        &ctx.accounts.split_table,
        &ctx.accounts.token_account.to_account_info(),
        ctx.remaining_accounts,
        &ctx.accounts.distributor.to_account_info(),
        &ctx.accounts.token_program.to_account_info(),
        seeds,
        clock.unix_timestamp,
    )?;

    Ok(())
}

/// Pays every receiver of `split_table` its share of the treasury balance.
/// `receiver_accounts` are the receivers' token accounts in table order.
pub(crate) fn distribute_split_table<'info>(
    split_table: &AccountLoader<'info, SplitTable>,
    treasury: &AccountInfo<'info>,
    receiver_accounts: &[AccountInfo<'info>],
    distributor: &AccountInfo<'info>,
    token_program: &AccountInfo<'info>,
    signers: &[&[&[u8]]],
    now: i64,
) -> Result<u64> {
    let mut table = split_table.load_mut()?;

    validate!(
        treasury.key() == table.token_account,
        ErrorCode::InvalidInput,
        "treasury {} is not the split table's token account",
        treasury.key()
    )?;

    let balance_before = load_token_account(treasury)?.amount;
    let payouts = table.calculate_payouts(balance_before)?;

    validate!(
        receiver_accounts.len() == payouts.len(),
        ErrorCode::InvalidInput,
        "expected {} receiver token accounts, got {}",
        payouts.len(),
        receiver_accounts.len()
    )?;

    let mut total_paid: u64 = 0;
    for ((entry, payout), account) in table
        .receivers()
        .iter()
        .zip(payouts)
        .zip(receiver_accounts)
    {
        let token_account = load_token_account(account)?;
        validate!(
            token_account.mint == table.mint && token_account.owner == entry.receiver,
            ErrorCode::InvalidInput,
            "token account {} does not belong to receiver {}",
            account.key(),
            entry.receiver
        )?;

        if payout == 0 {
            msg!("skipping zero payout to {}", entry.receiver);
            continue;
        }

        transfer_with_signer_seeds(
            payout,
            treasury.clone(),
            account.clone(),
            distributor.clone(),
            token_program.clone(),
            signers,
        )?;

        total_paid = total_paid.safe_add(payout)?;
    }

    table.record_distribution(total_paid, now)?;

    emit!(DistributionRecord {
        ts: now,
        split_table: table.pubkey,
        mint: table.mint,
        balance_before,
        total_paid,
        receivers: table.receiver_count,
    });

    Ok(total_paid)
}

fn load_token_account(account: &AccountInfo) -> Result<TokenAccount> {
    validate!(
        account.owner == &token::ID,
        ErrorCode::InvalidInput,
        "{} is not a token account",
        account.key()
    )?;

    let data = account.try_borrow_data()?;
    TokenAccount::try_deserialize(&mut &data[..])
}

#[derive(Accounts)]
pub struct Distribute<'info> {
    pub distributor: AccountLoader<'info, Distributor>,
    #[account(
        mut,
        constraint = is_distributor_for_split_table(&split_table, &distributor)?,
    )]
    pub split_table: AccountLoader<'info, SplitTable>,
    #[account(
        mut,
        constraint = token_account.key().eq(&split_table.load()?.token_account),
    )]
    pub token_account: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
}
