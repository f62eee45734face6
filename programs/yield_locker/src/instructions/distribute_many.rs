use crate::error::ErrorCode;
use crate::instructions::distribute_split_table;
use crate::{declare_distributor_seeds, validate, Distributor, SplitTable};
use anchor_lang::prelude::*;
use anchor_spl::token::Token;

/// Remaining accounts are consumed in groups of
/// `[split_table, treasury, receiver_token_account * receiver_count]`.
pub fn distribute_many<'c: 'info, 'info>(
    ctx: Context<'_, '_, 'c, 'info, DistributeMany<'info>>,
) -> Result<()> {
    let clock = &Clock::get()?;

    validate!(
        !ctx.remaining_accounts.is_empty(),
        ErrorCode::InvalidInput,
        "no split tables passed"
    )?;

    declare_distributor_seeds!(ctx.accounts.distributor, seeds);

    let distributor_key = ctx.accounts.distributor.key();
    let distributor_info = ctx.accounts.distributor.to_account_info();
    let token_program = ctx.accounts.token_program.to_account_info();

    let mut remaining: &'c [AccountInfo<'info>] = ctx.remaining_accounts;
    let mut tokens = 0_u32;

    while !remaining.is_empty() {
        validate!(
            remaining.len() >= 2,
            ErrorCode::InvalidInput,
            "split table {} passed without a treasury",
            remaining[0].key()
        )?;

        let split_table = AccountLoader::<'info, SplitTable>::try_from(&remaining[0])?;
        let receiver_count = {
            let table = split_table.load()?;
            validate!(
                table.distributor == distributor_key,
                ErrorCode::InvalidInput,
                "split table {} belongs to another distributor",
                table.pubkey
            )?;
            table.receiver_count as usize
        };

        let group_len = 2 + receiver_count;
        validate!(
            remaining.len() >= group_len,
            ErrorCode::InvalidInput,
            "split table {} expects {} receiver token accounts",
            split_table.key(),
            receiver_count
        )?;

        distribute_split_table(
            &split_table,
            &remaining[1],
            &remaining[2..group_len],
            &distributor_info,
            &token_program,
            seeds,
            clock.unix_timestamp,
        )?;

        remaining = &remaining[group_len..];
        tokens += 1;
    }

    msg!("distributed {} tokens", tokens);

    Ok(())
}

#[derive(Accounts)]
pub struct DistributeMany<'info> {
    pub distributor: AccountLoader<'info, Distributor>,
    pub token_program: Program<'info, Token>,
}
