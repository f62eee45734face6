use crate::constraints::is_governance_for_distributor;
use crate::{Distributor, Size, SplitTable};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

pub fn initialize_split_table<'info>(
    ctx: Context<'_, '_, '_, 'info, InitializeSplitTable<'info>>,
) -> Result<()> {
    let mut split_table = ctx.accounts.split_table.load_init()?;
    split_table.distributor = ctx.accounts.distributor.key();
    split_table.pubkey = ctx.accounts.split_table.key();
    split_table.mint = ctx.accounts.mint.key();
    split_table.token_account = ctx.accounts.token_account.key();
    split_table.bump = ctx.bumps.split_table;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeSplitTable<'info> {
    #[account(
        constraint = is_governance_for_distributor(&distributor, &governance)?,
    )]
    pub distributor: AccountLoader<'info, Distributor>,
    #[account(
        init,
        seeds = [b"split_table", distributor.key().as_ref(), mint.key().as_ref()],
        space = SplitTable::SIZE,
        bump,
        payer = payer
    )]
    pub split_table: AccountLoader<'info, SplitTable>,
    #[account(
        init,
        seeds = [b"distributor_token_account".as_ref(), distributor.key().as_ref(), mint.key().as_ref()],
        bump,
        payer = payer,
        token::mint = mint,
        token::authority = distributor
    )]
    pub token_account: Box<Account<'info, TokenAccount>>,
    pub mint: Box<Account<'info, Mint>>,
    pub governance: Signer<'info>,
    #[account(mut)]
    pub payer: Signer<'info>,
    pub rent: Sysvar<'info, Rent>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}
