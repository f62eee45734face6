use crate::constraints::{is_distributor_for_split_table, is_governance_for_distributor};
use crate::events::SplitUpdateRecord;
use crate::{Distributor, SplitTable};
use anchor_lang::prelude::*;

pub fn update_split<'info>(
    ctx: Context<'_, '_, '_, 'info, UpdateSplit<'info>>,
    receiver: Pubkey,
    split_bps: u16,
) -> Result<()> {
    let clock = &Clock::get()?;
    let mut split_table = ctx.accounts.split_table.load_mut()?;

    let old_split_bps = split_table.update_split(receiver, split_bps)?;

    emit!(SplitUpdateRecord {
        ts: clock.unix_timestamp,
        split_table: split_table.pubkey,
        mint: split_table.mint,
        receiver,
        old_split_bps,
        new_split_bps: split_bps,
        total_split_bps: split_table.total_split_bps,
        removed: false,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateSplit<'info> {
    #[account(
        constraint = is_governance_for_distributor(&distributor, &governance)?,
    )]
    pub distributor: AccountLoader<'info, Distributor>,
    #[account(
        mut,
        constraint = is_distributor_for_split_table(&split_table, &distributor)?,
    )]
    pub split_table: AccountLoader<'info, SplitTable>,
    pub governance: Signer<'info>,
}
