use crate::events::SplitUpdateRecord;
use crate::instructions::UpdateSplit;
use anchor_lang::prelude::*;

pub fn remove_receiver<'info>(
    ctx: Context<'_, '_, '_, 'info, UpdateSplit<'info>>,
    receiver: Pubkey,
) -> Result<()> {
    let clock = &Clock::get()?;
    let mut split_table = ctx.accounts.split_table.load_mut()?;

    let old_split_bps = split_table.remove_receiver(&receiver)?;

    emit!(SplitUpdateRecord {
        ts: clock.unix_timestamp,
        split_table: split_table.pubkey,
        mint: split_table.mint,
        receiver,
        old_split_bps,
        new_split_bps: 0,
        total_split_bps: split_table.total_split_bps,
        removed: true,
    });

    Ok(())
}
