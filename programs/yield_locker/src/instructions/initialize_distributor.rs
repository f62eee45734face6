use crate::{Distributor, Size};
use anchor_lang::prelude::*;

pub fn initialize_distributor<'info>(
    ctx: Context<'_, '_, '_, 'info, InitializeDistributor<'info>>,
    name: [u8; 32],
) -> Result<()> {
    let mut distributor = ctx.accounts.distributor.load_init()?;
    distributor.name = name;
    distributor.pubkey = *ctx.accounts.distributor.to_account_info().key;
    distributor.governance = *ctx.accounts.governance.key;
    distributor.bump = ctx.bumps.distributor;

    Ok(())
}

#[derive(Accounts)]
#[instruction(name: [u8; 32])]
pub struct InitializeDistributor<'info> {
    #[account(
        init,
        seeds = [b"distributor", name.as_ref()],
        space = Distributor::SIZE,
        bump,
        payer = payer
    )]
    pub distributor: AccountLoader<'info, Distributor>,
    pub governance: Signer<'info>,
    #[account(mut)]
    pub payer: Signer<'info>,
    pub rent: Sysvar<'info, Rent>,
    pub system_program: Program<'info, System>,
}
