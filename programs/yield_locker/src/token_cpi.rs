use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

pub trait TokenTransferCPI {
    fn token_transfer(&self, amount: u64) -> Result<()>;
}

pub fn transfer_with_signer_seeds<'info>(
    amount: u64,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    signers: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = Transfer {
        from,
        to,
        authority,
    };

    let cpi_context = CpiContext::new_with_signer(token_program, cpi_accounts, signers);

    token::transfer(cpi_context, amount)?;

    Ok(())
}
