use crate::error::ErrorCode;
use crate::state::cooldown::CooldownRecord;
use crate::validate;
use anchor_lang::prelude::*;

/// Rejects any share movement out of `from` that would dip into shares locked by a cooldown.
/// Mints (`from` is the default key) and burns (`to` is the default key) always pass.
pub fn validate_transfer(
    from: &Pubkey,
    to: &Pubkey,
    amount: u128,
    balance_of_from: u128,
    cooldown: Option<&CooldownRecord>,
) -> Result<()> {
    if *from == Pubkey::default() || *to == Pubkey::default() {
        return Ok(());
    }

    let transferable = match cooldown {
        Some(record) if record.is_active() => record.transferable_shares(balance_of_from),
        _ => balance_of_from,
    };

    validate!(
        amount <= transferable,
        ErrorCode::InsufficientBalance,
        "transfer of {} exceeds unlocked shares {}",
        amount,
        transferable
    )?;

    Ok(())
}
