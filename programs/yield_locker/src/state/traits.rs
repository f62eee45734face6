use anchor_lang::prelude::*;

pub trait Size {
    const SIZE: usize;
}

/// Exchange-rate view of the vault that locker shares are a claim on.
pub trait ShareConverter {
    fn convert_to_assets(&self, shares: u128) -> Result<u64>;
    fn convert_to_shares(&self, assets: u64) -> Result<u128>;
    fn is_shutdown(&self) -> bool;
}
