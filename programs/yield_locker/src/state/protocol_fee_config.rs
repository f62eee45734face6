use crate::error::ErrorCode;
use crate::events::{FeeSharesAction, FeeSharesRecord};
use crate::state::{LockerDepositor, Size};
use crate::validate;
use anchor_lang::prelude::*;
use drift::math::safe_math::SafeMath;
use drift_macros::assert_no_slop;
use static_assertions::const_assert_eq;

#[assert_no_slop]
#[account(zero_copy(unsafe))]
#[derive(Default, Eq, PartialEq, Debug)]
#[repr(C)]
pub struct ProtocolFeeConfig {
    /// The protocol entitled to a cut of every report's fee shares
    pub protocol: Pubkey,
    /// The locker this config belongs to
    pub locker: Pubkey,
    /// fee shares accrued to the protocol and not yet claimed
    pub protocol_fee_shares: u128,
    /// lifetime fee shares accrued to the protocol
    pub total_protocol_fee_shares: u128,
    /// cut of converted fee shares taken before the fee engine is credited
    pub protocol_fee_bps: u16,
    pub bump: u8,
    pub padding1: [u8; 5],
    pub padding: [u64; 3],
}

impl Size for ProtocolFeeConfig {
    const SIZE: usize = 128 + 8;
}

const_assert_eq!(
    ProtocolFeeConfig::SIZE,
    std::mem::size_of::<ProtocolFeeConfig>() + 8
);

impl ProtocolFeeConfig {
    pub fn accrue(&mut self, shares: u128) -> Result<()> {
        self.protocol_fee_shares = self.protocol_fee_shares.safe_add(shares)?;
        self.total_protocol_fee_shares = self.total_protocol_fee_shares.safe_add(shares)?;
        Ok(())
    }

    /// Moves every unclaimed protocol share into `receiver`.
    pub fn claim(&mut self, receiver: &mut LockerDepositor, now: i64) -> Result<u128> {
        let shares = self.protocol_fee_shares;
        validate!(
            shares > 0,
            ErrorCode::InvalidInput,
            "no protocol fee shares to claim"
        )?;

        self.protocol_fee_shares = 0;
        receiver.increase_shares(shares)?;

        emit!(FeeSharesRecord {
            ts: now,
            locker: self.locker,
            action: FeeSharesAction::ProtocolClaimed,
            recipient: receiver.authority,
            fee_shares: 0,
            protocol_fee_shares: shares,
            ..FeeSharesRecord::default()
        });

        Ok(shares)
    }
}

pub trait ProtocolFeeConfigProvider<'a> {
    fn protocol_fee_config(&self) -> Option<AccountLoader<'a, ProtocolFeeConfig>>;
}

impl<'a: 'info, 'info, T: anchor_lang::Bumps> ProtocolFeeConfigProvider<'a>
    for Context<'_, '_, 'a, 'info, T>
{
    fn protocol_fee_config(&self) -> Option<AccountLoader<'a, ProtocolFeeConfig>> {
        let acct = match self.remaining_accounts.last() {
            Some(acct) => acct,
            None => return None,
        };
        AccountLoader::<'a, ProtocolFeeConfig>::try_from(acct).ok()
    }
}
