use crate::constants::{DISTRIBUTION_RESERVE, MAX_BPS, MAX_SPLIT_RECEIVERS};
use crate::error::ErrorCode;
use crate::math::apply_bps;
use crate::state::Size;
use crate::validate;
use anchor_lang::prelude::*;
use bytemuck::Zeroable;
use drift::math::casting::Cast;
use drift::math::safe_math::SafeMath;
use drift_macros::assert_no_slop;
use static_assertions::const_assert_eq;

#[assert_no_slop]
#[account(zero_copy(unsafe))]
#[derive(Default, Eq, PartialEq, Debug)]
#[repr(C)]
pub struct Distributor {
    /// The name of the distributor. Distributor pubkey is derived from this name.
    pub name: [u8; 32],
    /// The distributor's pubkey, also the authority of every treasury token account it owns
    pub pubkey: Pubkey,
    /// The only signer allowed to edit split tables
    pub governance: Pubkey,
    pub bump: u8,
    pub padding1: [u8; 7],
    pub padding: [u64; 4],
}

impl Size for Distributor {
    const SIZE: usize = 136 + 8;
}

const_assert_eq!(Distributor::SIZE, std::mem::size_of::<Distributor>() + 8);

impl Distributor {
    pub fn get_distributor_signer_seeds<'a>(name: &'a [u8], bump: &'a u8) -> [&'a [u8]; 3] {
        [b"distributor".as_ref(), name, bytemuck::bytes_of(bump)]
    }
}

#[assert_no_slop]
#[derive(
    Default, AnchorSerialize, AnchorDeserialize, Copy, Clone, Eq, PartialEq, Debug, Zeroable,
)]
pub struct SplitReceiver {
    pub receiver: Pubkey,
    pub split_bps: u16,
    pub padding: [u8; 6],
}

#[assert_no_slop]
#[account(zero_copy(unsafe))]
#[derive(Default, Eq, PartialEq, Debug)]
#[repr(C)]
pub struct SplitTable {
    /// The distributor owning the treasury
    pub distributor: Pubkey,
    /// The split table's pubkey. It is a pda of distributor and mint
    pub pubkey: Pubkey,
    /// The token this table splits
    pub mint: Pubkey,
    /// The distributor's treasury token account for mint
    pub token_account: Pubkey,
    /// receivers in insertion order, only the first receiver_count entries are live
    pub receivers: [SplitReceiver; MAX_SPLIT_RECEIVERS],
    /// lifetime amount paid out
    pub total_distributed: u64,
    pub last_distribution_ts: i64,
    /// sum of split_bps over live receivers, never above 10_000
    pub total_split_bps: u16,
    pub receiver_count: u8,
    pub bump: u8,
    pub padding1: [u8; 4],
    pub padding: [u64; 4],
}

impl Size for SplitTable {
    const SIZE: usize = 824 + 8;
}

const_assert_eq!(SplitTable::SIZE, std::mem::size_of::<SplitTable>() + 8);

impl SplitTable {
    pub fn receivers(&self) -> &[SplitReceiver] {
        &self.receivers[..self.receiver_count as usize]
    }

    fn position(&self, receiver: &Pubkey) -> Option<usize> {
        self.receivers()
            .iter()
            .position(|entry| entry.receiver == *receiver)
    }

    pub fn split_bps_of(&self, receiver: &Pubkey) -> u16 {
        self.position(receiver)
            .map(|index| self.receivers[index].split_bps)
            .unwrap_or(0)
    }

    /// Sets `receiver`'s split, appending it when absent. Returns the previous split.
    /// The table is left untouched on any failure.
    pub fn update_split(&mut self, receiver: Pubkey, split_bps: u16) -> Result<u16> {
        validate!(
            receiver != Pubkey::default(),
            ErrorCode::InvalidInput,
            "receiver must not be the default pubkey"
        )?;

        let index = self.position(&receiver);
        let old_split_bps = index.map(|i| self.receivers[i].split_bps).unwrap_or(0);

        validate!(
            index.is_some() || (self.receiver_count as usize) < MAX_SPLIT_RECEIVERS,
            ErrorCode::TooManyReceivers,
            "split table already holds {} receivers",
            MAX_SPLIT_RECEIVERS
        )?;

        let new_total = self
            .total_split_bps
            .cast::<u32>()?
            .safe_sub(old_split_bps.cast()?)?
            .safe_add(split_bps.cast()?)?;
        validate!(
            new_total <= MAX_BPS.cast::<u32>()?,
            ErrorCode::ConfigurationInvalid,
            "total split {} above {}",
            new_total,
            MAX_BPS
        )?;

        let index = match index {
            Some(index) => index,
            None => {
                let index = self.receiver_count as usize;
                self.receivers[index] = SplitReceiver {
                    receiver,
                    ..SplitReceiver::default()
                };
                self.receiver_count = self.receiver_count.safe_add(1)?;
                index
            }
        };

        self.receivers[index].split_bps = split_bps;
        self.total_split_bps = new_total.cast()?;

        Ok(old_split_bps)
    }

    /// Evicts `receiver`, shifting later entries down. Returns its split.
    pub fn remove_receiver(&mut self, receiver: &Pubkey) -> Result<u16> {
        let index = self
            .position(receiver)
            .ok_or(ErrorCode::ReceiverNotFound)?;

        let count = self.receiver_count as usize;
        let split_bps = self.receivers[index].split_bps;

        self.receivers.copy_within(index + 1..count, index);
        self.receivers[count - 1] = SplitReceiver::default();
        self.receiver_count = self.receiver_count.safe_sub(1)?;
        self.total_split_bps = self.total_split_bps.safe_sub(split_bps)?;

        Ok(split_bps)
    }

    /// Per-receiver payouts for a treasury `balance`, in table order. One unit always stays behind.
    pub fn calculate_payouts(&self, balance: u64) -> Result<Vec<u64>> {
        validate!(
            self.total_split_bps > 0 && self.receiver_count > 0,
            ErrorCode::ConfigurationInvalid,
            "split table has no allocation"
        )?;
        validate!(
            balance > 0,
            ErrorCode::NothingToDistribute,
            "treasury is empty"
        )?;

        let reserved = balance.safe_sub(DISTRIBUTION_RESERVE)?;

        self.receivers()
            .iter()
            .map(|entry| apply_bps(reserved, entry.split_bps))
            .collect()
    }

    pub fn record_distribution(&mut self, total_paid: u64, now: i64) -> Result<()> {
        self.total_distributed = self.total_distributed.safe_add(total_paid)?;
        self.last_distribution_ts = now;
        Ok(())
    }
}
