use anchor_lang::prelude::*;

use crate::{Distributor, Locker, LockerDepositor, ProtocolFeeConfig, SplitTable, Strategy};

pub fn is_locker_for_locker_depositor(
    locker_depositor: &AccountLoader<LockerDepositor>,
    locker: &AccountLoader<Locker>,
) -> Result<bool> {
    Ok(locker_depositor.load()?.locker.eq(&locker.key()))
}

pub fn is_authority_for_locker_depositor(
    locker_depositor: &AccountLoader<LockerDepositor>,
    signer: &Signer,
) -> Result<bool> {
    Ok(locker_depositor.load()?.authority.eq(signer.key))
}

pub fn is_management_for_locker(locker: &AccountLoader<Locker>, signer: &Signer) -> Result<bool> {
    Ok(locker.load()?.management.eq(signer.key))
}

pub fn is_management_or_fee_recipient_for_locker(
    locker: &AccountLoader<Locker>,
    signer: &Signer,
) -> Result<bool> {
    let locker = locker.load()?;
    Ok(locker.management.eq(signer.key) || locker.performance_fee_recipient.eq(signer.key))
}

pub fn is_fee_recipient_depositor_for_locker(
    locker_depositor: &AccountLoader<LockerDepositor>,
    locker: &AccountLoader<Locker>,
) -> Result<bool> {
    let locker_ref = locker.load()?;
    let depositor = locker_depositor.load()?;
    Ok(depositor.locker.eq(&locker.key())
        && depositor.authority.eq(&locker_ref.performance_fee_recipient))
}

pub fn is_locker_for_strategy(
    strategy: &AccountLoader<Strategy>,
    locker: &AccountLoader<Locker>,
) -> Result<bool> {
    Ok(strategy.load()?.locker.eq(&locker.key()))
}

pub fn is_authority_for_strategy(
    strategy: &AccountLoader<Strategy>,
    signer: &Signer,
) -> Result<bool> {
    Ok(strategy.load()?.authority.eq(signer.key))
}

pub fn is_protocol_for_fee_config(
    protocol_fee_config: &AccountLoader<ProtocolFeeConfig>,
    locker: &AccountLoader<Locker>,
    signer: &Signer,
) -> Result<bool> {
    let config = protocol_fee_config.load()?;
    Ok(config.locker.eq(&locker.key()) && config.protocol.eq(signer.key))
}

pub fn is_governance_for_distributor(
    distributor: &AccountLoader<Distributor>,
    signer: &Signer,
) -> Result<bool> {
    Ok(distributor.load()?.governance.eq(signer.key))
}

pub fn is_distributor_for_split_table(
    split_table: &AccountLoader<SplitTable>,
    distributor: &AccountLoader<Distributor>,
) -> Result<bool> {
    Ok(split_table.load()?.distributor.eq(&distributor.key()))
}
