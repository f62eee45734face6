use anchor_lang::prelude::*;
use drift::math::casting::Cast;
use drift::math::safe_math::SafeMath;

use crate::constants::{MAX_BPS_U128, SECONDS_PER_YEAR};

/// `amount * bps / 10_000`, floored.
pub fn apply_bps(amount: u64, bps: u16) -> Result<u64> {
    let result = amount
        .cast::<u128>()?
        .safe_mul(bps.cast()?)?
        .safe_div(MAX_BPS_U128)?;

    Ok(result.cast()?)
}

/// Annualized fee on `principal` for `elapsed` seconds.
pub fn calculate_management_fee(principal: u64, elapsed: i64, management_fee_bps: u16) -> Result<u64> {
    if management_fee_bps == 0 || elapsed <= 0 {
        return Ok(0);
    }

    let fee = principal
        .cast::<u128>()?
        .safe_mul(elapsed.cast()?)?
        .safe_mul(management_fee_bps.cast()?)?
        .safe_div(MAX_BPS_U128)?
        .safe_div(SECONDS_PER_YEAR)?;

    Ok(fee.cast()?)
}

/// `value * numerator / denominator` with the product taken first so sub-unit ratios survive.
pub fn get_proportion(value: u128, numerator: u128, denominator: u128) -> Result<u128> {
    if denominator == 0 {
        return Ok(0);
    }

    Ok(value.safe_mul(numerator)?.safe_div(denominator)?)
}
