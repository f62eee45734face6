// TIME
pub const ONE_HOUR: i64 = 60 * 60;
pub const ONE_DAY: i64 = ONE_HOUR * 24;
/// 365.2425 days
pub const SECONDS_PER_YEAR: u128 = 31_556_952;

pub const MAX_BPS: u16 = 10_000;
pub const MAX_BPS_U128: u128 = MAX_BPS as u128;

/// 2% annualized
pub const MAX_MANAGEMENT_FEE_BPS: u16 = 200;

pub const MAX_SPLIT_RECEIVERS: usize = 16;
/// smallest unit of a distributor balance that is never paid out
pub const DISTRIBUTION_RESERVE: u64 = 1;
