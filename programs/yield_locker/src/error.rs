use anchor_lang::prelude::*;

#[error_code]
#[derive(PartialEq, Eq)]
pub enum ErrorCode {
    #[msg("Default")]
    Default,
    #[msg("Locker Math Error")]
    MathError,
    #[msg("InvalidInput")]
    InvalidInput,
    #[msg("InsufficientBalance")]
    InsufficientBalance,
    #[msg("NoActiveCooldown")]
    NoActiveCooldown,
    #[msg("WithdrawalNotEligible")]
    WithdrawalNotEligible,
    #[msg("DuplicateReport")]
    DuplicateReport,
    #[msg("HealthCheckFailed")]
    HealthCheckFailed,
    #[msg("ConfigurationInvalid")]
    ConfigurationInvalid,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("InsufficientLiquidity")]
    InsufficientLiquidity,
    #[msg("TooManyReceivers")]
    TooManyReceivers,
    #[msg("ReceiverNotFound")]
    ReceiverNotFound,
    #[msg("NothingToDistribute")]
    NothingToDistribute,
    #[msg("LockerShutdown")]
    LockerShutdown,
    #[msg("ProtocolFeeConfigMissing")]
    ProtocolFeeConfigMissing,
}
