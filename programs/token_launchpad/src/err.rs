use anchor_lang::prelude::*;

#[error_code]
pub enum LaunchpadError {
    #[msg("Not authorized address")]
    NotAuthorized,

    #[msg("Fee recipient address does not match the one in the config")]
    IncorrectFeeRecipient,

    #[msg("Relayer does not match the allowed relayer")]
    InvalidRelayer,

    #[msg("Invalid Treasury")]
    InvalidTreasury,

    #[msg("Fee is above the allowed maximum")]
    InvalidFee,

    #[msg("Invalid graduation threshold")]
    InvalidGraduationThreshold,

    #[msg("Program is paused")]
    ProgramPaused,

    #[msg("Insufficient sol")]
    InsufficientSol,

    #[msg("Insufficient tokens")]
    InsufficientTokens,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Slippage exceeded")]
    SlippageExceeded,

    #[msg("An overflow occurred during the calculation")]
    MathOverflow,

    #[msg("Divide By Zero")]
    DivideByZero,

    #[msg("Invalid Total Volume Sol")]
    InvalidTotalVolumeSol,

    #[msg("Invalid Real Sol Reserves")]
    InvalidRealSolReserves,

    #[msg("Invalid Real Token Reserves")]
    InvalidRealTokenReserves,

    #[msg("Invalid Virtual Sol Reserves")]
    InvalidVirtualSolReserves,

    #[msg("Invalid Virtual Token Reserves")]
    InvalidVirtualTokenReserves,

    #[msg("Problem with calculating tokens out")]
    InvalidTokensCalculation,

    #[msg("Problem with calculating sol out")]
    InvalidSolCalculation,

    #[msg("Token Graduated")]
    TokenGraduated,

    #[msg("Token is not active")]
    TokenNotActive,

    #[msg("Curve is not waiting for a pool")]
    GraduationNotPending,

    #[msg("Curve has not graduated yet")]
    CurveNotGraduated,

    #[msg("Token name is too long")]
    NameTooLong,

    #[msg("Token symbol is too long")]
    SymbolTooLong,

    #[msg("Metadata uri is too long")]
    UriTooLong,

    #[msg("Invalid account input")]
    InvalidAccountInput,
}

/// Account constraint failure carrying a human-readable reason in the logs
pub fn acc(reason: &str) -> Error {
    msg!("Account validation failed: {}", reason);
    error!(LaunchpadError::InvalidAccountInput)
}
