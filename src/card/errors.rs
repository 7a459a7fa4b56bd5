use thiserror::Error;

/// Errors raised when a card record or token does not describe a valid card
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CardError {
    #[error("Number card value must be between 0 and 10, got {0}")]
    NumberOutOfRange(i64),
    #[error("Number card value is not an integer: '{0}'")]
    InvalidNumber(String),
    #[error("Unknown operator symbol: '{0}'")]
    UnknownOperator(String),
    #[error("Unknown wildcard symbol: '{0}'")]
    UnknownWildcard(String),
    #[error("Unknown origin: '{0}'")]
    UnknownOrigin(String),
    #[error("Only number cards carry an origin")]
    OriginOnNonNumber,
    #[error("Unrecognized card token: '{0}'")]
    UnknownToken(String),
}
