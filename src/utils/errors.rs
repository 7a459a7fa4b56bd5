use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Hand cannot be empty")]
    EmptyHand,
    #[error("Hand of {len} cards exceeds the limit of {max}")]
    HandTooLarge { len: usize, max: usize },
}
