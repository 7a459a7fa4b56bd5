use thiserror::Error;

use crate::card::CardError;
use crate::utils::UtilsError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid card: {0}")]
    CardError(#[from] CardError),
    #[error("Invalid card records: {0}")]
    RecordError(#[from] serde_json::Error),
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
}
