use crate::aggregate::AggregateError;
use crate::client::ClientError;
use crate::normalize::NormalizeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("result service error: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("median service error: {0}")]
    Aggregate(#[from] AggregateError),

    #[error("fetch service error: {0}")]
    Client(#[from] ClientError),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
