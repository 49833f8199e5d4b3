use thiserror::Error;

pub type Result<T> = std::result::Result<T, AggregateError>;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("unsupported metric: {name}")]
    UnsupportedMetric { name: String },
}
