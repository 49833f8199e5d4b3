use crate::normalize::NormalizeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid client configuration: {0}")]
    Config(String),

    #[error("client I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("client configuration parse failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("client YAML configuration parse failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("result could not be normalized: {0}")]
    Normalize(#[from] NormalizeError),
}
