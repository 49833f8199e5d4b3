use thiserror::Error;

pub type Result<T> = std::result::Result<T, NormalizeError>;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("malformed result envelope: {0}")]
    Protocol(String),

    #[error("remote service reported status {code}: {text}")]
    Remote { code: i64, text: String },

    #[error("cannot decode `{field}`: {reason}")]
    Decode { field: String, reason: String },
}

impl NormalizeError {
    pub(crate) fn decode(field: impl Into<String>, reason: impl ToString) -> Self {
        Self::Decode {
            field: field.into(),
            reason: reason.to_string(),
        }
    }
}
