mod config;
mod error;
mod http;

#[cfg(test)]
mod tests;

pub use config::{ClientConfig, DEFAULT_BASE_URL, load_config};
pub use error::{ClientError, Result};
pub use http::{API_KEY_HEADER, RESULT_PATH, ResultClient, decode_body, result_query};
