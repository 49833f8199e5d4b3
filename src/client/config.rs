use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ClientError, Result};

pub const DEFAULT_BASE_URL: &str = "https://www.webpagetest.org";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(ClientError::Config("base_url must not be empty".to_string()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::Config(format!(
                "base_url `{base_url}` must use http or https"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ClientError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<ClientConfig> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let config = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::from_str::<ClientConfig>(&raw)?
    } else {
        serde_json::from_str::<ClientConfig>(&raw)?
    };
    config.validate()?;
    Ok(config)
}
