use std::io::Read;
use std::time::Duration;

use tracing::{debug, info};

use crate::model::ResultSet;
use crate::normalize;

use super::{ClientConfig, ClientError, Result};

pub const RESULT_PATH: &str = "/jsonResult.php";
pub const API_KEY_HEADER: &str = "X-WPT-API-KEY";

/// Query string of a result request. Request details, averages and standard deviations
/// are switched off; the normalizer does not read them.
pub fn result_query(test_id: &str) -> [(&'static str, String); 4] {
    [
        ("test", test_id.to_string()),
        ("requests", "0".to_string()),
        ("average", "0".to_string()),
        ("standard", "0".to_string()),
    ]
}

/// Blocking client for the result endpoint. One call issues exactly one request.
#[derive(Clone)]
pub struct ResultClient {
    config: ClientConfig,
    agent: ureq::Agent,
}

impl ResultClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Ok(Self { config, agent })
    }

    pub fn result_url(&self) -> String {
        format!("{}{RESULT_PATH}", self.config.base_url.trim_end_matches('/'))
    }

    pub fn fetch_raw(&self, test_id: &str) -> Result<Vec<u8>> {
        let test_id = test_id.trim();
        if test_id.is_empty() {
            return Err(ClientError::Config("test id must not be empty".to_string()));
        }

        let url = self.result_url();
        info!(test_id, url = %url, "requesting test result");
        let mut request = self.agent.get(&url);
        for (key, value) in result_query(test_id) {
            request = request.query(key, &value);
        }
        if let Some(api_key) = &self.config.api_key {
            request = request.set(API_KEY_HEADER, api_key);
        }

        let response = request.call().map_err(Box::new)?;
        let mut body = Vec::new();
        response.into_reader().read_to_end(&mut body)?;
        debug!(test_id, bytes = body.len(), "received test result");
        Ok(body)
    }

    pub fn fetch(&self, test_id: &str) -> Result<ResultSet> {
        let body = self.fetch_raw(test_id)?;
        decode_body(&body)
    }
}

/// Decodes a response body returned by [`ResultClient::fetch_raw`].
pub fn decode_body(body: &[u8]) -> Result<ResultSet> {
    Ok(normalize::decode(body)?)
}
