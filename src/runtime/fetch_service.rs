use std::path::Path;

use crate::client::{ClientConfig, ResultClient, load_config};
use crate::model::ResultSet;

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct FetchService;

impl FetchService {
    /// Loads the client configuration from `path`, or falls back to the defaults.
    pub fn config(&self, path: Option<&Path>) -> Result<ClientConfig> {
        match path {
            Some(path) => Ok(load_config(path)?),
            None => Ok(ClientConfig::default()),
        }
    }

    pub fn fetch_raw(&self, config: ClientConfig, test_id: &str) -> Result<Vec<u8>> {
        let client = ResultClient::new(config)?;
        Ok(client.fetch_raw(test_id)?)
    }

    pub fn fetch(&self, config: ClientConfig, test_id: &str) -> Result<ResultSet> {
        let client = ResultClient::new(config)?;
        Ok(client.fetch(test_id)?)
    }
}
