use std::fs;
use std::path::Path;

use crate::model::ResultSet;
use crate::normalize::decode;

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct ResultService;

impl ResultService {
    pub fn decode(&self, raw: &[u8]) -> Result<ResultSet> {
        Ok(decode(raw)?)
    }

    /// Reads a saved `jsonResult.php` response from disk and decodes it.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<ResultSet> {
        let raw = fs::read(path)?;
        self.decode(&raw)
    }

    pub fn save_raw(&self, path: impl AsRef<Path>, raw: &[u8]) -> Result<()> {
        fs::write(path, raw)?;
        Ok(())
    }
}
