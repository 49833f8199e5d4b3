use crate::aggregate::{MedianReport, Metric, select_median};
use crate::model::ResultSet;

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct MedianService;

impl MedianService {
    pub fn report(&self, result: &ResultSet, step: usize, metric: &str) -> Result<MedianReport> {
        let metric = metric.parse::<Metric>()?;
        let selection = select_median(result, step, metric);
        Ok(MedianReport::new(result, &selection))
    }
}
