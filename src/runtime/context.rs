use super::{FetchService, MedianService, ResultService};

#[derive(Debug, Clone, Default)]
pub struct AppContext {
    result_service: ResultService,
    median_service: MedianService,
    fetch_service: FetchService,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result_service(&self) -> &ResultService {
        &self.result_service
    }

    pub fn median_service(&self) -> &MedianService {
        &self.median_service
    }

    pub fn fetch_service(&self) -> &FetchService {
        &self.fetch_service
    }
}
