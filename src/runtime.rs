mod context;
mod error;
mod fetch_service;
mod median_service;
mod result_service;

pub use context::AppContext;
pub use error::{AppError, Result};
pub use fetch_service::FetchService;
pub use median_service::MedianService;
pub use result_service::ResultService;
