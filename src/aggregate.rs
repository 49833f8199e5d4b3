mod error;
mod median;
mod metric;
mod report;
mod selection;

#[cfg(test)]
mod tests;

pub use error::{AggregateError, Result};
pub use median::{MedianSelection, SelectedRun, median_run, median_run_for, select_median};
pub use metric::Metric;
pub use report::{MedianReport, ReportedView};
pub use selection::median_position;
