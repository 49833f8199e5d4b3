use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, trace};

use crate::model::{ResultSet, RunPair};

use super::{Metric, Result, median_position};

/// The run picked for one view series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedRun {
    pub run_id: String,
    pub value: i64,
}

/// Outcome of a median selection, before the views are copied out of the result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedianSelection {
    pub metric: Metric,
    pub step: usize,
    /// Runs that had the step on both views. Both series always share this count.
    pub candidates: usize,
    pub first_view: Option<SelectedRun>,
    pub repeat_view: Option<SelectedRun>,
}

impl MedianSelection {
    /// Copies the selected views out of `result`. A series without a selection leaves its
    /// side of the pair empty.
    pub fn to_run_pair(&self, result: &ResultSet) -> RunPair {
        let first_view = self
            .first_view
            .as_ref()
            .and_then(|selected| result.run(&selected.run_id))
            .map(|run| run.first_view.clone())
            .unwrap_or_default();
        let repeat_view = self
            .repeat_view
            .as_ref()
            .and_then(|selected| result.run(&selected.run_id))
            .and_then(|run| run.repeat_view.clone());
        RunPair {
            first_view,
            repeat_view,
        }
    }
}

#[derive(Default)]
struct Series<'a> {
    values: Vec<i64>,
    owners: HashMap<i64, &'a str>,
}

impl<'a> Series<'a> {
    /// The first run recorded for a value keeps it; later ties only add to `values`.
    fn push(&mut self, value: i64, run_id: &'a str) {
        self.owners.entry(value).or_insert(run_id);
        self.values.push(value);
    }

    fn select(mut self) -> Option<SelectedRun> {
        self.values.sort_unstable();
        let value = self.values[median_position(self.values.len())?];
        let run_id = self.owners.get(&value)?;
        Some(SelectedRun {
            run_id: (*run_id).to_string(),
            value,
        })
    }
}

/// Selects the median run of each view series for `metric` at the 0-based `step`.
///
/// A run only contributes when both its first and repeat view have the step, which keeps
/// the two series aligned by run. The views are then picked independently and may come
/// from different runs.
pub fn select_median(result: &ResultSet, step: usize, metric: Metric) -> MedianSelection {
    let mut first = Series::default();
    let mut repeat = Series::default();

    for (run_id, run) in &result.runs {
        let Some((first_step, repeat_step)) = run.aligned_steps(step) else {
            trace!(run_id = %run_id, step, "run lacks step on a view, skipped");
            continue;
        };
        first.push(metric.value(first_step), run_id);
        repeat.push(metric.value(repeat_step), run_id);
    }

    let candidates = first.values.len();
    let selection = MedianSelection {
        metric,
        step,
        candidates,
        first_view: first.select(),
        repeat_view: repeat.select(),
    };
    debug!(
        %metric,
        step,
        candidates,
        first_run = selection.first_view.as_ref().map(|s| s.run_id.as_str()),
        repeat_run = selection.repeat_view.as_ref().map(|s| s.run_id.as_str()),
        "selected median run"
    );
    selection
}

pub fn median_run_for(result: &ResultSet, step: usize, metric: Metric) -> RunPair {
    select_median(result, step, metric).to_run_pair(result)
}

/// Looks the metric up by name, then selects the median run.
///
/// Unknown names fail before any run is looked at.
pub fn median_run(result: &ResultSet, step: usize, metric: &str) -> Result<RunPair> {
    let metric = metric.parse::<Metric>()?;
    Ok(median_run_for(result, step, metric))
}
