use serde::Serialize;

use crate::model::{ResultSet, ViewResult};

use super::{MedianSelection, Metric};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportedView {
    pub run_id: String,
    pub value: i64,
    pub url: String,
    pub load_time: i64,
    pub speed_index: i64,
    pub fully_loaded: i64,
    pub ttfb: i64,
}

/// Printable summary of a median selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedianReport {
    pub test_id: String,
    pub metric: Metric,
    pub step: usize,
    pub candidates: usize,
    pub first_view: Option<ReportedView>,
    pub repeat_view: Option<ReportedView>,
}

impl MedianReport {
    pub fn new(result: &ResultSet, selection: &MedianSelection) -> Self {
        let pair = selection.to_run_pair(result);
        let report_view = |run_id: &str, value: i64, view: Option<&ViewResult>| {
            view.and_then(|view| view.step(selection.step))
                .map(|step| ReportedView {
                    run_id: run_id.to_string(),
                    value,
                    url: step.url.clone(),
                    load_time: step.load_time,
                    speed_index: step.speed_index,
                    fully_loaded: step.fully_loaded,
                    ttfb: step.ttfb,
                })
        };
        Self {
            test_id: result.id.clone(),
            metric: selection.metric,
            step: selection.step,
            candidates: selection.candidates,
            first_view: selection.first_view.as_ref().and_then(|selected| {
                report_view(&selected.run_id, selected.value, Some(&pair.first_view))
            }),
            repeat_view: selection.repeat_view.as_ref().and_then(|selected| {
                report_view(&selected.run_id, selected.value, pair.repeat_view.as_ref())
            }),
        }
    }
}
