use serde::Serialize;

use super::Step;

/// One view (first or repeat) of a run, always normalized to a sequence of steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewResult {
    pub run: f64,
    pub tester: String,
    pub step_count: usize,
    pub steps: Vec<Step>,
}

impl ViewResult {
    /// Wraps a single-step view. The declared count is forced to 1 regardless of
    /// what the document claimed.
    pub fn single(run: f64, tester: String, step: Step) -> Self {
        Self {
            run,
            tester,
            step_count: 1,
            steps: vec![step],
        }
    }

    /// `index` is 0-based; the document's `step` numbers start at 1.
    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// The two measurement passes of one run.
///
/// `repeat_view` is `None` when the test only captured a first view, which is not the
/// same thing as a repeat view holding zero steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunPair {
    pub first_view: ViewResult,
    pub repeat_view: Option<ViewResult>,
}

impl RunPair {
    /// Returns the first-view and repeat-view steps at `index` only when both exist.
    pub fn aligned_steps(&self, index: usize) -> Option<(&Step, &Step)> {
        let first = self.first_view.step(index)?;
        let repeat = self.repeat_view.as_ref()?.step(index)?;
        Some((first, repeat))
    }

    pub fn is_empty(&self) -> bool {
        self.first_view.is_empty() && self.repeat_view.as_ref().is_none_or(ViewResult::is_empty)
    }
}
