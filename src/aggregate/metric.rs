use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::model::Step;

use super::AggregateError;

/// Step metrics a median run can be selected by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    SpeedIndex,
    LoadTime,
    FullyLoaded,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::SpeedIndex, Metric::LoadTime, Metric::FullyLoaded];

    pub fn name(self) -> &'static str {
        match self {
            Metric::SpeedIndex => "speedindex",
            Metric::LoadTime => "loadtime",
            Metric::FullyLoaded => "fullyloaded",
        }
    }

    pub fn value(self, step: &Step) -> i64 {
        match self {
            Metric::SpeedIndex => step.speed_index,
            Metric::LoadTime => step.load_time,
            Metric::FullyLoaded => step.fully_loaded,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = AggregateError;

    /// Case-insensitive; `_` and `-` separators are ignored, so `load_time` and
    /// `LoadTime` both name [`Metric::LoadTime`].
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        Metric::ALL
            .into_iter()
            .find(|metric| metric.name() == normalized)
            .ok_or_else(|| AggregateError::UnsupportedMetric {
                name: name.to_string(),
            })
    }
}
