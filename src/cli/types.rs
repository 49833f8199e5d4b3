use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;

use crate::model::{Connectivity, ResultSet};

#[derive(Debug, Parser)]
#[command(
    name = "wpt-results",
    version,
    about = "Decode WebPageTest results and pick median runs"
)]
pub(super) struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub(super) verbose: u8,

    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Decodes a saved result document and prints a summary.
    Inspect { input: PathBuf },
    /// Prints the median run of a saved result document.
    Median {
        input: PathBuf,
        #[arg(long, default_value = "speedindex")]
        metric: String,
        /// 0-based step index.
        #[arg(long, default_value_t = 0)]
        step: usize,
    },
    /// Fetches a result from the service.
    Fetch {
        test_id: String,
        #[arg(long)]
        config: Option<PathBuf>,
        /// Saves the raw response body here.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
pub(super) struct RunSummary {
    pub(super) run_id: String,
    pub(super) first_view_steps: usize,
    pub(super) repeat_view_steps: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(super) struct ResultSummary {
    pub(super) id: String,
    pub(super) url: String,
    pub(super) label: String,
    pub(super) location: String,
    pub(super) first_view_only: bool,
    pub(super) connectivity: Connectivity,
    pub(super) runs: Vec<RunSummary>,
}

impl From<&ResultSet> for ResultSummary {
    fn from(result: &ResultSet) -> Self {
        Self {
            id: result.id.clone(),
            url: result.url.clone(),
            label: result.label.clone(),
            location: result.location.clone(),
            first_view_only: result.first_view_only,
            connectivity: result.connectivity.clone(),
            runs: result
                .runs
                .iter()
                .map(|(run_id, run)| RunSummary {
                    run_id: run_id.clone(),
                    first_view_steps: run.first_view.step_count,
                    repeat_view_steps: run.repeat_view.as_ref().map(|view| view.step_count),
                })
                .collect(),
        }
    }
}
