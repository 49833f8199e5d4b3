use std::collections::BTreeMap;

use serde::Serialize;

use super::RunPair;

/// Network emulation profile the test ran under.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Connectivity {
    pub profile: String,
    pub bw_down: i64,
    pub bw_up: i64,
    pub latency: i64,
    /// Always a plain integer here, whatever shape the document used.
    pub packet_loss_rate: u32,
}

/// Decoded result of one test.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSet {
    pub id: String,
    pub url: String,
    pub summary: String,
    pub test_url: String,
    pub location: String,
    pub label: String,
    pub from: String,
    pub tester: String,
    pub tester_dns: String,
    pub mobile: i64,
    pub completed: i64,
    pub first_view_only: bool,
    pub successful_fv_runs: i64,
    pub successful_rv_runs: i64,
    pub connectivity: Connectivity,
    /// Keyed by the run identifier as it appears in the document. Map order is the
    /// order runs are visited in.
    pub runs: BTreeMap<String, RunPair>,
}

impl ResultSet {
    pub fn run(&self, id: &str) -> Option<&RunPair> {
        self.runs.get(id)
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }
}
