use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::model::{Connectivity, ResultSet, RunPair, ViewResult};

use super::lenient::{flag, map_or_seq, strip_nulls};
use super::{NormalizeError, Result, decode_view, normalize_packet_loss};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawResultData {
    id: String,
    url: String,
    summary: String,
    #[serde(rename = "testUrl")]
    test_url: String,
    location: String,
    label: String,
    from: String,
    tester: String,
    #[serde(rename = "testerDNS")]
    tester_dns: String,
    mobile: i64,
    completed: i64,
    #[serde(deserialize_with = "flag")]
    fvonly: bool,
    #[serde(rename = "successfulFVRuns")]
    successful_fv_runs: i64,
    #[serde(rename = "successfulRVRuns")]
    successful_rv_runs: i64,

    connectivity: String,
    #[serde(rename = "bwDown")]
    bw_down: i64,
    #[serde(rename = "bwUp")]
    bw_up: i64,
    latency: i64,
    plr: Option<Value>,

    #[serde(deserialize_with = "map_or_seq")]
    runs: BTreeMap<String, RawRun>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRun {
    #[serde(rename = "firstView")]
    first_view: Option<Value>,
    #[serde(rename = "repeatView")]
    repeat_view: Option<Value>,
}

pub(super) fn decode_result_data(mut data: Value) -> Result<ResultSet> {
    strip_nulls(&mut data);
    let raw = RawResultData::deserialize(&data)
        .map_err(|error| NormalizeError::decode("data", error))?;
    let packet_loss_rate = normalize_packet_loss(raw.plr.as_ref())?;

    let mut runs = BTreeMap::new();
    for (id, run) in &raw.runs {
        let first_view = match &run.first_view {
            Some(view) => decode_view(view, &format!("runs.{id}.firstView"))?,
            None => ViewResult::default(),
        };
        let repeat_view = run
            .repeat_view
            .as_ref()
            .map(|view| decode_view(view, &format!("runs.{id}.repeatView")))
            .transpose()?;
        runs.insert(
            id.clone(),
            RunPair {
                first_view,
                repeat_view,
            },
        );
    }

    Ok(ResultSet {
        id: raw.id,
        url: raw.url,
        summary: raw.summary,
        test_url: raw.test_url,
        location: raw.location,
        label: raw.label,
        from: raw.from,
        tester: raw.tester,
        tester_dns: raw.tester_dns,
        mobile: raw.mobile,
        completed: raw.completed,
        first_view_only: raw.fvonly,
        successful_fv_runs: raw.successful_fv_runs,
        successful_rv_runs: raw.successful_rv_runs,
        connectivity: Connectivity {
            profile: raw.connectivity,
            bw_down: raw.bw_down,
            bw_up: raw.bw_up,
            latency: raw.latency,
            packet_loss_rate,
        },
        runs,
    })
}
