use std::collections::BTreeMap;

use crate::model::{ResultSet, RunPair, Step, ViewResult};

use super::{
    AggregateError, MedianReport, Metric, median_position, median_run, median_run_for,
    select_median,
};

fn step(load_time: i64) -> Step {
    Step {
        load_time,
        speed_index: load_time / 2,
        fully_loaded: load_time * 2,
        ..Step::default()
    }
}

fn view(run: f64, load_times: &[i64]) -> ViewResult {
    ViewResult {
        run,
        tester: "tester".to_string(),
        step_count: load_times.len(),
        steps: load_times.iter().copied().map(step).collect(),
    }
}

fn result_set(runs: &[(&str, &[i64], Option<&[i64]>)]) -> ResultSet {
    let runs = runs
        .iter()
        .enumerate()
        .map(|(index, (id, first, repeat))| {
            let number = (index + 1) as f64;
            (
                (*id).to_string(),
                RunPair {
                    first_view: view(number, first),
                    repeat_view: repeat.map(|values| view(number, values)),
                },
            )
        })
        .collect::<BTreeMap<_, _>>();
    ResultSet {
        id: "test".to_string(),
        runs,
        ..ResultSet::default()
    }
}

#[test]
fn selection_rule_positions() {
    assert_eq!(median_position(0), None);
    assert_eq!(median_position(1), Some(0));
    assert_eq!(median_position(2), Some(1));
    assert_eq!(median_position(3), Some(1));
    assert_eq!(median_position(4), Some(2));
    assert_eq!(median_position(5), Some(2));
}

#[test]
fn odd_count_takes_exact_middle() {
    let result = result_set(&[
        ("1", &[300], Some(&[30])),
        ("2", &[100], Some(&[10])),
        ("3", &[500], Some(&[50])),
        ("4", &[200], Some(&[20])),
        ("5", &[400], Some(&[40])),
    ]);
    let selection = select_median(&result, 0, Metric::LoadTime);
    assert_eq!(selection.candidates, 5);
    let first = selection.first_view.expect("first view");
    assert_eq!(first.value, 300);
    assert_eq!(first.run_id, "1");

    let pair = median_run(&result, 0, "loadtime").expect("median");
    assert_eq!(pair.first_view.steps[0].load_time, 300);
    assert_eq!(pair.repeat_view.expect("repeat").steps[0].load_time, 30);
}

#[test]
fn even_count_takes_upper_middle_without_averaging() {
    let result = result_set(&[
        ("1", &[100], Some(&[100])),
        ("2", &[200], Some(&[200])),
        ("3", &[300], Some(&[300])),
        ("4", &[400], Some(&[400])),
    ]);
    let pair = median_run_for(&result, 0, Metric::LoadTime);
    assert_eq!(pair.first_view.steps[0].load_time, 300);
    assert_eq!(pair.repeat_view.expect("repeat").steps[0].load_time, 300);
}

#[test]
fn two_runs_pick_the_larger_value() {
    let result = result_set(&[("a", &[900], Some(&[90])), ("b", &[700], Some(&[70]))]);
    let selection = select_median(&result, 0, Metric::LoadTime);
    assert_eq!(selection.first_view.expect("first").run_id, "a");
    assert_eq!(selection.repeat_view.expect("repeat").run_id, "a");
}

#[test]
fn single_run_is_its_own_median() {
    let result = result_set(&[("7", &[1234], Some(&[567]))]);
    let pair = median_run(&result, 0, "fullyloaded").expect("median");
    assert_eq!(pair, result.runs["7"]);
}

#[test]
fn views_are_selected_independently() {
    let result = result_set(&[
        ("1", &[100], Some(&[30])),
        ("2", &[200], Some(&[10])),
        ("3", &[300], Some(&[20])),
    ]);
    let selection = select_median(&result, 0, Metric::LoadTime);
    assert_eq!(selection.first_view.expect("first").run_id, "2");
    assert_eq!(selection.repeat_view.expect("repeat").run_id, "3");
}

#[test]
fn runs_missing_the_step_on_either_view_are_excluded_from_both_series() {
    let result = result_set(&[
        ("1", &[100, 1000], Some(&[10, 5])),
        ("2", &[200, 2000], Some(&[20])),
        ("3", &[300, 3000], None),
        ("4", &[400], Some(&[40, 15])),
        ("5", &[500, 5000], Some(&[50, 25])),
    ]);
    let selection = select_median(&result, 1, Metric::LoadTime);
    assert_eq!(selection.candidates, 2);
    // Series: first [1000, 5000], repeat [5, 25]; upper middle of two.
    assert_eq!(selection.first_view.expect("first").run_id, "5");
    assert_eq!(selection.repeat_view.expect("repeat").run_id, "5");

    let at_zero = select_median(&result, 0, Metric::LoadTime);
    assert_eq!(at_zero.candidates, 4);
}

#[test]
fn no_eligible_run_yields_empty_pair() {
    let result = result_set(&[("1", &[100], None), ("2", &[200], None)]);
    let selection = select_median(&result, 0, Metric::SpeedIndex);
    assert_eq!(selection.candidates, 0);
    assert!(selection.first_view.is_none());
    assert!(selection.repeat_view.is_none());

    let pair = median_run(&result, 0, "speedindex").expect("median");
    assert!(pair.is_empty());
    assert_eq!(pair, RunPair::default());

    let pair = median_run(&result, 3, "speedindex").expect("median");
    assert!(pair.is_empty());
}

#[test]
fn tied_values_resolve_to_first_run_in_map_order() {
    let result = result_set(&[
        ("1", &[100], Some(&[10])),
        ("2", &[200], Some(&[20])),
        ("3", &[200], Some(&[20])),
        ("4", &[400], Some(&[40])),
    ]);
    // Sorted [100, 200, 200, 400]: position 2 holds 200, owned by run "2" even though
    // run "3" produced the element at that position.
    let selection = select_median(&result, 0, Metric::LoadTime);
    assert_eq!(selection.first_view.expect("first").run_id, "2");
}

#[test]
fn metric_selects_the_matching_step_field() {
    let result = result_set(&[
        ("1", &[100], Some(&[10])),
        ("2", &[300], Some(&[30])),
        ("3", &[200], Some(&[20])),
    ]);
    for metric in Metric::ALL {
        let selection = select_median(&result, 0, metric);
        assert_eq!(selection.first_view.expect("first").run_id, "3");
    }
    let selection = select_median(&result, 0, Metric::FullyLoaded);
    assert_eq!(selection.first_view.expect("first").value, 400);
    let selection = select_median(&result, 0, Metric::SpeedIndex);
    assert_eq!(selection.first_view.expect("first").value, 100);
}

#[test]
fn metric_names_parse_case_insensitively() {
    assert_eq!("SpeedIndex".parse::<Metric>().expect("metric"), Metric::SpeedIndex);
    assert_eq!("load_time".parse::<Metric>().expect("metric"), Metric::LoadTime);
    assert_eq!("fully-loaded".parse::<Metric>().expect("metric"), Metric::FullyLoaded);
    assert_eq!(Metric::LoadTime.to_string(), "loadtime");
}

#[test]
fn unsupported_metric_fails_before_inspecting_runs() {
    // A run whose views cannot be aligned at any step; the metric check must not care.
    let result = result_set(&[("1", &[], None)]);
    match median_run(&result, 0, "ttfb") {
        Err(AggregateError::UnsupportedMetric { name }) => assert_eq!(name, "ttfb"),
        other => panic!("expected unsupported metric, got {other:?}"),
    }
}

#[test]
fn report_describes_selected_steps() {
    let result = result_set(&[
        ("1", &[100], Some(&[10])),
        ("2", &[300], Some(&[30])),
        ("3", &[200], Some(&[20])),
    ]);
    let selection = select_median(&result, 0, Metric::LoadTime);
    let report = MedianReport::new(&result, &selection);
    assert_eq!(report.test_id, "test");
    assert_eq!(report.candidates, 3);
    let first = report.first_view.as_ref().expect("first");
    assert_eq!(first.run_id, "3");
    assert_eq!(first.load_time, 200);
    assert_eq!(first.fully_loaded, 400);
    let repeat = report.repeat_view.as_ref().expect("repeat");
    assert_eq!(repeat.value, 20);

    let serialized = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(serialized["metric"], "loadtime");
}
