use std::sync::{Arc, Mutex};

use record_processing::dataset::records_from_json_str;
use record_processing::pipeline::{Pipeline, PipelineObserver, StageKind, StageStats};
use record_processing::types::Value;

#[derive(Default)]
struct RecordingObserver {
    stages: Mutex<Vec<(StageKind, StageStats)>>,
}

impl PipelineObserver for RecordingObserver {
    fn on_stage(&self, kind: StageKind, stats: StageStats) {
        self.stages.lock().unwrap().push((kind, stats));
    }
}

fn packages() -> Vec<record_processing::types::Record> {
    records_from_json_str(include_str!("fixtures/packages.json")).unwrap()
}

#[test]
fn observer_sees_every_stage_of_a_full_chain() {
    let obs = Arc::new(RecordingObserver::default());

    let counts = Pipeline::new(packages())
        .with_observer(obs.clone())
        .for_each(|record, _idx| {
            let upper = record
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_uppercase)
                .unwrap_or_default();
            record.insert("name", Value::from(upper));
        })
        .filter(|record, _idx, _all| {
            record.get("license").and_then(Value::as_str) == Some("MIT")
        })
        .pluck(&["name", "keywords"])
        .reduce(0usize, |acc, record, _idx, _all| {
            acc + record
                .get("keywords")
                .and_then(Value::as_list)
                .map_or(0, <[Value]>::len)
        });

    // 2 + 2 + 1 + 7 keywords across the four MIT packages.
    assert_eq!(counts, 12);

    let stages = obs.stages.lock().unwrap().clone();
    let kinds: Vec<StageKind> = stages.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(
        kinds,
        vec![
            StageKind::ForEach,
            StageKind::Filter,
            StageKind::Pluck,
            StageKind::Reduce,
        ]
    );

    // for_each keeps the count, filter drops errorjs, reduce reports one output.
    assert_eq!(
        stages[0].1,
        StageStats {
            input_records: 5,
            output_records: 5
        }
    );
    assert_eq!(
        stages[1].1,
        StageStats {
            input_records: 5,
            output_records: 4
        }
    );
    assert_eq!(
        stages[3].1,
        StageStats {
            input_records: 4,
            output_records: 1
        }
    );
}

#[test]
fn pipeline_without_observer_runs_silently() {
    let out = Pipeline::new(packages())
        .filter(|record, _idx, _all| {
            record.get("license").and_then(Value::as_str) == Some("ISC")
        })
        .into_records();

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].get("name").and_then(Value::as_str), Some("errorjs"));
}
