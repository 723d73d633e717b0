//! Observable record pipelines.
//!
//! [`Pipeline`] chains the transformations from [`crate::processing`] over a
//! collection of [`Record`]s and reports per-stage record counts to an optional
//! [`PipelineObserver`].
//!
//! ## Example
//!
//! ```rust
//! use record_processing::pipeline::Pipeline;
//! use record_processing::types::Value;
//! use record_processing::dataset::records_from_json_str;
//!
//! # fn main() -> Result<(), record_processing::ProcessingError> {
//! let records = records_from_json_str(
//!     r#"[
//!         {"name":"lodash","license":"MIT"},
//!         {"name":"errorjs","license":"ISC"}
//!     ]"#,
//! )?;
//!
//! let names = Pipeline::new(records)
//!     .filter(|record, _idx, _all| {
//!         record.get("license").and_then(Value::as_str) == Some("MIT")
//!     })
//!     .pluck(&["name"])
//!     .into_records();
//!
//! assert_eq!(names.len(), 1);
//! assert_eq!(names[0].get("name").and_then(Value::as_str), Some("lodash"));
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;

use crate::processing::{filter, for_each, map, pluck_many, reduce};
use crate::types::Record;

/// Which transformation a stage ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    /// In-place traversal.
    ForEach,
    /// Selection by predicate.
    Filter,
    /// Record transformation.
    Map,
    /// Key projection.
    Pluck,
    /// Terminal fold.
    Reduce,
}

/// Record counts reported after each stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageStats {
    /// Records entering the stage.
    pub input_records: usize,
    /// Records leaving the stage (always 1 for `Reduce`).
    pub output_records: usize,
}

/// Observer hook for pipeline stages.
///
/// Implementors can record metrics or logs.
pub trait PipelineObserver: Send + Sync {
    /// Called after each stage completes.
    fn on_stage(&self, _kind: StageKind, _stats: StageStats) {}
}

/// Logs stage completions to stderr.
///
/// ```rust
/// use std::sync::Arc;
///
/// use record_processing::pipeline::{Pipeline, StdErrObserver};
/// use record_processing::types::Record;
///
/// let out = Pipeline::new(vec![Record::new()])
///     .with_observer(Arc::new(StdErrObserver::default()))
///     .filter(|record, _idx, _all| !record.is_empty())
///     .into_records();
/// assert!(out.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl PipelineObserver for StdErrObserver {
    fn on_stage(&self, kind: StageKind, stats: StageStats) {
        eprintln!(
            "[pipeline][{kind:?}] in={} out={}",
            stats.input_records, stats.output_records
        );
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn PipelineObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn PipelineObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl PipelineObserver for CompositeObserver {
    fn on_stage(&self, kind: StageKind, stats: StageStats) {
        for o in &self.observers {
            o.on_stage(kind, stats);
        }
    }
}

/// An owned chain of record transformations with optional per-stage
/// observability.
///
/// Every stage delegates to the corresponding function in
/// [`crate::processing`]; the pipeline only adds ownership plumbing and
/// observer reporting.
pub struct Pipeline {
    records: Vec<Record>,
    observer: Option<Arc<dyn PipelineObserver>>,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("records_len", &self.records.len())
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Pipeline {
    /// Create a pipeline over an owned record collection.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            observer: None,
        }
    }

    /// Attach an observer for stage events (metrics/logging).
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Run [`for_each`] over the records, mutating them in place.
    pub fn for_each<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut Record, usize),
    {
        let len = self.records.len();
        for_each(&mut self.records, callback);
        self.emit(StageKind::ForEach, len, len);
        self
    }

    /// Keep only records matching `predicate`.
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: FnMut(&Record, usize, &[Record]) -> bool,
    {
        let input = self.records.len();
        self.records = filter(&self.records, predicate);
        self.emit(StageKind::Filter, input, self.records.len());
        self
    }

    /// Replace every record with `mapper`'s output.
    pub fn map<F>(mut self, mapper: F) -> Self
    where
        F: FnMut(&Record) -> Record,
    {
        let input = self.records.len();
        self.records = map(&self.records, mapper);
        self.emit(StageKind::Map, input, self.records.len());
        self
    }

    /// Project every record onto the requested `properties`.
    pub fn pluck<S>(mut self, properties: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        let input = self.records.len();
        self.records = pluck_many(&self.records, properties);
        self.emit(StageKind::Pluck, input, self.records.len());
        self
    }

    /// Terminal fold over the records; consumes the pipeline.
    pub fn reduce<A, F>(self, accumulator: A, callback: F) -> A
    where
        F: FnMut(A, &Record, usize, &[Record]) -> A,
    {
        let input = self.records.len();
        let out = reduce(&self.records, accumulator, callback);
        self.emit(StageKind::Reduce, input, 1);
        out
    }

    /// Borrow the current records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consume the pipeline, returning the records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    fn emit(&self, kind: StageKind, input: usize, output: usize) {
        if let Some(obs) = &self.observer {
            obs.on_stage(
                kind,
                StageStats {
                    input_records: input,
                    output_records: output,
                },
            );
        }
    }
}
