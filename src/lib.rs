//! `record-processing` is a small library of single-pass, order-preserving
//! transformations over in-memory collections and string-keyed records.
//!
//! The functional surface is the [`processing`] module: `for_each`, `filter`,
//! `map`, `pluck_properties`/`pluck_many`, and `reduce`/`reduce_from_first`,
//! all synchronous and purely in-memory. Sample datasets decode from JSON text
//! via [`dataset::records_from_json_str`], and [`pipeline::Pipeline`] chains
//! the transformations over record collections with per-stage observability.
//!
//! ## Data model
//!
//! - [`types::Value`]: typed cell values ([`types::Value::Null`] is the
//!   explicit missing marker), including nested lists and records
//! - [`types::Record`]: an insertion-ordered mapping from string keys to values
//! - Collections of arbitrary elements are plain slices/`Vec<T>`; the
//!   transformation functions are generic over the element type
//!
//! ## Quick examples
//!
//! Generic collection transforms:
//!
//! ```rust
//! use record_processing::processing::{filter, map, reduce};
//!
//! let numbers = vec![1, 2, 3, 4];
//! let evens = filter(&numbers, |n, _idx, _all| n % 2 == 0);
//! let scaled = map(&evens, |n| n * 10);
//! let total = reduce(&scaled, 0, |acc, n, _idx, _all| acc + n);
//! assert_eq!(total, 60);
//! ```
//!
//! Record plucking:
//!
//! ```rust
//! use record_processing::processing::pluck_properties;
//! use record_processing::types::{Record, Value};
//!
//! let record = Record::from_entries([
//!     ("name", Value::from("lodash")),
//!     ("license", Value::from("MIT")),
//!     ("description", Value::from("Lodash modular utilities.")),
//! ]);
//!
//! let slim = pluck_properties(&record, &["name", "license"]);
//! assert_eq!(slim.keys().collect::<Vec<_>>(), vec!["name", "license"]);
//! assert_eq!(slim.get("license").and_then(Value::as_str), Some("MIT"));
//! ```
//!
//! Decoding and piping a record dataset:
//!
//! ```rust
//! use record_processing::dataset::records_from_json_str;
//! use record_processing::pipeline::Pipeline;
//! use record_processing::types::Value;
//!
//! # fn main() -> Result<(), record_processing::ProcessingError> {
//! let records = records_from_json_str(
//!     r#"[
//!         {"name":"lodash","license":"MIT"},
//!         {"name":"errorjs","license":"ISC"}
//!     ]"#,
//! )?;
//!
//! let mit = Pipeline::new(records)
//!     .filter(|record, _idx, _all| {
//!         record.get("license").and_then(Value::as_str) == Some("MIT")
//!     })
//!     .pluck(&["name"])
//!     .into_records();
//!
//! assert_eq!(mit.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`processing`]: the transformation functions
//! - [`types`]: value + record data model
//! - [`dataset`]: JSON/NDJSON record decoding
//! - [`pipeline`]: observable transformation chains
//! - [`error`]: error types used across the crate

pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod processing;
pub mod types;

pub use error::{ProcessingError, ProcessingResult};
