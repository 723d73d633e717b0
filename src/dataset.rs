//! Decoding record datasets from JSON text.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"a":1}, {"a":2}]`
//! - A single JSON object, decoded as a one-record dataset
//! - Newline-delimited JSON (NDJSON): `{"a":1}\n{"a":2}\n`
//!
//! Decoding is purely in-memory; callers that keep datasets in files read them
//! first and pass the text here.

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::{Record, Value};

/// Decode JSON text into an in-memory record collection.
///
/// # Examples
///
/// ```rust
/// use record_processing::dataset::records_from_json_str;
/// use record_processing::types::Value;
///
/// # fn main() -> Result<(), record_processing::ProcessingError> {
/// let records = records_from_json_str(r#"[{"name":"lodash","license":"MIT"}]"#)?;
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].get("license"), Some(&Value::Utf8("MIT".to_string())));
/// # Ok(())
/// # }
/// ```
pub fn records_from_json_str(input: &str) -> ProcessingResult<Vec<Record>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ProcessingError::Decode {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (array or object).
    if let Ok(v) = serde_json::from_str::<Value>(trimmed) {
        match v {
            Value::List(items) => {
                let mut records = Vec::with_capacity(items.len());
                for (idx0, item) in items.into_iter().enumerate() {
                    match item {
                        Value::Record(record) => records.push(record),
                        _ => {
                            return Err(ProcessingError::Decode {
                                message: format!("row {} is not a json object", idx0 + 1),
                            });
                        }
                    }
                }
                Ok(records)
            }
            Value::Record(record) => Ok(vec![record]),
            _ => Err(ProcessingError::Decode {
                message: "json must be an object, an array of objects, or NDJSON".to_string(),
            }),
        }
    } else {
        // Fall back to NDJSON.
        let mut records = Vec::new();
        for (i, line) in trimmed.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let record =
                serde_json::from_str::<Record>(line).map_err(|e| ProcessingError::Decode {
                    message: format!("invalid ndjson at line {}: {}", i + 1, e),
                })?;
            records.push(record);
        }
        Ok(records)
    }
}

/// Decode a single JSON object into a [`Record`].
///
/// Unlike [`records_from_json_str`], the input must be exactly one object.
///
/// # Examples
///
/// ```rust
/// use record_processing::dataset::record_from_json_str;
/// use record_processing::types::Value;
///
/// # fn main() -> Result<(), record_processing::ProcessingError> {
/// let record = record_from_json_str(r#"{"name":"lodash","license":"MIT"}"#)?;
/// assert_eq!(record.get("name").and_then(Value::as_str), Some("lodash"));
/// # Ok(())
/// # }
/// ```
pub fn record_from_json_str(input: &str) -> ProcessingResult<Record> {
    let record = serde_json::from_str::<Record>(input)?;
    Ok(record)
}
