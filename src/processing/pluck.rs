//! Record key projection.

use crate::types::{Record, Value};

use super::map::map;

/// Builds a new record containing exactly the requested `properties`, in
/// request order.
///
/// Each key is bound to a clone of the corresponding value from `record`; keys
/// missing from the source are bound to [`Value::Null`], so the output key set
/// always equals the requested key set. The source record is never mutated.
pub fn pluck_properties<S>(record: &Record, properties: &[S]) -> Record
where
    S: AsRef<str>,
{
    let mut result = Record::new();
    for key in properties {
        let key = key.as_ref();
        let value = record.get(key).cloned().unwrap_or(Value::Null);
        result.insert(key, value);
    }
    result
}

/// Applies [`pluck_properties`] to every record, returning the projected
/// records in the same order as the input.
///
/// This is the collection form of plucking; for a single record use
/// [`pluck_properties`] directly.
pub fn pluck_many<S>(records: &[Record], properties: &[S]) -> Vec<Record>
where
    S: AsRef<str>,
{
    map(records, |record| pluck_properties(record, properties))
}
