//! Core data model types.
//!
//! Collections are plain slices/`Vec<T>`; the transformation functions in
//! [`crate::processing`] are generic over the element type. Records from the
//! sample datasets are represented as [`Record`]s: ordered mappings from string
//! keys to typed [`Value`]s.

use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single typed value in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
    /// Ordered list of values.
    List(Vec<Value>),
    /// Nested record.
    Record(Record),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the string value, if this is [`Value::Utf8`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the integer value, if this is [`Value::Int64`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the float value, if this is [`Value::Float64`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Borrow the list items, if this is [`Value::List`].
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Borrow the nested record, if this is [`Value::Record`].
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Utf8(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Utf8(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(v)
    }
}

/// An ordered mapping from string keys to [`Value`]s.
///
/// Entries keep insertion order: iteration, [`Record::keys`], and serialization
/// all yield keys in the order they were first inserted. Re-inserting an
/// existing key replaces its value without moving the key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    entries: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record from key/value entries, in order.
    ///
    /// A duplicated key keeps its first position; the later value wins.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut record = Self::new();
        for (key, value) in entries {
            record.insert(key, value);
        }
        record
    }

    /// Insert or replace a value under `key`.
    ///
    /// Returns the previous value if the key was already present. The key keeps
    /// its original position on replacement.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate key/value entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Int64(v) => serializer.serialize_i64(*v),
            Value::Float64(v) => serializer.serialize_f64(*v),
            Value::Utf8(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Record(record) => record.serialize(serializer),
        }
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn record_from_map<'de, A>(mut access: A) -> Result<Record, A::Error>
where
    A: MapAccess<'de>,
{
    let mut record = Record::new();
    while let Some((key, value)) = access.next_entry::<String, Value>()? {
        record.insert(key, value);
    }
    Ok(record)
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a json-like value")
            }

            fn visit_unit<E>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Value::deserialize(deserializer)
            }

            fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
                Ok(Value::Bool(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
                Ok(Value::Int64(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Value, E>
            where
                E: serde::de::Error,
            {
                i64::try_from(v)
                    .map(Value::Int64)
                    .map_err(|_| E::custom("integer out of range for i64"))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
                Ok(Value::Float64(v))
            }

            fn visit_str<E>(self, v: &str) -> Result<Value, E> {
                Ok(Value::Utf8(v.to_string()))
            }

            fn visit_string<E>(self, v: String) -> Result<Value, E> {
                Ok(Value::Utf8(v))
            }

            fn visit_seq<A>(self, mut access: A) -> Result<Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = access.next_element::<Value>()? {
                    items.push(item);
                }
                Ok(Value::List(items))
            }

            fn visit_map<A>(self, access: A) -> Result<Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                record_from_map(access).map(Value::Record)
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a json object")
            }

            fn visit_map<A>(self, access: A) -> Result<Record, A::Error>
            where
                A: MapAccess<'de>,
            {
                record_from_map(access)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::{Record, Value};

    #[test]
    fn record_preserves_insertion_order() {
        let record = Record::from_entries([
            ("name", Value::from("lodash")),
            ("license", Value::from("MIT")),
            ("stars", Value::from(100)),
        ]);

        assert_eq!(
            record.keys().collect::<Vec<_>>(),
            vec!["name", "license", "stars"]
        );
        assert_eq!(record.get("license"), Some(&Value::Utf8("MIT".to_string())));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn insert_replaces_in_place_without_moving_the_key() {
        let mut record = Record::from_entries([
            ("name", Value::from("lodash")),
            ("license", Value::from("MIT")),
        ]);

        let previous = record.insert("name", Value::from("underscore"));

        assert_eq!(previous, Some(Value::Utf8("lodash".to_string())));
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["name", "license"]);
        assert_eq!(record.get("name").and_then(Value::as_str), Some("underscore"));
    }

    #[test]
    fn record_serializes_to_json_in_insertion_order() {
        let record = Record::from_entries([
            ("name", Value::from("lodash")),
            ("keywords", Value::from(vec![Value::from("util")])),
            ("deprecated", Value::Null),
        ]);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"lodash","keywords":["util"],"deprecated":null}"#
        );
    }

    #[test]
    fn record_decodes_from_json_preserving_key_order() {
        let record: Record =
            serde_json::from_str(r#"{"b":1,"a":true,"nested":{"z":null,"y":[1,2.5,"x"]}}"#)
                .unwrap();

        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["b", "a", "nested"]);
        assert_eq!(record.get("b"), Some(&Value::Int64(1)));

        let nested = record.get("nested").and_then(Value::as_record).unwrap();
        assert_eq!(nested.keys().collect::<Vec<_>>(), vec!["z", "y"]);
        assert!(nested.get("z").unwrap().is_null());
        assert_eq!(
            nested.get("y"),
            Some(&Value::List(vec![
                Value::Int64(1),
                Value::Float64(2.5),
                Value::Utf8("x".to_string()),
            ]))
        );
    }
}
