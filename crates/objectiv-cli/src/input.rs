//! Event input parsing.

use objectiv_schema::Event;
use serde::de::{self, DeserializeSeed, Deserializer, SeqAccess, Visitor};
use serde_json::Value;
use std::fmt;
use std::io::{self, Read};
use thiserror::Error;

/// Errors while reading events.
#[derive(Error, Debug)]
pub enum InputError {
    /// Reading the file or stdin failed.
    #[error("failed to read {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: io::Error,
    },
    /// The input is not a sequence of JSON values.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A record is valid JSON but not an event.
    #[error("record {index} is not an event: {source}")]
    InvalidEvent {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads raw input from a file, or stdin when no path is given.
pub fn read_input(path: Option<&str>) -> Result<String, InputError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| InputError::Io {
            source_name: path.to_string(),
            source,
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| InputError::Io {
                    source_name: "stdin".to_string(),
                    source,
                })?;
            Ok(buffer)
        }
    }
}

/// Splits input into at most `limit` JSON records.
///
/// A top-level array yields its elements; anything else is read as a stream of
/// whitespace-separated values, which covers JSON lines. Nothing past the
/// limit is parsed, so trailing garbage beyond it is not an error.
pub fn parse_records(input: &str, limit: Option<usize>) -> Result<Vec<Value>, InputError> {
    if input.trim_start().starts_with('[') {
        return parse_array(input, limit);
    }
    serde_json::Deserializer::from_str(input)
        .into_iter::<Value>()
        .take(limit.unwrap_or(usize::MAX))
        .collect::<Result<Vec<_>, _>>()
        .map_err(InputError::from)
}

fn parse_array(input: &str, limit: Option<usize>) -> Result<Vec<Value>, InputError> {
    let mut records = Vec::new();
    let mut deserializer = serde_json::Deserializer::from_str(input);
    let result = ArrayPrefix {
        limit,
        records: &mut records,
    }
    .deserialize(&mut deserializer);

    match result {
        Ok(()) => {
            deserializer.end()?;
            Ok(records)
        }
        Err(_) if limit == Some(records.len()) => Ok(records),
        Err(e) => Err(e.into()),
    }
}

/// Collects array elements until `limit` is reached, then stops reading.
struct ArrayPrefix<'a> {
    limit: Option<usize>,
    records: &'a mut Vec<Value>,
}

impl<'de, 'a> DeserializeSeed<'de> for ArrayPrefix<'a> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        deserializer.deserialize_seq(self)
    }
}

impl<'de, 'a> Visitor<'de> for ArrayPrefix<'a> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an array of events")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<(), A::Error> {
        let records = self.records;
        while self.limit.map_or(true, |max| records.len() < max) {
            match seq.next_element::<Value>()? {
                Some(record) => records.push(record),
                None => return Ok(()),
            }
        }
        // abandons the rest of the array; the caller recognises the full buffer
        Err(de::Error::custom("record limit reached"))
    }
}

/// Converts a record into an event.
pub fn parse_event(index: usize, record: Value) -> Result<Event, InputError> {
    serde_json::from_value(record).map_err(|source| InputError::InvalidEvent { index, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_and_lines_yield_same_records() {
        let lines = "{\"_type\":\"PressEvent\"}\n{\"_type\":\"VisibleEvent\"}\n";
        let array = "[{\"_type\":\"PressEvent\"},{\"_type\":\"VisibleEvent\"}]";
        assert_eq!(
            parse_records(lines, None).unwrap(),
            parse_records(array, None).unwrap()
        );
        assert_eq!(parse_records(lines, None).unwrap().len(), 2);
    }

    #[test]
    fn empty_input_has_no_records() {
        assert!(parse_records("  \n", None).unwrap().is_empty());
    }

    #[test]
    fn limit_stops_before_malformed_line() {
        let lines = "{\"_type\":\"PressEvent\"}\n{not json\n";
        assert_eq!(parse_records(lines, Some(1)).unwrap().len(), 1);
        assert!(matches!(parse_records(lines, None), Err(InputError::Json(_))));
    }

    #[test]
    fn limit_stops_before_malformed_array_element() {
        let array = "[{\"_type\":\"PressEvent\"}, {\"_type\":\"VisibleEvent\"}, {not json";
        let records = parse_records(array, Some(2)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["_type"], "VisibleEvent");
        assert!(matches!(parse_records(array, Some(3)), Err(InputError::Json(_))));
        assert!(matches!(parse_records(array, None), Err(InputError::Json(_))));
    }

    #[test]
    fn zero_limit_reads_nothing() {
        assert!(parse_records("[{not json", Some(0)).unwrap().is_empty());
        assert!(parse_records("{not json", Some(0)).unwrap().is_empty());
    }

    #[test]
    fn trailing_data_after_array_is_rejected() {
        assert!(parse_records("[] {}", None).is_err());
    }

    #[test]
    fn record_without_type_is_invalid() {
        let err = parse_event(3, serde_json::json!({ "id": "x" })).unwrap_err();
        assert!(matches!(err, InputError::InvalidEvent { index: 3, .. }));
    }
}
