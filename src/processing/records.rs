use std::path::Path;

use mongodb::bson::{self, Document};
use serde_json::{Map, Value};

use crate::error::{Result, StoreError};

/// What an input file turned into: a batch of records or a single one.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Many(Vec<Document>),
    One(Document),
}

impl Payload {
    pub fn record_count(&self) -> usize {
        match self {
            Payload::Many(docs) => docs.len(),
            Payload::One(_) => 1,
        }
    }
}

/// Parse a JSON file into an import payload.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Payload> {
    let path = path.as_ref();
    let content = std::fs::read(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_slice(&content)
}

pub fn parse_str(content: &str) -> Result<Payload> {
    parse_slice(content.as_bytes())
}

/// Arrays become one document per element in array order; anything else is
/// a single document. Invalid UTF-8 is reported as a parse error.
pub fn parse_slice(content: &[u8]) -> Result<Payload> {
    let value: Value = serde_json::from_slice(content)
        .map_err(|e| StoreError::Parse(format!("invalid JSON: {}", e)))?;

    match value {
        Value::Array(items) if items.is_empty() => Err(StoreError::Parse(
            "top-level array is empty, nothing to insert".to_string(),
        )),
        Value::Array(items) => {
            let docs = items
                .into_iter()
                .enumerate()
                .map(|(idx, item)| match item {
                    Value::Object(map) => to_document(map),
                    other => Err(StoreError::Parse(format!(
                        "array element {} is {}, expected an object",
                        idx,
                        kind_of(&other)
                    ))),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Payload::Many(docs))
        }
        Value::Object(map) => Ok(Payload::One(to_document(map)?)),
        other => Err(StoreError::Parse(format!(
            "top-level value is {}, expected an object or an array of objects",
            kind_of(&other)
        ))),
    }
}

fn to_document(map: Map<String, Value>) -> Result<Document> {
    bson::to_document(&map).map_err(|e| StoreError::Parse(format!("not representable as BSON: {}", e)))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{Bson, doc};
    use std::io::Write;

    #[test]
    fn test_array_keeps_order() {
        let payload = parse_str(
            r#"[{"NBDC Research ID": "hum0386.v1", "title": "A"},
                {"NBDC Research ID": "hum0999.v1", "title": "B"}]"#,
        )
        .unwrap();

        assert_eq!(
            payload,
            Payload::Many(vec![
                doc! { "NBDC Research ID": "hum0386.v1", "title": "A" },
                doc! { "NBDC Research ID": "hum0999.v1", "title": "B" },
            ])
        );
        assert_eq!(payload.record_count(), 2);
    }

    #[test]
    fn test_object_is_single_record() {
        let payload = parse_str(r#"{"NBDC Research ID": "hum0001.v1", "nested": {"n": 3}}"#).unwrap();
        match payload {
            Payload::One(doc) => {
                assert_eq!(doc.get_str("NBDC Research ID").unwrap(), "hum0001.v1");
                let n = doc.get_document("nested").unwrap().get("n").unwrap();
                assert!(matches!(n, Bson::Int32(3) | Bson::Int64(3)));
            }
            other => panic!("expected single record, got {:?}", other),
        }
    }

    #[test]
    fn test_key_order_preserved() {
        let Payload::One(doc) = parse_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap() else {
            panic!("expected single record");
        };
        let keys: Vec<&str> = doc.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_empty_array_rejected() {
        let err = parse_str("[]").unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
        assert!(parse_str(" [ ]\n").is_err());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse_str(r#"[{"NBDC Research ID": "hum0386.v1""#).unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[test]
    fn test_non_object_records_rejected() {
        assert!(matches!(parse_str("42"), Err(StoreError::Parse(_))));
        assert!(matches!(
            parse_str(r#"[{"a": 1}, "oops"]"#),
            Err(StoreError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"a": 1}}, {{"a": 2}}, {{"a": 3}}]"#).unwrap();

        let payload = parse_file(file.path()).unwrap();
        assert_eq!(payload.record_count(), 3);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = parse_file("/nonexistent/humandbs.json").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"a\": \"\xff\"}").unwrap();

        let err = parse_file(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)), "got {:?}", err);
    }
}
