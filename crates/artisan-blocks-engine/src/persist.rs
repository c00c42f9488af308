//! Persisted document shape: a JSON array of `{ id, type, data }` objects.
//!
//! Reading is tolerant element by element (see [`BlockEntry::from_value`]);
//! only a document whose top level is not an array is rejected.

use serde_json::Value;

use crate::schema::BlockEntry;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Document must be a JSON array of blocks, found {0}")]
    NotAnArray(&'static str),
}

pub fn decode_document(json: &str) -> Result<Vec<BlockEntry>, DecodeError> {
    let value: Value = serde_json::from_str(json)?;
    decode_value(value)
}

pub fn decode_value(value: Value) -> Result<Vec<BlockEntry>, DecodeError> {
    match value {
        Value::Array(items) => Ok(items.into_iter().map(BlockEntry::from_value).collect()),
        other => Err(DecodeError::NotAnArray(json_kind(&other))),
    }
}

/// Pretty-printed JSON, the form posts are stored in.
pub fn encode_document(entries: &[BlockEntry]) -> Result<String, DecodeError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
