use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::schema::block::{BlockData, BlockId, ContentBlock};
use crate::schema::tag::BlockTag;

/// What is wrong with an entry that could not be read as a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryProblem {
    NotAnObject,
    MissingType,
    /// The tag is known but its `data` has the wrong shape
    Payload { tag: BlockTag, message: String },
}

impl fmt::Display for EntryProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryProblem::NotAnObject => f.write_str("entry is not an object"),
            EntryProblem::MissingType => f.write_str("entry has no type"),
            EntryProblem::Payload { message, .. } => f.write_str(message),
        }
    }
}

/// An entry kept exactly as it was read so it can be shown and saved back.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidBlock {
    pub raw: Value,
    pub problem: EntryProblem,
}

impl InvalidBlock {
    pub fn id(&self) -> Option<&str> {
        self.raw.get("id").and_then(Value::as_str)
    }
}

/// One element of a persisted document, decoded as far as its shape allows.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockEntry {
    Block(ContentBlock),
    Invalid(InvalidBlock),
}

impl BlockEntry {
    /// Decode a single element. Never fails: whatever cannot be read as a
    /// block is kept as [`BlockEntry::Invalid`].
    pub fn from_value(value: Value) -> Self {
        let Value::Object(map) = &value else {
            return BlockEntry::invalid(value, EntryProblem::NotAnObject);
        };

        let Some(tag) = map.get("type").and_then(Value::as_str) else {
            return BlockEntry::invalid(value, EntryProblem::MissingType);
        };

        let id = match map.get("id") {
            Some(Value::String(id)) => BlockId::from(id.as_str()),
            Some(Value::Number(id)) => BlockId::from(id.to_string()),
            _ => BlockId::default(),
        };
        let data = map.get("data").cloned().unwrap_or(Value::Null);
        let extra = map
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "id" | "type" | "data"))
            .map(|(key, member)| (key.clone(), member.clone()))
            .collect();

        match BlockData::decode(tag, data) {
            Ok(data) => BlockEntry::Block(ContentBlock { id, data, extra }),
            Err(err) => {
                let problem = EntryProblem::Payload {
                    tag: err.tag,
                    message: err.to_string(),
                };
                BlockEntry::invalid(value, problem)
            }
        }
    }

    fn invalid(raw: Value, problem: EntryProblem) -> Self {
        BlockEntry::Invalid(InvalidBlock { raw, problem })
    }

    pub fn as_block(&self) -> Option<&ContentBlock> {
        match self {
            BlockEntry::Block(block) => Some(block),
            BlockEntry::Invalid(_) => None,
        }
    }

    /// The entry's id, if it carries a non-empty one.
    pub fn id(&self) -> Option<&str> {
        match self {
            BlockEntry::Block(block) if !block.id.is_empty() => Some(block.id.as_str()),
            BlockEntry::Block(_) => None,
            BlockEntry::Invalid(invalid) => invalid.id(),
        }
    }

    pub fn tag_name(&self) -> Option<&str> {
        match self {
            BlockEntry::Block(block) => Some(block.tag_name()),
            BlockEntry::Invalid(invalid) => invalid.raw.get("type").and_then(Value::as_str),
        }
    }
}

impl From<ContentBlock> for BlockEntry {
    fn from(block: ContentBlock) -> Self {
        BlockEntry::Block(block)
    }
}

impl Serialize for BlockEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BlockEntry::Block(block) => block.serialize(serializer),
            BlockEntry::Invalid(invalid) => invalid.raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for BlockEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(BlockEntry::from_value)
    }
}
