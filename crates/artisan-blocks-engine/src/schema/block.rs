use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

use crate::schema::payload::*;
use crate::schema::tag::BlockTag;

/// Identifier of a block within a post.
///
/// Assigned once when the block is created and never changed afterwards.
/// Persisted entries written by older clients may lack one, in which case
/// the id is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub String);

impl BlockId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A block whose tag is not part of [`BlockTag`]. Both the tag string and
/// the payload are kept verbatim so they can be shown and written back.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownData {
    pub tag: String,
    pub data: Value,
}

/// Typed payload of a block. The variant is the block's tag.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockData {
    Paragraph(ParagraphData),
    Heading(HeadingData),
    Image(ImageData),
    Gallery(GalleryData),
    Video(VideoData),
    Quote(QuoteData),
    List(ListData),
    Product(ProductData),
    Divider(DividerData),
    Html(HtmlData),
    Embed(EmbedData),
    Unknown(UnknownData),
}

#[derive(Debug, thiserror::Error)]
#[error("invalid {tag} payload: {source}")]
pub struct PayloadError {
    pub tag: BlockTag,
    #[source]
    pub source: serde_json::Error,
}

impl BlockData {
    /// The recognised tag, or `None` for [`BlockData::Unknown`].
    pub fn tag(&self) -> Option<BlockTag> {
        let tag = match self {
            BlockData::Paragraph(_) => BlockTag::Paragraph,
            BlockData::Heading(_) => BlockTag::Heading,
            BlockData::Image(_) => BlockTag::Image,
            BlockData::Gallery(_) => BlockTag::Gallery,
            BlockData::Video(_) => BlockTag::Video,
            BlockData::Quote(_) => BlockTag::Quote,
            BlockData::List(_) => BlockTag::List,
            BlockData::Product(_) => BlockTag::Product,
            BlockData::Divider(_) => BlockTag::Divider,
            BlockData::Html(_) => BlockTag::Html,
            BlockData::Embed(_) => BlockTag::Embed,
            BlockData::Unknown(_) => return None,
        };
        Some(tag)
    }

    /// The tag as written on the wire, including unknown tags.
    pub fn tag_name(&self) -> &str {
        match self {
            BlockData::Unknown(unknown) => &unknown.tag,
            known => known.tag().map(|tag| tag.as_str()).unwrap_or_default(),
        }
    }

    /// True when both payloads belong to the same tag.
    pub fn same_tag(&self, other: &BlockData) -> bool {
        self.tag_name() == other.tag_name()
    }

    /// Decode a raw payload for the given wire tag.
    ///
    /// Unknown tags never fail and keep their payload untouched. For known
    /// tags a `null` payload, or a `null` member anywhere inside it, reads
    /// as absent so the field takes its default.
    pub fn decode(tag: &str, data: Value) -> Result<Self, PayloadError> {
        let Ok(known) = tag.parse::<BlockTag>() else {
            return Ok(BlockData::Unknown(UnknownData {
                tag: tag.to_string(),
                data,
            }));
        };

        let data = match data {
            Value::Null => Value::Object(Map::new()),
            data => drop_nulls(data),
        };

        let decoded = match known {
            BlockTag::Paragraph => serde_json::from_value(data).map(BlockData::Paragraph),
            BlockTag::Heading => serde_json::from_value(data).map(BlockData::Heading),
            BlockTag::Image => serde_json::from_value(data).map(BlockData::Image),
            BlockTag::Gallery => serde_json::from_value(data).map(BlockData::Gallery),
            BlockTag::Video => serde_json::from_value(data).map(BlockData::Video),
            BlockTag::Quote => serde_json::from_value(data).map(BlockData::Quote),
            BlockTag::List => serde_json::from_value(data).map(BlockData::List),
            BlockTag::Product => serde_json::from_value(data).map(BlockData::Product),
            BlockTag::Divider => serde_json::from_value(data).map(BlockData::Divider),
            BlockTag::Html => serde_json::from_value(data).map(BlockData::Html),
            BlockTag::Embed => serde_json::from_value(data).map(BlockData::Embed),
        };

        decoded.map_err(|source| PayloadError { tag: known, source })
    }
}

fn drop_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, member)| !member.is_null())
                .map(|(key, member)| (key, drop_nulls(member)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(drop_nulls).collect()),
        other => other,
    }
}

/// Serializes only the payload; the tag is written by [`ContentBlock`].
impl Serialize for BlockData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BlockData::Paragraph(data) => data.serialize(serializer),
            BlockData::Heading(data) => data.serialize(serializer),
            BlockData::Image(data) => data.serialize(serializer),
            BlockData::Gallery(data) => data.serialize(serializer),
            BlockData::Video(data) => data.serialize(serializer),
            BlockData::Quote(data) => data.serialize(serializer),
            BlockData::List(data) => data.serialize(serializer),
            BlockData::Product(data) => data.serialize(serializer),
            BlockData::Divider(data) => data.serialize(serializer),
            BlockData::Html(data) => data.serialize(serializer),
            BlockData::Embed(data) => data.serialize(serializer),
            BlockData::Unknown(unknown) => unknown.data.serialize(serializer),
        }
    }
}

/// One unit of post content: `{ id, type, data }` on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    pub id: BlockId,
    pub data: BlockData,
    /// Top-level members other than `id`, `type` and `data`, written back
    /// as they were read
    pub extra: Map<String, Value>,
}

impl ContentBlock {
    pub fn new(id: impl Into<BlockId>, data: BlockData) -> Self {
        Self {
            id: id.into(),
            data,
            extra: Map::new(),
        }
    }

    pub fn tag(&self) -> Option<BlockTag> {
        self.data.tag()
    }

    pub fn tag_name(&self) -> &str {
        self.data.tag_name()
    }
}

impl Serialize for ContentBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3 + self.extra.len()))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("type", self.data.tag_name())?;
        map.serialize_entry("data", &self.data)?;
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
