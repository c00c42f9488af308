use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of block kinds a post can contain.
///
/// The wire name of each variant is its lowercase form (`"paragraph"`,
/// `"heading"`, ...). Strings outside this set are not an error at the
/// document level; they decode to [`crate::BlockData::Unknown`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    Paragraph,
    Heading,
    Image,
    Gallery,
    Video,
    Quote,
    List,
    Product,
    Divider,
    Html,
    Embed,
}

impl BlockTag {
    /// Every tag, in the order the insert menu offers them.
    pub const ALL: [BlockTag; 11] = [
        BlockTag::Paragraph,
        BlockTag::Heading,
        BlockTag::Image,
        BlockTag::Gallery,
        BlockTag::Video,
        BlockTag::Quote,
        BlockTag::List,
        BlockTag::Product,
        BlockTag::Divider,
        BlockTag::Html,
        BlockTag::Embed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockTag::Paragraph => "paragraph",
            BlockTag::Heading => "heading",
            BlockTag::Image => "image",
            BlockTag::Gallery => "gallery",
            BlockTag::Video => "video",
            BlockTag::Quote => "quote",
            BlockTag::List => "list",
            BlockTag::Product => "product",
            BlockTag::Divider => "divider",
            BlockTag::Html => "html",
            BlockTag::Embed => "embed",
        }
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown block tag: {0}")]
pub struct UnknownTag(pub String);

impl FromStr for BlockTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}
