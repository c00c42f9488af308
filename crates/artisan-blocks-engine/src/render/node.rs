use serde::{Deserialize, Serialize};

use crate::render::video::VideoPlayer;
use crate::schema::{Figure, HeadingLevel, ListStyle};

/// Whether raw markup from html and embed blocks is injected as-is or shown
/// as escaped text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawMarkupPolicy {
    /// Inject the author's markup verbatim
    #[default]
    Trust,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub raw_markup: RawMarkupPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawMarkupKind {
    Html,
    Embed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub key: String,
    pub figure: Figure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub key: String,
    pub text: String,
}

/// Display node for one block, ready for a frontend to lay out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    Paragraph {
        text: String,
    },
    Heading {
        level: HeadingLevel,
        text: String,
    },
    Image(Figure),
    Gallery {
        images: Vec<GalleryItem>,
        caption: Option<String>,
    },
    Video {
        player: VideoPlayer,
        caption: Option<String>,
    },
    Quote {
        text: String,
        author: Option<String>,
        source: Option<String>,
    },
    List {
        style: ListStyle,
        items: Vec<ListEntry>,
    },
    Product {
        product_id: String,
        title: String,
        description: String,
        image: String,
    },
    Divider,
    RawMarkup {
        kind: RawMarkupKind,
        markup: String,
        policy: RawMarkupPolicy,
        caption: Option<String>,
    },
    /// Block with a tag outside the schema, shown with its raw payload
    Unknown {
        tag: String,
        payload: String,
    },
    /// Entry that is not a block at all
    Invalid {
        reason: String,
        raw: String,
    },
    /// Block that failed to render
    Failed {
        tag: String,
        message: String,
    },
}

impl RenderNode {
    /// True for the placeholder nodes that stand in for a broken entry.
    pub fn is_diagnostic(&self) -> bool {
        matches!(
            self,
            RenderNode::Unknown { .. } | RenderNode::Invalid { .. } | RenderNode::Failed { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    /// Stable key: the block id, or a positional key for id-less entries
    pub key: String,
    pub node: RenderNode,
}
