//! Single table of block kinds consumed by both the renderer and the
//! editing surfaces: menu labels, editor hints and default payloads.

use crate::schema::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    pub tag: BlockTag,
    /// Label used in insert menus
    pub label: &'static str,
    /// Placeholder shown by the editor for the block's main field
    pub placeholder: &'static str,
}

pub const TAGS: [TagInfo; 11] = [
    TagInfo {
        tag: BlockTag::Paragraph,
        label: "Paragraph",
        placeholder: "Write something...",
    },
    TagInfo {
        tag: BlockTag::Heading,
        label: "Heading",
        placeholder: "Untitled Heading",
    },
    TagInfo {
        tag: BlockTag::Image,
        label: "Image",
        placeholder: "Image URL",
    },
    TagInfo {
        tag: BlockTag::Gallery,
        label: "Gallery",
        placeholder: "Gallery caption",
    },
    TagInfo {
        tag: BlockTag::Video,
        label: "Video",
        placeholder: "Video URL (YouTube or file)",
    },
    TagInfo {
        tag: BlockTag::Quote,
        label: "Quote",
        placeholder: "Quote text",
    },
    TagInfo {
        tag: BlockTag::List,
        label: "List",
        placeholder: "List item",
    },
    TagInfo {
        tag: BlockTag::Product,
        label: "Product",
        placeholder: "Product ID",
    },
    TagInfo {
        tag: BlockTag::Divider,
        label: "Divider",
        placeholder: "",
    },
    TagInfo {
        tag: BlockTag::Html,
        label: "HTML",
        placeholder: "<div>...</div>",
    },
    TagInfo {
        tag: BlockTag::Embed,
        label: "Embed",
        placeholder: "Paste embed code",
    },
];

pub fn info(tag: BlockTag) -> &'static TagInfo {
    // TAGS is indexed in BlockTag::ALL order, checked by the tests below
    &TAGS[tag as usize]
}

/// The payload a freshly inserted block of this tag starts with.
pub fn default_data(tag: BlockTag) -> BlockData {
    match tag {
        BlockTag::Paragraph => BlockData::Paragraph(ParagraphData::default()),
        BlockTag::Heading => BlockData::Heading(HeadingData::default()),
        BlockTag::Image => BlockData::Image(ImageData::default()),
        BlockTag::Gallery => BlockData::Gallery(GalleryData::default()),
        BlockTag::Video => BlockData::Video(VideoData::default()),
        BlockTag::Quote => BlockData::Quote(QuoteData::default()),
        BlockTag::List => BlockData::List(ListData::default()),
        BlockTag::Product => BlockData::Product(ProductData::default()),
        BlockTag::Divider => BlockData::Divider(DividerData {}),
        BlockTag::Html => BlockData::Html(HtmlData::default()),
        BlockTag::Embed => BlockData::Embed(EmbedData::default()),
    }
}

/// A new block with a fresh id and the tag's default payload.
pub fn new_block(tag: BlockTag) -> ContentBlock {
    ContentBlock::new(BlockId::generate(), default_data(tag))
}
