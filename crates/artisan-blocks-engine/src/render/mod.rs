//! Read-only rendering of a post into display nodes.
//!
//! [`render`] walks the document once and renders every entry inside its
//! own fault boundary: an entry that cannot be rendered turns into a
//! [`RenderNode::Failed`] placeholder and its siblings are unaffected. The
//! output is the same for the same input and nothing is mutated.
//!
//! ```rust
//! use artisan_blocks_engine::render::{render, RenderNode, RenderOptions};
//! use artisan_blocks_engine::persist::decode_document;
//!
//! let json = r#"[
//!     {"id": "a", "type": "heading", "data": {"text": "Hello", "level": 2}},
//!     {"id": "b", "type": "divider", "data": {}}
//! ]"#;
//! let entries = decode_document(json).unwrap();
//! let rendered = render(&entries, &RenderOptions::default());
//!
//! assert_eq!(rendered.len(), 2);
//! assert!(matches!(rendered[1].node, RenderNode::Divider));
//! ```

pub mod html;
pub mod node;
pub mod video;

pub use html::to_html;
pub use node::{
    GalleryItem, ListEntry, RawMarkupKind, RawMarkupPolicy, RenderNode, RenderOptions,
    RenderedBlock,
};
pub use video::{VideoPlayer, resolve_player, youtube_video_id};

use crate::schema::*;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("{message}")]
    Payload { tag: BlockTag, message: String },
    #[error("could not dump payload: {0}")]
    Dump(#[from] serde_json::Error),
}

impl RenderError {
    fn tag_name(&self) -> String {
        match self {
            RenderError::Payload { tag, .. } => tag.to_string(),
            RenderError::Dump(_) => "unknown".to_string(),
        }
    }
}

/// Render a whole document. Never fails; broken entries become diagnostic
/// nodes in place.
pub fn render(entries: &[BlockEntry], options: &RenderOptions) -> Vec<RenderedBlock> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let key = block_key(index, entry);
            let node = match render_entry(&key, entry, options) {
                Ok(node) => node,
                Err(err) => {
                    log::warn!("Block {key} could not be rendered: {err}");
                    RenderNode::Failed {
                        tag: err.tag_name(),
                        message: err.to_string(),
                    }
                }
            };
            RenderedBlock { key, node }
        })
        .collect()
}

/// Key for an entry: its id when it has one, its position otherwise.
pub fn block_key(index: usize, entry: &BlockEntry) -> String {
    entry
        .id()
        .map(str::to_string)
        .unwrap_or_else(|| format!("block-{index}"))
}

fn render_entry(
    key: &str,
    entry: &BlockEntry,
    options: &RenderOptions,
) -> Result<RenderNode, RenderError> {
    match entry {
        BlockEntry::Block(block) => render_data(key, &block.data, options),
        BlockEntry::Invalid(invalid) => match &invalid.problem {
            EntryProblem::Payload { tag, message } => Err(RenderError::Payload {
                tag: *tag,
                message: message.clone(),
            }),
            EntryProblem::NotAnObject | EntryProblem::MissingType => Ok(RenderNode::Invalid {
                reason: invalid.problem.to_string(),
                raw: serde_json::to_string(&invalid.raw)?,
            }),
        },
    }
}

fn render_data(
    key: &str,
    data: &BlockData,
    options: &RenderOptions,
) -> Result<RenderNode, RenderError> {
    let node = match data {
        BlockData::Paragraph(paragraph) => RenderNode::Paragraph {
            text: paragraph.text.clone(),
        },
        BlockData::Heading(heading) => RenderNode::Heading {
            level: heading.level,
            text: heading.text.clone(),
        },
        BlockData::Image(image) => RenderNode::Image(image.clone()),
        BlockData::Gallery(gallery) => RenderNode::Gallery {
            images: gallery
                .images
                .iter()
                .enumerate()
                .map(|(i, figure)| GalleryItem {
                    key: format!("{key}-{i}"),
                    figure: figure.clone(),
                })
                .collect(),
            caption: non_empty(&gallery.caption),
        },
        BlockData::Video(video) => RenderNode::Video {
            player: resolve_player(video),
            caption: non_empty(&video.caption),
        },
        BlockData::Quote(quote) => RenderNode::Quote {
            text: quote.text.clone(),
            author: non_empty(&quote.author),
            source: non_empty(&quote.source),
        },
        BlockData::List(list) => RenderNode::List {
            style: list.style,
            items: list
                .items
                .iter()
                .enumerate()
                .map(|(i, text)| ListEntry {
                    key: format!("{key}-{i}"),
                    text: text.clone(),
                })
                .collect(),
        },
        BlockData::Product(product) => RenderNode::Product {
            product_id: product.product_id.clone(),
            title: product.title.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
        },
        BlockData::Divider(_) => RenderNode::Divider,
        BlockData::Html(html) => RenderNode::RawMarkup {
            kind: RawMarkupKind::Html,
            markup: html.html.clone(),
            policy: options.raw_markup,
            caption: None,
        },
        BlockData::Embed(embed) => RenderNode::RawMarkup {
            kind: RawMarkupKind::Embed,
            markup: embed.embed.clone(),
            policy: options.raw_markup,
            caption: non_empty(&embed.caption),
        },
        BlockData::Unknown(unknown) => RenderNode::Unknown {
            tag: unknown.tag.clone(),
            payload: serde_json::to_string_pretty(&unknown.data)?,
        },
    };
    Ok(node)
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::decode_document;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render_json(value: serde_json::Value) -> Vec<RenderedBlock> {
        let entries = decode_document(&value.to_string()).unwrap();
        render(&entries, &RenderOptions::default())
    }

    #[test]
    fn test_heading_then_divider() {
        let rendered = render_json(json!([
            { "id": "a", "type": "heading", "data": { "text": "Hello", "level": 2 } },
            { "id": "b", "type": "divider", "data": {} }
        ]));

        assert_eq!(
            rendered,
            vec![
                RenderedBlock {
                    key: "a".to_string(),
                    node: RenderNode::Heading {
                        level: HeadingLevel::H2,
                        text: "Hello".to_string(),
                    },
                },
                RenderedBlock {
                    key: "b".to_string(),
                    node: RenderNode::Divider,
                },
            ]
        );
    }

    #[test]
    fn test_ordered_list_keeps_item_order() {
        let rendered = render_json(json!([
            { "id": "c", "type": "list", "data": { "items": ["x", "y"], "style": "ordered" } }
        ]));

        assert_eq!(
            rendered[0].node,
            RenderNode::List {
                style: ListStyle::Ordered,
                items: vec![
                    ListEntry {
                        key: "c-0".to_string(),
                        text: "x".to_string(),
                    },
                    ListEntry {
                        key: "c-1".to_string(),
                        text: "y".to_string(),
                    },
                ],
            }
        );
    }

    #[test]
    fn test_unknown_tag_without_id_is_one_diagnostic() {
        let rendered = render_json(json!([{ "type": "bogus", "data": {} }]));

        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].key, "block-0");
        assert_eq!(
            rendered[0].node,
            RenderNode::Unknown {
                tag: "bogus".to_string(),
                payload: "{}".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_tag_dumps_payload() {
        let rendered = render_json(json!([
            { "id": "q", "type": "poll", "data": { "question": "Tea or coffee?" } }
        ]));

        let RenderNode::Unknown { tag, payload } = &rendered[0].node else {
            panic!("expected an unknown node");
        };
        assert_eq!(tag, "poll");
        assert!(payload.contains("\"question\""));
        assert!(payload.contains("Tea or coffee?"));
    }

    #[test]
    fn test_bad_payload_is_isolated() {
        let rendered = render_json(json!([
            { "id": "1", "type": "paragraph", "data": { "text": "before" } },
            { "id": "2", "type": "list", "data": { "items": 12 } },
            { "id": "3", "type": "paragraph", "data": { "text": "after" } }
        ]));

        assert_eq!(rendered.len(), 3);
        assert_eq!(
            rendered[0].node,
            RenderNode::Paragraph {
                text: "before".to_string()
            }
        );
        let RenderNode::Failed { tag, message } = &rendered[1].node else {
            panic!("expected a failed node");
        };
        assert_eq!(tag, "list");
        assert!(message.contains("invalid list payload"));
        assert_eq!(
            rendered[2].node,
            RenderNode::Paragraph {
                text: "after".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_entries_render_invalid_placeholders() {
        let rendered = render_json(json!([42, { "data": { "text": "orphan" } }]));

        assert_eq!(rendered.len(), 2);
        assert!(matches!(&rendered[0].node, RenderNode::Invalid { reason, .. } if reason == "entry is not an object"));
        assert!(matches!(&rendered[1].node, RenderNode::Invalid { reason, .. } if reason == "entry has no type"));
        assert!(rendered.iter().all(|r| r.node.is_diagnostic()));
    }

    #[test]
    fn test_empty_collections_render_empty_containers() {
        let rendered = render_json(json!([
            { "id": "g", "type": "gallery", "data": { "images": [] } },
            { "id": "l", "type": "list", "data": { "items": [] } }
        ]));

        assert_eq!(
            rendered[0].node,
            RenderNode::Gallery {
                images: vec![],
                caption: None
            }
        );
        assert_eq!(
            rendered[1].node,
            RenderNode::List {
                style: ListStyle::Unordered,
                items: vec![]
            }
        );
    }

    #[test]
    fn test_gallery_items_are_keyed_by_position() {
        let rendered = render_json(json!([
            { "id": "g", "type": "gallery", "data": {
                "images": [{ "url": "a.jpg" }, { "url": "b.jpg", "caption": "B" }],
                "caption": ""
            } }
        ]));

        let RenderNode::Gallery { images, caption } = &rendered[0].node else {
            panic!("expected a gallery");
        };
        assert_eq!(caption, &None);
        assert_eq!(images[0].key, "g-0");
        assert_eq!(images[1].key, "g-1");
        assert_eq!(images[1].figure.caption.as_deref(), Some("B"));
    }

    #[test]
    fn test_raw_markup_carries_policy() {
        let entries = decode_document(
            &json!([{ "id": "h", "type": "html", "data": { "html": "<b>hi</b>" } }]).to_string(),
        )
        .unwrap();
        let rendered = render(
            &entries,
            &RenderOptions {
                raw_markup: RawMarkupPolicy::Escape,
            },
        );

        assert_eq!(
            rendered[0].node,
            RenderNode::RawMarkup {
                kind: RawMarkupKind::Html,
                markup: "<b>hi</b>".to_string(),
                policy: RawMarkupPolicy::Escape,
                caption: None,
            }
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let value = json!([
            { "id": "a", "type": "quote", "data": { "text": "Make things", "author": "A. Potter" } },
            { "type": "mystery" },
            "junk"
        ]);
        assert_eq!(render_json(value.clone()), render_json(value));
    }

    #[test]
    fn test_new_block_renders_with_its_id() {
        let blocks = vec![BlockEntry::from(crate::registry::new_block(BlockTag::Heading))];
        let rendered = render(&blocks, &RenderOptions::default());
        assert_eq!(
            rendered[0].node,
            RenderNode::Heading {
                level: HeadingLevel::H2,
                text: String::new(),
            }
        );
        assert_eq!(Some(rendered[0].key.as_str()), blocks[0].id());
    }

    #[test]
    fn test_null_fields_render_with_defaults() {
        let rendered = render_json(json!([
            { "type": "heading", "data": { "text": "Hi", "level": null } },
            { "type": "paragraph", "data": { "text": null } },
            { "type": "list", "data": { "items": ["a"], "style": null } },
            { "type": "product", "data": { "productId": "p-1", "title": "Bowl", "description": null, "image": null } }
        ]));

        assert!(rendered.iter().all(|block| !block.node.is_diagnostic()));
        assert_eq!(
            rendered[0].node,
            RenderNode::Heading {
                level: HeadingLevel::H2,
                text: "Hi".to_string(),
            }
        );
        assert_eq!(
            rendered[1].node,
            RenderNode::Paragraph {
                text: String::new()
            }
        );
        assert!(matches!(
            rendered[2].node,
            RenderNode::List {
                style: ListStyle::Unordered,
                ..
            }
        ));
        assert_eq!(
            rendered[3].node,
            RenderNode::Product {
                product_id: "p-1".to_string(),
                title: "Bowl".to_string(),
                description: String::new(),
                image: String::new(),
            }
        );
    }
}
