use artisan_blocks_engine::render::RenderNode;
use artisan_blocks_engine::{BlockEntry, RenderOptions, RenderedBlock, render};
use dioxus::prelude::*;

use super::{
    Divider, Gallery, Heading, ImageBlock, InvalidBlock, ListBlock, Paragraph, ProductCard, Quote,
    RawMarkup, RenderError, UnknownBlock, Video,
};

/// Read-only view of a post, one block after another
#[component]
pub fn DocumentView(entries: Vec<BlockEntry>, options: RenderOptions) -> Element {
    let rendered = render(&entries, &options);

    rsx! {
        article {
            class: "document-view",
            for block in rendered {
                BlockView { key: "{block.key}", block: block.clone() }
            }
        }
    }
}

#[component]
pub fn BlockView(block: RenderedBlock) -> Element {
    match block.node {
        RenderNode::Paragraph { text } => rsx! { Paragraph { text } },
        RenderNode::Heading { level, text } => rsx! { Heading { level, text } },
        RenderNode::Image(figure) => rsx! { ImageBlock { figure } },
        RenderNode::Gallery { images, caption } => rsx! { Gallery { images, caption } },
        RenderNode::Video { player, caption } => rsx! { Video { player, caption } },
        RenderNode::Quote {
            text,
            author,
            source,
        } => rsx! { Quote { text, author, source } },
        RenderNode::List { style, items } => rsx! { ListBlock { style, items } },
        RenderNode::Product {
            product_id,
            title,
            description,
            image,
        } => rsx! { ProductCard { product_id, title, description, image } },
        RenderNode::Divider => rsx! { Divider {} },
        RenderNode::RawMarkup {
            kind,
            markup,
            policy,
            caption,
        } => rsx! { RawMarkup { kind, markup, policy, caption } },
        RenderNode::Unknown { tag, payload } => rsx! { UnknownBlock { tag, payload } },
        RenderNode::Invalid { reason, raw } => rsx! { InvalidBlock { reason, raw } },
        RenderNode::Failed { tag, message } => rsx! { RenderError { tag, message } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artisan_blocks_engine::decode_document;
    use dioxus::dioxus_core::VirtualDom;
    use serde_json::json;

    fn render_document(value: serde_json::Value) -> String {
        let entries = decode_document(&value.to_string()).unwrap();
        let mut dom = VirtualDom::new_with_props(
            DocumentView,
            DocumentViewProps {
                entries,
                options: RenderOptions::default(),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_heading_and_divider() {
        let html = render_document(json!([
            { "id": "a", "type": "heading", "data": { "text": "Hello", "level": 2 } },
            { "id": "b", "type": "divider", "data": {} }
        ]));

        let heading = html.find("<h2").unwrap();
        let divider = html.find("<hr").unwrap();
        assert!(heading < divider);
        assert!(html.contains("Hello"));
    }

    #[test]
    fn test_ordered_list_keeps_item_order() {
        let html = render_document(json!([
            { "id": "l", "type": "list", "data": { "items": ["x", "y"], "style": "ordered" } }
        ]));

        assert!(html.contains("<ol"));
        assert!(html.find(">x<").unwrap() < html.find(">y<").unwrap());
    }

    #[test]
    fn test_broken_entries_render_placeholders_in_place() {
        let html = render_document(json!([
            { "id": "p1", "type": "paragraph", "data": { "text": "Before" } },
            { "type": "bogus", "data": { "x": 1 } },
            42,
            { "id": "p2", "type": "paragraph", "data": { "text": "After" } }
        ]));

        assert!(html.contains("Unknown block type: bogus"));
        assert!(html.contains("Invalid block"));
        let before = html.find("Before").unwrap();
        let bogus = html.find("bogus").unwrap();
        let after = html.find("After").unwrap();
        assert!(before < bogus && bogus < after);
    }

    #[test]
    fn test_empty_gallery_renders_container() {
        let html = render_document(json!([
            { "id": "g", "type": "gallery", "data": { "images": [] } }
        ]));

        assert!(html.contains("block-gallery"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_youtube_video_without_id() {
        let html = render_document(json!([
            { "id": "v", "type": "video", "data": { "url": "https://youtu.be/dQw4w9WgXcQ", "provider": "YouTube" } }
        ]));

        assert!(html.contains("<iframe"));
        assert!(html.contains("dQw4w9WgXcQ"));
    }
}
