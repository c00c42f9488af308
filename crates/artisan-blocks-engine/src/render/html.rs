//! Html serialization of rendered blocks, one top-level element per line.
//!
//! Text and attribute values are always escaped. The only unescaped output
//! is raw markup rendered under [`RawMarkupPolicy::Trust`].

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::render::node::*;
use crate::render::video::VideoPlayer;
use crate::schema::{Figure, ListStyle};

pub fn to_html(rendered: &[RenderedBlock]) -> String {
    let mut out = String::new();
    for block in rendered {
        write_node(&mut out, &block.node);
        out.push('\n');
    }
    out
}

fn write_node(out: &mut String, node: &RenderNode) {
    match node {
        RenderNode::Paragraph { text: body } => {
            out.push_str(&format!("<p>{}</p>", text(body)));
        }
        RenderNode::Heading { level, text: body } => {
            let el = level.element();
            out.push_str(&format!("<{el}>{}</{el}>", text(body)));
        }
        RenderNode::Image(figure) => {
            out.push_str("<figure class=\"block-image\">");
            write_figure_body(out, figure);
            out.push_str("</figure>");
        }
        RenderNode::Gallery { images, caption } => {
            out.push_str("<div class=\"block-gallery\">");
            for item in images {
                out.push_str("<figure>");
                write_figure_body(out, &item.figure);
                out.push_str("</figure>");
            }
            if let Some(caption) = caption {
                out.push_str(&format!(
                    "<p class=\"gallery-caption\">{}</p>",
                    text(caption)
                ));
            }
            out.push_str("</div>");
        }
        RenderNode::Video { player, caption } => {
            out.push_str("<figure class=\"block-video\">");
            match player {
                VideoPlayer::Embed { src, .. } => out.push_str(&format!(
                    "<iframe src=\"{}\" allowfullscreen></iframe>",
                    attr(src)
                )),
                VideoPlayer::Native { src, poster } => {
                    out.push_str(&format!("<video controls src=\"{}\"", attr(src)));
                    if let Some(poster) = poster {
                        out.push_str(&format!(" poster=\"{}\"", attr(poster)));
                    }
                    out.push_str("></video>");
                }
            }
            write_caption(out, caption.as_deref());
            out.push_str("</figure>");
        }
        RenderNode::Quote {
            text: body,
            author,
            source,
        } => {
            out.push_str(&format!("<blockquote><p>{}</p>", text(body)));
            if author.is_some() || source.is_some() {
                out.push_str("<footer>");
                if let Some(author) = author {
                    out.push_str(&text(author));
                }
                if let Some(source) = source {
                    if author.is_some() {
                        out.push_str(", ");
                    }
                    out.push_str(&format!("<cite>{}</cite>", text(source)));
                }
                out.push_str("</footer>");
            }
            out.push_str("</blockquote>");
        }
        RenderNode::List { style, items } => {
            let el = match style {
                ListStyle::Ordered => "ol",
                ListStyle::Unordered => "ul",
            };
            out.push_str(&format!("<{el}>"));
            for item in items {
                out.push_str(&format!("<li>{}</li>", text(&item.text)));
            }
            out.push_str(&format!("</{el}>"));
        }
        RenderNode::Product {
            product_id,
            title,
            description,
            image,
        } => {
            out.push_str(&format!(
                "<div class=\"block-product\" data-product-id=\"{}\">",
                attr(product_id)
            ));
            if !image.is_empty() {
                out.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\">",
                    attr(image),
                    attr(title)
                ));
            }
            out.push_str(&format!(
                "<h3>{}</h3><p>{}</p></div>",
                text(title),
                text(description)
            ));
        }
        RenderNode::Divider => out.push_str("<hr>"),
        RenderNode::RawMarkup {
            kind,
            markup,
            policy,
            caption,
        } => {
            let class = match kind {
                RawMarkupKind::Html => "block-html",
                RawMarkupKind::Embed => "block-embed",
            };
            match policy {
                RawMarkupPolicy::Trust => {
                    out.push_str(&format!("<div class=\"{class}\">{markup}"));
                }
                RawMarkupPolicy::Escape => {
                    out.push_str(&format!(
                        "<div class=\"{class}\"><pre>{}</pre>",
                        text(markup)
                    ));
                }
            }
            write_caption(out, caption.as_deref());
            out.push_str("</div>");
        }
        RenderNode::Unknown { tag, payload } => {
            out.push_str(&format!(
                "<div class=\"block-unknown\"><p>Unknown block type: {}</p><pre>{}</pre></div>",
                text(tag),
                text(payload)
            ));
        }
        RenderNode::Invalid { reason, raw } => {
            out.push_str(&format!(
                "<div class=\"block-invalid\"><p>Invalid block: {}</p><pre>{}</pre></div>",
                text(reason),
                text(raw)
            ));
        }
        RenderNode::Failed { tag, message } => {
            out.push_str(&format!(
                "<div class=\"block-error\"><p>Could not display {} block</p><pre>{}</pre></div>",
                text(tag),
                text(message)
            ));
        }
    }
}

fn write_figure_body(out: &mut String, figure: &Figure) {
    if figure.url.is_empty() {
        out.push_str("<div class=\"image-pending\"></div>");
    } else {
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">",
            attr(&figure.url),
            attr(figure.caption.as_deref().unwrap_or_default())
        ));
    }
    write_caption(out, figure.caption.as_deref());
}

fn write_caption(out: &mut String, caption: Option<&str>) {
    if let Some(caption) = caption.filter(|c| !c.is_empty()) {
        out.push_str(&format!("<figcaption>{}</figcaption>", text(caption)));
    }
}
