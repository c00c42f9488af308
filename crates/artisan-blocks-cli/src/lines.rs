use artisan_blocks_engine::render::{RawMarkupKind, RenderNode, VideoPlayer};
use artisan_blocks_engine::schema::{Figure, ListStyle};

/// Plain text lines for one rendered block, as shown in the content panel.
pub fn block_lines(node: &RenderNode) -> Vec<String> {
    match node {
        RenderNode::Paragraph { text } => text.lines().map(str::to_string).collect(),
        RenderNode::Heading { level, text } => {
            let prefix = "#".repeat(level.as_u8() as usize);
            vec![format!("{prefix} {text}")]
        }
        RenderNode::Image(figure) => figure_lines("[image]", figure),
        RenderNode::Gallery { images, caption } => {
            let mut lines = vec![format!("[gallery] {} images", images.len())];
            for item in images {
                lines.push(format!("  - {}", url_or_pending(&item.figure.url)));
            }
            lines.extend(caption.iter().map(|caption| format!("  {caption}")));
            lines
        }
        RenderNode::Video { player, caption } => {
            let mut lines = match player {
                VideoPlayer::Embed { video_id, .. } => vec![format!("[video] youtube {video_id}")],
                VideoPlayer::Native { src, poster } => {
                    let mut lines = vec![format!("[video] {src}")];
                    lines.extend(poster.iter().map(|poster| format!("  poster {poster}")));
                    lines
                }
            };
            lines.extend(caption.iter().map(|caption| format!("  {caption}")));
            lines
        }
        RenderNode::Quote {
            text,
            author,
            source,
        } => {
            let mut lines: Vec<String> = text.lines().map(|line| format!("> {line}")).collect();
            match (author, source) {
                (Some(author), Some(source)) => lines.push(format!("  -- {author}, {source}")),
                (Some(attribution), None) | (None, Some(attribution)) => {
                    lines.push(format!("  -- {attribution}"))
                }
                (None, None) => {}
            }
            lines
        }
        RenderNode::List { style, items } => items
            .iter()
            .enumerate()
            .map(|(i, item)| match style {
                ListStyle::Ordered => format!("{}. {}", i + 1, item.text),
                ListStyle::Unordered => format!("• {}", item.text),
            })
            .collect(),
        RenderNode::Product {
            product_id,
            title,
            description,
            ..
        } => {
            let mut lines = vec![format!("[product {product_id}] {title}")];
            lines.extend(description.lines().map(|line| format!("  {line}")));
            lines
        }
        RenderNode::Divider => vec!["---".to_string()],
        RenderNode::RawMarkup {
            kind,
            markup,
            caption,
            ..
        } => {
            let label = match kind {
                RawMarkupKind::Html => "[html]",
                RawMarkupKind::Embed => "[embed]",
            };
            let mut lines = vec![label.to_string()];
            lines.extend(markup.lines().map(|line| format!("  {line}")));
            lines.extend(caption.iter().map(|caption| format!("  {caption}")));
            lines
        }
        RenderNode::Unknown { tag, payload } => {
            let mut lines = vec![format!("[unknown block: {tag}]")];
            lines.extend(payload.lines().map(|line| format!("  {line}")));
            lines
        }
        RenderNode::Invalid { reason, .. } => vec![format!("[invalid entry] {reason}")],
        RenderNode::Failed { tag, message } => {
            vec![format!("[could not render {tag}] {message}")]
        }
    }
}

fn figure_lines(label: &str, figure: &Figure) -> Vec<String> {
    let mut lines = vec![format!("{label} {}", url_or_pending(&figure.url))];
    lines.extend(figure.caption.iter().map(|caption| format!("  {caption}")));
    lines
}

fn url_or_pending(url: &str) -> &str {
    if url.is_empty() { "(no file yet)" } else { url }
}
