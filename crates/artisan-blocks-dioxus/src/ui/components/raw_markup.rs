use artisan_blocks_engine::RawMarkupPolicy;
use artisan_blocks_engine::render::RawMarkupKind;
use dioxus::prelude::*;

/// Html and embed blocks. Under [`RawMarkupPolicy::Trust`] the author's
/// markup is injected as-is; under `Escape` it is shown as text.
#[component]
pub fn RawMarkup(
    kind: RawMarkupKind,
    markup: String,
    policy: RawMarkupPolicy,
    caption: Option<String>,
) -> Element {
    let class_name = match kind {
        RawMarkupKind::Html => "block-html",
        RawMarkupKind::Embed => "block-embed",
    };

    rsx! {
        div {
            class: class_name,
            match policy {
                RawMarkupPolicy::Trust => rsx! {
                    div { class: "raw-markup", dangerous_inner_html: "{markup}" }
                },
                RawMarkupPolicy::Escape => rsx! {
                    pre { class: "raw-markup escaped", "{markup}" }
                },
            }
            if let Some(caption) = caption {
                figcaption { "{caption}" }
            }
        }
    }
}
