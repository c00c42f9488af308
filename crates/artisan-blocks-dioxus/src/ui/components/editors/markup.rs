use artisan_blocks_engine::registry;
use artisan_blocks_engine::{BlockData, BlockTag, EmbedData, HtmlData};
use dioxus::prelude::*;

use super::{calculate_textarea_rows, optional};

#[component]
pub fn HtmlEditor(data: HtmlData, on_change: EventHandler<BlockData>) -> Element {
    let rows = calculate_textarea_rows(&data.html);

    rsx! {
        textarea {
            class: "editor-textarea code",
            value: "{data.html}",
            rows: rows,
            spellcheck: false,
            placeholder: registry::info(BlockTag::Html).placeholder,
            oninput: move |evt: Event<FormData>| {
                on_change.call(BlockData::Html(HtmlData { html: evt.value() }));
            },
        }
    }
}

#[component]
pub fn EmbedEditor(data: EmbedData, on_change: EventHandler<BlockData>) -> Element {
    let rows = calculate_textarea_rows(&data.embed);
    let embed = data.embed.clone();
    let caption = data.caption.clone().unwrap_or_default();

    let on_embed = {
        let data = data.clone();
        move |evt: Event<FormData>| {
            on_change.call(BlockData::Embed(EmbedData {
                embed: evt.value(),
                ..data.clone()
            }));
        }
    };
    let on_caption = move |evt: Event<FormData>| {
        on_change.call(BlockData::Embed(EmbedData {
            caption: optional(evt.value()),
            ..data.clone()
        }));
    };

    rsx! {
        div {
            class: "embed-editor",
            textarea {
                class: "editor-textarea code",
                value: "{embed}",
                rows: rows,
                spellcheck: false,
                placeholder: registry::info(BlockTag::Embed).placeholder,
                oninput: on_embed,
            }
            input {
                r#type: "text",
                value: "{caption}",
                placeholder: "Caption",
                oninput: on_caption,
            }
        }
    }
}
