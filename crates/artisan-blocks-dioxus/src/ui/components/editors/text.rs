use artisan_blocks_engine::registry;
use artisan_blocks_engine::{
    BlockData, BlockTag, HeadingData, HeadingLevel, ParagraphData, QuoteData,
};
use dioxus::prelude::*;

use super::{calculate_textarea_rows, optional};

#[component]
pub fn ParagraphEditor(data: ParagraphData, on_change: EventHandler<BlockData>) -> Element {
    let rows = calculate_textarea_rows(&data.text);

    rsx! {
        textarea {
            class: "editor-textarea",
            value: "{data.text}",
            rows: rows,
            placeholder: registry::info(BlockTag::Paragraph).placeholder,
            oninput: move |evt: Event<FormData>| {
                on_change.call(BlockData::Paragraph(ParagraphData { text: evt.value() }));
            },
        }
    }
}

#[component]
pub fn HeadingEditor(data: HeadingData, on_change: EventHandler<BlockData>) -> Element {
    let level = data.level;
    let text = data.text.clone();
    let levels = HeadingLevel::ALL.map(|option| (option.as_u8(), option == level));

    rsx! {
        div {
            class: "heading-editor",
            select {
                class: "heading-level",
                onchange: move |evt: Event<FormData>| {
                    on_change.call(BlockData::Heading(HeadingData {
                        text: text.clone(),
                        level: parse_level(&evt.value()).unwrap_or(level),
                    }));
                },
                for (value, selected) in levels {
                    option { value: "{value}", selected: selected, "H{value}" }
                }
            }
            input {
                r#type: "text",
                class: "heading-text",
                value: "{data.text}",
                placeholder: registry::info(BlockTag::Heading).placeholder,
                oninput: move |evt: Event<FormData>| {
                    on_change.call(BlockData::Heading(HeadingData { text: evt.value(), level }));
                },
            }
        }
    }
}

fn parse_level(value: &str) -> Option<HeadingLevel> {
    value.parse::<i64>().ok().map(HeadingLevel::from)
}

#[component]
pub fn QuoteEditor(data: QuoteData, on_change: EventHandler<BlockData>) -> Element {
    let rows = calculate_textarea_rows(&data.text);
    let author = data.author.clone().unwrap_or_default();
    let source = data.source.clone().unwrap_or_default();

    let on_text = {
        let data = data.clone();
        move |evt: Event<FormData>| {
            on_change.call(BlockData::Quote(QuoteData {
                text: evt.value(),
                ..data.clone()
            }));
        }
    };
    let on_author = {
        let data = data.clone();
        move |evt: Event<FormData>| {
            on_change.call(BlockData::Quote(QuoteData {
                author: optional(evt.value()),
                ..data.clone()
            }));
        }
    };
    let on_source = {
        let data = data.clone();
        move |evt: Event<FormData>| {
            on_change.call(BlockData::Quote(QuoteData {
                source: optional(evt.value()),
                ..data.clone()
            }));
        }
    };

    rsx! {
        div {
            class: "quote-editor",
            textarea {
                class: "editor-textarea",
                value: "{data.text}",
                rows: rows,
                placeholder: registry::info(BlockTag::Quote).placeholder,
                oninput: on_text,
            }
            input {
                r#type: "text",
                value: "{author}",
                placeholder: "Author",
                oninput: on_author,
            }
            input {
                r#type: "text",
                value: "{source}",
                placeholder: "Source",
                oninput: on_source,
            }
        }
    }
}
