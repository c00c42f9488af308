use artisan_blocks_engine::ListStyle;
use artisan_blocks_engine::render::ListEntry;
use dioxus::prelude::*;

#[component]
pub fn ListBlock(style: ListStyle, items: Vec<ListEntry>) -> Element {
    match style {
        ListStyle::Ordered => rsx! {
            ol {
                class: "block-list",
                for item in items {
                    li { key: "{item.key}", "{item.text}" }
                }
            }
        },
        ListStyle::Unordered => rsx! {
            ul {
                class: "block-list",
                for item in items {
                    li { key: "{item.key}", "{item.text}" }
                }
            }
        },
    }
}
