use artisan_blocks_engine::BlockTag;
use artisan_blocks_engine::registry::TAGS;
use dioxus::prelude::*;

/// One button per block kind, labelled from the shared tag table
#[component]
pub fn InsertMenu(on_insert: EventHandler<BlockTag>) -> Element {
    rsx! {
        div {
            class: "insert-menu",
            span { class: "insert-label", "Add block:" }
            for info in TAGS {
                button {
                    key: "{info.tag}",
                    class: "insert-button",
                    onclick: move |_| on_insert.call(info.tag),
                    "{info.label}"
                }
            }
        }
    }
}
