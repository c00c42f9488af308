use artisan_blocks_engine::BlockTag;
use dioxus::prelude::*;

use super::InsertMenu;

#[component]
pub fn EmptyDocument(on_insert: EventHandler<BlockTag>) -> Element {
    rsx! {
        div {
            class: "empty-document",
            p { "This post has no blocks yet." }
            InsertMenu { on_insert }
        }
    }
}
