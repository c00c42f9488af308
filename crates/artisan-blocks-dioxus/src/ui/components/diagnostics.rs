//! Placeholders for entries that cannot be shown as a normal block. They
//! stand in for the one broken entry while the rest of the post renders.

use dioxus::prelude::*;

/// Block whose type is not known to this editor, with its payload dumped
#[component]
pub fn UnknownBlock(tag: String, payload: String) -> Element {
    rsx! {
        div {
            class: "block-unknown",
            p { "Unknown block type: {tag}" }
            pre { "{payload}" }
        }
    }
}

#[component]
pub fn InvalidBlock(reason: String, raw: String) -> Element {
    rsx! {
        div {
            class: "block-invalid",
            p { "Invalid block: {reason}" }
            pre { "{raw}" }
        }
    }
}

#[component]
pub fn RenderError(tag: String, message: String) -> Element {
    rsx! {
        div {
            class: "block-error",
            p { "Could not display {tag} block" }
            pre { "{message}" }
        }
    }
}
