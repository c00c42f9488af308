use dioxus::prelude::*;

/// Stand-in editor for entries this editor cannot change. The entry is kept
/// as-is and can still be moved or deleted.
#[component]
pub fn UnsupportedNotice(tag: String, detail: Option<String>) -> Element {
    rsx! {
        div {
            class: "unsupported-editor",
            p { "Editing '{tag}' blocks is not implemented." }
            if let Some(detail) = detail {
                pre { "{detail}" }
            }
        }
    }
}
