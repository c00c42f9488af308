use dioxus::prelude::*;

#[component]
pub fn Divider() -> Element {
    rsx! {
        hr { class: "block-divider" }
    }
}
