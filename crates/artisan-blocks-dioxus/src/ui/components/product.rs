use dioxus::prelude::*;

/// Product showcase card. Product data is entered by hand; nothing is
/// fetched from a catalogue.
#[component]
pub fn ProductCard(
    product_id: String,
    title: String,
    description: String,
    image: String,
) -> Element {
    rsx! {
        div {
            class: "block-product",
            "data-product-id": "{product_id}",
            if !image.is_empty() {
                img { src: "{image}", alt: "{title}" }
            }
            div {
                class: "product-details",
                h3 { "{title}" }
                p { "{description}" }
            }
        }
    }
}
