use artisan_blocks_engine::render::GalleryItem;
use dioxus::prelude::*;

use super::figure::FigureBody;

#[component]
pub fn Gallery(images: Vec<GalleryItem>, caption: Option<String>) -> Element {
    rsx! {
        div {
            class: "block-gallery",
            div {
                class: "gallery-grid",
                for item in images {
                    figure {
                        key: "{item.key}",
                        FigureBody { figure: item.figure.clone() }
                    }
                }
            }
            if let Some(caption) = caption {
                p { class: "gallery-caption", "{caption}" }
            }
        }
    }
}
