use artisan_blocks_engine::Figure;
use dioxus::prelude::*;

#[component]
pub fn ImageBlock(figure: Figure) -> Element {
    rsx! {
        figure {
            class: "block-image",
            FigureBody { figure }
        }
    }
}

/// Image and caption, shared by image blocks and gallery entries. An empty
/// url means the upload has not landed yet.
#[component]
pub fn FigureBody(figure: Figure) -> Element {
    let caption = figure.caption.clone().filter(|c| !c.is_empty());
    let alt = caption.clone().unwrap_or_default();

    rsx! {
        if figure.url.is_empty() {
            div { class: "image-pending", "No image yet" }
        } else {
            img { src: "{figure.url}", alt: "{alt}" }
        }
        if let Some(caption) = caption {
            figcaption { "{caption}" }
        }
    }
}
