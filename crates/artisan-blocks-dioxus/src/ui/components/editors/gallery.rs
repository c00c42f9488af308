use artisan_blocks_engine::{BlockData, Figure, GalleryData, UploadSlot};
use dioxus::prelude::*;

use super::optional;
use crate::ui::components::upload_field::{UploadField, UploadResult};

#[component]
pub fn GalleryEditor(
    data: GalleryData,
    on_change: EventHandler<BlockData>,
    on_upload: EventHandler<UploadResult>,
) -> Element {
    let caption = data.caption.clone().unwrap_or_default();
    let images = data.images.clone();
    let is_empty = images.is_empty();

    let add_image = {
        let data = data.clone();
        move |_| {
            let mut next = data.clone();
            next.push_image(String::new());
            on_change.call(BlockData::Gallery(next));
        }
    };
    let on_caption = {
        let data = data.clone();
        move |evt: Event<FormData>| {
            on_change.call(BlockData::Gallery(GalleryData {
                caption: optional(evt.value()),
                ..data.clone()
            }));
        }
    };

    rsx! {
        div {
            class: "gallery-editor",
            if is_empty {
                p { class: "editor-hint", "No images yet" }
            }
            for (index, figure) in images.into_iter().enumerate() {
                GalleryImageRow {
                    key: "{index}",
                    index,
                    figure,
                    gallery: data.clone(),
                    on_change,
                    on_upload,
                }
            }
            div {
                class: "gallery-actions",
                button { class: "add-item-button", onclick: add_image, "Add image" }
                UploadField {
                    slot: UploadSlot::GalleryAppend,
                    label: "Upload new image".to_string(),
                    on_upload,
                }
            }
            input {
                r#type: "text",
                value: "{caption}",
                placeholder: "Gallery caption",
                oninput: on_caption,
            }
        }
    }
}

#[component]
fn GalleryImageRow(
    index: usize,
    figure: Figure,
    gallery: GalleryData,
    on_change: EventHandler<BlockData>,
    on_upload: EventHandler<UploadResult>,
) -> Element {
    let caption = figure.caption.clone().unwrap_or_default();

    let on_url = {
        let gallery = gallery.clone();
        let figure = figure.clone();
        move |evt: Event<FormData>| {
            let mut next = gallery.clone();
            next.set_image(
                index,
                Figure {
                    url: evt.value(),
                    ..figure.clone()
                },
            );
            on_change.call(BlockData::Gallery(next));
        }
    };
    let on_caption = {
        let gallery = gallery.clone();
        let figure = figure.clone();
        move |evt: Event<FormData>| {
            let mut next = gallery.clone();
            next.set_image(
                index,
                Figure {
                    caption: optional(evt.value()),
                    ..figure.clone()
                },
            );
            on_change.call(BlockData::Gallery(next));
        }
    };
    let on_remove = move |_| {
        let mut next = gallery.clone();
        next.remove_image(index);
        on_change.call(BlockData::Gallery(next));
    };

    rsx! {
        div {
            class: "gallery-image-row",
            if !figure.url.is_empty() {
                img { class: "editor-thumbnail", src: "{figure.url}" }
            }
            input {
                r#type: "text",
                value: "{figure.url}",
                placeholder: "Image URL",
                oninput: on_url,
            }
            input {
                r#type: "text",
                value: "{caption}",
                placeholder: "Caption",
                oninput: on_caption,
            }
            UploadField {
                slot: UploadSlot::GalleryImage(index),
                label: "Upload".to_string(),
                on_upload,
            }
            button { class: "remove-item-button", onclick: on_remove, "Remove" }
        }
    }
}
