use artisan_blocks_engine::registry;
use artisan_blocks_engine::{BlockData, BlockTag, ImageData, UploadSlot, VideoData};
use dioxus::prelude::*;

use super::optional;
use crate::ui::components::upload_field::{UploadField, UploadResult};

#[component]
pub fn ImageEditor(
    data: ImageData,
    on_change: EventHandler<BlockData>,
    on_upload: EventHandler<UploadResult>,
) -> Element {
    let url = data.url.clone();
    let caption = data.caption.clone().unwrap_or_default();

    let on_url = {
        let data = data.clone();
        move |evt: Event<FormData>| {
            on_change.call(BlockData::Image(ImageData {
                url: evt.value(),
                ..data.clone()
            }));
        }
    };
    let on_caption = move |evt: Event<FormData>| {
        on_change.call(BlockData::Image(ImageData {
            caption: optional(evt.value()),
            ..data.clone()
        }));
    };

    rsx! {
        div {
            class: "image-editor",
            if !url.is_empty() {
                img { class: "editor-thumbnail", src: "{url}" }
            }
            input {
                r#type: "text",
                value: "{url}",
                placeholder: registry::info(BlockTag::Image).placeholder,
                oninput: on_url,
            }
            UploadField { slot: UploadSlot::ImageUrl, label: "Upload image".to_string(), on_upload }
            input {
                r#type: "text",
                value: "{caption}",
                placeholder: "Caption",
                oninput: on_caption,
            }
        }
    }
}

#[component]
pub fn VideoEditor(
    data: VideoData,
    on_change: EventHandler<BlockData>,
    on_upload: EventHandler<UploadResult>,
) -> Element {
    let url = data.url.clone();
    let caption = data.caption.clone().unwrap_or_default();
    let poster = data.poster.clone().unwrap_or_default();
    let detected = match (&data.provider, &data.video_id) {
        (Some(provider), Some(id)) => Some(format!("{provider} video {id}")),
        _ => None,
    };

    let on_url = {
        let data = data.clone();
        move |evt: Event<FormData>| {
            let mut next = data.clone();
            next.set_url(evt.value());
            on_change.call(BlockData::Video(next));
        }
    };
    let on_caption = {
        let data = data.clone();
        move |evt: Event<FormData>| {
            on_change.call(BlockData::Video(VideoData {
                caption: optional(evt.value()),
                ..data.clone()
            }));
        }
    };
    let on_poster = move |evt: Event<FormData>| {
        on_change.call(BlockData::Video(VideoData {
            poster: optional(evt.value()),
            ..data.clone()
        }));
    };

    rsx! {
        div {
            class: "video-editor",
            input {
                r#type: "text",
                value: "{url}",
                placeholder: registry::info(BlockTag::Video).placeholder,
                oninput: on_url,
            }
            if let Some(detected) = detected {
                p { class: "editor-hint", "{detected}" }
            }
            UploadField { slot: UploadSlot::VideoUrl, label: "Upload video".to_string(), on_upload }
            input {
                r#type: "text",
                value: "{poster}",
                placeholder: "Poster image URL",
                oninput: on_poster,
            }
            UploadField { slot: UploadSlot::VideoPoster, label: "Upload poster".to_string(), on_upload }
            input {
                r#type: "text",
                value: "{caption}",
                placeholder: "Caption",
                oninput: on_caption,
            }
        }
    }
}
