use artisan_blocks_engine::{LocalMediaStore, MediaKind, MediaStore, UploadSlot};
use dioxus::prelude::*;
use std::path::{Path, PathBuf};

/// Posts folder the app was opened on; uploads are copied under it.
#[derive(Debug, Clone, PartialEq)]
pub struct PostsRoot(pub PathBuf);

/// Finished upload for one field of a block
pub type UploadResult = (UploadSlot, Result<String, String>);

/// Upload a local file into a block field. Failures are shown next to the
/// field until dismissed and never change the document.
#[component]
pub fn UploadField(
    slot: UploadSlot,
    label: String,
    on_upload: EventHandler<UploadResult>,
) -> Element {
    let mut source = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let posts_root = try_use_context::<PostsRoot>();
    let kind = MediaKind::for_slot(slot);
    let hint = match kind {
        MediaKind::Image => "Path to an image file",
        MediaKind::Video => "Path to a video file",
    };

    rsx! {
        div {
            class: "upload-field",
            input {
                r#type: "text",
                placeholder: hint,
                value: "{source}",
                oninput: move |evt| source.set(evt.value()),
            }
            button {
                class: "upload-button",
                disabled: source.read().trim().is_empty(),
                onclick: move |_| {
                    let result = store_upload(posts_root.as_ref(), &source.read(), kind);
                    match &result {
                        Ok(url) => {
                            log::info!("Uploaded {url} for {slot:?}");
                            error.set(None);
                            source.set(String::new());
                        }
                        Err(message) => {
                            log::warn!("Upload for {slot:?} failed: {message}");
                            error.set(Some(message.clone()));
                        }
                    }
                    on_upload.call((slot, result));
                },
                "{label}"
            }
            if let Some(message) = error.read().as_ref() {
                div {
                    class: "upload-error",
                    span { "{message}" }
                    button {
                        class: "dismiss-button",
                        title: "Dismiss",
                        onclick: move |_| error.set(None),
                        "×"
                    }
                }
            }
        }
    }
}

fn store_upload(
    posts_root: Option<&PostsRoot>,
    source: &str,
    kind: MediaKind,
) -> Result<String, String> {
    let posts_root = posts_root.ok_or_else(|| "No posts folder to upload into".to_string())?;
    LocalMediaStore::new(&posts_root.0)
        .store(Path::new(source.trim()), kind)
        .map_err(|e| e.to_string())
}
