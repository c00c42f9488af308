use artisan_blocks_engine::editing::commands;
use artisan_blocks_engine::{BlockEntry, BlockTag, PostFile, RenderOptions};
use dioxus::prelude::*;

use super::{BlockEditor, DocumentView, EmptyDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Preview,
    Edit,
}

impl ViewMode {
    fn toggled(self) -> Self {
        match self {
            ViewMode::Preview => ViewMode::Edit,
            ViewMode::Edit => ViewMode::Preview,
        }
    }

    fn toggle_label(self) -> &'static str {
        match self {
            ViewMode::Preview => "Edit",
            ViewMode::Edit => "Preview",
        }
    }
}

#[component]
pub fn MainPanel(
    post: PostFile,
    entries: Vec<BlockEntry>,
    dirty: bool,
    options: RenderOptions,
    status: Option<String>,
    on_change: EventHandler<Vec<BlockEntry>>,
    on_save: EventHandler<()>,
    /// Throw away unsaved edits and reload the post from disk
    on_revert: EventHandler<()>,
) -> Element {
    let mut mode = use_signal(|| ViewMode::Preview);
    let display_name = post.display_name().to_string();
    let current_mode = *mode.read();
    let toggle_label = current_mode.toggle_label();
    let dirty_marker = if dirty { " •" } else { "" };

    let on_insert = {
        let entries = entries.clone();
        move |tag: BlockTag| on_change.call(commands::insert(&entries, tag))
    };

    rsx! {
        div {
            class: "document-container",
            div {
                class: "document-header",
                h1 { "{display_name}{dirty_marker}" }
                div {
                    class: "document-actions",
                    button {
                        class: "mode-button",
                        onclick: move |_| mode.set(current_mode.toggled()),
                        "{toggle_label}"
                    }
                    button {
                        class: "revert-button",
                        disabled: !dirty,
                        onclick: move |_| on_revert.call(()),
                        "Revert"
                    }
                    button {
                        class: "save-button",
                        disabled: !dirty,
                        onclick: move |_| on_save.call(()),
                        "Save"
                    }
                }
            }
            if let Some(message) = status {
                p { class: "status-message", "{message}" }
            }
            hr {}
            if entries.is_empty() {
                EmptyDocument { on_insert }
            } else {
                match current_mode {
                    ViewMode::Preview => rsx! { DocumentView { entries, options } },
                    ViewMode::Edit => rsx! { BlockEditor { entries, on_change } },
                }
            }
        }
    }
}
