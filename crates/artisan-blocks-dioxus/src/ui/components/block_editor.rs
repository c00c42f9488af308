//! Edit mode for a post: every entry with its move/delete controls and a
//! sub-editor chosen by tag, followed by the insert menu.
//!
//! The editor keeps no copy of the document. Each change is sent upward as
//! the complete replacement sequence.

use artisan_blocks_engine::editing::commands::{self, BlockCmd, Direction};
use artisan_blocks_engine::editing::{UploadOutcome, complete_upload};
use artisan_blocks_engine::registry;
use artisan_blocks_engine::render::block_key;
use artisan_blocks_engine::{BlockData, BlockEntry, BlockId, BlockTag, ContentBlock};
use dioxus::prelude::*;

use super::InsertMenu;
use super::editors::*;
use super::upload_field::UploadResult;

/// Upload result addressed to the block it was started from
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedUpload {
    pub block_id: BlockId,
    pub result: UploadResult,
}

#[component]
pub fn BlockEditor(entries: Vec<BlockEntry>, on_change: EventHandler<Vec<BlockEntry>>) -> Element {
    let count = entries.len();
    let rows: Vec<(String, usize, BlockEntry)> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| (block_key(index, entry), index, entry.clone()))
        .collect();

    let on_command = use_callback({
        let entries = entries.clone();
        move |cmd: BlockCmd| on_change.call(commands::apply(&entries, &cmd))
    });

    let on_upload = use_callback({
        let entries = entries.clone();
        move |upload: FinishedUpload| {
            let (slot, result) = upload.result;
            match complete_upload(&entries, &upload.block_id, slot, result) {
                UploadOutcome::Applied(next) => on_change.call(next),
                UploadOutcome::Failed(message) => {
                    log::warn!("Upload for block {} failed: {message}", upload.block_id);
                }
                UploadOutcome::Ignored => {}
            }
        }
    });

    rsx! {
        div {
            class: "block-editor",
            for (key, index, entry) in rows {
                BlockEditorRow {
                    key: "{key}",
                    index,
                    entry,
                    is_last: index + 1 == count,
                    on_command,
                    on_upload,
                }
            }
            InsertMenu { on_insert: move |tag: BlockTag| on_command.call(BlockCmd::Insert { tag }) }
        }
    }
}

#[component]
fn BlockEditorRow(
    index: usize,
    entry: BlockEntry,
    is_last: bool,
    on_command: EventHandler<BlockCmd>,
    on_upload: EventHandler<FinishedUpload>,
) -> Element {
    let label = row_label(&entry);

    rsx! {
        section {
            class: "editor-row",
            div {
                class: "editor-row-header",
                span { class: "editor-row-label", "{label}" }
                div {
                    class: "editor-row-controls",
                    button {
                        title: "Move up",
                        disabled: index == 0,
                        onclick: move |_| on_command.call(BlockCmd::Move { index, direction: Direction::Up }),
                        "↑"
                    }
                    button {
                        title: "Move down",
                        disabled: is_last,
                        onclick: move |_| on_command.call(BlockCmd::Move { index, direction: Direction::Down }),
                        "↓"
                    }
                    button {
                        class: "delete-button",
                        title: "Delete block",
                        onclick: move |_| on_command.call(BlockCmd::Delete { index }),
                        "Delete"
                    }
                }
            }
            match entry {
                BlockEntry::Block(block) => sub_editor(index, block, on_command, on_upload),
                BlockEntry::Invalid(invalid) => rsx! {
                    UnsupportedNotice {
                        tag: "invalid".to_string(),
                        detail: Some(invalid.problem.to_string()),
                    }
                },
            }
        }
    }
}

fn row_label(entry: &BlockEntry) -> String {
    match entry.as_block().and_then(ContentBlock::tag) {
        Some(tag) => registry::info(tag).label.to_string(),
        None => entry.tag_name().unwrap_or("Invalid entry").to_string(),
    }
}

/// Pick the sub-editor for a block's tag
fn sub_editor(
    index: usize,
    block: ContentBlock,
    on_command: EventHandler<BlockCmd>,
    on_upload: EventHandler<FinishedUpload>,
) -> Element {
    let on_change = move |data: BlockData| on_command.call(BlockCmd::UpdateData { index, data });
    let block_id = block.id;
    let on_upload = move |result: UploadResult| {
        on_upload.call(FinishedUpload {
            block_id: block_id.clone(),
            result,
        })
    };

    match block.data {
        BlockData::Paragraph(data) => rsx! { ParagraphEditor { data, on_change } },
        BlockData::Heading(data) => rsx! { HeadingEditor { data, on_change } },
        BlockData::Image(data) => rsx! { ImageEditor { data, on_change, on_upload } },
        BlockData::Gallery(data) => rsx! { GalleryEditor { data, on_change, on_upload } },
        BlockData::Video(data) => rsx! { VideoEditor { data, on_change, on_upload } },
        BlockData::Quote(data) => rsx! { QuoteEditor { data, on_change } },
        BlockData::List(data) => rsx! { ListEditor { data, on_change } },
        BlockData::Product(data) => rsx! { ProductEditor { data, on_change, on_upload } },
        BlockData::Divider(_) => rsx! { hr { class: "block-divider" } },
        BlockData::Html(data) => rsx! { HtmlEditor { data, on_change } },
        BlockData::Embed(data) => rsx! { EmbedEditor { data, on_change } },
        BlockData::Unknown(unknown) => rsx! {
            UnsupportedNotice { tag: unknown.tag }
        },
    }
}
