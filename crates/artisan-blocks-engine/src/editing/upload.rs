//! Landing the result of a media upload in a document.
//!
//! Uploads finish after the user may have kept editing, so the result is
//! matched to its block by id. A block removed in the meantime makes the
//! result irrelevant and it is dropped; a failed upload never touches the
//! document.

use crate::editing::commands::update_data;
use crate::schema::{BlockData, BlockEntry, BlockId, Figure};

/// The field an uploaded file's url is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadSlot {
    ImageUrl,
    VideoUrl,
    VideoPoster,
    GalleryImage(usize),
    /// Appends a new image to a gallery
    GalleryAppend,
    ProductImage,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// The url was written; the complete replacement sequence
    Applied(Vec<BlockEntry>),
    /// The upload failed; message for the field's inline notice
    Failed(String),
    /// The block is gone or no longer has this field
    Ignored,
}

pub fn complete_upload(
    entries: &[BlockEntry],
    block_id: &BlockId,
    slot: UploadSlot,
    result: Result<String, String>,
) -> UploadOutcome {
    let url = match result {
        Ok(url) => url,
        Err(message) => return UploadOutcome::Failed(message),
    };

    let Some((index, block)) = entries.iter().enumerate().find_map(|(i, entry)| {
        entry
            .as_block()
            .filter(|block| &block.id == block_id)
            .map(|block| (i, block))
    }) else {
        log::debug!("Dropping upload result for removed block {block_id}");
        return UploadOutcome::Ignored;
    };

    let mut data = block.data.clone();
    if !write_slot(&mut data, slot, url) {
        log::warn!(
            "Upload slot {slot:?} does not fit {} block {block_id}",
            block.tag_name()
        );
        return UploadOutcome::Ignored;
    }

    UploadOutcome::Applied(update_data(entries, index, data))
}

fn write_slot(data: &mut BlockData, slot: UploadSlot, url: String) -> bool {
    match (data, slot) {
        (BlockData::Image(image), UploadSlot::ImageUrl) => image.url = url,
        (BlockData::Video(video), UploadSlot::VideoUrl) => video.set_url(url),
        (BlockData::Video(video), UploadSlot::VideoPoster) => video.poster = Some(url),
        (BlockData::Gallery(gallery), UploadSlot::GalleryImage(i)) => match gallery.images.get_mut(i) {
            Some(figure) => figure.url = url,
            None => return false,
        },
        (BlockData::Gallery(gallery), UploadSlot::GalleryAppend) => {
            gallery.images.push(Figure { url, caption: None })
        }
        (BlockData::Product(product), UploadSlot::ProductImage) => product.image = url,
        _ => return false,
    }
    true
}
