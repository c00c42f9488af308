//! Payload helpers used by the per-tag sub-editors.

use crate::render::video::{YOUTUBE, youtube_video_id};
use crate::schema::{Figure, GalleryData, ListData, VideoData};

impl ListData {
    pub fn push_item(&mut self) {
        self.items.push(String::new());
    }

    pub fn set_item(&mut self, index: usize, text: String) {
        if let Some(item) = self.items.get_mut(index) {
            *item = text;
        }
    }

    /// Remove an item, keeping at least one in the list.
    pub fn remove_item(&mut self, index: usize) {
        if self.items.len() > 1 && index < self.items.len() {
            self.items.remove(index);
        }
    }
}

impl GalleryData {
    pub fn push_image(&mut self, url: String) {
        self.images.push(Figure { url, caption: None });
    }

    pub fn set_image(&mut self, index: usize, figure: Figure) {
        if let Some(slot) = self.images.get_mut(index) {
            *slot = figure;
        }
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }
}

impl VideoData {
    /// Set the url and re-detect the provider: YouTube urls get the
    /// `youtube` provider and their id, anything else clears both.
    pub fn set_url(&mut self, url: String) {
        match youtube_video_id(&url) {
            Some(id) => {
                self.provider = Some(YOUTUBE.to_string());
                self.video_id = Some(id);
            }
            None => {
                self.provider = None;
                self.video_id = None;
            }
        }
        self.url = url;
    }
}
