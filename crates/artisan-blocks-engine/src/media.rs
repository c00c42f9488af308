use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::editing::UploadSlot;

/// Folder, relative to the posts directory, that uploaded files land in
pub const MEDIA_DIR: &str = "media";

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "m4v"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn for_slot(slot: UploadSlot) -> Self {
        match slot {
            UploadSlot::VideoUrl => MediaKind::Video,
            UploadSlot::ImageUrl
            | UploadSlot::VideoPoster
            | UploadSlot::GalleryImage(_)
            | UploadSlot::GalleryAppend
            | UploadSlot::ProductImage => MediaKind::Image,
        }
    }

    fn accepts(self, extension: &str) -> bool {
        let allowed = match self {
            MediaKind::Image => IMAGE_EXTENSIONS,
            MediaKind::Video => VIDEO_EXTENSIONS,
        };
        allowed.contains(&extension)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Unsupported file type '{extension}' for {kind:?} upload")]
    UnsupportedType { extension: String, kind: MediaKind },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Somewhere uploaded media can be stored. Returns the url a block should
/// reference.
pub trait MediaStore {
    fn store(&self, source: &Path, kind: MediaKind) -> Result<String, MediaError>;
}

/// Copies files into `<posts>/media/` under a fresh name.
#[derive(Debug, Clone)]
pub struct LocalMediaStore {
    posts_root: PathBuf,
}

impl LocalMediaStore {
    pub fn new(posts_root: impl Into<PathBuf>) -> Self {
        Self {
            posts_root: posts_root.into(),
        }
    }

    pub fn media_dir(&self) -> PathBuf {
        self.posts_root.join(MEDIA_DIR)
    }
}

impl MediaStore for LocalMediaStore {
    fn store(&self, source: &Path, kind: MediaKind) -> Result<String, MediaError> {
        if !source.is_file() {
            return Err(MediaError::NotFound(source.to_path_buf()));
        }

        let extension = source
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if !kind.accepts(&extension) {
            return Err(MediaError::UnsupportedType { extension, kind });
        }

        let media_dir = self.media_dir();
        fs::create_dir_all(&media_dir)?;

        let file_name = format!("{}.{extension}", Uuid::new_v4());
        fs::copy(source, media_dir.join(&file_name))?;
        log::info!("Stored {} as {MEDIA_DIR}/{file_name}", source.display());

        Ok(format!("{MEDIA_DIR}/{file_name}"))
    }
}
