use crate::models::post_file::{POST_EXTENSION, PostFile};
use crate::persist::{self, DecodeError};
use crate::schema::BlockEntry;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid posts directory: {0}")]
    InvalidPostsDir(String),
    #[error("Could not read post {path}: {source}")]
    Decode {
        path: PathBuf,
        source: DecodeError,
    },
}

/// Read a post file and decode its blocks
pub fn read_post(relative_path: &RelativePath, posts_root: &Path) -> Result<Vec<BlockEntry>, IoError> {
    let absolute_path = relative_path.to_path(posts_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    let content = fs::read_to_string(&absolute_path)?;
    persist::decode_document(&content).map_err(|source| IoError::Decode {
        path: absolute_path,
        source,
    })
}

/// Write a post file, creating parent directories as needed
pub fn write_post(
    relative_path: &RelativePath,
    posts_root: &Path,
    entries: &[BlockEntry],
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(posts_root);
    let content = persist::encode_document(entries).map_err(|source| IoError::Decode {
        path: absolute_path.clone(),
        source,
    })?;

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&absolute_path, content)?;
    log::info!("Saved {} blocks to {}", entries.len(), absolute_path.display());
    Ok(())
}

/// Find every post under the posts directory, sorted by path.
/// The media folder is skipped.
pub fn scan_post_files(posts_root: &Path) -> Result<Vec<PostFile>, IoError> {
    validate_posts_dir(posts_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(posts_root, posts_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    root: &Path,
    dir: &Path,
    files: &mut Vec<PostFile>,
) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            if dir == root && path.file_name().is_some_and(|n| n == crate::media::MEDIA_DIR) {
                continue;
            }
            scan_directory_recursive(root, &path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == POST_EXTENSION
            && let Ok(relative) = path.strip_prefix(root)
            && let Ok(relative) = RelativePathBuf::from_path(relative)
        {
            files.push(PostFile::new(relative));
        }
    }

    Ok(())
}

pub fn validate_posts_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidPostsDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::*;
    use crate::tests::{create_test_file, create_test_posts_dir};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scan_finds_posts_in_subfolders() {
        let posts = create_test_posts_dir();
        create_test_file(&posts, "welcome.json", "[]");
        create_test_file(&posts, "2024/market.json", "[]");
        create_test_file(&posts, "notes.txt", "not a post");
        create_test_file(&posts, "media/meta.json", "{}");

        let files = scan_post_files(posts.path()).unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.relative_path().as_str()).collect();
        assert_eq!(names, vec!["2024/market.json", "welcome.json"]);
    }

    #[test]
    fn test_scan_invalid_dir() {
        let result = scan_post_files(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidPostsDir(_))));
    }

    #[test]
    fn test_validate_posts_dir() {
        let posts = create_test_posts_dir();
        assert!(validate_posts_dir(posts.path()).is_ok());
        assert!(validate_posts_dir(Path::new("/nonexistent/path")).is_err());
    }

    #[test]
    fn test_read_post_not_found() {
        let posts = create_test_posts_dir();
        let result = read_post(RelativePath::new("missing.json"), posts.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_post_rejects_non_array() {
        let posts = create_test_posts_dir();
        create_test_file(&posts, "odd.json", r#"{"not": "blocks"}"#);
        let result = read_post(RelativePath::new("odd.json"), posts.path());
        assert!(matches!(result, Err(IoError::Decode { .. })));
    }

    #[test]
    fn test_write_then_read() {
        let posts = create_test_posts_dir();
        let entries: Vec<BlockEntry> = vec![
            ContentBlock::new(
                "a",
                BlockData::Paragraph(ParagraphData {
                    text: "Hand thrown".to_string(),
                }),
            )
            .into(),
            BlockEntry::from_value(serde_json::json!({ "oops": true })),
        ];

        let path = RelativePath::new("drafts/new-post.json");
        write_post(path, posts.path(), &entries).unwrap();

        assert!(posts.path().join("drafts").is_dir());
        assert_eq!(read_post(path, posts.path()).unwrap(), entries);
    }
}
