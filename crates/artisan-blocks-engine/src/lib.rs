pub mod editing;
pub mod io;
pub mod media;
pub mod models;
pub mod persist;
pub mod registry;
pub mod render;
pub mod schema;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{BlockCmd, BlockDocument, Direction, Patch, UploadOutcome, UploadSlot};
pub use media::{LocalMediaStore, MediaError, MediaKind, MediaStore};
pub use models::PostFile;
pub use persist::{DecodeError, decode_document, encode_document};
pub use render::{RawMarkupPolicy, RenderNode, RenderOptions, RenderedBlock, render, to_html};
pub use schema::*;
