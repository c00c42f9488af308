//! The content-block schema shared by the renderer and the editor.

pub mod block;
pub mod entry;
pub mod payload;
pub mod tag;

pub use block::{BlockData, BlockId, ContentBlock, PayloadError, UnknownData};
pub use entry::{BlockEntry, EntryProblem, InvalidBlock};
pub use payload::*;
pub use tag::{BlockTag, UnknownTag};
