use crate::editing::commands::{self, BlockCmd};
use crate::editing::patch::Patch;
use crate::editing::upload::{self, UploadOutcome, UploadSlot};
use crate::persist::{self, DecodeError};
use crate::schema::{BlockEntry, BlockId, ContentBlock};

/// An editing session over one post's blocks.
///
/// The document owns its sequence exclusively while it is being edited.
/// Every change goes through [`BlockDocument::apply`] (or
/// [`BlockDocument::replace_all`] for surfaces that compute the new
/// sequence themselves) and hands back the full sequence in a [`Patch`].
///
/// ```rust
/// use artisan_blocks_engine::editing::{BlockCmd, BlockDocument, Direction};
/// use artisan_blocks_engine::BlockTag;
///
/// let mut doc = BlockDocument::new();
/// doc.apply(BlockCmd::Insert { tag: BlockTag::Heading });
/// doc.apply(BlockCmd::Insert { tag: BlockTag::Paragraph });
/// let patch = doc.apply(BlockCmd::Move { index: 1, direction: Direction::Up });
///
/// assert_eq!(patch.blocks.len(), 2);
/// assert_eq!(patch.version, 3);
/// assert!(doc.is_dirty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockDocument {
    entries: Vec<BlockEntry>,
    /// Incremented on every change that altered the sequence
    version: u64,
    dirty: bool,
}

impl BlockDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate from a persisted sequence. Blocks stored without an id get
    /// one now, since this is the first time the editor sees them.
    pub fn from_entries(mut entries: Vec<BlockEntry>) -> Self {
        for entry in entries.iter_mut() {
            if let BlockEntry::Block(block) = entry
                && block.id.is_empty()
            {
                block.id = BlockId::generate();
                log::info!("Assigned id {} to {} block", block.id, block.tag_name());
            }
        }

        Self {
            entries,
            version: 0,
            dirty: false,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Ok(Self::from_entries(persist::decode_document(json)?))
    }

    pub fn to_json(&self) -> Result<String, DecodeError> {
        persist::encode_document(&self.entries)
    }

    pub fn entries(&self) -> &[BlockEntry] {
        &self.entries
    }

    pub fn blocks(&self) -> impl Iterator<Item = &ContentBlock> {
        self.entries.iter().filter_map(BlockEntry::as_block)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// True when there are changes since load or the last save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    pub fn apply(&mut self, cmd: BlockCmd) -> Patch {
        let next = commands::apply(&self.entries, &cmd);
        self.replace_all(next)
    }

    pub fn replace_all(&mut self, entries: Vec<BlockEntry>) -> Patch {
        let changed = entries != self.entries;
        if changed {
            self.entries = entries;
            self.version += 1;
            self.dirty = true;
        }

        Patch {
            blocks: self.entries.clone(),
            version: self.version,
            changed,
        }
    }

    /// Land an upload result. Failures and late results leave the document
    /// untouched.
    pub fn complete_upload(
        &mut self,
        block_id: &BlockId,
        slot: UploadSlot,
        result: Result<String, String>,
    ) -> UploadOutcome {
        let outcome = upload::complete_upload(&self.entries, block_id, slot, result);
        if let UploadOutcome::Applied(next) = &outcome {
            self.replace_all(next.clone());
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::commands::Direction;
    use crate::schema::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_document_is_empty_and_clean() {
        let doc = BlockDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.version(), 0);
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_hydrate_assigns_missing_ids_only() {
        let doc = BlockDocument::from_json(
            r#"[{"type":"paragraph","data":{"text":"a"}},{"id":"keep","type":"divider"}]"#,
        )
        .unwrap();

        let blocks: Vec<&ContentBlock> = doc.blocks().collect();
        assert!(!blocks[0].id.is_empty());
        assert_eq!(blocks[1].id.as_str(), "keep");
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_noop_edit_keeps_version() {
        let mut doc = BlockDocument::new();
        doc.apply(BlockCmd::Insert {
            tag: BlockTag::Divider,
        });
        let patch = doc.apply(BlockCmd::Move {
            index: 0,
            direction: Direction::Up,
        });

        assert!(!patch.changed);
        assert_eq!(patch.version, 1);
    }

    #[test]
    fn test_patch_carries_full_sequence() {
        let mut doc = BlockDocument::new();
        doc.apply(BlockCmd::Insert {
            tag: BlockTag::Paragraph,
        });
        let patch = doc.apply(BlockCmd::Insert {
            tag: BlockTag::Quote,
        });

        assert_eq!(patch.blocks, doc.entries().to_vec());
        assert_eq!(patch.blocks.len(), 2);
    }

    #[test]
    fn test_mark_saved_clears_dirty() {
        let mut doc = BlockDocument::new();
        doc.apply(BlockCmd::Insert {
            tag: BlockTag::List,
        });
        assert!(doc.is_dirty());
        doc.mark_saved();
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_json_round_trip_through_session() {
        let json = r#"[{"id":"a","type":"heading","data":{"text":"Hello","level":2}},{"id":"b","type":"divider","data":{}}]"#;
        let doc = BlockDocument::from_json(json).unwrap();
        let again = BlockDocument::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(again.entries(), doc.entries());
    }

    #[test]
    fn test_upload_result_updates_document() {
        let mut doc = BlockDocument::new();
        doc.apply(BlockCmd::Insert {
            tag: BlockTag::Image,
        });
        let id = doc.blocks().next().unwrap().id.clone();

        let outcome =
            doc.complete_upload(&id, UploadSlot::ImageUrl, Ok("media/a.png".to_string()));

        assert!(matches!(outcome, UploadOutcome::Applied(_)));
        assert_eq!(doc.version(), 2);
        let BlockData::Image(image) = &doc.blocks().next().unwrap().data else {
            panic!("expected image data");
        };
        assert_eq!(image.url, "media/a.png");
    }
}
