use crate::schema::BlockEntry;

/// Result of applying an edit: the complete replacement sequence
pub struct Patch {
    pub blocks: Vec<BlockEntry>,
    pub version: u64,
    /// False when the edit was a no-op
    pub changed: bool,
}
