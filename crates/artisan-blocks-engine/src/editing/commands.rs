//! Edit operations over a document.
//!
//! Every operation takes the current sequence and returns the complete
//! replacement sequence. None of them can fail: an index outside the
//! document, or an edit that would change a block's tag, leaves the
//! sequence as it was.

use crate::registry;
use crate::schema::{BlockData, BlockEntry, BlockTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// An edit to a document, as issued by an editing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockCmd {
    /// Append a new block with the tag's default payload
    Insert { tag: BlockTag },
    /// Swap a block with its neighbour
    Move { index: usize, direction: Direction },
    Delete { index: usize },
    /// Replace a block's payload wholesale
    UpdateData { index: usize, data: BlockData },
}

pub fn apply(entries: &[BlockEntry], cmd: &BlockCmd) -> Vec<BlockEntry> {
    match cmd {
        BlockCmd::Insert { tag } => insert(entries, *tag),
        BlockCmd::Move { index, direction } => reorder(entries, *index, *direction),
        BlockCmd::Delete { index } => delete(entries, *index),
        BlockCmd::UpdateData { index, data } => update_data(entries, *index, data.clone()),
    }
}

pub fn insert(entries: &[BlockEntry], tag: BlockTag) -> Vec<BlockEntry> {
    let mut next = entries.to_vec();
    next.push(registry::new_block(tag).into());
    next
}

pub fn reorder(entries: &[BlockEntry], index: usize, direction: Direction) -> Vec<BlockEntry> {
    let mut next = entries.to_vec();
    let target = match direction {
        Direction::Up => index.checked_sub(1),
        Direction::Down => index.checked_add(1),
    };
    if let Some(target) = target
        && index < next.len()
        && target < next.len()
    {
        next.swap(index, target);
    }
    next
}

pub fn delete(entries: &[BlockEntry], index: usize) -> Vec<BlockEntry> {
    let mut next = entries.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}

pub fn update_data(entries: &[BlockEntry], index: usize, data: BlockData) -> Vec<BlockEntry> {
    let mut next = entries.to_vec();
    match next.get_mut(index) {
        Some(BlockEntry::Block(block)) if block.data.same_tag(&data) => {
            block.data = data;
        }
        Some(BlockEntry::Block(block)) => {
            log::warn!(
                "Ignoring {} payload for {} block {}",
                data.tag_name(),
                block.tag_name(),
                block.id
            );
        }
        Some(BlockEntry::Invalid(_)) => {
            log::warn!("Ignoring payload update for unreadable entry at {index}");
        }
        None => {}
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn paragraph(id: &str, text: &str) -> BlockEntry {
        ContentBlock::new(
            id,
            BlockData::Paragraph(ParagraphData {
                text: text.to_string(),
            }),
        )
        .into()
    }

    fn abc() -> Vec<BlockEntry> {
        vec![paragraph("a", "A"), paragraph("b", "B"), paragraph("c", "C")]
    }

    fn ids(entries: &[BlockEntry]) -> Vec<&str> {
        entries.iter().filter_map(|e| e.id()).collect()
    }

    #[test]
    fn test_insert_appends_default_block() {
        let next = insert(&abc(), BlockTag::Heading);

        assert_eq!(next.len(), 4);
        assert_eq!(ids(&next[..3]), vec!["a", "b", "c"]);
        let block = next[3].as_block().unwrap();
        assert_eq!(block.data, registry::default_data(BlockTag::Heading));
        assert!(!block.id.is_empty());
    }

    #[test]
    fn test_insert_ids_are_unique() {
        let once = insert(&[], BlockTag::Paragraph);
        let twice = insert(&once, BlockTag::Paragraph);
        assert_ne!(twice[0].id(), twice[1].id());
    }

    #[test]
    fn test_move_first_up_is_noop() {
        assert_eq!(reorder(&abc(), 0, Direction::Up), abc());
    }

    #[test]
    fn test_move_last_down_is_noop() {
        assert_eq!(reorder(&abc(), 2, Direction::Down), abc());
    }

    #[test]
    fn test_move_out_of_range_is_noop() {
        assert_eq!(reorder(&abc(), 7, Direction::Up), abc());
        assert_eq!(reorder(&abc(), usize::MAX, Direction::Down), abc());
    }

    #[test]
    fn test_move_swaps_neighbours() {
        assert_eq!(ids(&reorder(&abc(), 1, Direction::Up)), vec!["b", "a", "c"]);
        assert_eq!(ids(&reorder(&abc(), 1, Direction::Down)), vec!["a", "c", "b"]);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn test_down_then_up_restores_order(#[case] i: usize) {
        let moved = reorder(&abc(), i, Direction::Down);
        assert_eq!(reorder(&moved, i + 1, Direction::Up), abc());
    }

    #[rstest]
    #[case(0, vec!["b", "c"])]
    #[case(1, vec!["a", "c"])]
    #[case(2, vec!["a", "b"])]
    fn test_delete_removes_exactly_one(#[case] index: usize, #[case] expected: Vec<&str>) {
        let next = delete(&abc(), index);
        assert_eq!(next.len(), 2);
        assert_eq!(ids(&next), expected);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        assert_eq!(delete(&abc(), 3), abc());
    }

    #[test]
    fn test_update_replaces_payload_only() {
        let data = BlockData::Paragraph(ParagraphData {
            text: "changed".to_string(),
        });
        let next = update_data(&abc(), 1, data.clone());

        let block = next[1].as_block().unwrap();
        assert_eq!(block.id.as_str(), "b");
        assert_eq!(block.data, data);
        assert_eq!(next[0], abc()[0]);
        assert_eq!(next[2], abc()[2]);
    }

    #[test]
    fn test_update_with_other_tag_is_ignored() {
        let next = update_data(&abc(), 0, BlockData::Divider(DividerData {}));
        assert_eq!(next, abc());
    }

    #[test]
    fn test_update_on_invalid_entry_is_ignored() {
        let entries = vec![BlockEntry::from_value(serde_json::json!(3))];
        let next = update_data(&entries, 0, BlockData::Divider(DividerData {}));
        assert_eq!(next, entries);
    }

    #[test]
    fn test_apply_dispatches() {
        let next = apply(
            &abc(),
            &BlockCmd::Move {
                index: 2,
                direction: Direction::Up,
            },
        );
        assert_eq!(ids(&next), vec!["a", "c", "b"]);

        let next = apply(&next, &BlockCmd::Delete { index: 0 });
        assert_eq!(ids(&next), vec!["c", "b"]);
    }
}
