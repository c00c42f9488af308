use anyhow::Result;
use artisan_blocks_engine::registry;
use artisan_blocks_engine::{
    BlockCmd, BlockDocument, BlockTag, Direction, PostFile, RenderOptions, RenderedBlock, io,
    render,
};
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Posts,
    Blocks,
}

pub struct App {
    posts_path: PathBuf,
    options: RenderOptions,
    pub posts: Vec<PostFile>,
    pub post_list_state: ListState,
    pub document: Option<BlockDocument>,
    pub block_list_state: ListState,
    pub focus: Focus,
    /// Open while the user is picking a block kind to insert
    pub insert_menu: Option<ListState>,
    pub status: Option<String>,
}

impl App {
    pub fn new(posts_path: PathBuf, options: RenderOptions) -> Result<Self> {
        let posts = io::scan_post_files(&posts_path)?;

        let mut app = Self {
            posts_path,
            options,
            posts,
            post_list_state: ListState::default(),
            document: None,
            block_list_state: ListState::default(),
            focus: Focus::Posts,
            insert_menu: None,
            status: None,
        };

        if !app.posts.is_empty() {
            app.post_list_state.select(Some(0));
            app.open_selected_post();
        }

        Ok(app)
    }

    pub fn selected_post(&self) -> Option<&PostFile> {
        self.post_list_state
            .selected()
            .and_then(|index| self.posts.get(index))
    }

    pub fn is_dirty(&self) -> bool {
        self.document.as_ref().is_some_and(BlockDocument::is_dirty)
    }

    pub fn rendered_blocks(&self) -> Vec<RenderedBlock> {
        self.document
            .as_ref()
            .map(|document| render(document.entries(), &self.options))
            .unwrap_or_default()
    }

    /// Handle one key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.insert_menu.is_some() {
            self.handle_insert_menu_key(code);
            return false;
        }

        match (self.focus, code) {
            (_, KeyCode::Char('q')) => {
                if self.is_dirty() {
                    self.status = Some("Unsaved changes: press s to save or Q to quit".to_string());
                    return false;
                }
                return true;
            }
            (_, KeyCode::Char('Q')) => return true,
            (_, KeyCode::Char('s')) => self.save(),
            (_, KeyCode::Tab) => self.toggle_focus(),
            (Focus::Posts, KeyCode::Down | KeyCode::Char('j')) => self.next_post(),
            (Focus::Posts, KeyCode::Up | KeyCode::Char('k')) => self.previous_post(),
            (Focus::Posts, KeyCode::Enter | KeyCode::Right) => {
                if self.document.is_some() {
                    self.focus = Focus::Blocks;
                }
            }
            (Focus::Blocks, KeyCode::Esc | KeyCode::Left) => self.focus = Focus::Posts,
            (Focus::Blocks, KeyCode::Down | KeyCode::Char('j')) => self.next_block(),
            (Focus::Blocks, KeyCode::Up | KeyCode::Char('k')) => self.previous_block(),
            (Focus::Blocks, KeyCode::Char('J')) => self.move_selected_block(Direction::Down),
            (Focus::Blocks, KeyCode::Char('K')) => self.move_selected_block(Direction::Up),
            (Focus::Blocks, KeyCode::Char('d')) => self.delete_selected_block(),
            (Focus::Blocks, KeyCode::Char('i')) => {
                let mut menu = ListState::default();
                menu.select(Some(0));
                self.insert_menu = Some(menu);
            }
            _ => {}
        }
        false
    }

    fn handle_insert_menu_key(&mut self, code: KeyCode) {
        let Some(menu) = self.insert_menu.as_mut() else {
            return;
        };
        let len = registry::TAGS.len();
        let current = menu.selected().unwrap_or(0);
        match code {
            KeyCode::Down | KeyCode::Char('j') => menu.select(Some((current + 1) % len)),
            KeyCode::Up | KeyCode::Char('k') => menu.select(Some((current + len - 1) % len)),
            KeyCode::Enter => {
                let tag = registry::TAGS[current].tag;
                self.insert_menu = None;
                self.insert_block(tag);
            }
            KeyCode::Esc | KeyCode::Char('q') => self.insert_menu = None,
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Posts if self.document.is_some() => Focus::Blocks,
            _ => Focus::Posts,
        };
    }

    fn next_post(&mut self) {
        if self.posts.is_empty() {
            return;
        }
        let i = match self.post_list_state.selected() {
            Some(i) => (i + 1) % self.posts.len(),
            None => 0,
        };
        self.select_post(i);
    }

    fn previous_post(&mut self) {
        if self.posts.is_empty() {
            return;
        }
        let i = match self.post_list_state.selected() {
            Some(0) | None => self.posts.len() - 1,
            Some(i) => i - 1,
        };
        self.select_post(i);
    }

    fn select_post(&mut self, index: usize) {
        if self.post_list_state.selected() == Some(index) {
            return;
        }
        if self.is_dirty() {
            self.status = Some("Save with s before switching posts".to_string());
            return;
        }
        self.post_list_state.select(Some(index));
        self.open_selected_post();
    }

    fn open_selected_post(&mut self) {
        let Some(post) = self.selected_post().cloned() else {
            return;
        };
        match io::read_post(post.relative_path(), &self.posts_path) {
            Ok(entries) => {
                let document = BlockDocument::from_entries(entries);
                self.block_list_state
                    .select(if document.is_empty() { None } else { Some(0) });
                self.document = Some(document);
                self.status = None;
            }
            Err(e) => {
                self.document = None;
                self.block_list_state.select(None);
                self.focus = Focus::Posts;
                self.status = Some(format!("Could not open {}: {e}", post.display_name()));
            }
        }
    }

    fn block_count(&self) -> usize {
        self.document.as_ref().map_or(0, BlockDocument::len)
    }

    fn next_block(&mut self) {
        let len = self.block_count();
        if len == 0 {
            return;
        }
        let i = self
            .block_list_state
            .selected()
            .map_or(0, |i| (i + 1).min(len - 1));
        self.block_list_state.select(Some(i));
    }

    fn previous_block(&mut self) {
        if self.block_count() == 0 {
            return;
        }
        let i = self
            .block_list_state
            .selected()
            .map_or(0, |i| i.saturating_sub(1));
        self.block_list_state.select(Some(i));
    }

    fn apply(&mut self, cmd: BlockCmd) -> bool {
        self.document
            .as_mut()
            .is_some_and(|document| document.apply(cmd).changed)
    }

    fn move_selected_block(&mut self, direction: Direction) {
        let Some(index) = self.block_list_state.selected() else {
            return;
        };
        if self.apply(BlockCmd::Move { index, direction }) {
            let target = match direction {
                Direction::Up => index - 1,
                Direction::Down => index + 1,
            };
            self.block_list_state.select(Some(target));
        }
    }

    fn delete_selected_block(&mut self) {
        let Some(index) = self.block_list_state.selected() else {
            return;
        };
        if self.apply(BlockCmd::Delete { index }) {
            let len = self.block_count();
            self.block_list_state
                .select(if len == 0 { None } else { Some(index.min(len - 1)) });
        }
    }

    fn insert_block(&mut self, tag: BlockTag) {
        if self.apply(BlockCmd::Insert { tag }) {
            self.block_list_state.select(Some(self.block_count() - 1));
            self.status = Some(format!("Added {} block", registry::info(tag).label));
        }
    }

    fn save(&mut self) {
        let Some(post) = self.selected_post().cloned() else {
            return;
        };
        let Some(document) = self.document.as_mut() else {
            return;
        };
        match io::write_post(post.relative_path(), &self.posts_path, document.entries()) {
            Ok(()) => {
                document.mark_saved();
                self.status = Some(format!("Saved {}", post.display_name()));
            }
            Err(e) => self.status = Some(format!("Save failed: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const MARKET_POST: &str = r#"[
        {"id": "a", "type": "heading", "data": {"text": "Spring market", "level": 2}},
        {"id": "b", "type": "paragraph", "data": {"text": "Stall 12"}},
        {"id": "c", "type": "carousel", "data": {"speed": 3}}
    ]"#;

    fn posts_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("market.json"), MARKET_POST).unwrap();
        std::fs::write(dir.path().join("notes.json"), "[]").unwrap();
        dir
    }

    fn app_for(dir: &TempDir) -> App {
        App::new(dir.path().to_path_buf(), RenderOptions::default()).unwrap()
    }

    fn ids(app: &App) -> Vec<String> {
        app.document
            .as_ref()
            .unwrap()
            .entries()
            .iter()
            .map(|entry| entry.id().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_opens_first_post() {
        let dir = posts_dir();
        let app = app_for(&dir);

        assert_eq!(app.posts.len(), 2);
        assert_eq!(app.selected_post().unwrap().display_name(), "market");
        assert_eq!(app.rendered_blocks().len(), 3);
        assert_eq!(app.block_list_state.selected(), Some(0));
        assert_eq!(app.focus, Focus::Posts);
    }

    #[test]
    fn test_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_for(&dir);

        assert!(app.document.is_none());
        assert!(!app.handle_key(KeyCode::Down));
        assert!(!app.handle_key(KeyCode::Enter));
        assert_eq!(app.focus, Focus::Posts);
    }

    #[test]
    fn test_post_navigation_wraps() {
        let dir = posts_dir();
        let mut app = app_for(&dir);

        app.handle_key(KeyCode::Char('j'));
        assert_eq!(app.selected_post().unwrap().display_name(), "notes");
        assert_eq!(app.block_list_state.selected(), None);

        app.handle_key(KeyCode::Char('j'));
        assert_eq!(app.selected_post().unwrap().display_name(), "market");

        app.handle_key(KeyCode::Char('k'));
        assert_eq!(app.selected_post().unwrap().display_name(), "notes");
    }

    #[test]
    fn test_move_and_delete_blocks() {
        let dir = posts_dir();
        let mut app = app_for(&dir);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.focus, Focus::Blocks);

        app.handle_key(KeyCode::Char('J'));
        assert_eq!(ids(&app), vec!["b", "a", "c"]);
        assert_eq!(app.block_list_state.selected(), Some(1));

        // Moving the first block up does nothing
        app.handle_key(KeyCode::Char('k'));
        app.handle_key(KeyCode::Char('K'));
        assert_eq!(ids(&app), vec!["b", "a", "c"]);
        assert_eq!(app.block_list_state.selected(), Some(0));

        app.handle_key(KeyCode::Char('j'));
        app.handle_key(KeyCode::Char('j'));
        app.handle_key(KeyCode::Char('d'));
        assert_eq!(ids(&app), vec!["b", "a"]);
        assert_eq!(app.block_list_state.selected(), Some(1));
        assert!(app.is_dirty());
    }

    #[test]
    fn test_insert_menu() {
        let dir = posts_dir();
        let mut app = app_for(&dir);
        app.handle_key(KeyCode::Enter);

        app.handle_key(KeyCode::Char('i'));
        assert!(app.insert_menu.is_some());
        // Second entry in the menu is the heading
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);

        assert!(app.insert_menu.is_none());
        let document = app.document.as_ref().unwrap();
        assert_eq!(document.len(), 4);
        assert_eq!(document.entries()[3].tag_name(), Some("heading"));
        assert_eq!(app.block_list_state.selected(), Some(3));

        app.handle_key(KeyCode::Char('i'));
        app.handle_key(KeyCode::Esc);
        assert!(app.insert_menu.is_none());
        assert_eq!(app.document.as_ref().unwrap().len(), 4);
    }

    #[test]
    fn test_save_keeps_unknown_blocks() {
        let dir = posts_dir();
        let mut app = app_for(&dir);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('d'));
        app.handle_key(KeyCode::Char('s'));

        assert!(!app.is_dirty());
        assert_eq!(app.status.as_deref(), Some("Saved market"));

        let saved = io::read_post(app.selected_post().unwrap().relative_path(), dir.path()).unwrap();
        let tags: Vec<_> = saved.iter().map(|entry| entry.tag_name()).collect();
        assert_eq!(tags, vec![Some("paragraph"), Some("carousel")]);
    }

    #[test]
    fn test_unsaved_changes_guard() {
        let dir = posts_dir();
        let mut app = app_for(&dir);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('d'));

        assert!(!app.handle_key(KeyCode::Char('q')));
        assert!(app.status.as_deref().unwrap().starts_with("Unsaved changes"));

        app.handle_key(KeyCode::Esc);
        app.handle_key(KeyCode::Char('j'));
        assert_eq!(app.selected_post().unwrap().display_name(), "market");

        assert!(app.handle_key(KeyCode::Char('Q')));
    }
}
