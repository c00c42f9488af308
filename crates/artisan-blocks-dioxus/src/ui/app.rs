use artisan_blocks_engine::models::post_file::POST_EXTENSION;
use artisan_blocks_engine::{BlockDocument, BlockEntry, PostFile, RenderOptions, io};
use dioxus::prelude::*;
use std::path::PathBuf;

use super::components::{ErrorScreen, MainPanel, NewPostForm, PostList, PostsRoot};

const THEME_CSS: &str = include_str!("../assets/theme.css");

#[component]
pub fn App(posts_path: PathBuf, options: RenderOptions) -> Element {
    use_context_provider(|| PostsRoot(posts_path.clone()));

    let mut posts = use_signal({
        let posts_path = posts_path.clone();
        move || io::scan_post_files(&posts_path).map_err(|e| e.to_string())
    });
    let mut selected_post = use_signal(|| None::<PostFile>);
    let mut document = use_signal(|| None::<BlockDocument>);
    let mut status = use_signal(|| None::<String>);

    let load_post = use_callback({
        let posts_path = posts_path.clone();
        move |post: PostFile| match io::read_post(post.relative_path(), &posts_path) {
            Ok(entries) => {
                log::info!("Opened {} ({} blocks)", post.relative_path(), entries.len());
                document.set(Some(BlockDocument::from_entries(entries)));
                selected_post.set(Some(post));
                status.set(None);
            }
            Err(e) => {
                log::error!("Error reading post {}: {e}", post.relative_path());
                status.set(Some(format!("Could not open {}: {e}", post.display_name())));
            }
        }
    });

    let mut refuse_if_unsaved = move || {
        let blocked =
            unsaved_changes_guard(document.read().as_ref(), selected_post.read().as_ref());
        if let Some(message) = &blocked {
            log::warn!("{message}");
            status.set(Some(message.clone()));
        }
        blocked.is_some()
    };

    let open_post = move |post: PostFile| {
        if selected_post.read().as_ref() == Some(&post) || refuse_if_unsaved() {
            return;
        }
        load_post.call(post);
    };

    let create_post = {
        let posts_path = posts_path.clone();
        move |title: String| {
            let Some(post) = post_file_for_title(&title) else {
                return;
            };
            if refuse_if_unsaved() {
                return;
            }
            if post.relative_path().to_path(&posts_path).exists() {
                status.set(Some(format!("{} already exists", post.relative_path())));
                return;
            }
            match io::write_post(post.relative_path(), &posts_path, &[]) {
                Ok(()) => {
                    posts.set(io::scan_post_files(&posts_path).map_err(|e| e.to_string()));
                    load_post.call(post);
                }
                Err(e) => {
                    log::error!("Error creating post {}: {e}", post.relative_path());
                    status.set(Some(format!("Could not create post: {e}")));
                }
            }
        }
    };

    let refresh_posts = {
        let posts_path = posts_path.clone();
        move |_| {
            posts.set(io::scan_post_files(&posts_path).map_err(|e| e.to_string()));
        }
    };

    let on_change = move |entries: Vec<BlockEntry>| {
        if let Some(document) = document.write().as_mut() {
            let patch = document.replace_all(entries);
            log::debug!("Document now at version {}", patch.version);
        }
    };

    let on_save = {
        let posts_path = posts_path.clone();
        move |_| {
            let Some(post) = selected_post.read().clone() else {
                return;
            };
            let mut guard = document.write();
            let Some(document) = guard.as_mut() else {
                return;
            };
            match io::write_post(post.relative_path(), &posts_path, document.entries()) {
                Ok(()) => {
                    document.mark_saved();
                    status.set(Some(format!("Saved {}", post.display_name())));
                }
                Err(e) => {
                    log::error!("Error saving post {}: {e}", post.relative_path());
                    status.set(Some(format!("Save failed: {e}")));
                }
            }
        }
    };

    let on_revert = move |_| {
        let Some(post) = selected_post.read().clone() else {
            return;
        };
        log::info!("Reverting {}", post.relative_path());
        load_post.call(post);
    };

    let post_files = match posts.read().clone() {
        Ok(files) => files,
        Err(message) => {
            return rsx! {
                style { {THEME_CSS} }
                ErrorScreen {
                    title: "Cannot open posts folder".to_string(),
                    message: posts_path.display().to_string(),
                    details: Some(message),
                }
            };
        }
    };

    rsx! {
        style { {THEME_CSS} }
        div {
            class: "app-container",
            div {
                class: "sidebar",
                div {
                    class: "sidebar-header",
                    h2 { "Posts" }
                    button {
                        class: "refresh-button",
                        title: "Rescan the posts folder",
                        onclick: refresh_posts,
                        "↻"
                    }
                }
                PostList {
                    posts: post_files,
                    selected_post: selected_post.read().clone(),
                    on_select: open_post,
                }
                NewPostForm { on_create: create_post }
            }
            div {
                class: "main-content",
                if let (Some(post), Some(document)) = (
                    selected_post.read().as_ref(),
                    document.read().as_ref()
                ) {
                    MainPanel {
                        post: post.clone(),
                        entries: document.entries().to_vec(),
                        dirty: document.is_dirty(),
                        options,
                        status: status.read().clone(),
                        on_change,
                        on_save,
                        on_revert,
                    }
                } else {
                    div {
                        class: "welcome",
                        h1 { "Artisan Connect posts" }
                        p { "Select a post from the sidebar, or create a new one" }
                        if let Some(message) = status.read().as_ref() {
                            p { class: "status-message", "{message}" }
                        }
                    }
                }
            }
        }
    }
}

/// The status message to show instead of leaving a post with unsaved edits.
fn unsaved_changes_guard(
    document: Option<&BlockDocument>,
    current: Option<&PostFile>,
) -> Option<String> {
    if !document.is_some_and(BlockDocument::is_dirty) {
        return None;
    }
    let name = current.map(PostFile::display_name).unwrap_or("this post");
    Some(format!("Save or revert {name} before opening another post"))
}

/// Turn a title typed by the user into a post file name. Path separators
/// are kept so posts can be filed into folders.
fn post_file_for_title(title: &str) -> Option<PostFile> {
    let title = title.trim().trim_matches('/');
    let stem = title
        .strip_suffix(&format!(".{POST_EXTENSION}"))
        .unwrap_or(title)
        .trim();
    if stem.is_empty() || stem.split('/').any(|part| part.is_empty() || part == "..") {
        return None;
    }
    Some(PostFile::from(format!("{stem}.{POST_EXTENSION}").as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use artisan_blocks_engine::{BlockCmd, BlockTag};
    use dioxus::dioxus_core::VirtualDom;

    #[test]
    fn test_post_file_for_title() {
        let post = post_file_for_title("  spring-market ").unwrap();
        assert_eq!(post.relative_path().as_str(), "spring-market.json");

        let post = post_file_for_title("2024/kiln-notes.json").unwrap();
        assert_eq!(post.relative_path().as_str(), "2024/kiln-notes.json");
        assert_eq!(post.display_name(), "kiln-notes");
    }

    #[test]
    fn test_post_file_for_title_rejects_bad_names() {
        assert!(post_file_for_title("   ").is_none());
        assert!(post_file_for_title(".json").is_none());
        assert!(post_file_for_title("../outside").is_none());
        assert!(post_file_for_title("a//b").is_none());
    }

    #[test]
    fn test_unsaved_changes_block_switching_posts() {
        let post = PostFile::from("kiln.json");
        let mut document = BlockDocument::new();
        document.apply(BlockCmd::Insert {
            tag: BlockTag::Paragraph,
        });

        assert_eq!(
            unsaved_changes_guard(Some(&document), Some(&post)).as_deref(),
            Some("Save or revert kiln before opening another post")
        );
        assert!(unsaved_changes_guard(Some(&document), None).is_some());

        document.mark_saved();
        assert_eq!(unsaved_changes_guard(Some(&document), Some(&post)), None);
    }

    #[test]
    fn test_clean_or_missing_document_allows_switching() {
        let post = PostFile::from("kiln.json");
        let document = BlockDocument::from_entries(Vec::new());

        assert_eq!(unsaved_changes_guard(Some(&document), Some(&post)), None);
        assert_eq!(unsaved_changes_guard(None, None), None);
    }

    #[test]
    fn test_app_lists_posts() {
        let posts = tempfile::tempdir().unwrap();
        std::fs::write(posts.path().join("welcome.json"), "[]").unwrap();
        std::fs::create_dir_all(posts.path().join("2024")).unwrap();
        std::fs::write(posts.path().join("2024/market.json"), "[]").unwrap();

        let mut dom = VirtualDom::new_with_props(
            App,
            AppProps {
                posts_path: posts.path().to_path_buf(),
                options: RenderOptions::default(),
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("welcome"));
        assert!(html.contains("market"));
        assert!(html.contains("Select a post from the sidebar"));
    }

    #[test]
    fn test_app_shows_error_for_missing_folder() {
        let mut dom = VirtualDom::new_with_props(
            App,
            AppProps {
                posts_path: PathBuf::from("/this/path/does/not/exist"),
                options: RenderOptions::default(),
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Cannot open posts folder"));
        assert!(html.contains("not a directory"));
    }
}
