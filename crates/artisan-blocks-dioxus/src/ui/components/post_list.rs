use crate::ui::components::post_list_item::PostListItem;
use artisan_blocks_engine::PostFile;
use dioxus::events::KeyboardEvent;
use dioxus::prelude::*;

#[component]
pub fn PostList(
    posts: Vec<PostFile>,
    selected_post: Option<PostFile>,
    on_select: EventHandler<PostFile>,
) -> Element {
    let mut focused_index = use_signal(|| 0usize);
    let mut has_focus = use_signal(|| false);

    // Keep keyboard focus on the open post
    {
        let selected_post = selected_post.clone();
        let posts = posts.clone();
        use_effect(move || {
            if let Some(selected) = selected_post.as_ref()
                && let Some(index) = posts.iter().position(|post| post == selected)
            {
                focused_index.set(index);
            }
        });
    }

    let handle_keydown = {
        let posts = posts.clone();
        move |evt: KeyboardEvent| {
            handle_list_navigation(
                evt,
                *has_focus.read(),
                &posts,
                &mut focused_index,
                &on_select,
            );
        }
    };

    rsx! {
        div {
            class: "post-list",
            tabindex: "0",
            onkeydown: handle_keydown,
            onfocus: move |_| has_focus.set(true),
            onblur: move |_| has_focus.set(false),
            if posts.is_empty() {
                p { class: "post-list-empty", "No posts yet" }
            }
            for (index, post) in posts.iter().enumerate() {
                PostListItem {
                    key: "{index}",
                    post: post.clone(),
                    is_selected: selected_post.as_ref() == Some(post),
                    is_focused: index == *focused_index.read() && *has_focus.read(),
                    on_select,
                }
            }
        }
    }
}

/// Arrow keys move through the list and open the post under the cursor
fn handle_list_navigation(
    evt: KeyboardEvent,
    has_focus: bool,
    posts: &[PostFile],
    focused_index: &mut Signal<usize>,
    on_select: &EventHandler<PostFile>,
) {
    if !has_focus || posts.is_empty() {
        return;
    }

    let current_index = *focused_index.read();
    let new_index = match evt.key() {
        Key::ArrowDown => (current_index + 1).min(posts.len() - 1),
        Key::ArrowUp => current_index.saturating_sub(1),
        _ => return,
    };

    evt.prevent_default();
    focused_index.set(new_index);
    on_select.call(posts[new_index].clone());
}
