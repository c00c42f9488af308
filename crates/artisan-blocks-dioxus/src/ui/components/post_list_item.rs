use artisan_blocks_engine::PostFile;
use dioxus::prelude::*;

#[component]
pub fn PostListItem(
    post: PostFile,
    is_selected: bool,
    is_focused: bool,
    on_select: EventHandler<PostFile>,
) -> Element {
    let classes = item_classes(is_selected, is_focused);
    let folder = post
        .relative_path()
        .parent()
        .map(|parent| parent.as_str().to_string())
        .filter(|parent| !parent.is_empty());
    let name = post.display_name().to_string();
    let path = post.relative_path().to_string();

    rsx! {
        div {
            class: "{classes}",
            title: "{path}",
            onclick: move |_| on_select.call(post.clone()),
            if let Some(folder) = folder {
                span { class: "post-folder", "{folder}/" }
            }
            span { class: "post-label", "{name}" }
        }
    }
}

fn item_classes(is_selected: bool, is_focused: bool) -> &'static str {
    match (is_selected, is_focused) {
        (true, true) => "post-item selected focused",
        (true, false) => "post-item selected",
        (false, true) => "post-item focused",
        (false, false) => "post-item",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_classes() {
        assert_eq!(item_classes(false, false), "post-item");
        assert_eq!(item_classes(true, false), "post-item selected");
        assert_eq!(item_classes(true, true), "post-item selected focused");
    }
}
