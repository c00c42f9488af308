use artisan_blocks_engine::registry;
use artisan_blocks_engine::{BlockData, BlockTag, ListData, ListStyle};
use dioxus::prelude::*;

#[component]
pub fn ListEditor(data: ListData, on_change: EventHandler<BlockData>) -> Element {
    let ordered = data.style == ListStyle::Ordered;
    let items = data.items.clone();
    let can_remove = items.len() > 1;

    let toggle_style = {
        let data = data.clone();
        move |_| {
            let style = match data.style {
                ListStyle::Ordered => ListStyle::Unordered,
                ListStyle::Unordered => ListStyle::Ordered,
            };
            on_change.call(BlockData::List(ListData {
                style,
                ..data.clone()
            }));
        }
    };
    let add_item = {
        let data = data.clone();
        move |_| {
            let mut next = data.clone();
            next.push_item();
            on_change.call(BlockData::List(next));
        }
    };

    rsx! {
        div {
            class: "list-editor",
            label {
                class: "list-style-toggle",
                input {
                    r#type: "checkbox",
                    checked: ordered,
                    onchange: toggle_style,
                }
                "Numbered"
            }
            for (index, text) in items.into_iter().enumerate() {
                ListItemRow {
                    key: "{index}",
                    index,
                    text,
                    list: data.clone(),
                    can_remove,
                    on_change,
                }
            }
            button { class: "add-item-button", onclick: add_item, "Add item" }
        }
    }
}

#[component]
fn ListItemRow(
    index: usize,
    text: String,
    list: ListData,
    can_remove: bool,
    on_change: EventHandler<BlockData>,
) -> Element {
    let on_text = {
        let list = list.clone();
        move |evt: Event<FormData>| {
            let mut next = list.clone();
            next.set_item(index, evt.value());
            on_change.call(BlockData::List(next));
        }
    };
    let on_remove = move |_| {
        let mut next = list.clone();
        next.remove_item(index);
        on_change.call(BlockData::List(next));
    };

    rsx! {
        div {
            class: "list-item-row",
            input {
                r#type: "text",
                value: "{text}",
                placeholder: registry::info(BlockTag::List).placeholder,
                oninput: on_text,
            }
            button {
                class: "remove-item-button",
                disabled: !can_remove,
                onclick: on_remove,
                "Remove"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;

    #[allow(non_snake_case)]
    fn SingleItem() -> Element {
        rsx! {
            ListEditor { data: ListData::default(), on_change: move |_| {} }
        }
    }

    #[test]
    fn test_single_item_cannot_be_removed() {
        let mut dom = VirtualDom::new(SingleItem);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert_eq!(html.matches("list-item-row").count(), 1);
        assert!(html.contains("disabled"));
    }
}
