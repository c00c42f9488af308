use dioxus::prelude::*;

#[component]
pub fn NewPostForm(on_create: EventHandler<String>) -> Element {
    let mut title = use_signal(String::new);

    let mut submit = move || {
        let value = title.read().trim().to_string();
        if !value.is_empty() {
            on_create.call(value);
            title.set(String::new());
        }
    };

    rsx! {
        div {
            class: "new-post-form",
            input {
                r#type: "text",
                placeholder: "New post name",
                value: "{title}",
                oninput: move |evt| title.set(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        submit();
                    }
                },
            }
            button {
                class: "new-post-button",
                disabled: title.read().trim().is_empty(),
                onclick: move |_| submit(),
                "Create"
            }
        }
    }
}
