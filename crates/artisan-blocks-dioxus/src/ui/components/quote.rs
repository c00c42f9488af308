use dioxus::prelude::*;

#[component]
pub fn Quote(text: String, author: Option<String>, source: Option<String>) -> Element {
    let attributed = author.is_some() || source.is_some();
    let separator = if author.is_some() && source.is_some() {
        ", "
    } else {
        ""
    };

    rsx! {
        blockquote {
            class: "block-quote",
            p { "{text}" }
            if attributed {
                footer {
                    if let Some(author) = author {
                        span { class: "quote-author", "{author}" }
                    }
                    "{separator}"
                    if let Some(source) = source {
                        cite { "{source}" }
                    }
                }
            }
        }
    }
}
