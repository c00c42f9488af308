use artisan_blocks_engine::HeadingLevel;
use dioxus::prelude::*;

/// Body heading. Level 1 belongs to the post title, so only h2-h4 appear here.
#[component]
pub fn Heading(level: HeadingLevel, text: String) -> Element {
    let class_name = format!("block-heading level-{}", level.as_u8());

    match level {
        HeadingLevel::H2 => rsx! { h2 { class: "{class_name}", "{text}" } },
        HeadingLevel::H3 => rsx! { h3 { class: "{class_name}", "{text}" } },
        HeadingLevel::H4 => rsx! { h4 { class: "{class_name}", "{text}" } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;

    fn render_heading(level: HeadingLevel, text: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            Heading,
            HeadingProps {
                level,
                text: text.to_string(),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_heading_levels_map_to_elements() {
        assert!(render_heading(HeadingLevel::H2, "Glazes").starts_with("<h2"));
        assert!(render_heading(HeadingLevel::H3, "Glazes").starts_with("<h3"));
        assert!(render_heading(HeadingLevel::H4, "Glazes").starts_with("<h4"));
    }

    #[test]
    fn test_heading_escapes_text() {
        let html = render_heading(HeadingLevel::H2, "Salt & <soda>");
        assert!(!html.contains("<soda>"));
        assert!(html.contains("Salt"));
    }
}
