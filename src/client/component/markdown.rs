use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Renders markdown to HTML. Raw HTML in the source is shown as text.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[component]
pub fn Markdown(source: String) -> Element {
    let rendered = render_markdown(&source);

    rsx!(
        div {
            class: "prose max-w-none",
            dangerous_inner_html: "{rendered}",
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_emphasis() {
        assert_eq!(render_markdown("**great** game"), "<p><strong>great</strong> game</p>\n");
    }

    #[test]
    fn escapes_raw_html() {
        let rendered = render_markdown("<script>alert(1)</script>");
        assert!(!rendered.contains("<script>"));
        assert!(rendered.contains("&lt;script&gt;"));
    }
}
