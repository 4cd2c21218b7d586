//! Markdown rendering for note bodies.

use pulldown_cmark::{html, Options, Parser};

/// Render markdown source to an HTML fragment.
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_heading() {
        let html = markdown_to_html("# Title");
        assert!(html.contains("<h1>"));
        assert!(html.contains("Title"));
    }

    #[test]
    fn test_renders_emphasis_and_list() {
        let html = markdown_to_html("- one\n- *two*\n");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>"));
        assert!(html.contains("<em>two</em>"));
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert!(markdown_to_html("").is_empty());
    }

    #[test]
    fn test_plain_text_becomes_paragraph() {
        let html = markdown_to_html("just text");
        assert_eq!(html.trim(), "<p>just text</p>");
    }
}
