//! Markdown Rendering
//!
//! Article bodies and card excerpts are authored in markdown.

use pulldown_cmark::{html::push_html, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Render a markdown document to HTML
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Render markdown for inline use (strips the outer <p> tags)
pub fn render_markdown_inline(text: &str) -> String {
    let html = render_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_strips_single_paragraph() {
        assert_eq!(render_markdown_inline("some *emphasis*"), "some <em>emphasis</em>");
    }

    #[test]
    fn test_block_rendering_keeps_structure() {
        let html = render_markdown("## Heading\n\n- one\n- two");
        assert!(html.contains("<h2>"));
        assert!(html.contains("<li>one</li>"));
    }
}
