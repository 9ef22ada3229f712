//! Markdown rendering for the donation page story.
//!
//! Raw HTML is dropped and link or image targets with a scheme other than
//! `http`, `https` or `mailto` are replaced by `#`, so the output can be
//! injected into the preview as-is.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

use crate::validation::is_safe_link;

const BLOCKED_TARGET: &str = "#";

fn checked(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_link(&url) {
        url
    } else {
        log::warn!("Dropping link target with a disallowed scheme");
        CowStr::Borrowed(BLOCKED_TARGET)
    }
}

pub fn render_markdown(input: &str) -> String {
    let parser = Parser::new_ext(input, Options::ENABLE_STRIKETHROUGH).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Some(Event::Start(Tag::Link {
            link_type,
            dest_url: checked(dest_url),
            title,
            id,
        })),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Some(Event::Start(Tag::Image {
            link_type,
            dest_url: checked(dest_url),
            title,
            id,
        })),
        other => Some(other),
    });
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_html_is_dropped() {
        let output = render_markdown("Hello <script>alert(1)</script> **world**\n\n<div>block</div>\n");
        assert!(!output.contains("<script>"));
        assert!(!output.contains("<div>"));
        assert!(output.contains("<strong>world</strong>"));
    }

    #[test]
    fn test_script_links_are_neutralised() {
        let output = render_markdown("[x](javascript:alert(1)) and ![img](JavaScript:alert(2))");
        assert!(!output.to_lowercase().contains("javascript:"));
        assert!(output.contains(r##"<a href="#">x</a>"##));
        assert!(output.contains(r##"src="#""##));
    }

    #[test]
    fn test_safe_links_are_kept() {
        let output = render_markdown("[give](https://example.org/give) [mail](mailto:a@b.co) [top](#story)");
        assert!(output.contains(r#"href="https://example.org/give""#));
        assert!(output.contains(r#"href="mailto:a@b.co""#));
        assert!(output.contains(r##"href="#story""##));
    }
}
