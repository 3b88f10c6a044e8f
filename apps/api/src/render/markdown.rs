use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const SAFE_URL_PREFIXES: [&str; 3] = ["http:", "https:", "mailto:"];

/// Renders model output (Markdown) to HTML.
///
/// Raw HTML inside the completion is emitted as escaped text, and soft line
/// breaks become `<br />` so the model's line structure survives. Link and
/// image targets outside `http:`, `https:` and `mailto:` are replaced by `#`.
pub fn markdown_to_html(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::SoftBreak => Event::HardBreak,
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let lowered = url.trim_start().to_ascii_lowercase();
    if SAFE_URL_PREFIXES.iter().any(|prefix| lowered.starts_with(prefix)) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

/// Escapes text for use inside HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_label_renders_as_strong() {
        let html = markdown_to_html("**주요 성과:** 30% 절감");
        assert!(html.contains("<strong>주요 성과:</strong> 30% 절감"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = markdown_to_html("요약 <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_line_breaks_survive() {
        let html = markdown_to_html("첫 줄\n둘째 줄");
        assert!(html.contains("<br />"));
    }

    #[test]
    fn test_script_links_are_neutralized() {
        let html = markdown_to_html(
            "[자세히](javascript:alert(document.cookie)) ![x](JavaScript:alert(1)) [d](data:text/html,x)",
        );
        assert!(!html.to_ascii_lowercase().contains("javascript:"));
        assert!(!html.contains("data:text/html"));
        assert!(html.contains("<a href=\"#\">자세히</a>"));
    }

    #[test]
    fn test_web_and_mail_links_are_kept() {
        let html = markdown_to_html("[기관](https://www.kepco.co.kr) [메일](mailto:hr@kepco.co.kr)");
        assert!(html.contains("href=\"https://www.kepco.co.kr\""));
        assert!(html.contains("href=\"mailto:hr@kepco.co.kr\""));
    }

    #[test]
    fn test_escape_html_handles_quotes_and_tags() {
        assert_eq!(
            escape_html(r#"<a href="x">'홍'&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;홍&#39;&amp;&lt;/a&gt;"
        );
    }
}
