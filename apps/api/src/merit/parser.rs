//! Response Parser — best-effort split of the free-form completion into
//! summary and details. The model's output format is trusted, not enforced:
//! a missing delimiter yields empty details rather than an error.

use chrono::{DateTime, Utc};

use crate::merit::prompts::{DETAILS_LABEL, SUMMARY_LABEL};

/// Longest prefix (in chars) still treated as a section label by `emphasize_labels`.
const MAX_LABEL_CHARS: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub summary: String,
    pub details: String,
    pub item_count: usize,
    pub generated_at: DateTime<Utc>,
}

/// Splits once on the details delimiter and strips the summary label.
pub fn split_completion(raw: &str) -> (String, String) {
    match raw.split_once(DETAILS_LABEL) {
        Some((head, tail)) => (strip_summary_label(head), tail.trim().to_string()),
        None => (strip_summary_label(raw), String::new()),
    }
}

pub fn parse_completion(raw: &str, item_count: usize) -> GenerationResult {
    let (summary, details) = split_completion(raw);
    GenerationResult {
        summary,
        details,
        item_count,
        generated_at: Utc::now(),
    }
}

fn strip_summary_label(text: &str) -> String {
    text.replace(SUMMARY_LABEL, "").trim().to_string()
}

/// Counts subsection headers of the form `**[...]**` or `**...**:` opening a line.
/// Diagnostic only; the parser never rejects a completion on this count.
pub fn count_sections(details: &str) -> usize {
    details
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with("**") && (l.ends_with("**:") || l.ends_with("**")))
        .count()
}

/// Rewrites a colon-terminated label at the start of a line as a bold label.
///
/// `주요 성과: 내용` becomes `**주요 성과:** 내용` and `**[제목]**:` becomes
/// `**[제목]:**`. Lines without a short leading label are left untouched.
pub fn emphasize_labels(details: &str) -> String {
    details
        .lines()
        .map(emphasize_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn emphasize_line(line: &str) -> String {
    let indent_len = line.len() - line.trim_start().len();
    let (indent, body) = line.split_at(indent_len);
    let (marker, text) = split_list_marker(body);

    let Some((label, rest)) = text.split_once(':') else {
        return line.to_string();
    };

    let bare = label.trim().trim_matches('*').trim();
    if bare.is_empty() || bare.chars().count() > MAX_LABEL_CHARS || text.starts_with(":**") {
        return line.to_string();
    }
    // Already emphasized as `**label:**`.
    if label.trim_start().starts_with("**") && rest.starts_with("**") {
        return line.to_string();
    }
    // A colon inside a sentence, a URL or a clock time is not a label.
    if bare.contains("://")
        || bare.ends_with('.')
        || rest.starts_with("//")
        || rest.starts_with(|c: char| c.is_ascii_digit())
    {
        return line.to_string();
    }

    format!("{indent}{marker}**{bare}:**{rest}")
}

/// Splits a leading Markdown list marker (`- `, `* `, `+ `, `1. `, `1) `) off the line body.
fn split_list_marker(body: &str) -> (&str, &str) {
    if ["- ", "* ", "+ "].iter().any(|bullet| body.starts_with(*bullet)) {
        return body.split_at(2);
    }
    let digits = body.bytes().take_while(u8::is_ascii_digit).count();
    if (1..=9).contains(&digits) {
        let after = &body[digits..];
        if after.starts_with(". ") || after.starts_with(") ") {
            return body.split_at(digits + 2);
        }
    }
    ("", body)
}
