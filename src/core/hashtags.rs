//! Hashtag extraction and linkification of edit summaries.
//!
//! The comment is HTML-escaped first, then exactly the `#tag` spans are
//! reopened as anchors. This is only safe because a tag is made of word
//! characters and can never contain HTML-significant characters.
//!
//! # Example
//!
//! ```
//! use hashtag_report::core::link_hashtags;
//!
//! let linked = link_hashtags("fixing #typo <now>");
//! assert_eq!(linked.tags, vec!["typo"]);
//! assert_eq!(
//!     linked.linked,
//!     r#"fixing <a href="/hashtags/search/typo">#typo</a> &lt;now&gt;"#
//! );
//! assert_eq!(linked.plain, "fixing #typo &lt;now&gt;");
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::EncodingError;

/// Path prefix of the tag search page.
pub const TAG_SEARCH_PATH: &str = "/hashtags/search/";

/// A `#` at the start of the text or after whitespace, followed by word characters.
static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)#(\w+)").expect("hashtag pattern is valid"));

/// Result of linking one comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedComment {
    /// Escaped comment with every hashtag turned into a search link.
    pub linked: String,
    /// Escaped comment without markup, for CSV and other plain contexts.
    pub plain: String,
    /// Distinct hashtags in first-seen order, without the leading `#`.
    pub tags: Vec<String>,
}

/// Escapes a comment for safe display inside HTML.
///
/// Escapes `&`, `<`, `>` and `"`. NUL is not allowed in an HTML document,
/// so it is replaced with U+FFFD before escaping.
///
/// Every `&str` can be escaped, so this currently always returns `Ok`.
pub fn escape_comment(text: &str) -> Result<String, EncodingError> {
    let text = if text.contains('\0') {
        Cow::Owned(text.replace('\0', "\u{FFFD}"))
    } else {
        Cow::Borrowed(text)
    };
    Ok(html_escape::encode_double_quoted_attribute(&text).into_owned())
}

/// Extracts distinct hashtags from `text` in first-seen order.
///
/// Tags keep their original case and are returned without the `#`.
pub fn find_hashtags(text: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for cap in HASHTAG_RE.captures_iter(text) {
        let tag = &cap[1];
        if !tags.iter().any(|seen| seen == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Builds the anchor element for one tag.
pub fn tag_link(tag: &str) -> String {
    format!(r#"<a href="{TAG_SEARCH_PATH}{tag}">#{tag}</a>"#)
}

/// Escapes `comment`, extracts its hashtags and links every `#tag` occurrence.
///
/// Escaping is best-effort: if it fails, the raw comment is used as is.
pub fn link_hashtags(comment: &str) -> LinkedComment {
    let escaped = escape_comment(comment).unwrap_or_else(|err| {
        tracing::warn!("comment escaping failed, using raw text: {}", err);
        comment.to_string()
    });

    let plain = escaped.clone();
    let display = normalize_display(&escaped);
    let tags = find_hashtags(&display);
    let linked = replace_tags(&display, &tags);

    LinkedComment {
        linked,
        plain,
        tags,
    }
}

/// Replaces control characters other than tab, CR and LF with U+FFFD.
fn normalize_display(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() && !matches!(c, '\t' | '\n' | '\r') {
                char::REPLACEMENT_CHARACTER
            } else {
                c
            }
        })
        .collect()
}

/// Replaces every literal `#<tag>` in `text` with its link in a single pass.
///
/// Longer tags are tried first so `#ab` is never split by a shorter `#a`,
/// and inserted anchors are never rescanned.
fn replace_tags(text: &str, tags: &[String]) -> String {
    if tags.is_empty() {
        return text.to_string();
    }

    let mut by_length: Vec<&str> = tags.iter().map(String::as_str).collect();
    by_length.sort_by_key(|tag| std::cmp::Reverse(tag.len()));

    let mut out = String::with_capacity(text.len() + tags.len() * 48);
    let mut rest = text;
    while let Some(pos) = rest.find('#') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        match by_length.iter().find(|tag| after.starts_with(**tag)) {
            Some(tag) => {
                out.push_str(&tag_link(tag));
                rest = &after[tag.len()..];
            }
            None => {
                out.push('#');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
