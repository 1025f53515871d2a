//! Turning raw store records into display-ready records.
//!
//! [`enrich`] is a pure function of its input plus the static URL templates
//! below; it never touches the store.

use serde::Serialize;

use super::hashtags::link_hashtags;
use super::timestamp::format_timestamp;
use crate::error::{ReportError, Result};
use crate::record::RawRecord;

/// Site hosting the cross-site dataset.
const WIKIDATA_SITE: &str = "https://www.wikidata.org";

/// A [`RawRecord`] plus everything the report and export need for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecord {
    /// The record as read from the store.
    #[serde(flatten)]
    pub raw: RawRecord,
    /// `" 1 Mar 2016 12:00:00"` style date.
    pub date: String,
    /// `new_len - old_len`; negative when content shrank.
    pub diff_size: i64,
    pub diff_url: String,
    pub user_url: String,
    /// Page title with underscores replaced by spaces.
    pub spaced_title: String,
    /// Escaped comment with hashtags linked.
    pub comment: String,
    /// Escaped comment without markup.
    pub comment_plain: String,
    /// Hashtags found in the comment, first-seen order.
    pub tags: Vec<String>,
}

/// Base URL of the wiki a record's source lives on.
pub fn site_url(source: &str) -> String {
    if source == crate::record::WIKIDATA_SOURCE {
        WIKIDATA_SITE.to_string()
    } else {
        format!("https://{source}.wikipedia.org")
    }
}

/// Link to the diff between `last_oldid` and `this_oldid`.
pub fn diff_url(source: &str, this_oldid: u64, last_oldid: u64) -> String {
    format!(
        "{}/wiki/?diff={this_oldid}&oldid={last_oldid}",
        site_url(source)
    )
}

/// Link to a user's profile page.
pub fn user_url(source: &str, user: &str) -> String {
    format!("{}/wiki/User:{user}", site_url(source))
}

/// Derives the display fields of one record.
///
/// # Errors
///
/// Fails with [`ReportError::InvalidTimestamp`](crate::ReportError::InvalidTimestamp)
/// if the record's timestamp is malformed.
///
/// # Example
///
/// ```
/// use hashtag_report::RawRecord;
/// use hashtag_report::core::enrich;
///
/// let raw = RawRecord::new("wikidata", "Q42", "Carol", "20160301120000")
///     .with_revisions(100, 99)
///     .with_lengths(30, 12);
/// let rec = enrich(raw)?;
///
/// assert_eq!(rec.diff_url, "https://www.wikidata.org/wiki/?diff=100&oldid=99");
/// assert_eq!(rec.diff_size, -18);
/// # Ok::<(), hashtag_report::ReportError>(())
/// ```
pub fn enrich(raw: RawRecord) -> Result<EnrichedRecord> {
    let date = format_timestamp(&raw.timestamp, true)?;
    let diff_size = raw.new_len.checked_sub(raw.old_len).ok_or_else(|| {
        ReportError::invalid_counter("diff_size", format!("{} - {}", raw.new_len, raw.old_len))
    })?;
    let linked = link_hashtags(&raw.comment);

    Ok(EnrichedRecord {
        date,
        diff_size,
        diff_url: diff_url(&raw.source, raw.this_oldid, raw.last_oldid),
        user_url: user_url(&raw.source, &raw.user_text),
        spaced_title: raw.title.replace('_', " "),
        comment: linked.linked,
        comment_plain: linked.plain,
        tags: linked.tags,
        raw,
    })
}

/// Enriches every record, failing on the first malformed one.
pub fn enrich_all(records: Vec<RawRecord>) -> Result<Vec<EnrichedRecord>> {
    records.into_iter().map(enrich).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(source: &str) -> RawRecord {
        RawRecord::new(source, "Main_Page_Title", "Alice", "20160301120000")
            .with_revisions(100, 99)
            .with_lengths(10, 25)
            .with_comment("fixing #typo now")
    }

    #[test]
    fn test_wikipedia_urls() {
        let rec = enrich(raw("en")).unwrap();
        assert_eq!(rec.diff_url, "https://en.wikipedia.org/wiki/?diff=100&oldid=99");
        assert_eq!(rec.user_url, "https://en.wikipedia.org/wiki/User:Alice");
    }

    #[test]
    fn test_wikidata_urls() {
        let rec = enrich(raw("wikidata")).unwrap();
        assert!(rec.diff_url.starts_with("https://www.wikidata.org/"));
        assert_eq!(rec.user_url, "https://www.wikidata.org/wiki/User:Alice");
    }

    #[test]
    fn test_derived_fields() {
        let rec = enrich(raw("fr")).unwrap();
        assert_eq!(rec.diff_size, 15);
        assert_eq!(rec.spaced_title, "Main Page Title");
        assert_eq!(rec.date, " 1 Mar 2016 12:00:00");
        assert_eq!(rec.tags, vec!["typo"]);
        assert_eq!(rec.comment_plain, "fixing #typo now");
        assert!(rec.comment.contains("<a href=\"/hashtags/search/typo\">"));
        assert_eq!(rec.raw.title, "Main_Page_Title");
    }

    #[test]
    fn test_negative_diff_size() {
        let rec = enrich(raw("en").with_lengths(500, 120)).unwrap();
        assert_eq!(rec.diff_size, -380);
    }

    #[test]
    fn test_overflowing_diff_size_is_rejected() {
        let err = enrich(raw("en").with_lengths(i64::MIN, 1)).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("diff_size"));
    }

    #[test]
    fn test_bad_timestamp_fails() {
        let mut bad = raw("en");
        bad.timestamp = "yesterday".into();
        assert!(enrich(bad).unwrap_err().is_format());
    }

    #[test]
    fn test_enrich_all_aborts_on_first_error() {
        let mut bad = raw("en");
        bad.timestamp = "2016".into();
        assert!(enrich_all(vec![raw("en"), bad]).is_err());
        assert_eq!(enrich_all(vec![raw("en"), raw("de")]).unwrap().len(), 2);
    }
}
