//! Record types read from the revision store.
//!
//! # Overview
//!
//! - [`RawRecord`] — one change record joined with the hashtag it is indexed
//!   under, exactly as the store returns it
//! - [`StatsSummary`] — numeric aggregate counters for a tag/source scope
//! - [`TagCount`] — one entry of the homepage tag cloud
//!
//! All three deserialize from the column names of the recent-changes dump
//! (`rc_*`, `htrc_lang`, `ht_*`) as well as from their Rust field names.
//! Unknown fields are ignored.
//!
//! # Example
//!
//! ```
//! use hashtag_report::RawRecord;
//!
//! let rec = RawRecord::new("en", "Main_Page", "Alice", "20160301120000")
//!     .with_revisions(101, 100)
//!     .with_lengths(10, 25)
//!     .with_comment("fix #typo");
//!
//! assert_eq!(rec.new_len - rec.old_len, 15);
//! ```

use serde::{Deserialize, Serialize};

/// Source value for the cross-site Wikidata dataset.
pub const WIKIDATA_SOURCE: &str = "wikidata";

/// One content-change record as read from the store.
///
/// Identifiers and lengths that every row carries are required; the
/// remaining recent-changes columns are optional and exported as empty CSV
/// cells when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Site/language code, or [`WIKIDATA_SOURCE`].
    #[serde(alias = "htrc_lang")]
    pub source: String,

    /// Revision id after the change.
    #[serde(alias = "rc_this_oldid")]
    pub this_oldid: u64,

    /// Revision id before the change.
    #[serde(alias = "rc_last_oldid")]
    pub last_oldid: u64,

    /// Content length before the change, in bytes.
    #[serde(alias = "rc_old_len")]
    pub old_len: i64,

    /// Content length after the change, in bytes.
    #[serde(alias = "rc_new_len")]
    pub new_len: i64,

    /// Raw `YYYYMMDDHHMMSS` timestamp.
    #[serde(alias = "rc_timestamp")]
    pub timestamp: String,

    #[serde(alias = "rc_user_text")]
    pub user_text: String,

    /// Page title with underscores as word separators.
    #[serde(alias = "rc_title")]
    pub title: String,

    /// Free-text edit summary.
    #[serde(alias = "rc_comment", default)]
    pub comment: String,

    #[serde(alias = "rc_id", default)]
    pub id: Option<u64>,
    #[serde(alias = "rc_cur_id", default)]
    pub cur_id: Option<u64>,
    #[serde(alias = "rc_namespace", default)]
    pub namespace: Option<i64>,
    #[serde(alias = "rc_source", default)]
    pub source_flag: Option<String>,
    #[serde(alias = "rc_type", default)]
    pub rc_type: Option<i64>,
    #[serde(alias = "rc_logid", default)]
    pub logid: Option<u64>,
    #[serde(alias = "rc_log_action", default)]
    pub log_action: Option<String>,
    #[serde(alias = "rc_log_type", default)]
    pub log_type: Option<String>,
    #[serde(alias = "rc_minor", default)]
    pub minor: Option<i64>,
    #[serde(alias = "rc_bot", default)]
    pub bot: Option<i64>,
    #[serde(alias = "rc_patrolled", default)]
    pub patrolled: Option<i64>,
    #[serde(alias = "rc_params", default)]
    pub params: Option<String>,
    #[serde(alias = "rc_new", default)]
    pub is_new: Option<i64>,
    #[serde(alias = "rc_deleted", default)]
    pub deleted: Option<i64>,
    #[serde(alias = "rc_user", default)]
    pub user_id: Option<u64>,

    /// The hashtag this row is indexed under (without `#`).
    #[serde(alias = "ht_text", default)]
    pub tag_text: Option<String>,
    #[serde(alias = "ht_id", default)]
    pub tag_id: Option<u64>,
}

impl RawRecord {
    /// Creates a record with the required text fields; ids and lengths are zero.
    pub fn new(
        source: impl Into<String>,
        title: impl Into<String>,
        user_text: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            this_oldid: 0,
            last_oldid: 0,
            old_len: 0,
            new_len: 0,
            timestamp: timestamp.into(),
            user_text: user_text.into(),
            title: title.into(),
            comment: String::new(),
            id: None,
            cur_id: None,
            namespace: None,
            source_flag: None,
            rc_type: None,
            logid: None,
            log_action: None,
            log_type: None,
            minor: None,
            bot: None,
            patrolled: None,
            params: None,
            is_new: None,
            deleted: None,
            user_id: None,
            tag_text: None,
            tag_id: None,
        }
    }

    /// Sets the current and previous revision ids.
    #[must_use]
    pub fn with_revisions(mut self, this_oldid: u64, last_oldid: u64) -> Self {
        self.this_oldid = this_oldid;
        self.last_oldid = last_oldid;
        self
    }

    /// Sets the content length before and after the change.
    #[must_use]
    pub fn with_lengths(mut self, old_len: i64, new_len: i64) -> Self {
        self.old_len = old_len;
        self.new_len = new_len;
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Sets the hashtag this row is indexed under.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag_text = Some(tag.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Aggregate counters for a tag/source scope, as read from the store.
///
/// `bytes` is a SQL-style sum and may arrive as a non-integral or non-finite
/// number; [`format_stats`](crate::core::format_stats) rejects those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatsSummary {
    /// Net bytes changed (sum of `new_len - old_len`).
    pub bytes: f64,
    pub revisions: u64,
    /// Distinct pages touched.
    pub pages: u64,
    /// Distinct users involved.
    pub users: u64,
    /// Raw timestamp of the oldest matching record.
    #[serde(default)]
    pub oldest: Option<String>,
    /// Raw timestamp of the newest matching record.
    #[serde(default)]
    pub newest: Option<String>,
}

/// One tag of the homepage tag cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    #[serde(alias = "ht_text")]
    pub tag: String,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let rec = RawRecord::new("en", "Foo_bar", "Bob", "20160301120000")
            .with_revisions(2, 1)
            .with_lengths(100, 80)
            .with_tag("cleanup")
            .with_id(7);
        assert_eq!(rec.this_oldid, 2);
        assert_eq!(rec.last_oldid, 1);
        assert_eq!(rec.new_len - rec.old_len, -20);
        assert_eq!(rec.tag_text.as_deref(), Some("cleanup"));
        assert_eq!(rec.id, Some(7));
        assert_ne!(rec.source, WIKIDATA_SOURCE);
    }

    #[test]
    fn test_deserialize_dump_columns() {
        let json = r##"{
            "htrc_lang": "wikidata",
            "rc_this_oldid": 100,
            "rc_last_oldid": 99,
            "rc_old_len": 5,
            "rc_new_len": 9,
            "rc_timestamp": "20160301120000",
            "rc_user_text": "Carol",
            "rc_title": "Q42",
            "rc_comment": "#wikidata edit",
            "rc_bot": 0,
            "ht_text": "wikidata",
            "unexpected_column": "ignored"
        }"##;
        let rec: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.source, WIKIDATA_SOURCE);
        assert_eq!(rec.this_oldid, 100);
        assert_eq!(rec.bot, Some(0));
        assert_eq!(rec.minor, None);
        assert_eq!(rec.tag_text.as_deref(), Some("wikidata"));
    }

    #[test]
    fn test_stats_default_is_empty() {
        let stats = StatsSummary::default();
        assert_eq!(stats.revisions, 0);
        assert!(stats.oldest.is_none());
    }
}
