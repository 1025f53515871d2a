//! Edge case tests for hashtag-report
//!
//! These tests cover hostile comments, odd sources and boundary offsets
//! that regular unit and integration tests don't reach.

use hashtag_report::core::{
    PageWindow, ReportAssembler, calculate_pages, enrich, format_stats, link_hashtags,
};
use hashtag_report::store::MemoryStore;
use hashtag_report::{RawRecord, StatsSummary};

fn row(comment: &str) -> RawRecord {
    RawRecord::new("en", "Some_Page", "Alice", "20160301120000")
        .with_revisions(2, 1)
        .with_comment(comment)
        .with_tag("typo")
}

// =========================================================================
// Hostile comments
// =========================================================================

#[test]
fn test_script_injection_is_escaped() {
    let linked = link_hashtags("<script>alert(\"x\")</script> #typo");
    assert!(!linked.linked.contains("<script>"));
    assert!(linked.linked.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));
    assert!(linked.linked.ends_with(r#"<a href="/hashtags/search/typo">#typo</a>"#));
}

#[test]
fn test_entity_lookalike_is_not_a_tag() {
    // "&#35;" is already text, escaping turns the '&' into "&amp;"
    let linked = link_hashtags("&#35;typo");
    assert!(linked.tags.is_empty());
    assert_eq!(linked.plain, "&amp;#35;typo");
}

#[test]
fn test_nul_comment_is_still_escaped() {
    let linked = link_hashtags("a\0b <i>x</i> #typo");
    assert_eq!(linked.plain, "a\u{FFFD}b &lt;i&gt;x&lt;/i&gt; #typo");
    assert_eq!(linked.tags, vec!["typo"]);
    assert!(!linked.linked.contains('\0'));
    assert!(!linked.linked.contains("<i>"));
}

#[test]
fn test_control_characters_are_replaced_for_display() {
    let linked = link_hashtags("bell\x07 #typo\ttab");
    assert!(linked.linked.contains('\u{FFFD}'));
    assert!(linked.linked.contains('\t'));
    assert_eq!(linked.plain, "bell\x07 #typo\ttab");
}

#[test]
fn test_unicode_tags() {
    let linked = link_hashtags("Правка #тест и #日本語 🌍");
    assert_eq!(linked.tags, vec!["тест", "日本語"]);
    assert!(linked.linked.contains(r#"<a href="/hashtags/search/тест">#тест</a>"#));
}

#[test]
fn test_case_variants_are_distinct_tags() {
    let linked = link_hashtags("#Typo #typo #TYPO #typo");
    assert_eq!(linked.tags, vec!["Typo", "typo", "TYPO"]);
    assert_eq!(linked.linked.matches("<a href=").count(), 4);
}

#[test]
fn test_empty_comment() {
    let linked = link_hashtags("");
    assert_eq!(linked.linked, "");
    assert_eq!(linked.plain, "");
    assert!(linked.tags.is_empty());
}

#[test]
fn test_very_long_comment() {
    let comment = format!("{} #typo", "x".repeat(64 * 1024));
    let linked = link_hashtags(&comment);
    assert_eq!(linked.tags, vec!["typo"]);
    assert_eq!(linked.plain.len(), comment.len());
}

// =========================================================================
// Enrichment boundaries
// =========================================================================

#[test]
fn test_source_that_only_looks_like_wikidata() {
    let rec = enrich(RawRecord::new("Wikidata", "Q1", "U", "20160301120000")).unwrap();
    assert!(rec.diff_url.starts_with("https://Wikidata.wikipedia.org/"));
}

#[test]
fn test_title_with_only_underscores() {
    let rec = enrich(RawRecord::new("en", "___", "U", "20160301120000")).unwrap();
    assert_eq!(rec.spaced_title, "   ");
}

#[test]
fn test_invalid_calendar_date_is_rejected() {
    let err = enrich(RawRecord::new("en", "T", "U", "20160230120000")).unwrap_err();
    assert!(err.is_format());
}

#[test]
fn test_leap_day_is_accepted() {
    let rec = enrich(RawRecord::new("en", "T", "U", "20160229235959")).unwrap();
    assert_eq!(rec.date, "29 Feb 2016 23:59:59");
}

// =========================================================================
// Stats boundaries
// =========================================================================

#[test]
fn test_huge_counters_are_grouped() {
    let stats = StatsSummary {
        bytes: 1.0e15,
        revisions: u64::MAX,
        pages: 1_000,
        users: 999,
        oldest: None,
        newest: None,
    };
    let display = format_stats(&stats).unwrap();
    assert_eq!(display.bytes, "1,000,000,000,000,000");
    assert_eq!(display.revisions, "18,446,744,073,709,551,615");
    assert_eq!(display.pages, "1,000");
    assert_eq!(display.users, "999");
    assert_eq!(display.oldest, "");
}

#[test]
fn test_nan_bytes_is_rejected() {
    let stats = StatsSummary {
        bytes: f64::NAN,
        ..StatsSummary::default()
    };
    assert!(format_stats(&stats).unwrap_err().is_format());
}

// =========================================================================
// Pagination boundaries
// =========================================================================

#[test]
fn test_offset_inside_first_page() {
    assert_eq!(calculate_pages(5, 100, 20), (Some(0), Some(25)));
}

#[test]
fn test_next_stops_exactly_at_total() {
    assert_eq!(calculate_pages(80, 100, 20), (Some(60), None));
    assert_eq!(calculate_pages(79, 100, 20), (Some(59), Some(99)));
}

#[test]
fn test_page_size_one() {
    let window = PageWindow::new(3, 1, 5, 1);
    assert_eq!((window.start, window.end), (4, 4));
    assert_eq!((window.prev, window.next), (Some(2), Some(4)));
}

// =========================================================================
// Store and report boundaries
// =========================================================================

#[test]
fn test_empty_store_report() {
    let store = MemoryStore::new();
    let report = ReportAssembler::new(&store).search(Some("typo"), None, 0).unwrap();
    assert!(report.is_empty());
    assert!(report.sources.is_empty());
    assert_eq!(report.tag.as_deref(), Some("typo"));
}

#[test]
fn test_unknown_source_filter() {
    let store = MemoryStore::from_records(vec![row("#typo")]);
    let report = ReportAssembler::new(&store)
        .search(Some("typo"), Some("xx"), 0)
        .unwrap();
    assert!(report.revisions.is_empty());
    assert_eq!(report.source.as_deref(), Some("xx"));
    assert_eq!(report.sources, vec!["en"]);
}

#[test]
fn test_bad_timestamp_fails_whole_page() {
    let store = MemoryStore::from_records(vec![
        row("#typo"),
        RawRecord::new("en", "P", "U", "2016-03-01").with_tag("typo"),
    ]);
    let err = ReportAssembler::new(&store)
        .search(Some("typo"), None, 0)
        .unwrap_err();
    assert!(err.is_format());
}

#[cfg(feature = "csv-output")]
mod csv_edges {
    use super::*;
    use hashtag_report::core::output::{CsvExporter, UTF8_BOM};

    #[test]
    fn test_control_character_cell_is_emptied() {
        let store = MemoryStore::from_records(vec![row("bell\x07 #typo")]);
        let document = CsvExporter::new(&store).export("typo", None, None).unwrap();

        let mut reader = csv::Reader::from_reader(&document[UTF8_BOM.len()..]);
        let header = reader.headers().unwrap().clone();
        let record = reader.records().next().unwrap().unwrap();
        let comment = header.iter().position(|h| h == "comment_plain").unwrap();
        let user = header.iter().position(|h| h == "user").unwrap();

        assert_eq!(&record[comment], "");
        assert_eq!(&record[user], "Alice");
    }

    #[test]
    fn test_quotes_and_commas_round_trip() {
        let store = MemoryStore::from_records(vec![
            RawRecord::new("en", "P", "User,With \"Quotes\"", "20160301120000").with_tag("typo"),
        ]);
        let document = CsvExporter::new(&store).export("typo", None, None).unwrap();

        let mut reader = csv::Reader::from_reader(&document[UTF8_BOM.len()..]);
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[3], "User,With \"Quotes\"");
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let store = MemoryStore::new();
        let document = CsvExporter::new(&store).export("typo", None, None).unwrap();
        let text = std::str::from_utf8(&document[UTF8_BOM.len()..]).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
