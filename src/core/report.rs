//! Report assembly: one search request in, one paginated report out.
//!
//! # Example
//!
//! ```
//! use hashtag_report::core::ReportAssembler;
//! use hashtag_report::store::MemoryStore;
//! use hashtag_report::RawRecord;
//!
//! # fn main() -> hashtag_report::Result<()> {
//! let store = MemoryStore::from_records(vec![
//!     RawRecord::new("en", "Main_Page", "Alice", "20160301120000")
//!         .with_comment("fix #typo")
//!         .with_tag("typo"),
//! ]);
//!
//! let report = ReportAssembler::new(&store).search(Some("TYPO"), None, 0)?;
//! assert_eq!(report.tag.as_deref(), Some("typo"));
//! assert_eq!(report.revisions.len(), 1);
//! assert_eq!(report.page.unwrap().start, 1);
//! # Ok(())
//! # }
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::enrich::{EnrichedRecord, enrich_all};
use super::pagination::PageWindow;
use super::stats::{StatsDisplay, format_stats};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::record::TagCount;
use crate::store::RevisionStore;

/// Result of a search.
///
/// When nothing matches, `revisions` is empty and `stats`/`page` are `None`
/// (serialized as `{}`); `tag`, `source` and `sources` are still filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub revisions: Vec<EnrichedRecord>,
    /// Lower-cased search tag; `None` means all tags.
    pub tag: Option<String>,
    #[serde(serialize_with = "serialize_or_empty")]
    pub stats: Option<StatsDisplay>,
    #[serde(serialize_with = "serialize_or_empty")]
    pub page: Option<PageWindow>,
    /// Active source filter.
    pub source: Option<String>,
    /// Every known source, for the source switcher.
    pub sources: Vec<String>,
}

impl Report {
    /// Returns `true` if the search matched nothing.
    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }
}

/// Data for the homepage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Home {
    pub top_tags: Vec<TagCount>,
    pub sources: Vec<String>,
}

/// Builds reports from a store handed in by the caller.
///
/// Holds no state between requests; one assembler can serve any number of
/// concurrent searches as long as the store allows it.
pub struct ReportAssembler<'a, S: RevisionStore> {
    store: &'a S,
    config: ReportConfig,
}

impl<'a, S: RevisionStore> ReportAssembler<'a, S> {
    /// Creates an assembler with the default page size.
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            config: ReportConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    /// Runs one search.
    ///
    /// `tag` is case-folded for lookup; an empty tag means all tags.
    ///
    /// # Errors
    ///
    /// Store failures are returned as [`ReportError::Store`](crate::ReportError::Store)
    /// without retry. A malformed timestamp or counter in any record or in
    /// the stats aborts the whole report.
    pub fn search(&self, tag: Option<&str>, source: Option<&str>, offset: usize) -> Result<Report> {
        let tag = tag.filter(|t| !t.is_empty()).map(str::to_lowercase);
        let page_size = self.config.page_size;
        tracing::debug!(?tag, ?source, offset, page_size, "assembling report");

        let raw = self
            .store
            .revisions(tag.as_deref(), source, offset, Some(page_size))?;
        let sources = self.store.sources()?;

        if raw.is_empty() {
            tracing::debug!(?tag, ?source, offset, "no matching revisions");
            return Ok(Report {
                revisions: Vec::new(),
                tag,
                stats: None,
                page: None,
                source: source.map(String::from),
                sources,
            });
        }

        let summary = self.store.stats(tag.as_deref(), source)?;
        let stats = format_stats(&summary)?;
        let returned = raw.len() as u64;
        let revisions = enrich_all(raw)?;
        let page = PageWindow::new(offset as u64, returned, summary.revisions, page_size as u64);

        Ok(Report {
            revisions,
            tag,
            stats: Some(stats),
            page: Some(page),
            source: source.map(String::from),
            sources,
        })
    }

    /// Collects the homepage tag cloud and source list.
    pub fn home(&self) -> Result<Home> {
        Ok(Home {
            top_tags: self.store.top_hashtags()?,
            sources: self.store.sources()?,
        })
    }
}

fn serialize_or_empty<T, S>(value: &Option<T>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
