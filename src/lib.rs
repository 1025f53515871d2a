//! # hashtag-report
//!
//! Paginated reports and bulk CSV exports of wiki revisions tagged with
//! hashtags in their edit summaries.
//!
//! ## Overview
//!
//! Given a record store and a search request (tag, source, offset), the
//! crate produces:
//! - a [`Report`](core::Report) — one page of display-ready revisions with
//!   linked hashtags, aggregate statistics and previous/next offsets
//! - a CSV document — every matching revision in a fixed column schema,
//!   prefixed with a UTF-8 byte-order mark
//!
//! Fetching and persisting data is left to a [`RevisionStore`](store::RevisionStore)
//! passed in by the caller. Rendering HTML is left to the caller too.
//!
//! ## Quick Start
//!
//! ```rust
//! use hashtag_report::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let store = MemoryStore::from_records(vec![
//!         RawRecord::new("en", "Main_Page", "Alice", "20160301120000")
//!             .with_revisions(101, 100)
//!             .with_comment("fixing #typo now")
//!             .with_tag("typo"),
//!     ]);
//!
//!     let report = ReportAssembler::new(&store).search(Some("typo"), None, 0)?;
//!     let rev = &report.revisions[0];
//!
//!     assert_eq!(rev.tags, vec!["typo"]);
//!     assert!(rev.comment.contains(r#"<a href="/hashtags/search/typo">#typo</a>"#));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`core`] — the engine
//!   - [`core::report`] — [`ReportAssembler`](core::ReportAssembler), [`Report`](core::Report)
//!   - [`core::output`] — [`CsvExporter`](core::output::CsvExporter), `to_csv`, `write_csv`
//!   - [`core::enrich`], [`core::hashtags`], [`core::pagination`], [`core::stats`], [`core::timestamp`]
//! - [`record`] — [`RawRecord`], [`StatsSummary`], [`TagCount`]
//! - [`store`] — the [`RevisionStore`](store::RevisionStore) trait and [`MemoryStore`](store::MemoryStore)
//! - [`config`] — [`ReportConfig`](config::ReportConfig)
//! - [`error`] — [`ReportError`], [`Result`]
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod record;
pub mod store;

// Re-export the main types at the crate root for convenience
pub use error::{ReportError, Result};
pub use record::{RawRecord, StatsSummary, TagCount};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use hashtag_report::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ReportConfig;
    pub use crate::error::{ReportError, Result};
    pub use crate::record::{RawRecord, StatsSummary, TagCount};
    pub use crate::store::{MemoryStore, RevisionStore, StoreError};

    pub use crate::core::{
        EnrichedRecord, Home, PageWindow, Report, ReportAssembler, StatsDisplay, calculate_pages,
        enrich, format_stats, format_timestamp, link_hashtags,
    };

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{CsvExporter, to_csv, write_csv};
}
