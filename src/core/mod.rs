//! The revision report and pagination engine.
//!
//! This module contains:
//! - [`timestamp`] - `YYYYMMDDHHMMSS` rendering
//! - [`hashtags`] - escaping, hashtag extraction and linking
//! - [`enrich`] - raw record to display record
//! - [`pagination`] - previous/next offsets and the page window
//! - [`stats`] - display form of aggregate counters
//! - [`report`] - the search entry point
//! - [`output`] - the CSV export entry point
//!
//! Every function here is synchronous and keeps no state between calls.

pub mod enrich;
pub mod hashtags;
pub mod output;
pub mod pagination;
pub mod report;
pub mod stats;
pub mod timestamp;

pub use enrich::{EnrichedRecord, enrich, enrich_all};
pub use hashtags::{LinkedComment, find_hashtags, link_hashtags};
pub use pagination::{NO_PAGE, PageWindow, calculate_pages};
pub use report::{Home, Report, ReportAssembler};
pub use stats::{StatsDisplay, format_stats};
pub use timestamp::format_timestamp;

#[cfg(feature = "csv-output")]
pub use output::{CsvExporter, to_csv, write_csv};
