//! The revision store collaborator.
//!
//! The report engine never owns a connection. Callers pass any
//! [`RevisionStore`] into [`ReportAssembler`](crate::core::ReportAssembler)
//! and [`CsvExporter`](crate::core::CsvExporter); connection lifecycle,
//! pooling, timeouts and retries all belong to the implementation.
//!
//! [`MemoryStore`] is the bundled implementation used by the CLI and tests.

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

use crate::record::{RawRecord, StatsSummary, TagCount};

/// Errors raised by a [`RevisionStore`] implementation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The backing data could not be decoded.
    #[error("corrupt store data: {0}")]
    Corrupt(String),

    /// An internal lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Lock,

    /// The dataset file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset file is not valid JSON.
    #[cfg(feature = "json-store")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read capabilities the report engine needs from a record store.
///
/// Every method is a single independent read; implementations must be safe
/// to share between concurrently running requests.
pub trait RevisionStore: Send + Sync {
    /// Most used hashtags, for the homepage tag cloud.
    fn top_hashtags(&self) -> Result<Vec<TagCount>, StoreError>;

    /// Every known source identifier.
    fn sources(&self) -> Result<Vec<String>, StoreError>;

    /// Records matching `tag` and `source`, newest first.
    ///
    /// `start` is an offset into the ordered result set. `end` is a row
    /// count; `None` means the store's default page size.
    fn revisions(
        &self,
        tag: Option<&str>,
        source: Option<&str>,
        start: usize,
        end: Option<usize>,
    ) -> Result<Vec<RawRecord>, StoreError>;

    /// Aggregate counters for `tag` and `source`.
    fn stats(&self, tag: Option<&str>, source: Option<&str>) -> Result<StatsSummary, StoreError>;
}
