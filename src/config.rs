//! Configuration for report assembly, CSV export and the in-memory store.
//!
//! # Example
//!
//! ```rust
//! use hashtag_report::config::ReportConfig;
//!
//! let config = ReportConfig::new()
//!     .with_page_size(50)
//!     .with_csv_limit(1000);
//!
//! assert_eq!(config.page_size, 50);
//! assert_eq!(config.csv_limit, 1000);
//! ```

use serde::{Deserialize, Serialize};

/// Number of revisions shown per report page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Maximum number of rows in a CSV export when no limit is given.
pub const DEFAULT_CSV_LIMIT: usize = 20_000;

/// Number of tags returned for the homepage tag cloud.
pub const DEFAULT_TOP_HASHTAGS: usize = 50;

/// Shared settings for the report and export paths.
///
/// The page size is shared between [`ReportAssembler`](crate::core::ReportAssembler)
/// windowing and the store's default row count; CSV exports use their own,
/// larger limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Revisions per report page (default: 20)
    pub page_size: usize,

    /// Default maximum rows per CSV export (default: 20000)
    pub csv_limit: usize,

    /// Tags returned for the homepage tag cloud (default: 50)
    pub top_hashtags_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            csv_limit: DEFAULT_CSV_LIMIT,
            top_hashtags_limit: DEFAULT_TOP_HASHTAGS,
        }
    }
}

impl ReportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the report page size. Zero is clamped to one.
    #[must_use]
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }

    /// Sets the default CSV export limit.
    #[must_use]
    pub fn with_csv_limit(mut self, limit: usize) -> Self {
        self.csv_limit = limit;
        self
    }

    /// Sets how many tags the homepage tag cloud shows.
    #[must_use]
    pub fn with_top_hashtags_limit(mut self, limit: usize) -> Self {
        self.top_hashtags_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.csv_limit, 20_000);
        assert_eq!(config.top_hashtags_limit, 50);
    }

    #[test]
    fn test_builder_chain() {
        let config = ReportConfig::new()
            .with_page_size(5)
            .with_csv_limit(10)
            .with_top_hashtags_limit(3);
        assert_eq!(config.page_size, 5);
        assert_eq!(config.csv_limit, 10);
        assert_eq!(config.top_hashtags_limit, 3);
    }

    #[test]
    fn test_zero_page_size_clamped() {
        assert_eq!(ReportConfig::new().with_page_size(0).page_size, 1);
    }

    #[cfg(feature = "json-store")]
    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ReportConfig = serde_json::from_str(r#"{"page_size": 10}"#).unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.csv_limit, DEFAULT_CSV_LIMIT);
    }
}
