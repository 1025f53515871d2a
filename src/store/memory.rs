//! MemoryStore - Vec-backed revision store for the CLI, tests and benchmarks.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{Arc, RwLock};

use super::{RevisionStore, StoreError};
use crate::config::ReportConfig;
use crate::record::{RawRecord, StatsSummary, TagCount};

/// In-memory revision store.
///
/// Holds one row per (revision, hashtag) pair, like the hashtag join table
/// the report was designed around. Clone-friendly via Arc.
#[derive(Clone)]
pub struct MemoryStore {
    rows: Arc<RwLock<Vec<RawRecord>>>,
    config: ReportConfig,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates an empty store with default configuration.
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    /// Creates a store holding `records`.
    pub fn from_records(records: Vec<RawRecord>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(records)),
            config: ReportConfig::default(),
        }
    }

    /// Uses `config` for the default page size and tag cloud length.
    #[must_use]
    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Parses a JSON array of records. Unknown fields are ignored.
    #[cfg(feature = "json-store")]
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let records: Vec<RawRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Reads a JSON array of records from `path`.
    #[cfg(feature = "json-store")]
    pub fn from_json_path(path: impl AsRef<std::path::Path>) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Appends a row.
    pub fn insert(&self, record: RawRecord) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(|_| StoreError::Lock)?;
        rows.push(record);
        Ok(())
    }

    /// Number of rows held.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.rows.read().map_err(|_| StoreError::Lock)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Rows matching `tag` and `source`, newest first.
    fn matching(
        &self,
        tag: Option<&str>,
        source: Option<&str>,
    ) -> Result<Vec<RawRecord>, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::Lock)?;
        let tag = tag.map(str::to_lowercase);

        let mut matched: Vec<RawRecord> = rows
            .iter()
            .filter(|row| source.is_none_or(|s| row.source == s))
            .filter(|row| match (&tag, &row.tag_text) {
                (None, _) => true,
                (Some(wanted), Some(text)) => text.to_lowercase() == *wanted,
                (Some(_), None) => false,
            })
            .cloned()
            .collect();

        matched.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        Ok(matched)
    }
}

impl RevisionStore for MemoryStore {
    fn top_hashtags(&self) -> Result<Vec<TagCount>, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::Lock)?;

        let mut counts: HashMap<&str, u64> = HashMap::new();
        for text in rows.iter().filter_map(|row| row.tag_text.as_deref()) {
            *counts.entry(text).or_default() += 1;
        }

        let mut top: Vec<TagCount> = counts
            .into_iter()
            .map(|(tag, count)| TagCount {
                tag: tag.to_string(),
                count,
            })
            .collect();
        top.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
        top.truncate(self.config.top_hashtags_limit);
        Ok(top)
    }

    fn sources(&self) -> Result<Vec<String>, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::Lock)?;
        let sources: BTreeSet<&str> = rows.iter().map(|row| row.source.as_str()).collect();
        Ok(sources.into_iter().map(String::from).collect())
    }

    fn revisions(
        &self,
        tag: Option<&str>,
        source: Option<&str>,
        start: usize,
        end: Option<usize>,
    ) -> Result<Vec<RawRecord>, StoreError> {
        let limit = end.unwrap_or(self.config.page_size);
        Ok(self
            .matching(tag, source)?
            .into_iter()
            .skip(start)
            .take(limit)
            .collect())
    }

    fn stats(&self, tag: Option<&str>, source: Option<&str>) -> Result<StatsSummary, StoreError> {
        let matched = self.matching(tag, source)?;

        let bytes: i128 = matched
            .iter()
            .map(|row| i128::from(row.new_len) - i128::from(row.old_len))
            .sum();
        let pages: HashSet<(&str, &str)> = matched
            .iter()
            .map(|row| (row.source.as_str(), row.title.as_str()))
            .collect();
        let users: HashSet<(&str, &str)> = matched
            .iter()
            .map(|row| (row.source.as_str(), row.user_text.as_str()))
            .collect();

        Ok(StatsSummary {
            bytes: bytes as f64,
            revisions: matched.len() as u64,
            pages: pages.len() as u64,
            users: users.len() as u64,
            oldest: matched.iter().map(|row| &row.timestamp).min().cloned(),
            newest: matched.iter().map(|row| &row.timestamp).max().cloned(),
        })
    }
}
