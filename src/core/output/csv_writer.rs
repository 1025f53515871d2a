//! CSV export of enriched revisions.

use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::config::ReportConfig;
use crate::core::enrich::{EnrichedRecord, enrich_all};
use crate::error::{EncodingError, Result};
use crate::store::RevisionStore;

/// UTF-8 byte-order mark written before the header row.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One column of the export schema.
///
/// The schema is fixed on the export side: record fields without a column
/// are never written, and a column the record has no value for is an empty
/// cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvColumn {
    Source,
    Date,
    DiffUrl,
    User,
    Title,
    Tags,
    CommentPlain,
    DiffSize,
    CurId,
    LastOldid,
    OldLen,
    ThisOldid,
    NewLen,
    Id,
    Namespace,
    SourceFlag,
    Type,
    Logid,
    LogAction,
    LogType,
    Minor,
    Bot,
    Patrolled,
    Params,
    IsNew,
    Deleted,
    UserId,
    RawTimestamp,
    TagText,
    TagId,
}

impl CsvColumn {
    /// Every column, in output order.
    pub const ALL: [CsvColumn; 30] = [
        CsvColumn::Source,
        CsvColumn::Date,
        CsvColumn::DiffUrl,
        CsvColumn::User,
        CsvColumn::Title,
        CsvColumn::Tags,
        CsvColumn::CommentPlain,
        CsvColumn::DiffSize,
        CsvColumn::CurId,
        CsvColumn::LastOldid,
        CsvColumn::OldLen,
        CsvColumn::ThisOldid,
        CsvColumn::NewLen,
        CsvColumn::Id,
        CsvColumn::Namespace,
        CsvColumn::SourceFlag,
        CsvColumn::Type,
        CsvColumn::Logid,
        CsvColumn::LogAction,
        CsvColumn::LogType,
        CsvColumn::Minor,
        CsvColumn::Bot,
        CsvColumn::Patrolled,
        CsvColumn::Params,
        CsvColumn::IsNew,
        CsvColumn::Deleted,
        CsvColumn::UserId,
        CsvColumn::RawTimestamp,
        CsvColumn::TagText,
        CsvColumn::TagId,
    ];

    /// Header name.
    pub fn name(self) -> &'static str {
        match self {
            CsvColumn::Source => "source",
            CsvColumn::Date => "date",
            CsvColumn::DiffUrl => "diff_url",
            CsvColumn::User => "user",
            CsvColumn::Title => "title",
            CsvColumn::Tags => "tags",
            CsvColumn::CommentPlain => "comment_plain",
            CsvColumn::DiffSize => "diff_size",
            CsvColumn::CurId => "cur_id",
            CsvColumn::LastOldid => "last_oldid",
            CsvColumn::OldLen => "old_len",
            CsvColumn::ThisOldid => "this_oldid",
            CsvColumn::NewLen => "new_len",
            CsvColumn::Id => "id",
            CsvColumn::Namespace => "namespace",
            CsvColumn::SourceFlag => "source_flag",
            CsvColumn::Type => "type",
            CsvColumn::Logid => "logid",
            CsvColumn::LogAction => "log_action",
            CsvColumn::LogType => "log_type",
            CsvColumn::Minor => "minor",
            CsvColumn::Bot => "bot",
            CsvColumn::Patrolled => "patrolled",
            CsvColumn::Params => "params",
            CsvColumn::IsNew => "is_new",
            CsvColumn::Deleted => "deleted",
            CsvColumn::UserId => "user_id",
            CsvColumn::RawTimestamp => "raw_timestamp",
            CsvColumn::TagText => "tag_text",
            CsvColumn::TagId => "tag_id",
        }
    }

    /// The record's value for this column, or `None` if it has none.
    pub fn value(self, rec: &EnrichedRecord) -> Option<Cow<'_, str>> {
        let raw = &rec.raw;
        match self {
            CsvColumn::Source => text(&raw.source),
            CsvColumn::Date => text(&rec.date),
            CsvColumn::DiffUrl => text(&rec.diff_url),
            CsvColumn::User => text(&raw.user_text),
            CsvColumn::Title => text(&rec.spaced_title),
            CsvColumn::Tags => Some(Cow::Owned(rec.tags.join(", "))),
            CsvColumn::CommentPlain => text(&rec.comment_plain),
            CsvColumn::DiffSize => num(Some(rec.diff_size)),
            CsvColumn::CurId => id(raw.cur_id),
            CsvColumn::LastOldid => id(Some(raw.last_oldid)),
            CsvColumn::OldLen => num(Some(raw.old_len)),
            CsvColumn::ThisOldid => id(Some(raw.this_oldid)),
            CsvColumn::NewLen => num(Some(raw.new_len)),
            CsvColumn::Id => id(raw.id),
            CsvColumn::Namespace => num(raw.namespace),
            CsvColumn::SourceFlag => opt(&raw.source_flag),
            CsvColumn::Type => num(raw.rc_type),
            CsvColumn::Logid => id(raw.logid),
            CsvColumn::LogAction => opt(&raw.log_action),
            CsvColumn::LogType => opt(&raw.log_type),
            CsvColumn::Minor => num(raw.minor),
            CsvColumn::Bot => num(raw.bot),
            CsvColumn::Patrolled => num(raw.patrolled),
            CsvColumn::Params => opt(&raw.params),
            CsvColumn::IsNew => num(raw.is_new),
            CsvColumn::Deleted => num(raw.deleted),
            CsvColumn::UserId => id(raw.user_id),
            CsvColumn::RawTimestamp => text(&raw.timestamp),
            CsvColumn::TagText => opt(&raw.tag_text),
            CsvColumn::TagId => id(raw.tag_id),
        }
    }
}

fn text(value: &str) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(value))
}

#[allow(clippy::ref_option)]
fn opt(value: &Option<String>) -> Option<Cow<'_, str>> {
    value.as_deref().map(Cow::Borrowed)
}

fn num<'a>(value: Option<i64>) -> Option<Cow<'a, str>> {
    value.map(|n| Cow::Owned(n.to_string()))
}

fn id<'a>(value: Option<u64>) -> Option<Cow<'a, str>> {
    value.map(|n| Cow::Owned(n.to_string()))
}

/// Checks that a value is text-safe: no control characters besides tab,
/// CR and LF.
pub fn encode_field(value: &str) -> std::result::Result<&str, EncodingError> {
    if value
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\t' | '\n' | '\r'))
    {
        return Err(EncodingError::new("value contains control characters"));
    }
    Ok(value)
}

/// Serializes records into a complete CSV document.
///
/// # Format
/// - Encoding: UTF-8, prefixed with a byte-order mark
/// - Delimiter: `,`
/// - Columns: [`CsvColumn::ALL`], header row first
///
/// A field that fails [`encode_field`] is written as an empty cell; the
/// rest of the row and document are unaffected.
pub fn to_csv(records: &[EnrichedRecord]) -> Result<Vec<u8>> {
    let mut buffer = UTF8_BOM.to_vec();
    {
        let mut writer = csv::WriterBuilder::new().from_writer(&mut buffer);
        writer.write_record(CsvColumn::ALL.iter().map(|col| col.name()))?;

        for rec in records {
            writer.write_record(CsvColumn::ALL.iter().map(|&col| build_cell(rec, col)))?;
        }
        writer.flush()?;
    }
    Ok(buffer)
}

fn build_cell(rec: &EnrichedRecord, column: CsvColumn) -> String {
    let Some(value) = column.value(rec) else {
        return String::new();
    };
    match encode_field(&value) {
        Ok(safe) => safe.to_string(),
        Err(err) => {
            tracing::warn!(
                column = column.name(),
                this_oldid = rec.raw.this_oldid,
                "dropping CSV field: {}",
                err
            );
            String::new()
        }
    }
}

/// Writes a CSV document to `output_path`.
///
/// The document is rendered in memory and written to a temporary file in
/// the target directory, which is persisted over `output_path` only once
/// fully written. The temporary file is removed on every error path.
pub fn write_csv(records: &[EnrichedRecord], output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref();
    let document = to_csv(records)?;

    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&document)?;
    tmp.flush()?;
    tmp.persist(output_path).map_err(|err| err.error)?;
    Ok(())
}

/// Bulk export of every revision for a tag.
pub struct CsvExporter<'a, S: RevisionStore> {
    store: &'a S,
    config: ReportConfig,
}

impl<'a, S: RevisionStore> CsvExporter<'a, S> {
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

    /// Fetches and enriches up to `limit` revisions from the beginning of
    /// the result set (default: the configured CSV limit).
    pub fn records(
        &self,
        tag: &str,
        source: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<EnrichedRecord>> {
        let tag = tag.to_lowercase();
        let limit = limit.unwrap_or(self.config.csv_limit);
        tracing::debug!(%tag, ?source, limit, "exporting CSV");

        let raw = self.store.revisions(Some(&tag), source, 0, Some(limit))?;
        enrich_all(raw)
    }

    /// Builds the CSV document for `tag`.
    ///
    /// # Errors
    ///
    /// Store failures and malformed timestamps abort the export; no partial
    /// document is returned.
    pub fn export(&self, tag: &str, source: Option<&str>, limit: Option<usize>) -> Result<Vec<u8>> {
        to_csv(&self.records(tag, source, limit)?)
    }

    /// Builds the CSV document for `tag` and writes it to `output_path`.
    pub fn export_to_path(
        &self,
        tag: &str,
        source: Option<&str>,
        limit: Option<usize>,
        output_path: impl AsRef<Path>,
    ) -> Result<usize> {
        let records = self.records(tag, source, limit)?;
        write_csv(&records, output_path)?;
        Ok(records.len())
    }
}
