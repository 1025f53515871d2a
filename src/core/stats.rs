//! Display formatting of aggregate counters.

use serde::Serialize;

use super::timestamp::format_timestamp;
use crate::error::{ReportError, Result};
use crate::record::StatsSummary;

/// Display form of a [`StatsSummary`].
///
/// Counters are thousands-separated and timestamps are date-only. There is
/// no way back to the numeric form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsDisplay {
    pub bytes: String,
    pub revisions: String,
    pub pages: String,
    pub users: String,
    /// Empty when the scope has no records.
    pub oldest: String,
    /// Empty when the scope has no records.
    pub newest: String,
}

/// Renders counters and timestamps for display.
///
/// # Errors
///
/// Fails with [`ReportError::InvalidCounter`] if `bytes` is not finite or
/// does not fit an `i64`, and with [`ReportError::InvalidTimestamp`] if a
/// timestamp is malformed.
///
/// # Example
///
/// ```
/// use hashtag_report::StatsSummary;
/// use hashtag_report::core::format_stats;
///
/// let stats = StatsSummary {
///     bytes: 1234567.0,
///     revisions: 1500,
///     pages: 12,
///     users: 3,
///     oldest: Some("20150101000000".into()),
///     newest: Some("20160301120000".into()),
/// };
/// let display = format_stats(&stats)?;
///
/// assert_eq!(display.bytes, "1,234,567");
/// assert_eq!(display.revisions, "1,500");
/// assert_eq!(display.newest, " 1 Mar 2016");
/// # Ok::<(), hashtag_report::ReportError>(())
/// ```
pub fn format_stats(stats: &StatsSummary) -> Result<StatsDisplay> {
    Ok(StatsDisplay {
        bytes: group_thousands(integral_bytes(stats.bytes)?),
        revisions: group_thousands(stats.revisions),
        pages: group_thousands(stats.pages),
        users: group_thousands(stats.users),
        oldest: format_optional_date(stats.oldest.as_deref())?,
        newest: format_optional_date(stats.newest.as_deref())?,
    })
}

/// Truncates a summed byte count toward zero.
fn integral_bytes(bytes: f64) -> Result<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if !bytes.is_finite() || bytes >= i64::MAX as f64 || bytes < i64::MIN as f64 {
        return Err(ReportError::invalid_counter("bytes", bytes));
    }
    Ok(bytes.trunc() as i64)
}

fn format_optional_date(raw: Option<&str>) -> Result<String> {
    raw.map_or_else(|| Ok(String::new()), |ts| format_timestamp(ts, false))
}

/// Renders an integer with `,` between groups of three digits.
pub fn group_thousands(value: impl Into<i128>) -> String {
    let value: i128 = value.into();
    let digits = value.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
