//! Rendering of raw `YYYYMMDDHHMMSS` timestamps.

use chrono::NaiveDateTime;

use crate::error::{ReportError, Result};

const RAW_PATTERN: &str = "%Y%m%d%H%M%S";
const RAW_LEN: usize = 14;

/// Formats a raw store timestamp for display.
///
/// Produces `"<day> <month> <year> <HH:MM:SS>"` when `include_time` is set,
/// otherwise `"<day> <month> <year>"`. The day is space-padded to two
/// columns and the month is abbreviated.
///
/// # Errors
///
/// Returns [`ReportError::InvalidTimestamp`] unless `raw` is exactly 14 ASCII
/// digits describing a real calendar date and time.
///
/// # Example
///
/// ```
/// use hashtag_report::core::format_timestamp;
///
/// assert_eq!(format_timestamp("20160301083005", true)?, " 1 Mar 2016 08:30:05");
/// assert_eq!(format_timestamp("20161231235959", false)?, "31 Dec 2016");
/// assert!(format_timestamp("2016-03-01", true).is_err());
/// # Ok::<(), hashtag_report::ReportError>(())
/// ```
pub fn format_timestamp(raw: &str, include_time: bool) -> Result<String> {
    if raw.len() != RAW_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReportError::invalid_timestamp(raw));
    }

    let parsed = NaiveDateTime::parse_from_str(raw, RAW_PATTERN)
        .map_err(|_| ReportError::invalid_timestamp(raw))?;

    let pattern = if include_time {
        "%e %b %Y %H:%M:%S"
    } else {
        "%e %b %Y"
    };
    Ok(parsed.format(pattern).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_time() {
        assert_eq!(
            format_timestamp("20150704235900", true).unwrap(),
            " 4 Jul 2015 23:59:00"
        );
    }

    #[test]
    fn test_without_time() {
        assert_eq!(format_timestamp("20150714000000", false).unwrap(), "14 Jul 2015");
    }

    #[test]
    fn test_date_part_is_prefix() {
        let full = format_timestamp("20160229101010", true).unwrap();
        let date = format_timestamp("20160229101010", false).unwrap();
        assert!(full.starts_with(&date));
        assert_eq!(&full[date.len()..], " 10:10:10");
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(format_timestamp("2016030112000", true).is_err());
        assert!(format_timestamp("201603011200000", true).is_err());
        assert!(format_timestamp("", false).is_err());
    }

    #[test]
    fn test_rejects_non_numeric() {
        let err = format_timestamp("2016030112000x", true).unwrap_err();
        assert!(err.is_format());
        assert!(format_timestamp("+016030112000 ", true).is_err());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(format_timestamp("20161301120000", true).is_err()); // month 13
        assert!(format_timestamp("20150229120000", true).is_err()); // not a leap year
        assert!(format_timestamp("20160301250000", true).is_err()); // hour 25
        assert!(format_timestamp("20160301126000", true).is_err()); // minute 60
    }
}
