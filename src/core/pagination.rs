//! Offset pagination.

use serde::{Serialize, Serializer};

/// Wire value for "no such page".
pub const NO_PAGE: i64 = -1;

/// Offsets of the neighbouring pages.
///
/// `prev` clamps to the first page; `next` stops exactly at `total`.
///
/// # Example
///
/// ```
/// use hashtag_report::core::calculate_pages;
///
/// assert_eq!(calculate_pages(20, 50, 20), (Some(0), Some(40)));
/// assert_eq!(calculate_pages(0, 5, 20), (None, None));
/// assert_eq!(calculate_pages(5, 50, 20), (Some(0), Some(25)));
/// ```
pub fn calculate_pages(offset: u64, total: u64, page_size: u64) -> (Option<u64>, Option<u64>) {
    let prev = if offset == 0 {
        None
    } else {
        Some(offset.saturating_sub(page_size))
    };

    let next = match offset.checked_add(page_size) {
        Some(next) if next < total => Some(next),
        _ => None,
    };

    (prev, next)
}

/// The current page of a report.
///
/// `start` and `end` are 1-based inclusive indices into the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub start: u64,
    pub end: u64,
    #[serde(serialize_with = "serialize_offset")]
    pub prev: Option<u64>,
    #[serde(serialize_with = "serialize_offset")]
    pub next: Option<u64>,
}

impl PageWindow {
    /// Window for `returned` records read at `offset` out of `total`.
    pub fn new(offset: u64, returned: u64, total: u64, page_size: u64) -> Self {
        let (prev, next) = calculate_pages(offset, total, page_size);
        Self {
            start: offset + 1,
            end: offset + returned,
            prev,
            next,
        }
    }

    /// `prev` with [`NO_PAGE`] standing in for `None`.
    pub fn prev_offset(&self) -> i64 {
        self.prev.map_or(NO_PAGE, |p| p as i64)
    }

    /// `next` with [`NO_PAGE`] standing in for `None`.
    pub fn next_offset(&self) -> i64 {
        self.next.map_or(NO_PAGE, |n| n as i64)
    }
}

#[allow(clippy::ref_option)]
fn serialize_offset<S: Serializer>(offset: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
    match offset {
        Some(value) => serializer.serialize_u64(*value),
        None => serializer.serialize_i64(NO_PAGE),
    }
}
