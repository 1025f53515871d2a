//! Output format writers.
//!
//! - [`to_csv`] / [`write_csv`] - fixed-schema CSV document with a UTF-8 BOM
//! - [`CsvExporter`] - fetches, enriches and serializes revisions for one tag
//!
//! Requires the `csv-output` feature.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> hashtag_report::Result<()> {
//! use hashtag_report::core::output::{CsvExporter, UTF8_BOM};
//! use hashtag_report::store::MemoryStore;
//! use hashtag_report::RawRecord;
//!
//! let store = MemoryStore::from_records(vec![
//!     RawRecord::new("en", "Main_Page", "Alice", "20160301120000").with_tag("typo"),
//! ]);
//!
//! let document = CsvExporter::new(&store).export("typo", None, None)?;
//! assert!(document.starts_with(UTF8_BOM));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CsvColumn, CsvExporter, UTF8_BOM, encode_field, to_csv, write_csv};
