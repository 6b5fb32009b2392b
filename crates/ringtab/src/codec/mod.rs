//! CSV interchange codec for ring table documents.
//!
//! The format is symmetric: a `+` header row, one addition row per element,
//! a blank separator row, a `*` header row, and one multiplication row per
//! element. Export-then-import reproduces a document exactly.

mod export;
mod import;

pub use export::{to_csv_string, to_rows, write_csv, write_file};
pub use import::{from_file, from_reader, parse_rows, ImportError, SourceMetadata};
