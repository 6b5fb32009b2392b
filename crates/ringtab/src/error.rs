//! Error types for the ringtab library.

use std::path::PathBuf;
use thiserror::Error;

use crate::codec::ImportError;
use crate::table::TableKind;
use crate::validate::CompletenessError;

/// Main error type for ringtab operations.
#[derive(Debug, Error)]
pub enum RingtabError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Structural validation failure while importing a table file.
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// A table is not fully populated with valid elements.
    #[error(transparent)]
    Incomplete(#[from] CompletenessError),

    /// The modulus for cyclic generation must be positive.
    #[error("modulus must be a positive integer, got {0}")]
    InvalidModulus(usize),

    /// The element-list input produced no usable labels.
    #[error("no non-empty elements were supplied")]
    EmptyElements,

    /// A cell edit addressed a position outside the table.
    #[error("cell ({row}, {column}) is outside the {table} table")]
    CellOutOfBounds {
        table: TableKind,
        row: usize,
        column: usize,
    },

    /// No construction mode is active.
    #[error("no structure input is active; set a modulus or an element list first")]
    NoStructure,

    /// An operation required a document that does not exist yet.
    #[error("no tables exist yet; generate or import them first")]
    NoDocument,

    /// Configuration error (missing gateway, bad base URL, etc.).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The analysis service request could not be sent or read.
    #[error("analysis request failed: {0}")]
    Transport(String),

    /// The analysis service answered with a non-success status.
    #[error("analysis service error ({status}): {message}")]
    Gateway { status: u16, message: String },
}

/// Result type alias for ringtab operations.
pub type Result<T> = std::result::Result<T, RingtabError>;
