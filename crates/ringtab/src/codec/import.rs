//! Parsing and validating the CSV interchange format.
//!
//! Validation is fail-fast and strictly ordered: the first failing check
//! aborts the import with a typed [`ImportError`] carrying enough context
//! (row/column index, expected vs. actual value) to fix the source file.
//! No partial table is ever produced.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::error::{Result, RingtabError};
use crate::table::{ElementSet, OpTable, RingTableDocument, TableKind};

/// A structural defect found while importing a table file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The file is too short to hold both tables.
    #[error(
        "invalid file shape: expected at least 5 rows \
         (header, data, separator, header, data), found {found}"
    )]
    TooFewRows { found: usize },

    /// No blank row separates the two table blocks, or the blank row has no
    /// content before or after it.
    #[error("no separator row found between the addition and multiplication tables")]
    MissingSeparator,

    /// The first header row carries no element labels.
    #[error("no elements found in the header row")]
    NoElements,

    /// A header label is blank after trimming.
    #[error("blank element label in header column {column}")]
    BlankElement { column: usize },

    /// The same label appears twice in the element header.
    #[error("duplicate element '{label}' in header column {column}")]
    DuplicateElement { label: String, column: usize },

    /// A block header has the wrong number of labels.
    #[error("{table} table: expected {expected} column headers, found {found}")]
    HeaderWidth {
        table: TableKind,
        expected: usize,
        found: usize,
    },

    /// A block header label disagrees with the element list.
    #[error(
        "{table} table: column header mismatch at column {column}: \
         expected '{expected}', found '{found}'"
    )]
    HeaderMismatch {
        table: TableKind,
        column: usize,
        expected: String,
        found: String,
    },

    /// A block has the wrong number of data rows.
    #[error("{table} table: expected {expected} rows, found {found}")]
    RowCount {
        table: TableKind,
        expected: usize,
        found: usize,
    },

    /// A row's leading label disagrees with the element list.
    #[error(
        "{table} table: row {row} is labelled '{found}', expected '{expected}'"
    )]
    RowLabel {
        table: TableKind,
        row: usize,
        expected: String,
        found: String,
    },

    /// A row has the wrong number of data cells.
    #[error("{table} table: row {row} has {found} cells, expected {expected}")]
    RowWidth {
        table: TableKind,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell references a value outside the element set.
    #[error(
        "{table} table: cell at row {row}, column {column} holds '{value}', \
         which is not an element"
    )]
    UnknownCell {
        table: TableKind,
        row: usize,
        column: usize,
        value: String,
    },
}

/// Provenance for an imported table file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Number of rows parsed, including headers and the separator.
    pub row_count: usize,
    /// When the import happened.
    pub imported_at: DateTime<Utc>,
}

impl SourceMetadata {
    fn new(path: PathBuf, hash: String, size_bytes: u64, row_count: usize) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            file,
            path,
            hash,
            size_bytes,
            row_count,
            imported_at: Utc::now(),
        }
    }
}

/// Import a document from a file, recording provenance.
pub fn from_file(path: impl AsRef<Path>) -> Result<(RingTableDocument, SourceMetadata)> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| RingtabError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut contents = Vec::new();
    file.read_to_end(&mut contents).map_err(|e| RingtabError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut hasher = Sha256::new();
    hasher.update(&contents);
    let hash = format!("sha256:{:x}", hasher.finalize());

    let rows = read_rows(contents.as_slice())?;
    let row_count = rows.len();
    let doc = parse_rows(rows)?;

    let metadata = SourceMetadata::new(
        path.to_path_buf(),
        hash,
        contents.len() as u64,
        row_count,
    );
    Ok((doc, metadata))
}

/// Import a document from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<RingTableDocument> {
    let rows = read_rows(reader)?;
    Ok(parse_rows(rows)?)
}

/// Split raw CSV text into rows, keeping blank lines as empty rows.
///
/// The `csv` reader drops blank lines, which would lose the separator row,
/// so each physical line is parsed as one record. Quoted commas inside
/// labels survive; labels may not contain line breaks.
fn read_rows<R: Read>(mut reader: R) -> Result<Vec<Vec<String>>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| RingtabError::Io {
            path: PathBuf::new(),
            source: e,
        })?;

    let mut rows = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            rows.push(Vec::new());
            continue;
        }
        let mut line_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(line.as_bytes());
        let mut record = csv::StringRecord::new();
        if line_reader.read_record(&mut record)? {
            rows.push(record.iter().map(str::to_string).collect());
        } else {
            rows.push(Vec::new());
        }
    }
    Ok(rows)
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// Validate raw rows and build a document, or fail with the first defect.
pub fn parse_rows(mut rows: Vec<Vec<String>>) -> std::result::Result<RingTableDocument, ImportError> {
    while rows.last().is_some_and(|row| is_blank_row(row)) {
        rows.pop();
    }

    if rows.len() < 5 {
        return Err(ImportError::TooFewRows { found: rows.len() });
    }

    let separator = rows
        .iter()
        .position(|row| is_blank_row(row))
        .ok_or(ImportError::MissingSeparator)?;
    if separator == 0 || separator == rows.len() - 1 {
        return Err(ImportError::MissingSeparator);
    }

    let elements: Vec<String> = rows[0]
        .iter()
        .skip(1)
        .map(|cell| cell.trim().to_string())
        .collect();
    if elements.is_empty() {
        return Err(ImportError::NoElements);
    }
    for (i, label) in elements.iter().enumerate() {
        if label.is_empty() {
            return Err(ImportError::BlankElement { column: i + 1 });
        }
        if elements[..i].contains(label) {
            return Err(ImportError::DuplicateElement {
                label: label.clone(),
                column: i + 1,
            });
        }
    }

    let add = read_block(&rows, 1, separator, &elements, TableKind::Addition)?;
    let mul = read_block(
        &rows,
        separator + 2,
        rows.len(),
        &elements,
        TableKind::Multiplication,
    )?;

    let element_set =
        ElementSet::from_labels(&elements).ok_or(ImportError::NoElements)?;
    Ok(RingTableDocument::from_parts(
        element_set,
        OpTable::from_rows(add),
        OpTable::from_rows(mul),
    ))
}

/// Validate one table block against the shared element list.
///
/// `offset` is the index of the block's first data row; the row immediately
/// before it is the block's header. Checks run in a fixed order: header
/// width, header labels, row count, then per-row label, width, and cell
/// membership.
fn read_block(
    rows: &[Vec<String>],
    offset: usize,
    end: usize,
    elements: &[String],
    table: TableKind,
) -> std::result::Result<Vec<Vec<String>>, ImportError> {
    let expected = elements.len();

    let header: Vec<String> = rows[offset - 1]
        .iter()
        .skip(1)
        .map(|cell| cell.trim().to_string())
        .collect();
    if header.len() != expected {
        return Err(ImportError::HeaderWidth {
            table,
            expected,
            found: header.len(),
        });
    }
    for (i, (want, got)) in elements.iter().zip(header.iter()).enumerate() {
        if want != got {
            return Err(ImportError::HeaderMismatch {
                table,
                column: i + 1,
                expected: want.clone(),
                found: got.clone(),
            });
        }
    }

    let body = &rows[offset..end];
    if body.len() != expected {
        return Err(ImportError::RowCount {
            table,
            expected,
            found: body.len(),
        });
    }

    let mut cells = Vec::with_capacity(expected);
    for (i, row) in body.iter().enumerate() {
        let label = row.first().map(|s| s.trim()).unwrap_or("");
        if label != elements[i] {
            return Err(ImportError::RowLabel {
                table,
                row: i + 1,
                expected: elements[i].clone(),
                found: label.to_string(),
            });
        }

        let data: Vec<String> = row
            .iter()
            .skip(1)
            .map(|cell| cell.trim().to_string())
            .collect();
        if data.len() != expected {
            return Err(ImportError::RowWidth {
                table,
                row: i + 1,
                expected,
                found: data.len(),
            });
        }

        for (j, value) in data.iter().enumerate() {
            if !elements.contains(value) {
                return Err(ImportError::UnknownCell {
                    table,
                    row: i + 1,
                    column: j + 1,
                    value: value.clone(),
                });
            }
        }

        cells.push(data);
    }

    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(spec: &[&[&str]]) -> Vec<Vec<String>> {
        spec.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn z2_rows() -> Vec<Vec<String>> {
        rows(&[
            &["+", "0", "1"],
            &["0", "0", "1"],
            &["1", "1", "0"],
            &[],
            &["*", "0", "1"],
            &["0", "0", "0"],
            &["1", "0", "1"],
        ])
    }

    #[test]
    fn test_import_z2() {
        let doc = parse_rows(z2_rows()).unwrap();
        assert_eq!(doc.elements().as_slice(), &["0", "1"]);
        assert_eq!(doc.table(TableKind::Addition).get(1, 1), Some("0"));
        assert_eq!(doc.table(TableKind::Multiplication).get(1, 1), Some("1"));
    }

    #[test]
    fn test_trailing_blank_rows_stripped() {
        let mut input = z2_rows();
        input.push(vec!["".to_string(), "  ".to_string()]);
        input.push(Vec::new());
        let doc = parse_rows(input).unwrap();
        assert_eq!(doc.elements().len(), 2);
    }

    #[test]
    fn test_cells_and_labels_trimmed() {
        let input = rows(&[
            &["+", " 0 ", "1"],
            &[" 0", " 0", "1 "],
            &["1 ", "1", " 0"],
            &[""],
            &["*", "0", " 1"],
            &["0", "0", "0"],
            &["1", "0 ", "1"],
        ]);
        let doc = parse_rows(input).unwrap();
        assert_eq!(doc.table(TableKind::Addition).get(0, 1), Some("1"));
    }

    #[test]
    fn test_too_few_rows() {
        let input = rows(&[&["+", "0"], &["0", "0"], &[], &["*", "0"]]);
        assert_eq!(
            parse_rows(input).unwrap_err(),
            ImportError::TooFewRows { found: 4 }
        );
    }

    #[test]
    fn test_missing_separator() {
        let input = rows(&[
            &["+", "0", "1"],
            &["0", "0", "1"],
            &["1", "1", "0"],
            &["*", "0", "1"],
            &["0", "0", "0"],
            &["1", "0", "1"],
        ]);
        assert_eq!(parse_rows(input).unwrap_err(), ImportError::MissingSeparator);
    }

    #[test]
    fn test_separator_must_have_content_before_it() {
        let input = rows(&[
            &[],
            &["+", "0"],
            &["0", "0"],
            &["*", "0"],
            &["0", "0"],
        ]);
        assert_eq!(parse_rows(input).unwrap_err(), ImportError::MissingSeparator);
    }

    #[test]
    fn test_no_elements() {
        let input = rows(&[
            &["+"],
            &["0", "0"],
            &["x", "y"],
            &[],
            &["*", "0"],
        ]);
        assert_eq!(parse_rows(input).unwrap_err(), ImportError::NoElements);
    }

    #[test]
    fn test_duplicate_element() {
        let input = rows(&[
            &["+", "a", "a"],
            &["a", "a", "a"],
            &["a", "a", "a"],
            &[],
            &["*", "a", "a"],
            &["a", "a", "a"],
            &["a", "a", "a"],
        ]);
        assert_eq!(
            parse_rows(input).unwrap_err(),
            ImportError::DuplicateElement {
                label: "a".to_string(),
                column: 2,
            }
        );
    }

    #[test]
    fn test_header_mismatch_names_column() {
        let input = rows(&[
            &["+", "a", "c"],
            &["a", "a", "c"],
            &["c", "c", "a"],
            &[],
            &["*", "a", "b"],
            &["a", "a", "a"],
            &["c", "a", "c"],
        ]);
        assert_eq!(
            parse_rows(input).unwrap_err(),
            ImportError::HeaderMismatch {
                table: TableKind::Multiplication,
                column: 2,
                expected: "c".to_string(),
                found: "b".to_string(),
            }
        );
    }

    #[test]
    fn test_header_width() {
        let input = rows(&[
            &["+", "0", "1"],
            &["0", "0", "1"],
            &["1", "1", "0"],
            &[],
            &["*", "0"],
            &["0", "0", "0"],
            &["1", "0", "1"],
        ]);
        assert_eq!(
            parse_rows(input).unwrap_err(),
            ImportError::HeaderWidth {
                table: TableKind::Multiplication,
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn test_row_count() {
        let input = rows(&[
            &["+", "0", "1"],
            &["0", "0", "1"],
            &[],
            &["*", "0", "1"],
            &["0", "0", "0"],
            &["1", "0", "1"],
        ]);
        assert_eq!(
            parse_rows(input).unwrap_err(),
            ImportError::RowCount {
                table: TableKind::Addition,
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn test_row_label_mismatch() {
        let input = rows(&[
            &["+", "0", "1"],
            &["0", "0", "1"],
            &["2", "1", "0"],
            &[],
            &["*", "0", "1"],
            &["0", "0", "0"],
            &["1", "0", "1"],
        ]);
        assert_eq!(
            parse_rows(input).unwrap_err(),
            ImportError::RowLabel {
                table: TableKind::Addition,
                row: 2,
                expected: "1".to_string(),
                found: "2".to_string(),
            }
        );
    }

    #[test]
    fn test_row_width() {
        let input = rows(&[
            &["+", "0", "1"],
            &["0", "0", "1"],
            &["1", "1", "0", "0"],
            &[],
            &["*", "0", "1"],
            &["0", "0", "0"],
            &["1", "0", "1"],
        ]);
        assert_eq!(
            parse_rows(input).unwrap_err(),
            ImportError::RowWidth {
                table: TableKind::Addition,
                row: 2,
                expected: 2,
                found: 3,
            }
        );
    }

    #[test]
    fn test_unknown_cell_names_position_and_value() {
        let input = rows(&[
            &["+", "0", "1", "2"],
            &["0", "0", "1", "2"],
            &["1", "1", "2", "0"],
            &["2", "2", "0", "1"],
            &[],
            &["*", "0", "1", "2"],
            &["0", "0", "0", "0"],
            &["1", "0", "x", "2"],
            &["2", "0", "2", "1"],
        ]);
        assert_eq!(
            parse_rows(input).unwrap_err(),
            ImportError::UnknownCell {
                table: TableKind::Multiplication,
                row: 2,
                column: 2,
                value: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_read_rows_keeps_blank_lines() {
        let text = "+,0,1\n0,0,1\n1,1,0\n\n*,0,1\n0,0,0\n1,0,1\n";
        let doc = from_reader(text.as_bytes()).unwrap();
        assert_eq!(doc.elements().len(), 2);
    }

    #[test]
    fn test_read_rows_handles_quoted_commas() {
        let text = "+,\"a,b\",c\n\"a,b\",\"a,b\",c\nc,c,\"a,b\"\n\n*,\"a,b\",c\n\"a,b\",c,c\nc,c,c\n";
        let doc = from_reader(text.as_bytes()).unwrap();
        assert_eq!(doc.elements().as_slice(), &["a,b", "c"]);
    }
}
