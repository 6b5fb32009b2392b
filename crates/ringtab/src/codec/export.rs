//! Serializing a document into the CSV interchange format.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, RingtabError};
use crate::table::{RingTableDocument, TableKind};

/// Lay out a document as interchange rows: `+` header, addition rows, one
/// blank separator row, `*` header, multiplication rows.
pub fn to_rows(doc: &RingTableDocument) -> Vec<Vec<String>> {
    let elements = doc.elements();
    let mut rows = Vec::with_capacity(2 * elements.len() + 3);

    for kind in [TableKind::Addition, TableKind::Multiplication] {
        if kind == TableKind::Multiplication {
            rows.push(Vec::new());
        }

        let mut header = Vec::with_capacity(elements.len() + 1);
        header.push(kind.symbol().to_string());
        header.extend(elements.iter().map(str::to_string));
        rows.push(header);

        let table = doc.table(kind);
        for (i, label) in elements.iter().enumerate() {
            let mut row = Vec::with_capacity(elements.len() + 1);
            row.push(label.to_string());
            row.extend(table.rows()[i].iter().cloned());
            rows.push(row);
        }
    }

    rows
}

/// Write a document as CSV to any writer.
///
/// The separator must come out as a genuinely blank line; a csv writer
/// would escape a lone empty field as `""`, so each table block gets its
/// own writer and the separator newline goes to the underlying writer
/// directly.
pub fn write_csv<W: Write>(doc: &RingTableDocument, mut writer: W) -> Result<()> {
    let rows = to_rows(doc);

    for (i, block) in rows.split(|row| row.is_empty()).enumerate() {
        if i > 0 {
            writer.write_all(b"\n").map_err(|e| RingtabError::Io {
                path: PathBuf::new(),
                source: e,
            })?;
        }

        let mut csv_writer = csv::Writer::from_writer(&mut writer);
        for row in block {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush().map_err(csv::Error::from)?;
    }

    Ok(())
}

/// Render a document as a CSV string.
pub fn to_csv_string(doc: &RingTableDocument) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(doc, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| RingtabError::Config(format!("exported CSV was not UTF-8: {}", e)))
}

/// Write a document as CSV to a file.
pub fn write_file(doc: &RingTableDocument, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| RingtabError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_csv(doc, file)
}
