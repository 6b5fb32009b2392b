//! Completeness check gating submission to the analysis service.

use thiserror::Error;

use crate::table::{RingTableDocument, TableKind};

/// A table that is not ready for analysis.
///
/// Reported at table granularity: the first deficient table wins, with the
/// addition table checked first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{table} table is incomplete or contains invalid elements")]
pub struct CompletenessError {
    pub table: TableKind,
}

/// Pass iff every cell in both tables is non-blank and a member of the
/// current element set. Cells are references into the element set, so
/// membership is checked even for non-blank values.
pub fn check_complete(doc: &RingTableDocument) -> Result<(), CompletenessError> {
    for kind in [TableKind::Addition, TableKind::Multiplication] {
        let table = doc.table(kind);
        let valid = table
            .rows()
            .iter()
            .all(|row| row.iter().all(|cell| doc.elements().contains(cell.trim())));
        if !valid {
            return Err(CompletenessError { table: kind });
        }
    }
    Ok(())
}
