//! Table generators: canonical cyclic construction and blank custom tables.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RingtabError};
use crate::table::{ElementSet, OpTable, RingTableDocument};

/// Which construction mode is active. Only one at a time: setting a modulus
/// clears a pending element list and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructureInput {
    /// Generate the cyclic structure Z mod n.
    Modulus(usize),
    /// Raw comma-separated element labels, parsed at generation time.
    Elements(String),
}

impl StructureInput {
    /// Build the document this input describes.
    pub fn generate(&self) -> Result<RingTableDocument> {
        match self {
            StructureInput::Modulus(n) => from_modulus(*n),
            StructureInput::Elements(spec) => from_element_list(spec),
        }
    }
}

/// Generate the fully populated tables for Z mod n.
///
/// Elements are `"0"` through `"n-1"`; `add[i][j] = (i+j) mod n` and
/// `mul[i][j] = (i*j) mod n`.
pub fn from_modulus(n: usize) -> Result<RingTableDocument> {
    if n == 0 {
        return Err(RingtabError::InvalidModulus(n));
    }

    let labels: Vec<String> = (0..n).map(|i| i.to_string()).collect();
    let elements =
        ElementSet::from_labels(&labels).ok_or(RingtabError::InvalidModulus(n))?;

    let add: Vec<Vec<String>> = (0..n)
        .map(|i| (0..n).map(|j| ((i + j) % n).to_string()).collect())
        .collect();
    let mul: Vec<Vec<String>> = (0..n)
        .map(|i| (0..n).map(|j| ((i * j) % n).to_string()).collect())
        .collect();

    Ok(RingTableDocument::from_parts(
        elements,
        OpTable::from_rows(add),
        OpTable::from_rows(mul),
    ))
}

/// Generate blank tables over a comma-separated element list.
///
/// Labels are trimmed, empty entries dropped, and duplicates removed while
/// preserving first-occurrence order. Population is left to manual editing
/// or CSV import.
pub fn from_element_list(spec: &str) -> Result<RingTableDocument> {
    let elements =
        ElementSet::from_labels(spec.split(',')).ok_or(RingtabError::EmptyElements)?;
    Ok(RingTableDocument::blank(elements))
}
