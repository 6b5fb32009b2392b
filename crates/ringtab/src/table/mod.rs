//! In-memory model for an element set and its two Cayley tables.

use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RingtabError};

/// Which of the two operation tables is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Addition,
    Multiplication,
}

impl TableKind {
    /// The header symbol used in the CSV interchange format.
    pub fn symbol(&self) -> &'static str {
        match self {
            TableKind::Addition => "+",
            TableKind::Multiplication => "*",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Addition => write!(f, "addition"),
            TableKind::Multiplication => write!(f, "multiplication"),
        }
    }
}

/// The ordered, duplicate-free carrier set of the structure.
///
/// Order is significant: it defines row and column ordering for both tables
/// and is preserved across generation, editing, export, and import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSet {
    labels: Vec<String>,
}

impl ElementSet {
    /// Build an element set from raw labels.
    ///
    /// Labels are trimmed, empty labels dropped, and duplicates removed
    /// while keeping the first occurrence's position. Returns `None` when
    /// nothing usable remains.
    pub fn from_labels<I, S>(labels: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: IndexSet<String> = labels
            .into_iter()
            .map(|l| l.as_ref().trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();

        if set.is_empty() {
            None
        } else {
            Some(Self {
                labels: set.into_iter().collect(),
            })
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at a position, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(|s| s.as_str())
    }

    /// Position of a label, if present.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Whether a label belongs to the set.
    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|s| s.as_str())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }
}

/// A square table of cell contents indexed by element position on both axes.
///
/// `get(i, j)` holds the current content for the operand pair
/// `(element[i], element[j])`; a blank cell is the empty string. The matrix
/// is always `n × n` and is rebuilt from blank, never resized in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpTable {
    size: usize,
    cells: Vec<Vec<String>>,
}

impl OpTable {
    /// An all-blank table of the given size.
    pub fn blank(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![String::new(); size]; size],
        }
    }

    /// Build a table from pre-validated rows. Callers must ensure the rows
    /// form a square matrix of the element count's size.
    pub(crate) fn from_rows(cells: Vec<Vec<String>>) -> Self {
        Self {
            size: cells.len(),
            cells,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell content, if the position is in range.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: String) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Row-major view of the cells.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }

    /// Whether every cell is non-blank.
    pub fn is_fully_populated(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.trim().is_empty()))
    }
}

/// One element set plus its addition and multiplication tables.
///
/// This is the unit passed to the completeness validator and the analysis
/// gateway. It is replaced wholesale whenever the element set changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingTableDocument {
    elements: ElementSet,
    add: OpTable,
    mul: OpTable,
}

impl RingTableDocument {
    /// A document with blank tables sized to the element set.
    pub fn blank(elements: ElementSet) -> Self {
        let n = elements.len();
        Self {
            elements,
            add: OpTable::blank(n),
            mul: OpTable::blank(n),
        }
    }

    pub(crate) fn from_parts(elements: ElementSet, add: OpTable, mul: OpTable) -> Self {
        debug_assert_eq!(add.size(), elements.len());
        debug_assert_eq!(mul.size(), elements.len());
        Self { elements, add, mul }
    }

    pub fn elements(&self) -> &ElementSet {
        &self.elements
    }

    pub fn table(&self, kind: TableKind) -> &OpTable {
        match kind {
            TableKind::Addition => &self.add,
            TableKind::Multiplication => &self.mul,
        }
    }

    /// Set one cell. The position must lie inside the table.
    ///
    /// The value is stored trimmed, matching how imported cells are read, so
    /// a padded edit and its re-imported export compare equal.
    pub fn set_cell(
        &mut self,
        kind: TableKind,
        row: usize,
        col: usize,
        value: impl Into<String>,
    ) -> Result<()> {
        let table = match kind {
            TableKind::Addition => &mut self.add,
            TableKind::Multiplication => &mut self.mul,
        };
        if table.set(row, col, value.into().trim().to_string()) {
            Ok(())
        } else {
            Err(RingtabError::CellOutOfBounds {
                table: kind,
                row,
                column: col,
            })
        }
    }

    /// Reset one table to all-blank cells.
    pub fn clear_table(&mut self, kind: TableKind) {
        let blank = OpTable::blank(self.elements.len());
        match kind {
            TableKind::Addition => self.add = blank,
            TableKind::Multiplication => self.mul = blank,
        }
    }
}
