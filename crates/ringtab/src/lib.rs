//! Ringtab: finite ring table workbench.
//!
//! Ringtab models a finite algebraic structure as an ordered element set
//! with an addition table and a multiplication table, generates canonical
//! cyclic tables, exchanges documents through a strict CSV interchange
//! format, and submits completed tables to an external analysis service
//! for classification.
//!
//! # Core Principles
//!
//! - **Cells are references**: every table cell must name an element of the
//!   carrier set, so imports cross-validate each cell against the element
//!   list.
//! - **Fail-fast imports**: a malformed file is rejected with a precise
//!   diagnosis; no partial table is ever installed.
//! - **Rebuild, never patch**: any element-set change replaces the whole
//!   document.
//!
//! # Example
//!
//! ```no_run
//! use ringtab::Ringtab;
//!
//! let mut session = Ringtab::new();
//! session.set_modulus(4);
//! session.generate().unwrap();
//!
//! let csv = session.export_csv().unwrap();
//! println!("{}", csv);
//! ```

pub mod codec;
pub mod error;
pub mod gateway;
pub mod generate;
pub mod table;
pub mod validate;

mod ringtab;

pub use crate::ringtab::{ImportFailurePolicy, Ringtab, RingtabConfig};
pub use codec::{ImportError, SourceMetadata};
pub use error::{Result, RingtabError};
pub use gateway::{AnalysisGateway, AnalysisRequest, AnalysisVerdict, HttpGateway, MockGateway};
pub use generate::StructureInput;
pub use table::{ElementSet, OpTable, RingTableDocument, TableKind};
pub use validate::CompletenessError;
