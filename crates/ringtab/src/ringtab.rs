//! Main session facade tying the model, codec, validator, and gateway together.

use std::path::Path;
use std::sync::Arc;

use crate::codec::{self, SourceMetadata};
use crate::error::{Result, RingtabError};
use crate::gateway::{AnalysisGateway, AnalysisRequest, AnalysisVerdict};
use crate::generate::StructureInput;
use crate::table::{RingTableDocument, TableKind};
use crate::validate;

/// What happens to the current tables when an import fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportFailurePolicy {
    /// Blank both tables, discarding prior edits. Aggressive, but a rejected
    /// file never leaves a half-trusted grid on screen.
    #[default]
    ClearTables,
    /// Reject the file and keep the prior document untouched.
    KeepPrior,
}

/// Configuration for a session.
#[derive(Debug, Clone, Default)]
pub struct RingtabConfig {
    pub on_import_failure: ImportFailurePolicy,
}

/// A ring table editing session.
///
/// Holds the active construction input, the current document, and the last
/// verdict. Structural changes (new modulus or element list) replace the
/// document wholesale; any edit or replacement discards the stale verdict.
pub struct Ringtab {
    config: RingtabConfig,
    input: Option<StructureInput>,
    document: Option<RingTableDocument>,
    source: Option<SourceMetadata>,
    verdict: Option<AnalysisVerdict>,
    gateway: Option<Arc<dyn AnalysisGateway>>,
}

impl Ringtab {
    /// Create a session with default configuration and no gateway.
    pub fn new() -> Self {
        Self::with_config(RingtabConfig::default())
    }

    /// Create a session with custom configuration.
    pub fn with_config(config: RingtabConfig) -> Self {
        Self {
            config,
            input: None,
            document: None,
            source: None,
            verdict: None,
            gateway: None,
        }
    }

    /// Attach an analysis gateway.
    pub fn with_gateway(mut self, gateway: impl AnalysisGateway + 'static) -> Self {
        self.gateway = Some(Arc::new(gateway));
        self
    }

    /// Switch to modulus mode. Clears any pending element-list input and
    /// invalidates the current document and verdict.
    pub fn set_modulus(&mut self, n: usize) {
        self.input = Some(StructureInput::Modulus(n));
        self.invalidate();
    }

    /// Switch to element-list mode. Clears any pending modulus input and
    /// invalidates the current document and verdict.
    pub fn set_elements(&mut self, spec: impl Into<String>) {
        self.input = Some(StructureInput::Elements(spec.into()));
        self.invalidate();
    }

    /// Build the document from the active input.
    pub fn generate(&mut self) -> Result<&RingTableDocument> {
        let input = self.input.as_ref().ok_or(RingtabError::NoStructure)?;
        let document = input.generate()?;
        self.source = None;
        self.verdict = None;
        Ok(self.document.insert(document))
    }

    pub fn document(&self) -> Option<&RingTableDocument> {
        self.document.as_ref()
    }

    /// Provenance of the last successful file import, if any.
    pub fn source(&self) -> Option<&SourceMetadata> {
        self.source.as_ref()
    }

    pub fn verdict(&self) -> Option<&AnalysisVerdict> {
        self.verdict.as_ref()
    }

    /// Edit one cell. Discards the stale verdict.
    pub fn edit_cell(
        &mut self,
        kind: TableKind,
        row: usize,
        col: usize,
        value: impl Into<String>,
    ) -> Result<()> {
        let document = self.document.as_mut().ok_or(RingtabError::NoDocument)?;
        document.set_cell(kind, row, col, value)?;
        self.verdict = None;
        Ok(())
    }

    /// Blank one table. Discards the stale verdict.
    pub fn clear_table(&mut self, kind: TableKind) -> Result<()> {
        let document = self.document.as_mut().ok_or(RingtabError::NoDocument)?;
        document.clear_table(kind);
        self.verdict = None;
        Ok(())
    }

    /// Render the current document as a CSV string.
    pub fn export_csv(&self) -> Result<String> {
        let document = self.document.as_ref().ok_or(RingtabError::NoDocument)?;
        codec::to_csv_string(document)
    }

    /// Write the current document as CSV to a file.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let document = self.document.as_ref().ok_or(RingtabError::NoDocument)?;
        codec::write_file(document, path)
    }

    /// Import pre-parsed rows. On success the document is swapped atomically;
    /// on failure the configured [`ImportFailurePolicy`] applies and the
    /// error is returned.
    pub fn import_rows(&mut self, rows: Vec<Vec<String>>) -> Result<()> {
        match codec::parse_rows(rows) {
            Ok(document) => {
                self.commit_import(document, None);
                Ok(())
            }
            Err(e) => {
                self.apply_failure_policy();
                Err(e.into())
            }
        }
    }

    /// Import a CSV file, recording its provenance.
    pub fn import_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        match codec::from_file(path) {
            Ok((document, metadata)) => {
                self.commit_import(document, Some(metadata));
                Ok(())
            }
            Err(e) => {
                self.apply_failure_policy();
                Err(e)
            }
        }
    }

    /// Validate completeness and submit the document to the gateway.
    ///
    /// The blocking gateway call means a second submission cannot start
    /// while one is outstanding; re-entry guarding belongs to the embedding
    /// UI, not this core.
    pub fn analyze(&mut self) -> Result<&AnalysisVerdict> {
        let document = self.document.as_ref().ok_or(RingtabError::NoDocument)?;
        validate::check_complete(document)?;

        let gateway = self
            .gateway
            .as_ref()
            .ok_or_else(|| RingtabError::Config("no analysis gateway configured".to_string()))?;

        let request = AnalysisRequest::from(document);
        let verdict = gateway.analyze(&request)?;
        Ok(self.verdict.insert(verdict))
    }

    fn commit_import(&mut self, document: RingTableDocument, source: Option<SourceMetadata>) {
        self.document = Some(document);
        self.source = source;
        self.verdict = None;
    }

    fn apply_failure_policy(&mut self) {
        match self.config.on_import_failure {
            ImportFailurePolicy::ClearTables => {
                if let Some(document) = self.document.as_mut() {
                    document.clear_table(TableKind::Addition);
                    document.clear_table(TableKind::Multiplication);
                }
                self.verdict = None;
            }
            ImportFailurePolicy::KeepPrior => {}
        }
    }

    fn invalidate(&mut self) {
        self.document = None;
        self.source = None;
        self.verdict = None;
    }
}

impl Default for Ringtab {
    fn default() -> Self {
        Self::new()
    }
}
