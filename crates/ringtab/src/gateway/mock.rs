//! Mock analysis gateway for tests and offline runs.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::Result;

use super::verdict::{AnalysisRequest, AnalysisVerdict};
use super::AnalysisGateway;

/// Returns a canned verdict and counts how many requests it saw.
pub struct MockGateway {
    verdict: AnalysisVerdict,
    calls: AtomicUsize,
}

impl MockGateway {
    /// A mock answering every request with the default (all-false) verdict.
    pub fn new() -> Self {
        Self::with_verdict(AnalysisVerdict::default())
    }

    /// A mock answering every request with the given verdict.
    pub fn with_verdict(verdict: AnalysisVerdict) -> Self {
        Self {
            verdict,
            calls: AtomicUsize::new(0),
        }
    }

    /// A plausible verdict for a cyclic structure: an additive group that
    /// forms a commutative ring.
    pub fn cyclic_ring() -> Self {
        Self::with_verdict(AnalysisVerdict {
            is_add_closed: true,
            is_add_associative: true,
            has_add_identity: true,
            add_identity: "0".to_string(),
            is_add_inverse: true,
            is_add_commutative: true,
            is_add_group: true,
            is_mul_closed: true,
            is_mul_associative: true,
            is_distributive: true,
            is_ring: true,
            is_mul_commutative: true,
            is_commutative_ring: true,
            insight: "The structure is a commutative ring.".to_string(),
            ..AnalysisVerdict::default()
        })
    }

    /// Number of analyze calls handled so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisGateway for MockGateway {
    fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalysisVerdict> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.verdict.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
