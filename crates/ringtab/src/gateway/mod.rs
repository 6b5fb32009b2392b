//! Client side of the external analysis service.
//!
//! The service classifies a submitted structure's algebraic properties;
//! this crate only forwards a validated document and carries the verdict
//! back. The verdict's semantics are not reproduced here.

mod http;
mod mock;
mod verdict;

pub use http::HttpGateway;
pub use mock::MockGateway;
pub use verdict::{AnalysisRequest, AnalysisVerdict};

use crate::error::Result;

/// Trait for analysis backends.
///
/// Implementations must be thread-safe (Send + Sync) so a gateway can be
/// shared by whatever embeds the session.
pub trait AnalysisGateway: Send + Sync {
    /// Submit a request and return the service's verdict.
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisVerdict>;

    /// Name of this gateway (for logging/debugging).
    fn name(&self) -> &str;
}
