//! Seed source port: where the seeder reads its content from.

use std::future::Future;

use rehnuma_domain::error::RehnumaError;
use rehnuma_domain::service::NewService;
use rehnuma_domain::step::StepDraft;

/// A service row keyed by the identifier used in the source files.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRecord {
    pub source_id: String,
    pub service: NewService,
}

/// A step row pointing at its service through the source identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    pub source_service_id: String,
    pub step: StepDraft,
}

/// Everything read from one pass over the seed files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedData {
    pub services: Vec<ServiceRecord>,
    pub steps: Vec<StepRecord>,
}

/// Provides the content the store is rebuilt from.
pub trait SeedSource {
    /// Read and parse the full seed set.
    ///
    /// Resolves to `Ok(None)` when the source is absent, and to an error when
    /// any row fails to parse.
    fn load(&self) -> impl Future<Output = Result<Option<SeedData>, RehnumaError>> + Send;
}
