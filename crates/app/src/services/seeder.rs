//! Seeder: rebuilds the content store from a [`SeedSource`] at startup.
//!
//! The store is always cleared first. The source is then parsed in full
//! before any row is inserted, and a failed insert clears the store again,
//! so a bad row leaves the store empty instead of half-imported. A missing
//! source also leaves it empty.

use tracing::{info, warn};

use rehnuma_domain::error::RehnumaError;

use crate::ports::{SeedData, SeedSource, ServiceRepository, StepRepository};
use crate::services::content_service::ContentService;

/// Row counts written by one seed pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub services: usize,
    pub steps: usize,
    /// Step rows whose source service id matched no service row.
    pub orphaned_steps: usize,
}

pub struct Seeder<S> {
    source: S,
}

impl<S: SeedSource> Seeder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Replace the content of `content` with the seed set.
    ///
    /// # Errors
    ///
    /// Returns the source's error when a row fails to parse, a validation
    /// error when a parsed row breaks a domain invariant, or a storage error.
    pub async fn run<SR, TR>(
        &self,
        content: &ContentService<SR, TR>,
    ) -> Result<SeedReport, RehnumaError>
    where
        SR: ServiceRepository,
        TR: StepRepository,
    {
        content.reset().await?;

        let Some(data) = self.source.load().await? else {
            warn!("seed files not found, content store left empty");
            return Ok(SeedReport::default());
        };

        let report = match Self::insert_all(content, data).await {
            Ok(report) => report,
            Err(err) => {
                if let Err(reset_err) = content.reset().await {
                    warn!(error = %reset_err, "failed to clear partially seeded store");
                }
                return Err(err);
            }
        };

        if report.orphaned_steps > 0 {
            warn!(
                count = report.orphaned_steps,
                "step rows reference unknown service ids"
            );
        }

        info!(
            services = report.services,
            steps = report.steps,
            "content store seeded"
        );
        Ok(report)
    }

    async fn insert_all<SR, TR>(
        content: &ContentService<SR, TR>,
        data: SeedData,
    ) -> Result<SeedReport, RehnumaError>
    where
        SR: ServiceRepository,
        TR: StepRepository,
    {
        let mut report = SeedReport {
            orphaned_steps: data
                .steps
                .iter()
                .filter(|step| {
                    !data
                        .services
                        .iter()
                        .any(|record| record.source_id == step.source_service_id)
                })
                .count(),
            ..SeedReport::default()
        };
        for record in data.services {
            let service = content.insert_service(record.service).await?;
            report.services += 1;

            for step in data
                .steps
                .iter()
                .filter(|step| step.source_service_id == record.source_id)
            {
                let step = step.step.clone().attach_to(service.id).build()?;
                content.insert_step(step).await?;
                report.steps += 1;
            }
        }
        Ok(report)
    }
}
