//! CSV seed source error types.

use std::path::PathBuf;

use rehnuma_domain::error::RehnumaError;

/// Errors raised while reading the seed files.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// A seed file exists but could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected a row (bad quoting, wrong column count, missing header).
    #[error("malformed CSV in {file} at row {row}")]
    Csv {
        file: &'static str,
        row: usize,
        #[source]
        source: csv::Error,
    },

    /// The `type` cell is not a known category.
    #[error("unknown service type {value:?} in {file} at row {row}")]
    UnknownType {
        file: &'static str,
        row: usize,
        value: String,
    },

    /// The `step_number` cell is not an integer.
    #[error("invalid step number {value:?} in {file} at row {row}")]
    InvalidStepNumber {
        file: &'static str,
        row: usize,
        value: String,
    },

    /// Two service rows share one `id`.
    #[error("duplicate service id {value:?} in {file} at row {row}")]
    DuplicateServiceId {
        file: &'static str,
        row: usize,
        value: String,
    },

    /// Two step rows share one `(service_id, step_number)` pair.
    #[error("duplicate step {step_number} for service {service_id:?} in {file} at row {row}")]
    DuplicateStep {
        file: &'static str,
        row: usize,
        service_id: String,
        step_number: i64,
    },

    /// The row parsed but breaks a domain invariant.
    #[error("invalid content in {file} at row {row}")]
    InvalidRow {
        file: &'static str,
        row: usize,
        #[source]
        source: RehnumaError,
    },
}

impl From<SeedError> for RehnumaError {
    fn from(err: SeedError) -> Self {
        Self::Seed(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_file_and_row_when_type_unknown() {
        let err = SeedError::UnknownType {
            file: "services.csv",
            row: 3,
            value: "school".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown service type \"school\" in services.csv at row 3"
        );
    }

    #[test]
    fn should_convert_into_seed_error() {
        let err: RehnumaError = SeedError::InvalidStepNumber {
            file: "steps.csv",
            row: 1,
            value: "one".to_string(),
        }
        .into();
        assert!(matches!(err, RehnumaError::Seed(_)));
    }
}
