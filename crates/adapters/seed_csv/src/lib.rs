//! # rehnuma-adapter-seed-csv
//!
//! Seed source backed by two CSV files, `services.csv` and `steps.csv`.
//!
//! ## Responsibilities
//! - Implement the `SeedSource` port defined in `rehnuma-app::ports`
//! - Parse header-named columns into domain drafts, decoding JSON array cells
//! - Report the offending file and row when a row cannot be parsed
//!
//! ## Dependency rule
//! Depends on `rehnuma-app` (for the port trait) and `rehnuma-domain` (for domain types).

mod error;
mod row;
mod source;

pub use error::SeedError;
pub use source::{CsvSeedSource, SERVICES_FILE, STEPS_FILE};
