//! # rehnuma-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the read-only content API (`/api/services`, `/api/services/{id}`)
//! - Expose the static lookup tables (districts, symptoms, emergency contacts)
//! - Answer chat messages through the rule-based assistant (`/api/chat`)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `rehnuma-app` (for port traits and services) and `rehnuma-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
