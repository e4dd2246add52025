//! # rehnuma-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ServiceRepository` / `StepRepository`: the content store
//!   - `SeedSource`: where startup content is read from
//!   - `Narrator`: speech output and recognition
//! - Define **driving/inbound** use-cases:
//!   - `ContentService`: list services, get one with its steps, append rows
//!   - `Seeder`: clear and repopulate the content store
//!   - `Assistant`: the rule-based chat assistant over a `Session`
//! - Provide **in-process infrastructure** that doesn't need IO (`SilentNarrator`)
//!
//! ## Dependency rule
//! Depends on `rehnuma-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod narration;
pub mod ports;
pub mod services;
